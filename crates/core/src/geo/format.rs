/// Renders a metric distance for display with tiered precision.
///
/// Below one kilometer the value is rounded to the nearest multiple of
/// 10 m ("730m"); from one kilometer up it is rendered in kilometers with
/// two significant digits ("1.2km", "16km").
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        let rounded = (meters / 10.0).round() * 10.0;
        format!("{:.0}m", rounded)
    } else {
        let km = meters / 1000.0;
        let magnitude = km.abs().log10().floor() as i32;
        let step = 10f64.powi(magnitude - 1);
        let rounded = (km / step).round() * step;
        if rounded < 10.0 && rounded.fract() != 0.0 {
            format!("{:.1}km", rounded)
        } else {
            format!("{:.0}km", rounded)
        }
    }
}
