pub(crate) mod readings_aggregator;
pub(crate) mod readings_model;
pub(crate) mod readings_service;
pub(crate) mod readings_traits;

// Re-export the public interface
pub use readings_aggregator::{chart_points, nearby_alternatives, readings_today, timeline};
pub use readings_model::{AlternativeReading, ChartPoint, NewReading, Reading};
pub use readings_service::ReadingService;
pub use readings_traits::{ReadingRepositoryTrait, ReadingServiceTrait};
