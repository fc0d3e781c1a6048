use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProductError {
    #[error("A product must carry a barcode")]
    MissingBarcode,

    #[error("Unsupported unit '{0}'")]
    UnsupportedUnit(String),
}
