use crate::domain::product::Slot;
use std::convert::Infallible;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid denomination: {0}")]
    InvalidDenomination(String),
    #[error("Product position {0} is already occupied")]
    PositionOccupied(Slot),
    #[error("Not enough change to return {requested} cents ({shortfall} cents short)")]
    NotEnoughChange { requested: u64, shortfall: u64 },
    #[error("Missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("Admin key does not belong to this machine")]
    Unauthorized,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<Infallible> for VendingError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, VendingError>;
