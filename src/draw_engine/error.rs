use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `min >= max`; the user must correct the bounds.
    InvalidRange { min: i64, max: i64 },
    RangeTooLarge { min: i64, max: i64, limit: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { .. } => {
                write!(f, "the end number must be greater than the start number")
            }
            Self::RangeTooLarge { min, max, limit } => {
                write!(f, "range {min}..={max} holds more than {limit} numbers")
            }
        }
    }
}

impl std::error::Error for Error {}
