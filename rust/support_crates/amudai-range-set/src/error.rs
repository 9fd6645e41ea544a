//! Errors reported by the checked range and range set helpers.
//!
//! The algebra itself never fails; these errors are produced only by helpers that
//! turn an invalid or unpacked state into a `Result` on request.

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_range(range: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidRange {
                range: range.into(),
            }
            .into(),
        )
    }

    pub fn invalid_member(index: usize, range: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidMember {
                index,
                range: range.into(),
            }
            .into(),
        )
    }

    pub fn not_packed(index: usize, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::NotPacked {
                index,
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid range {range}: lower bound exceeds upper bound")]
    InvalidRange { range: String },

    #[error("range set member #{index} is invalid: {range}")]
    InvalidMember { index: usize, range: String },

    #[error("range set is not packed at member #{index}: {message}")]
    NotPacked { index: usize, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(Box::new(kind))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
