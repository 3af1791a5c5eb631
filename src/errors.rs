use thiserror::Error;

use crate::fixedpoint::AmountError;

/// **Why a summary could not be shown**
///
/// The `Display` text is the exact line printed to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("Error: account must be 8–16 digits.")]
    InvalidAccount { digits: usize },
    #[error("No demo record found for this account number.")]
    NotFound,
    #[error("DOB does not match our demo records.")]
    DobMismatch,
}

impl SummaryError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SummaryError::InvalidAccount { .. } => 2,
            SummaryError::NotFound | SummaryError::DobMismatch => 1,
        }
    }
}

/// **A problem with the compiled-in demo records**
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("account {account}: {source}")]
    Amount {
        account: String,
        #[source]
        source: AmountError,
    },
    #[error("{0:?} is not an 8–16 digit account number")]
    InvalidAccountNumber(String),
    #[error("account {0} is listed more than once")]
    DuplicateAccount(String),
    #[error("transaction refers to unknown account {0}")]
    UnknownAccount(String),
}

impl DatasetError {
    pub fn exit_code(&self) -> u8 {
        3
    }
}
