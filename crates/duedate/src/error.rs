//! Error types for duedate operations.

use thiserror::Error;

use crate::accuracy::Accuracy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unparsable date: {0}")]
    UnparsableDate(String),

    #[error("Invalid comparison: {0}")]
    InvalidComparison(String),

    #[error("Invalid arithmetic: {0}")]
    InvalidArithmetic(String),

    #[error("Invalid locale table: {0}")]
    InvalidLocale(String),

    /// An accuracy pair the casting table does not cover. Always a bug.
    #[error("Internal accuracy error: cannot cast from {from} to {to}")]
    InternalAccuracy { from: Accuracy, to: Accuracy },
}

pub type Result<T> = std::result::Result<T, DateError>;
