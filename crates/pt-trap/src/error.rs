//! Error types for entity construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrapError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}

pub type TrapResult<T> = Result<T, TrapError>;
