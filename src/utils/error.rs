use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("No pending code for {email}")]
    OtpNotFound { email: String },

    #[error("Code for {email} has expired")]
    OtpExpired { email: String },

    #[error("Submitted code does not match for {email}")]
    OtpMismatch { email: String },

    #[error("Notification dispatch failed: {message}")]
    DispatchError { message: String },

    #[error("Directory store error: {message}")]
    StorageError { message: String },

    #[error("Invalid config value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;
