use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error("Invalid phone number: {0:?}")]
    InvalidPhone(String),

    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
