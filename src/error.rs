//! Error types for boothscreens.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load image '{name}': {reason}")]
    Asset { name: String, reason: String },

    #[error("Selected layout {selected} is not one of the offered layouts {choices:?}")]
    SelectionNotOffered { selected: u32, choices: [u32; 2] },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn asset(name: &str, reason: impl ToString) -> Self {
        Error::Asset { name: name.to_string(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
