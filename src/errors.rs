use core::fmt;

use uuid::Uuid;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    DuplicateId(Uuid),
    NotFound(String),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Validation(String),
    Serialize(serde_json::Error),
    Logger(flexi_logger::FlexiLoggerError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialize(err)
    }
}

impl From<flexi_logger::FlexiLoggerError> for AppError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        AppError::Logger(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while reading or writing the terminal: {}", e)
            }
            AppError::DuplicateId(id) => {
                write!(f, "A contact with id {} already exists", id)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Serialize(e) => {
                write!(f, "Failed to serialize contacts: {}", e)
            }
            AppError::Logger(e) => {
                write!(f, "Failed to start logger: {}", e)
            }
        }
    }
}
