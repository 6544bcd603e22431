use std::fmt;

use plategen_plate::PlateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// CLI usage error (missing args, invalid flags).
    Usage = 1,
    /// Input error (unreadable file, malformed layout).
    Input = 2,
    /// Processing error (rendering or writing the drawing failed).
    Processing = 3,
    /// Settings error (unknown footprint, radius or unit out of range, bad settings file).
    Config = 4,
}

#[derive(Debug)]
pub struct CliError {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Usage,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Input,
            message: message.into(),
        }
    }

    pub fn processing(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Processing,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Config,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<PlateError> for CliError {
    fn from(err: PlateError) -> Self {
        match err {
            PlateError::Config(_) => CliError::config(err.to_string()),
            PlateError::Layout(_) => CliError::input(err.to_string()),
            PlateError::Render(_) => CliError::processing(err.to_string()),
        }
    }
}
