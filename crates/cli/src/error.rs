use std::{error, fmt, io};

#[derive(Debug)]
pub enum CliError {
    ArgumentCount { actual: usize, expected: usize },
    /// Positional argument `index` (starting at 1) is not valid UTF-8.
    InvalidArgument { index: usize },
    InvalidConfig { key: &'static str, value: String },
    Json(serde_json::Error),
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl error::Error for CliError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::ArgumentCount { actual, expected } => write!(
                f,
                "Unexpected number of parameters ({} instead of {})",
                actual, expected
            ),
            CliError::InvalidArgument { index } => {
                write!(f, "Argument {} is not valid UTF-8", index)
            }
            CliError::InvalidConfig { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
