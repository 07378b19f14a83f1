use std::fmt;

#[derive(Debug)]
pub enum NumberError {
    // Conversion errors. `None` stands for a missing (null) input.
    InvalidNumber { input: Option<String> },

    // Output errors (CLI only)
    Io(std::io::Error),
}

impl NumberError {
    /// Build an `InvalidNumber` that echoes the caller's raw input
    pub fn invalid(input: &str) -> Self {
        NumberError::InvalidNumber {
            input: Some(input.to_string()),
        }
    }

    /// Build the `InvalidNumber` reported for a null input
    pub fn null_input() -> Self {
        NumberError::InvalidNumber { input: None }
    }

    pub fn is_invalid_number(&self) -> bool {
        matches!(self, NumberError::InvalidNumber { .. })
    }
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberError::InvalidNumber { input: None } => write!(f, "Number must not be null"),
            NumberError::InvalidNumber { input: Some(raw) } => {
                write!(f, "Cannot parse {}, invalid number", raw)
            }
            NumberError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for NumberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NumberError::Io(e) => Some(e),
            NumberError::InvalidNumber { .. } => None,
        }
    }
}

// Conversions
impl From<std::io::Error> for NumberError {
    fn from(err: std::io::Error) -> Self {
        NumberError::Io(err)
    }
}

impl From<serde_json::Error> for NumberError {
    fn from(err: serde_json::Error) -> Self {
        NumberError::Io(err.into())
    }
}

pub type Result<T> = std::result::Result<T, NumberError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_echoes_input() {
        let err = NumberError::invalid(" 30a ");
        assert_eq!(err.to_string(), "Cannot parse  30a , invalid number");
        assert!(err.is_invalid_number());
    }

    #[test]
    fn test_null_input_message() {
        let err = NumberError::null_input();
        assert_eq!(err.to_string(), "Number must not be null");
        assert!(err.is_invalid_number());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: NumberError = io.into();
        assert!(!err.is_invalid_number());
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
