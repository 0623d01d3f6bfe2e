use thiserror::Error;

/// Warning shown in the result area when the form cannot be evaluated.
pub const INVALID_INPUT_WARNING: &str = "⚠ Please enter a valid numeric range!";

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Non-numeric text, a non-positive value, or an empty range.
    /// The message names the offending field and is meant for logs.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Message suitable for showing to the person at the form.
    ///
    /// Validation failures collapse into one static warning, the detail only
    /// goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(_) => INVALID_INPUT_WARNING.to_string(),
            Self::Config(_) => self.to_string(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::InvalidInput("x must be positive".to_string());
        assert_eq!(error.to_string(), "Invalid input: x must be positive");
    }

    #[test]
    fn test_invalid_input_user_message_is_static() {
        let a = AppError::InvalidInput("x is not a number".to_string());
        let b = AppError::InvalidInput("start must be less than end".to_string());
        assert_eq!(a.user_message(), INVALID_INPUT_WARNING);
        assert_eq!(a.user_message(), b.user_message());
        assert!(a.is_invalid_input());
    }

    #[test]
    fn test_config_error_user_message_keeps_detail() {
        let error = AppError::Config("samples must be at least 2".to_string());
        assert!(error.user_message().contains("samples must be at least 2"));
        assert!(!error.is_invalid_input());
    }
}
