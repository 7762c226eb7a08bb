use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Assert: {message}")]
    AssertionFailed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UtilsError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::AssertionFailed { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) => ErrorSeverity::Medium,
            // 斷言失敗代表程式本身的錯誤
            Self::AssertionFailed { .. } | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => format!("Invalid input: {}", message),
            Self::AssertionFailed { message } => format!("Internal check failed: {}", message),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not encode the output: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Pass at least one interval, with low <= high, sorted and non-overlapping"
            }
            Self::AssertionFailed { .. } => "Report this as a bug together with the input used",
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::SerializationError(_) => "Retry without --json",
            Self::ConfigError { .. } => "Make sure the file is valid TOML",
            Self::InvalidConfigValueError { .. } => "Fix the value in the configuration file",
            Self::MissingConfigError { .. } => "Add the missing field to the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_message_format() {
        let err = UtilsError::AssertionFailed {
            message: "index out of range".to_string(),
        };
        assert_eq!(err.to_string(), "Assert: index out of range");
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_classification() {
        let err = UtilsError::invalid_argument("empty interval set");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = UtilsError::MissingConfigError {
            field: "sampler.intervals".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("sampler.intervals"));
    }
}
