//! Error handling for domain-fudge

use thiserror::Error;

/// Main error type for domain-fudge
#[derive(Error, Debug, Clone)]
pub enum FudgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("DNS error for '{domain}': {message}")]
    Dns { domain: String, message: String },

    #[error("WHOIS error for '{domain}': {message}")]
    Whois { domain: String, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FudgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a DNS error
    pub fn dns(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Dns {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a WHOIS error
    pub fn whois(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Whois {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("Configuration problem: {}", message)
            }
            Self::Validation { message } => {
                format!("Invalid input: {}", message)
            }
            Self::Dns { domain, message } => {
                format!("Could not resolve '{}': {}", domain, message)
            }
            Self::Whois { domain, message } => {
                format!("WHOIS lookup failed for '{}': {}", domain, message)
            }
            Self::Network { message } => {
                format!("Network error: {}", message)
            }
            Self::Timeout {
                operation,
                timeout_secs,
            } => {
                format!(
                    "Operation '{}' timed out after {}s",
                    operation, timeout_secs
                )
            }
            Self::Parse { message } => {
                format!("Parse error: {}", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("File error{}: {}", path_info, message)
            }
            Self::Internal { message } => {
                format!("Internal error: {}", message)
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for FudgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<tokio::time::error::Elapsed> for FudgeError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::timeout("Operation", 10)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FudgeError>;
