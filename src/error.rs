use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(venturelink::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(venturelink::config))]
    Config(String),

    #[error("Scheduler error: {0}")]
    #[diagnostic(code(venturelink::scheduler))]
    Scheduler(String),

    #[error("Payment service error: {0}")]
    #[diagnostic(code(venturelink::payments))]
    Payments(String),

    #[error("Signing service error: {0}")]
    #[diagnostic(code(venturelink::signing))]
    Signing(String),

    #[error("Call service error: {0}")]
    #[diagnostic(code(venturelink::calls))]
    Calls(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(venturelink::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(venturelink::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(venturelink::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(venturelink::other))]
    Other(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for JSON errors from seed data parsing
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
#[allow(dead_code)]
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create scheduler errors
pub fn scheduler_error(message: &str) -> Error {
    Error::Scheduler(message.to_string())
}

/// Helper to create payment service errors
pub fn payment_error(message: &str) -> Error {
    Error::Payments(message.to_string())
}

/// Helper to create signing service errors
pub fn signing_error(message: &str) -> Error {
    Error::Signing(message.to_string())
}

/// Helper to create call service errors
pub fn call_error(message: &str) -> Error {
    Error::Calls(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
