use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FabricaError {
    #[error("Invalid argument: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Data access error: {message}")]
    DataAccess { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl FabricaError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DataAccess { .. } => "DATA_ACCESS_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidArgument { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::DataAccess { .. } => 500,
            Self::Configuration { .. } => 500,
            Self::Internal { .. } => 500,
        }
    }

    /// The message a caller may see. Invalid arguments and not-found
    /// results carry their own text; everything else collapses to a
    /// generic message so storage faults never leak detail outward.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidArgument { message, .. } => message.clone(),
            Self::NotFound { resource } => resource.clone(),
            _ => "The request could not be completed. Please try again later.".to_string(),
        }
    }
}

pub type FabricaResult<T> = Result<T, FabricaError>;

/// The failure envelope every endpoint returns: `{ success: false, message }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl From<&FabricaError> for FailureResponse {
    fn from(error: &FabricaError) -> Self {
        Self {
            success: false,
            message: error.public_message(),
        }
    }
}

// Conversion from common error types
impl From<sqlx::Error> for FabricaError {
    fn from(error: sqlx::Error) -> Self {
        Self::data_access(error.to_string())
    }
}

impl From<config::ConfigError> for FabricaError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
