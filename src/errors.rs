//! Error types shared by the paysafecard connector.

/// Result type carrying an [`error_stack::Report`] for the given context.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ConnectorError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("Failed to reach the payment gateway: {message}")]
    TransportError { message: String },
    #[error("Error while obtaining URL for the integration")]
    FailedToObtainIntegrationUrl,
}

impl ConnectorError {
    pub(crate) fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

/// A single contract configuration field rejected by local validation.
///
/// `message` is a localization key, resolved against the caller's locale by
/// the configuration service.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Invalid value for field '{field}': {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Unable to load configuration: {0}")]
    ConfigLoadFailed(#[from] config::ConfigError),
    #[error("Invalid release date '{date}', expected dd/MM/yyyy")]
    InvalidReleaseDate { date: String },
    #[error("Unable to parse localization catalog for '{language}'")]
    CatalogParsingFailed { language: &'static str },
    #[error("Unable to build the HTTP client")]
    HttpClientBuildFailed,
}
