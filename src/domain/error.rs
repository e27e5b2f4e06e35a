use thiserror::Error;

/// Failures of the timeline service.
///
/// Underlying causes are kept as text so the error can be stored in the
/// application state, cloned and compared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TwitterOperationError {
    #[error("access to the account was denied")]
    AccountAccessDenied,
    #[error("failed to access the account: {0}")]
    AccountAccessFailure(String),
    #[error("no account is available")]
    AccountUnavailable,
    #[error("the request could not be built")]
    InvalidRequest,
    #[error("request failed: {0}")]
    RequestFailure(String),
    #[error("failed to parse the response: {0}")]
    ResponseParsingFailure(#[from] TwitterParsingError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TwitterParsingError {
    #[error("the response was empty")]
    MissingResponse,
    #[error("missing attribute `{0}`")]
    MissingAttribute(String),
    #[error("unsupported response type")]
    UnsupportedType,
    #[error("invalid JSON: {0}")]
    ParsingError(String),
}

impl TwitterParsingError {
    pub fn missing(attribute: &str) -> Self {
        Self::MissingAttribute(attribute.to_string())
    }
}

impl From<reqwest::Error> for TwitterOperationError {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailure(error.to_string())
    }
}
