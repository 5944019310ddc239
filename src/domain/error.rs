use thiserror::Error;

/// Failure talking to the journal data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Parse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Why a provider row was dropped on ingest. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordRejection {
    #[error("missing ticket")]
    MissingTicket,

    #[error("field `{field}` is not numeric: {value}")]
    NonNumeric { field: &'static str, value: String },

    #[error("row is not an object")]
    NotAnObject,
}
