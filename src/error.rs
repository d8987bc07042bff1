//! Error types shared by the prompt builder, inference client and server

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Startup cannot proceed (e.g. no inference base URL)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller sent something we refuse to process
    #[error("{0}")]
    InvalidRequest(String),

    /// Anything that went wrong talking to the inference provider.
    /// Transport, HTTP status and decoding failures all collapse here.
    #[error("Failed to generate email: {0}")]
    GenerationFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failed_message() {
        let err = Error::GenerationFailed("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to generate email: connection refused"
        );
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_invalid_request_is_client_error() {
        let err = Error::InvalidRequest("previous email is required for reply action".into());
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "previous email is required for reply action"
        );
    }
}
