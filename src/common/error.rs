//! Error types for the drawing pad and its predictor client

use thiserror::Error;

/// Result type alias for pad operations
pub type Result<T> = std::result::Result<T, PadError>;

/// Errors that can occur while drawing, encoding or predicting.
///
/// Every variant carries plain text so the error can be cloned into GUI
/// messages and shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PadError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The drawing surface could not be created or painted
    #[error("Drawing surface error: {0}")]
    Surface(String),

    /// The raster could not be encoded or decoded as an image payload
    #[error("Image encoding failed: {0}")]
    Encode(String),

    /// The request never completed (connect, send or read failure)
    #[error("Could not reach the predictor: {0}")]
    Network(String),

    /// The predictor did not answer in time
    #[error("Predictor timed out after {0}s")]
    Timeout(u64),

    /// The predictor answered with a non-success HTTP status
    #[error("Predictor returned HTTP {0}")]
    HttpStatus(u16),

    /// The predictor answered with something we cannot interpret
    #[error("Unexpected response from predictor: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            PadError::Network("connection refused".into()).to_string(),
            "Could not reach the predictor: connection refused"
        );
        assert_eq!(PadError::Timeout(30).to_string(), "Predictor timed out after 30s");
        assert_eq!(PadError::HttpStatus(502).to_string(), "Predictor returned HTTP 502");
    }
}
