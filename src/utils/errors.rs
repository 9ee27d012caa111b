use thiserror::Error;

/// Main error type for Crushor
#[derive(Error, Debug)]
pub enum CrushorError {
    #[error("Cohere API key is missing")]
    MissingCredential,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("UI error: {0}")]
    UIError(String),
}

impl CrushorError {
    /// HTTP status carried by the error, when the remote answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body carried by the error, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::ApiError { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_diagnostics() {
        let err = CrushorError::ApiError {
            status: 500,
            body: "{\"message\":\"internal\"}".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body(), Some("{\"message\":\"internal\"}"));
        assert_eq!(err.to_string(), "API error (500): {\"message\":\"internal\"}");
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let err = CrushorError::MalformedResponse("no generations".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }
}
