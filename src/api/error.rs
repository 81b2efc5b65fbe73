//! Task API-specific error types.

/// Errors that can occur while talking to the task API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Base URL or task id could not form a request URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let error = ApiError::Status {
            status: 404,
            message: "Not found".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::InvalidUrl("not a url".to_string());
        assert!(error.to_string().contains("Invalid request URL"));
        assert!(error.to_string().contains("not a url"));

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ApiError = json_error.into();
        assert!(error.to_string().contains("deserialize"));
    }
}
