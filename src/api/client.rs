//! HTTP client for task API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the task API, handling URL construction, status checking, and response parsing.

use super::ApiError;
use log::*;
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;

/// Makes requests against the task API base URL and tries to conform response
/// data to the requested type.
///
pub struct Client {
    base_url: Url,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_owned()));
        }
        Ok(Client {
            base_url: parsed,
            http_client: reqwest::Client::builder().build()?,
        })
    }

    /// Returns the base URL all requests are made relative to.
    ///
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Return deserialized response data for a GET of the path segment or error.
    ///
    pub async fn get<T: DeserializeOwned>(&self, segment: &str) -> Result<T, ApiError> {
        let response = self.call(Method::GET, segment, None).await?;
        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&response_bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                debug!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(e.into())
            }
        }
    }

    /// Make request with optional JSON body and return the response if its
    /// status is a success, otherwise an error carrying status and body text.
    ///
    pub async fn call(
        &self,
        method: Method,
        segment: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let request_url = self.url(segment)?;
        debug!("Sending {} {}...", method, request_url);

        let mut request = self.http_client.request(method.clone(), request_url.clone());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("{} {} failed: {}", method, request_url, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            debug!(
                "{} {} failed with status {}: {}",
                method, request_url, status, message
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Join a single path segment onto the base URL. The segment is
    /// percent-encoded, so opaque ids cannot escape into other paths.
    ///
    fn url(&self, segment: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_segment_to_base_path() {
        let client = Client::new("http://localhost:3000/api/tasks").unwrap();
        assert_eq!(
            client.url("AllTask").unwrap().as_str(),
            "http://localhost:3000/api/tasks/AllTask"
        );
    }

    #[test]
    fn url_ignores_trailing_slash() {
        let client = Client::new("http://localhost:3000/api/tasks/").unwrap();
        assert_eq!(
            client.url("abc123").unwrap().as_str(),
            "http://localhost:3000/api/tasks/abc123"
        );
    }

    #[test]
    fn url_encodes_id_segment() {
        let client = Client::new("http://localhost:3000/api/tasks").unwrap();
        assert_eq!(
            client.url("a/b c").unwrap().as_str(),
            "http://localhost:3000/api/tasks/a%2Fb%20c"
        );
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        assert!(matches!(
            Client::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            Client::new("mailto:someone@example.com"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
