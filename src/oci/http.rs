//! HTTP utilities for OCI REST API calls

use crate::error::{ActivityError, Result};
use reqwest::Client;
use serde_json::Value;

/// Response header carrying the continuation cursor for list calls.
pub const NEXT_PAGE_HEADER: &str = "opc-next-page";

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and masks non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..MAX_LOG_BODY_LENGTH],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for OCI API calls
#[derive(Clone)]
pub struct OciHttpClient {
    client: Client,
}

impl OciHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("chaosoci/{}", crate::VERSION))
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request, returning the body and the continuation cursor
    /// from the `opc-next-page` header, if any.
    pub async fn get(&self, url: &str, token: &str) -> Result<(Value, Option<String>)> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        let next_page = response
            .headers()
            .get(NEXT_PAGE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = response.text().await?;

        if !status.is_success() {
            // Only log a sanitized/truncated error body
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(ActivityError::Api {
                status: status.as_u16(),
                message: sanitize_for_log(&body),
            });
        }

        let value = serde_json::from_str(&body)?;
        Ok((value, next_page))
    }

    /// Make a POST request to an OCI API
    pub async fn post(&self, url: &str, token: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(url).bearer_auth(token);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        let status = response.status();
        let response_body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                "API error: {} - {}",
                status,
                sanitize_for_log(&response_body)
            );
            return Err(ActivityError::Api {
                status: status.as_u16(),
                message: sanitize_for_log(&response_body),
            });
        }

        if response_body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&response_body)?)
    }

    /// Make a DELETE request to an OCI API
    pub async fn delete(&self, url: &str, token: &str) -> Result<Value> {
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).bearer_auth(token).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(ActivityError::Api {
                status: status.as_u16(),
                message: sanitize_for_log(&body),
            });
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let out = sanitize_for_log(&body);
        assert!(out.contains("[truncated, 500 bytes total]"));
    }

    #[test]
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("ok\r\nbody\t!"), "okbody!");
    }
}
