//! hipsum.co Integration
//!
//! Fetches generated placeholder text from the hipsum.co API.
//! The API answers with a JSON array holding one string per unit.

use crate::config::Config;
use crate::core::request::GenerationRequest;
use crate::error::{HipsumError, HipsumResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Trait for text generators
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce one text block per requested unit
    async fn generate(&self, request: &GenerationRequest) -> HipsumResult<Vec<String>>;

    /// Get the generator name
    fn name(&self) -> &str;
}

/// HTTP client for the hipsum.co API
#[derive(Debug, Clone)]
pub struct HipsumClient {
    client: Client,
    base_url: String,
}

impl HipsumClient {
    /// Create new client from config
    pub fn new(config: &Config) -> HipsumResult<Self> {
        config.validate()?;
        let timeout = match config.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::with_base_url(&config.base_url, timeout)
    }

    /// Create a client against `base_url`, with an optional request timeout
    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> HipsumResult<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("hipsum/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TextGenerator for HipsumClient {
    async fn generate(&self, request: &GenerationRequest) -> HipsumResult<Vec<String>> {
        let query = request.query_pairs();
        info!(
            "🧔 Fetching {} {} from {}",
            request.count(),
            request.unit(),
            self.base_url
        );
        debug!("Query: {:?}", query);

        let response = self.client.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ hipsum API Error ({}): {}", status, body_text);
            return Err(HipsumError::Api {
                status: status.as_u16(),
                message: body_text,
            });
        }

        debug!("hipsum raw body: {}", body_text);
        let blocks = parse_blocks(&body_text)?;
        debug!("Received {} blocks", blocks.len());
        Ok(blocks)
    }

    fn name(&self) -> &str {
        "hipsum.co"
    }
}

/// Parse a response body, which must be a JSON array of strings
pub fn parse_blocks(body: &str) -> HipsumResult<Vec<String>> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!("❌ hipsum body is not JSON: {}", e);
            return Err(HipsumError::InvalidResponse);
        }
    };

    let Value::Array(items) = value else {
        warn!("❌ hipsum body is not an array");
        return Err(HipsumError::InvalidResponse);
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            other => {
                warn!("❌ Non-string block in hipsum body: {}", other);
                Err(HipsumError::InvalidResponse)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_array() {
        let blocks = parse_blocks(r#"["one", "two  three"]"#).expect("valid");
        assert_eq!(blocks, vec!["one".to_string(), "two  three".to_string()]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_blocks("[]").expect("valid").is_empty());
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        for body in [
            r#"{"text": "nope"}"#,
            r#""just a string""#,
            r#"["ok", 3]"#,
            r#"["ok", null]"#,
            r#"[["nested"]]"#,
            "<html>teapot</html>",
            "",
        ] {
            assert!(
                matches!(parse_blocks(body), Err(HipsumError::InvalidResponse)),
                "accepted {body:?}"
            );
        }
    }

    #[test]
    fn test_client_from_config() {
        let client = HipsumClient::new(&Config::default()).expect("client");
        assert_eq!(client.base_url(), "http://hipsum.co/api/");
        assert_eq!(client.name(), "hipsum.co");
    }

    #[test]
    fn test_client_rejects_bad_config() {
        let config = Config {
            base_url: "::".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            HipsumClient::new(&config),
            Err(HipsumError::Config(_))
        ));
    }
}
