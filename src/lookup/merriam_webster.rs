//! Merriam-Webster Collegiate Dictionary provider
//!
//! Looks words up in the "Collegiate Dictionary with Audio" API.
//!
//! # Authentication
//!
//! The provider loads the API key from the `MERRIAM_WEBSTER_API_KEY`
//! environment variable. Obtain a key from:
//! https://dictionaryapi.com/
//!
//! # Example
//!
//! ```ignore
//! use como_fala::lookup::{DictionarySource, MerriamWebsterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MerriamWebsterClient::from_env()?;
//!     let entries = client.fetch_entries("watermelon").await?;
//!     println!("{:?}", entries.first());
//!     Ok(())
//! }
//! ```

use crate::entry::{DictionaryEntry, parse_entries};
use crate::error::{ComoFalaError, ComoFalaResult};
use crate::lookup::source::DictionarySource;
use async_trait::async_trait;
use tracing::debug;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "MERRIAM_WEBSTER_API_KEY";

const DEFAULT_BASE_URL: &str = "https://www.dictionaryapi.com/api/v3/references/collegiate/json";

/// Merriam-Webster Collegiate API client
#[derive(Clone)]
pub struct MerriamWebsterClient {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Endpoint the word is appended to
    base_url: String,
}

impl MerriamWebsterClient {
    /// Create a new client with an explicit API key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New client
    /// * `Err(ComoFalaError)` - If the key is empty or the HTTP client cannot be built
    pub fn new(api_key: String) -> ComoFalaResult<Self> {
        if api_key.trim().is_empty() {
            return Err(ComoFalaError::ConfigError(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                ComoFalaError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client from the `MERRIAM_WEBSTER_API_KEY` environment variable
    pub fn from_env() -> ComoFalaResult<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            ComoFalaError::ConfigError(format!("{} environment variable not set", API_KEY_VAR))
        })?;

        Self::new(api_key)
    }

    /// Point the client at another endpoint (a proxy or a test server)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// URL of the lookup for `word`, without the key
    fn word_url(&self, word: &str) -> ComoFalaResult<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ComoFalaError::ConfigError(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ComoFalaError::ConfigError(format!("Invalid base URL: {}", self.base_url))
            })?
            .push(word);
        Ok(url)
    }
}

impl std::fmt::Debug for MerriamWebsterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerriamWebsterClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl DictionarySource for MerriamWebsterClient {
    async fn fetch_entries(&self, word: &str) -> ComoFalaResult<Vec<DictionaryEntry>> {
        let mut url = self.word_url(word)?;
        debug!(%url, "requesting dictionary entry");
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ComoFalaError::RequestFailed(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            ComoFalaError::InvalidResponse(format!("Failed to parse API response: {}", e))
        })?;

        parse_entries(json)
    }

    fn source_name(&self) -> &str {
        "Merriam-Webster Collegiate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_key() {
        let client = MerriamWebsterClient::new("test-api-key".to_string());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().source_name(), "Merriam-Webster Collegiate");
    }

    #[test]
    fn test_new_with_empty_key() {
        match MerriamWebsterClient::new("  ".to_string()) {
            Err(ComoFalaError::ConfigError(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_debug_masks_key() {
        let client = MerriamWebsterClient::new("secret-key".to_string()).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_word_url() {
        let client = MerriamWebsterClient::new("k".to_string()).unwrap();
        assert_eq!(
            client.word_url("pajama").unwrap().as_str(),
            "https://www.dictionaryapi.com/api/v3/references/collegiate/json/pajama"
        );
        assert_eq!(
            client.word_url("bon vivant").unwrap().as_str(),
            "https://www.dictionaryapi.com/api/v3/references/collegiate/json/bon%20vivant"
        );
    }

    #[test]
    fn test_with_base_url() {
        let client = MerriamWebsterClient::new("k".to_string())
            .unwrap()
            .with_base_url("http://localhost:8080/json/");
        assert_eq!(
            client.word_url("cat").unwrap().as_str(),
            "http://localhost:8080/json/cat"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let client = MerriamWebsterClient::new("k".to_string())
            .unwrap()
            .with_base_url("not a url");
        assert!(matches!(
            client.word_url("cat"),
            Err(ComoFalaError::ConfigError(_))
        ));
    }
}
