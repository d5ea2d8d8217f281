//! Mock dictionary for testing
//!
//! Answers lookups from canned JSON responses, so the pipeline can be
//! exercised without an API key or network access.
//!
//! # Example
//!
//! ```ignore
//! use como_fala::lookup::{DictionarySource, MockDictionary};
//! use serde_json::json;
//!
//! #[tokio::test]
//! async fn test_lookup() {
//!     let mock = MockDictionary::new()
//!         .with_response("cat", json!([{ "hwi": { "hw": "cat", "prs": [{ "mw": "ˈkat" }] } }]));
//!     let entries = mock.fetch_entries("cat").await.unwrap();
//!     assert_eq!(entries.len(), 1);
//! }
//! ```

use crate::entry::{DictionaryEntry, parse_entries};
use crate::error::{ComoFalaError, ComoFalaResult};
use crate::lookup::source::DictionarySource;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Dictionary backed by an in-memory map of raw responses
///
/// Words are matched case-insensitively. Unknown words get an empty array,
/// which is how the real service answers when it has no suggestions.
#[derive(Debug, Clone, Default)]
pub struct MockDictionary {
    responses: HashMap<String, Value>,
    /// When set, every lookup fails with this message
    failure: Option<String>,
}

impl MockDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary whose every lookup fails, as if the service were down
    pub fn failing(message: &str) -> Self {
        Self {
            responses: HashMap::new(),
            failure: Some(message.to_string()),
        }
    }

    /// Register the raw JSON response for `word`
    pub fn with_response(mut self, word: &str, response: Value) -> Self {
        self.responses.insert(word.to_lowercase(), response);
        self
    }

    /// Register a single entry for `word`
    pub fn with_entry(self, word: &str, entry: &DictionaryEntry) -> ComoFalaResult<Self> {
        let response = Value::Array(vec![serde_json::to_value(entry)?]);
        Ok(self.with_response(word, response))
    }
}

#[async_trait]
impl DictionarySource for MockDictionary {
    async fn fetch_entries(&self, word: &str) -> ComoFalaResult<Vec<DictionaryEntry>> {
        if let Some(message) = &self.failure {
            return Err(ComoFalaError::RequestFailed(message.clone()));
        }

        match self.responses.get(&word.to_lowercase()) {
            Some(response) => parse_entries(response.clone()),
            None => Ok(Vec::new()),
        }
    }

    fn source_name(&self) -> &str {
        "Mock Dictionary"
    }
}
