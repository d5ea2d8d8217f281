//! Dictionary source trait
//!
//! This module defines the `DictionarySource` trait for provider abstraction,
//! so the pronunciation pipeline can run against the Merriam-Webster API or
//! a canned set of responses without knowing which.
//!
//! # Example
//!
//! ```ignore
//! use como_fala::lookup::{DictionarySource, MerriamWebsterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = MerriamWebsterClient::from_env()?;
//!     let entries = source.fetch_entries("pajama").await?;
//!     println!("{} entries", entries.len());
//!     Ok(())
//! }
//! ```

use crate::entry::DictionaryEntry;
use crate::error::ComoFalaResult;
use async_trait::async_trait;

/// Generic trait for dictionary providers
///
/// All methods are async to support I/O-bound operations like network requests.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch every entry the dictionary has for `word`
    ///
    /// # Returns
    ///
    /// * `Ok(entries)` - Entries in dictionary order; empty if the word is unknown
    /// * `Err(ComoFalaError)` - If the dictionary could not be queried
    async fn fetch_entries(&self, word: &str) -> ComoFalaResult<Vec<DictionaryEntry>>;

    /// Name of this provider, for logging
    fn source_name(&self) -> &str;
}
