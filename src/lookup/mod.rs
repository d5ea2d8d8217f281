//! Dictionary lookups
//!
//! This module fetches entries from a dictionary provider and feeds the first
//! one through the pronunciation assembler.
//!
//! # Overview
//!
//! 1. **Source trait** - `DictionarySource`, implemented by every provider
//! 2. **Merriam-Webster** - the Collegiate API over HTTP
//! 3. **Mock** - canned responses for tests and offline use
//! 4. **Pipeline** - `pronounce`, from a typed word to a `RenderedPronunciation`
//!
//! # Example
//!
//! ```ignore
//! use como_fala::lookup::{MerriamWebsterClient, pronounce};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = MerriamWebsterClient::from_env()?;
//!     let rendered = pronounce(&source, "pajama").await?;
//!     println!("{:?}", rendered.syllables);
//!     Ok(())
//! }
//! ```
pub mod merriam_webster;
pub mod mock;
pub mod source;


pub use merriam_webster::{API_KEY_VAR, MerriamWebsterClient};
pub use mock::MockDictionary;
pub use source::DictionarySource;

use crate::assembler::{RenderedPronunciation, assemble};
use crate::error::{ComoFalaError, ComoFalaResult};
use tracing::info;

/// Look a word up and render its pronunciation
///
/// Only the first dictionary entry is used.
///
/// # Errors
/// - `EmptyQuery` if `word` is blank
/// - `WordNotFound` if the dictionary has no entry with headword information
/// - `NoPronunciation` if the entry has no usable transcription
/// - whatever the source fails with
pub async fn pronounce(
    source: &dyn DictionarySource,
    word: &str,
) -> ComoFalaResult<RenderedPronunciation> {
    let word = word.trim();
    if word.is_empty() {
        return Err(ComoFalaError::EmptyQuery);
    }

    info!(word, source = source.source_name(), "looking up word");
    let entries = source.fetch_entries(word).await?;

    let entry = entries
        .first()
        .ok_or_else(|| ComoFalaError::WordNotFound(word.to_string()))?;

    assemble(entry).map_err(|e| match e {
        ComoFalaError::WordNotFound(_) => ComoFalaError::WordNotFound(word.to_string()),
        other => other,
    })
}
