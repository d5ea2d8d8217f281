//! Como Fala: English pronunciations spelled for Portuguese speakers
//!
//! Takes the pronunciation of an English word as transcribed by the
//! Merriam-Webster dictionary and spells it, syllable by syllable, the way a
//! Portuguese reader would sound it out.
//!
//! ```
//! use como_fala::{PronunciationVariant, render};
//!
//! let rendered = render("wa*ter*mel*on", &[PronunciationVariant::new("ˈwȯ-tər-ˌme-lən")]).unwrap();
//! assert_eq!(rendered.syllables, vec!["uó", "tãr", "me", "lãn"]);
//! assert_eq!(rendered.stress, Some(0));
//! ```

pub mod assembler;
pub mod entry;
pub mod error;
pub mod lookup;
pub mod rules;
pub mod stress;
pub mod syllable;
pub mod transliterate;

// Re-export main types for convenient access
pub use assembler::{RenderedPronunciation, align_variant, assemble, render};
pub use entry::{
    DictionaryEntry, HeadwordInfo, PronunciationVariant, Sound, parse_entries, parse_entries_str,
};
pub use error::{ComoFalaError, ComoFalaResult};
pub use lookup::{DictionarySource, MerriamWebsterClient, MockDictionary, pronounce};
pub use rules::{REWRITE_RULES, RewriteRule, RulePhase};
pub use stress::find_stress;
pub use syllable::{split_headword, split_ipa, split_ipa_positional};
pub use transliterate::{transliterate, transliterate_with};
