//! Transliteration of dictionary IPA into Portuguese spelling
//!
//! Converts a pronunciation such as `ˈwȯ-tər` into text a Portuguese reader
//! can sound out (`uó-tãr`). The conversion is a plain sequential rewrite
//! over [`REWRITE_RULES`]; characters no rule knows about pass through as-is,
//! so this never fails.
//!
//! # Example
//!
//! ```
//! use como_fala::transliterate;
//!
//! assert_eq!(transliterate("ˈvi-zhən"), "vi-jãn");
//! ```

use crate::rules::{REWRITE_RULES, RewriteRule};

/// Transliterate IPA text using the standard rule table
pub fn transliterate(ipa: &str) -> String {
    transliterate_with(REWRITE_RULES, ipa)
}

/// Transliterate IPA text using an arbitrary ordered rule list
///
/// Each rule is applied to the output of the previous one. Order matters:
/// see the module docs of [`crate::rules`].
pub fn transliterate_with(rules: &[RewriteRule], ipa: &str) -> String {
    rules
        .iter()
        .fold(ipa.to_string(), |text, rule| rule.apply(&text))
}
