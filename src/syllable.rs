//! Splitting pronunciations and headwords into syllables

use regex::Regex;
use std::sync::LazyLock;

/// Syllable separator used in dictionary pronunciations
pub const SYLLABLE_SEPARATOR: char = '-';

/// Headwords use "*" between syllables, spaces between words of a phrase
/// ("fin de siè*cle") and sometimes "-" ("uh-oh").
static HEADWORD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s*-]").expect("headword separator pattern is valid")
});

/// Move a boundary written inside a parenthesis to just before it.
///
/// Some words, like "squirrel" (`ˈskwər(-ə)l`), split a parenthesized sound
/// between two syllables. It belongs to the syllable that follows.
fn normalize_boundaries(ipa: &str) -> String {
    ipa.replace("(-", "-(")
}

/// Split an IPA pronunciation into its syllables
///
/// Empty pieces are dropped; a few entries end in a stray separator.
///
/// # Example
/// ```
/// use como_fala::split_ipa;
///
/// assert_eq!(split_ipa("pə-ˈjä-mə"), vec!["pə", "ˈjä", "mə"]);
/// assert_eq!(split_ipa("ˈskwər(-ə)l"), vec!["ˈskwər", "(ə)l"]);
/// ```
pub fn split_ipa(ipa: &str) -> Vec<String> {
    normalize_boundaries(ipa)
        .split(SYLLABLE_SEPARATOR)
        .filter(|syllable| !syllable.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split an IPA pronunciation, keeping empty pieces in place
///
/// Alternate pronunciations only spell out the syllables that differ from
/// the first one: `-ˈja-` next to `pə-ˈjä-mə`. An empty piece stands for
/// the primary syllable at the same position.
pub fn split_ipa_positional(ipa: &str) -> Vec<String> {
    normalize_boundaries(ipa)
        .split(SYLLABLE_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Split a headword into its written syllables
pub fn split_headword(headword: &str) -> Vec<String> {
    HEADWORD_SEPARATOR
        .split(headword)
        .filter(|syllable| !syllable.is_empty())
        .map(str::to_string)
        .collect()
}
