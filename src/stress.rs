//! Locating the stressed syllable

use crate::rules::PRIMARY_STRESS;

/// Index of the first syllable that starts with the primary stress mark
///
/// Returns `None` when no syllable is marked. A syllable with optional
/// stress, such as `(ˈ)hä`, does not count.
///
/// # Example
/// ```
/// use como_fala::find_stress;
///
/// assert_eq!(find_stress(&["pə", "ˈjä", "mə"]), Some(1));
/// assert_eq!(find_stress(&["pə", "jä"]), None);
/// ```
pub fn find_stress<S: AsRef<str>>(syllables: &[S]) -> Option<usize> {
    syllables
        .iter()
        .position(|syllable| syllable.as_ref().starts_with(PRIMARY_STRESS))
}
