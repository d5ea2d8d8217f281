//! Turning a dictionary entry into a syllable-by-syllable pronunciation
//!
//! The first pronunciation carrying a transcription is the primary one. Its
//! syllables are transliterated one at a time (so no rule can match across
//! a syllable boundary) and its stress position is used for the whole word.
//! Alternate pronunciations are checked against the primary one but are not
//! rendered.

use crate::entry::{DictionaryEntry, PronunciationVariant};
use crate::error::{ComoFalaError, ComoFalaResult};
use crate::stress::find_stress;
use crate::syllable::{split_headword, split_ipa, split_ipa_positional};
use crate::transliterate::transliterate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Everything needed to display a word's pronunciation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPronunciation {
    /// Written syllables, e.g. `["pa", "ja", "ma"]`
    pub word_syllables: Vec<String>,
    /// Portuguese approximation of each spoken syllable, e.g. `["pã", "djó", "mã"]`
    pub syllables: Vec<String>,
    /// Index of the stressed syllable, if the transcription marks one
    pub stress: Option<usize>,
    /// Recording of the primary pronunciation
    pub audio_url: Option<String>,
}

impl RenderedPronunciation {
    pub fn is_stressed(&self, index: usize) -> bool {
        self.stress == Some(index)
    }
}

/// Render the pronunciation of a dictionary entry
///
/// # Errors
/// - `WordNotFound` if the entry has no headword information or no headword
/// - `NoPronunciation` if it has no usable transcription
pub fn assemble(entry: &DictionaryEntry) -> ComoFalaResult<RenderedPronunciation> {
    let (info, headword) = entry
        .hwi
        .as_ref()
        .and_then(|info| Some((info, info.hw.as_deref()?)))
        .ok_or_else(|| ComoFalaError::WordNotFound(String::new()))?;

    let variants = info
        .prs
        .as_deref()
        .ok_or_else(|| ComoFalaError::NoPronunciation(headword.to_string()))?;

    render(headword, variants)
}

/// Render a headword and its pronunciation variants
///
/// Variants without a transcription are skipped.
pub fn render(
    headword: &str,
    variants: &[PronunciationVariant],
) -> ComoFalaResult<RenderedPronunciation> {
    let usable: Vec<&PronunciationVariant> =
        variants.iter().filter(|pr| pr.ipa().is_some()).collect();

    let (primary, alternates) = usable
        .split_first()
        .ok_or_else(|| ComoFalaError::NoPronunciation(headword.to_string()))?;

    let primary_ipa = primary.ipa().unwrap_or_default();
    let ipa_syllables = split_ipa(primary_ipa);
    if ipa_syllables.is_empty() {
        return Err(ComoFalaError::NoPronunciation(headword.to_string()));
    }
    let stress = find_stress(&ipa_syllables);

    debug!(
        headword,
        primary = primary_ipa,
        syllables = ipa_syllables.len(),
        ?stress,
        "rendering pronunciation"
    );

    for (offset, alternate) in alternates.iter().enumerate() {
        let variant = offset + 1;
        let Some(ipa) = alternate.ipa() else {
            continue;
        };
        if let Err(e) = align_variant(&ipa_syllables, ipa, variant) {
            warn!(headword, variant, ipa, "{}", e);
        }
    }

    let syllables = ipa_syllables
        .iter()
        .map(|syllable| transliterate(syllable))
        .collect();

    Ok(RenderedPronunciation {
        word_syllables: split_headword(headword),
        syllables,
        stress,
        audio_url: primary.sound.as_ref().and_then(|sound| sound.audio_url()),
    })
}

/// Fill in an alternate pronunciation from the primary one
///
/// Alternates only spell out the syllables that differ: next to
/// `pə-ˈjä-mə`, the alternate `-ˈja-` means `pə-ˈja-mə`. `variant` is the
/// alternate's position among the usable pronunciations, for error reports.
///
/// # Errors
/// - `MisalignedVariant` if the syllable counts cannot be reconciled
/// - `StressMismatch` if the completed alternate stresses another syllable
pub fn align_variant(
    primary: &[String],
    alternate_ipa: &str,
    variant: usize,
) -> ComoFalaResult<Vec<String>> {
    let positional = split_ipa_positional(alternate_ipa);

    let aligned: Vec<String> = if positional.len() == primary.len() {
        positional
            .into_iter()
            .zip(primary)
            .map(|(syllable, fallback)| {
                if syllable.is_empty() {
                    fallback.clone()
                } else {
                    syllable
                }
            })
            .collect()
    } else {
        let spelled_out: Vec<String> = positional
            .into_iter()
            .filter(|syllable| !syllable.is_empty())
            .collect();
        if spelled_out.len() != primary.len() {
            return Err(ComoFalaError::MisalignedVariant {
                variant,
                expected: primary.len(),
                found: spelled_out.len(),
            });
        }
        spelled_out
    };

    let expected = find_stress(primary);
    let found = find_stress(&aligned);
    if expected != found {
        return Err(ComoFalaError::StressMismatch {
            variant,
            expected,
            found,
        });
    }

    Ok(aligned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syllables(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_pajama() {
        let variants = vec![
            PronunciationVariant::new("pə-ˈjä-mə").with_audio("pajama01"),
            PronunciationVariant::new("-ˈja-"),
        ];
        let rendered = render("pa*ja*ma", &variants).unwrap();
        assert_eq!(rendered.word_syllables, syllables(&["pa", "ja", "ma"]));
        assert_eq!(rendered.syllables, syllables(&["pã", "djó", "mã"]));
        assert_eq!(rendered.stress, Some(1));
        assert!(rendered.is_stressed(1));
        assert!(!rendered.is_stressed(0));
        assert_eq!(
            rendered.audio_url.as_deref(),
            Some("https://media.merriam-webster.com/audio/prons/en/us/mp3/p/pajama01.mp3")
        );
    }

    #[test]
    fn test_render_watermelon() {
        let variants = vec![PronunciationVariant::new("ˈwȯ-tər-ˌme-lən")];
        let rendered = render("wa*ter*mel*on", &variants).unwrap();
        assert_eq!(rendered.syllables, syllables(&["uó", "tãr", "me", "lãn"]));
        assert_eq!(rendered.stress, Some(0));
        assert_eq!(rendered.audio_url, None);
    }

    #[test]
    fn test_transliteration_is_per_syllable() {
        // "t" and "h" in separate syllables must not become "f"
        let variants = vec![PronunciationVariant::new("ˈhat-hed")];
        let rendered = render("hat*head", &variants).unwrap();
        assert_eq!(rendered.syllables, syllables(&["hét", "hed"]));
        assert_eq!(transliterate("ˈhathed"), "héfed");

        // same for a placeholder digraph split across syllables
        let variants = vec![PronunciationVariant::new("ˈmis-hap")];
        let rendered = render("mis*hap", &variants).unwrap();
        assert_eq!(rendered.syllables, syllables(&["mis", "hép"]));
        assert_eq!(transliterate("ˈmishap"), "mixép");
    }

    #[test]
    fn test_variants_without_transcription_skipped() {
        let variants = vec![
            PronunciationVariant::default(),
            PronunciationVariant::new("ˈkat"),
        ];
        let rendered = render("cat", &variants).unwrap();
        assert_eq!(rendered.syllables, syllables(&["két"]));
        assert_eq!(rendered.stress, Some(0));
    }

    #[test]
    fn test_no_usable_variant() {
        let variants = vec![PronunciationVariant::default(), PronunciationVariant::new("")];
        match render("abc", &variants) {
            Err(ComoFalaError::NoPronunciation(word)) => assert_eq!(word, "abc"),
            other => panic!("Expected NoPronunciation, got {:?}", other),
        }
        assert!(matches!(
            render("abc", &[]),
            Err(ComoFalaError::NoPronunciation(_))
        ));
        assert!(matches!(
            render("abc", &[PronunciationVariant::new("--")]),
            Err(ComoFalaError::NoPronunciation(_))
        ));
    }

    #[test]
    fn test_unmarked_stress_stays_none() {
        let variants = vec![PronunciationVariant::new("ə-ˌhȯi")];
        let rendered = render("a*hoy", &variants).unwrap();
        assert_eq!(rendered.stress, None);
        assert!(!rendered.is_stressed(0));
    }

    #[test]
    fn test_assemble_missing_headword_info() {
        let entry = DictionaryEntry { hwi: None };
        assert!(matches!(
            assemble(&entry),
            Err(ComoFalaError::WordNotFound(_))
        ));
    }

    #[test]
    fn test_assemble_missing_headword() {
        let mut entry = DictionaryEntry::new("cat", vec![PronunciationVariant::new("ˈkat")]);
        entry.hwi.as_mut().unwrap().hw = None;
        assert_eq!(
            assemble(&entry),
            Err(ComoFalaError::WordNotFound(String::new()))
        );
    }

    #[test]
    fn test_sound_without_audio_has_no_url() {
        let mut variant = PronunciationVariant::new("ˈkat").with_audio("cat00001");
        variant.sound.as_mut().unwrap().audio = None;
        let rendered = render("cat", &[variant]).unwrap();
        assert_eq!(rendered.syllables, vec!["két"]);
        assert_eq!(rendered.audio_url, None);
    }

    #[test]
    fn test_assemble_missing_pronunciations() {
        let mut entry = DictionaryEntry::new("abc", vec![]);
        entry.hwi.as_mut().unwrap().prs = None;
        match assemble(&entry) {
            Err(ComoFalaError::NoPronunciation(word)) => assert_eq!(word, "abc"),
            other => panic!("Expected NoPronunciation, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_squirrel() {
        let entry = DictionaryEntry::new("squir*rel", vec![PronunciationVariant::new("ˈskwər(-ə)l")]);
        let rendered = assemble(&entry).unwrap();
        assert_eq!(rendered.word_syllables, syllables(&["squir", "rel"]));
        assert_eq!(rendered.syllables, syllables(&["skuãr", "(ã)l"]));
        assert_eq!(rendered.stress, Some(0));
    }

    #[test]
    fn test_misaligned_alternate_does_not_fail_render() {
        let entry = DictionaryEntry::new(
            "au*dio",
            vec![
                PronunciationVariant::new("ˈȯ-dē-ˌō"),
                PronunciationVariant::new("ˈȯd-yō"),
            ],
        );
        let rendered = assemble(&entry).unwrap();
        assert_eq!(rendered.syllables, syllables(&["ó", "díi", "ou"]));
    }

    #[test]
    fn test_align_fills_gaps_from_primary() {
        let primary = syllables(&["pə", "ˈjä", "mə"]);
        let aligned = align_variant(&primary, "-ˈja-", 1).unwrap();
        assert_eq!(aligned, syllables(&["pə", "ˈja", "mə"]));
    }

    #[test]
    fn test_align_complete_alternate() {
        let primary = syllables(&["ˈtə", "mā", "tō"]);
        let aligned = align_variant(&primary, "ˈtə-mä-tō", 1).unwrap();
        assert_eq!(aligned, syllables(&["ˈtə", "mä", "tō"]));
    }

    #[test]
    fn test_align_trailing_separator() {
        let primary = syllables(&["ˈbä", "təl"]);
        let aligned = align_variant(&primary, "ˈbä-tᵊl-", 1).unwrap();
        assert_eq!(aligned, syllables(&["ˈbä", "tᵊl"]));
    }

    #[test]
    fn test_align_syllable_count_mismatch() {
        let primary = syllables(&["ˈȯ", "dē", "ˌō"]);
        assert_eq!(
            align_variant(&primary, "ˈȯd-yō", 1),
            Err(ComoFalaError::MisalignedVariant {
                variant: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_align_stress_mismatch() {
        let primary = syllables(&["ˈkän", "trakt"]);
        assert_eq!(
            align_variant(&primary, "kən-ˈtrakt", 2),
            Err(ComoFalaError::StressMismatch {
                variant: 2,
                expected: Some(0),
                found: Some(1),
            })
        );
    }
}
