//! Dictionary entries as returned by the Merriam-Webster Collegiate API
//!
//! Only the fields needed to render a pronunciation are modelled; everything
//! else in the response is ignored.
//!
//! ```json
//! [
//!   {
//!     "meta": { ... },
//!     "hwi": {
//!       "hw": "pa*ja*ma",
//!       "prs": [
//!         { "mw": "pə-ˈjä-mə", "sound": { "audio": "pajama01" } },
//!         { "mw": "-ˈja-" }
//!       ]
//!     },
//!     ...
//!   }
//! ]
//! ```

use crate::error::{ComoFalaError, ComoFalaResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

const AUDIO_BASE_URL: &str = "https://media.merriam-webster.com/audio/prons/en/us/mp3";

/// One sense of a word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Headword information; absent for entries we cannot use
    pub hwi: Option<HeadwordInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadwordInfo {
    /// Headword with syllable separators, e.g. "pa*ja*ma"
    pub hw: Option<String>,
    /// Pronunciations, first one is the primary
    pub prs: Option<Vec<PronunciationVariant>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PronunciationVariant {
    /// Transcription in Merriam-Webster's IPA-like notation
    pub mw: Option<String>,
    pub sound: Option<Sound>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
    /// Base file name of the recording, e.g. "pajama01"
    pub audio: Option<String>,
}

impl PronunciationVariant {
    pub fn new(mw: &str) -> Self {
        PronunciationVariant {
            mw: Some(mw.to_string()),
            sound: None,
        }
    }

    pub fn with_audio(mut self, audio: &str) -> Self {
        self.sound = Some(Sound {
            audio: Some(audio.to_string()),
        });
        self
    }

    /// The transcription, if present and not blank
    pub fn ipa(&self) -> Option<&str> {
        self.mw.as_deref().filter(|mw| !mw.trim().is_empty())
    }
}

impl Sound {
    /// URL of the mp3 recording, if the sound names one
    ///
    /// Recordings are grouped into subdirectories: "bix" and "gg" for names
    /// starting with those letters, "number" for names starting with a digit
    /// or punctuation, otherwise the first letter of the name.
    pub fn audio_url(&self) -> Option<String> {
        let audio = self.audio.as_deref().filter(|audio| !audio.is_empty())?;
        let subdirectory = if audio.starts_with("bix") {
            "bix".to_string()
        } else if audio.starts_with("gg") {
            "gg".to_string()
        } else {
            match audio.chars().next() {
                Some(c) if c.is_ascii_alphabetic() => c.to_ascii_lowercase().to_string(),
                _ => "number".to_string(),
            }
        };
        Some(format!("{}/{}/{}.mp3", AUDIO_BASE_URL, subdirectory, audio))
    }
}

impl DictionaryEntry {
    pub fn new(headword: &str, variants: Vec<PronunciationVariant>) -> Self {
        DictionaryEntry {
            hwi: Some(HeadwordInfo {
                hw: Some(headword.to_string()),
                prs: Some(variants),
            }),
        }
    }

    /// The headword, if the entry has one
    pub fn headword(&self) -> Option<&str> {
        self.hwi.as_ref().and_then(|info| info.hw.as_deref())
    }
}

/// Decode a lookup response into entries
///
/// The response is always a JSON array. For unknown words the service sends
/// an array of spelling suggestions (plain strings) instead of entries; those
/// are skipped, so an unknown word yields an empty list.
///
/// Only the first entry is ever rendered, so it must decode; a later entry
/// that does not is dropped with a warning.
pub fn parse_entries(json: Value) -> ComoFalaResult<Vec<DictionaryEntry>> {
    let items = match json {
        Value::Array(items) => items,
        other => {
            return Err(ComoFalaError::InvalidResponse(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )));
        }
    };

    let mut entries = Vec::new();
    for item in items {
        match item {
            Value::String(_) => continue,
            Value::Object(_) if entries.is_empty() => entries.push(serde_json::from_value(item)?),
            Value::Object(_) => match serde_json::from_value(item) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(index = entries.len(), "skipping undecodable entry: {}", e),
            },
            other => {
                return Err(ComoFalaError::InvalidResponse(format!(
                    "unexpected {} in entry list",
                    json_kind(&other)
                )));
            }
        }
    }
    Ok(entries)
}

/// Decode a lookup response from its text form
pub fn parse_entries_str(body: &str) -> ComoFalaResult<Vec<DictionaryEntry>> {
    parse_entries(serde_json::from_str(body)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
