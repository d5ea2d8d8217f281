/// Error types for pronunciation lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComoFalaError {
    /// No dictionary entry, or the entry has no headword information
    WordNotFound(String),
    /// The entry exists but carries no usable IPA transcription
    NoPronunciation(String),
    /// The query was empty after trimming
    EmptyQuery,
    /// The dictionary service could not be reached or answered with an error
    RequestFailed(String),
    /// The dictionary service answered with something that is not an entry list
    InvalidResponse(String),
    /// Missing or invalid configuration (API key, base URL)
    ConfigError(String),
    /// An alternate pronunciation has a different number of syllables than the primary one
    MisalignedVariant {
        variant: usize,
        expected: usize,
        found: usize,
    },
    /// An alternate pronunciation stresses a different syllable than the primary one
    StressMismatch {
        variant: usize,
        expected: Option<usize>,
        found: Option<usize>,
    },
}

impl ComoFalaError {
    /// The message shown to the user, in Portuguese
    pub fn user_message(&self) -> &'static str {
        match self {
            ComoFalaError::RequestFailed(_) | ComoFalaError::InvalidResponse(_) => {
                "Não consegui comunicar com o servidor."
            }
            ComoFalaError::WordNotFound(_) => "Essa palavra não foi encontrada.",
            ComoFalaError::NoPronunciation(_) => "Como Fala não tem a pronúncia dessa palavra.",
            _ => "Alguma coisa deu errado.",
        }
    }
}

impl std::fmt::Display for ComoFalaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComoFalaError::WordNotFound(word) => write!(f, "Word not found: {}", word),
            ComoFalaError::NoPronunciation(word) => {
                write!(f, "No pronunciation available for: {}", word)
            }
            ComoFalaError::EmptyQuery => write!(f, "Empty query"),
            ComoFalaError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ComoFalaError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ComoFalaError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ComoFalaError::MisalignedVariant {
                variant,
                expected,
                found,
            } => write!(
                f,
                "Pronunciation variant {} has {} syllables, expected {}",
                variant, found, expected
            ),
            ComoFalaError::StressMismatch {
                variant,
                expected,
                found,
            } => write!(
                f,
                "Pronunciation variant {} stresses syllable {:?}, expected {:?}",
                variant, found, expected
            ),
        }
    }
}

impl std::error::Error for ComoFalaError {}

impl From<reqwest::Error> for ComoFalaError {
    fn from(err: reqwest::Error) -> Self {
        ComoFalaError::RequestFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ComoFalaError {
    fn from(err: serde_json::Error) -> Self {
        ComoFalaError::InvalidResponse(err.to_string())
    }
}

/// Result type for pronunciation operations
pub type ComoFalaResult<T> = Result<T, ComoFalaError>;
