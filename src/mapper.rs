//! Word mappers: pluggable token normalization applied before counting.

/// Normalizes a token before it is counted and entered into the dictionary.
///
/// Implementations may return an empty string to drop a token entirely; the
/// vectorizer skips empty mapped terms.
pub trait WordMapper {
    fn map(&self, token: &str) -> String;
}

/// Pass-through mapper; the default when no mapper is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl WordMapper for Identity {
    fn map(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Lowercases tokens so that "Document" and "document" share a dimension.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseInsensitive;

impl WordMapper for CaseInsensitive {
    fn map(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

/// Strips ASCII punctuation from tokens.
///
/// The word tokenizer already discards punctuation between tokens; this
/// mapper exists for callers feeding pre-split tokens or composing mappers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPunctuation;

impl WordMapper for NoPunctuation {
    fn map(&self, token: &str) -> String {
        token.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }
}
