use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // maximal runs of word characters: letters, digits, underscore
    static ref WORD: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Split raw text into word tokens.
///
/// Everything that is not a word character (punctuation, whitespace) acts as
/// a separator and is discarded. Any input is valid; the empty string yields
/// no tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}
