use once_cell::sync::Lazy;
use regex::Regex;

// @module: Title cleanup

// @const: Broadcast noise words, whole word, any case
static NOISE_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:LIVE|NEW|REPEAT)\b").expect("Invalid noise word regex")
});

/// Whether the title carries LIVE/NEW/REPEAT as a whole word
pub fn contains_noise_words(title: &str) -> bool {
    NOISE_WORD_REGEX.is_match(title)
}

/// Strip noise words and colons, then collapse whitespace.
///
/// Colons become spaces rather than vanishing, so stripping them can never
/// join two fragments into a new noise word. That keeps the function
/// idempotent.
pub fn clean_title(title: &str) -> String {
    let without_colons = title.replace(':', " ");
    let stripped = NOISE_WORD_REGEX.replace_all(&without_colons, " ");
    collapse_whitespace(&stripped)
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
