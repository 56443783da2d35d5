//! Negative-modifier override detection.
//!
//! Treats superficially positive wording as negative when a negation marker
//! sits near it ("okay but not good", "it's fine, but actually not"). The
//! scan is windowed, with a conservative anywhere-in-message fallback.
//!
//! Contract: this is deliberately high-recall. A positive word and an
//! unrelated negator anywhere in the same message still trip the override
//! ("okay, no rain today" reads as negative). That trade-off is part of the
//! detector's observable behavior and is pinned by tests; do not narrow it.

use super::matcher::{any_match, word_match};
use super::normalize::clean_token;

/// Positive words the override can flip.
pub const POSITIVE_MARKERS: &[&str] = &[
    "good", "great", "fine", "okay", "ok", "alright", "nice", "happy", "awesome", "amazing",
];

/// Negation markers, single words first, then multiword phrases.
pub const NEGATOR_MARKERS: &[&str] = &[
    "not",
    "no",
    "never",
    "don't",
    "dont",
    "can't",
    "cant",
    "doesn't",
    "doesnt",
    "isn't",
    "isnt",
    "ain't",
    "wasn't",
    "wasnt",
    "not really",
    "actually not",
    "but not",
    "not at all",
    "not exactly",
    "no longer",
];

/// How far (in tokens) a negator may sit from a positive word.
const WINDOW: usize = 4;

fn is_positive(token: &str) -> bool {
    POSITIVE_MARKERS.contains(&token)
}

fn is_negator(token: &str) -> bool {
    NEGATOR_MARKERS.contains(&token)
}

/// Detect a negated positive in an already-normalized message.
///
/// `lowered` is the lowercased text, `tokens` its cleaned token list.
pub fn has_negated_positive(lowered: &str, tokens: &[String]) -> bool {
    // Cheap prefilter on word boundaries before any token walking.
    if !any_match(lowered, POSITIVE_MARKERS) {
        return false;
    }
    if !any_match(lowered, NEGATOR_MARKERS) {
        return false;
    }

    // Windowed scan: a negator within +/-WINDOW tokens of a positive word.
    for (i, token) in tokens.iter().enumerate() {
        if !is_positive(clean_token(token)) {
            continue;
        }
        let lo = i.saturating_sub(WINDOW);
        let hi = (i + WINDOW + 1).min(tokens.len());
        for neighbor in &tokens[lo..hi] {
            if is_negator(clean_token(neighbor)) {
                return true;
            }
        }
        // Multiword negators ("not really") live in the raw text, not in
        // single tokens; check them against the windowed slice joined back.
        let window_text = tokens[lo..hi].join(" ");
        if NEGATOR_MARKERS
            .iter()
            .filter(|n| n.contains(' '))
            .any(|n| word_match(&window_text, n))
        {
            return true;
        }
    }

    // Conservative fallback: both a positive and a negator occur somewhere in
    // the message, even outside each other's window.
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::normalize::normalize;

    fn detect(text: &str) -> bool {
        let msg = normalize(text);
        has_negated_positive(&msg.lowered, &msg.tokens)
    }

    #[test]
    fn test_plain_negated_positive() {
        assert!(detect("not good"));
        assert!(detect("okay but not good"));
        assert!(detect("it's fine, but actually not"));
    }

    #[test]
    fn test_positive_without_negator() {
        assert!(!detect("today was really good"));
        assert!(!detect("i feel great"));
    }

    #[test]
    fn test_negator_without_positive() {
        assert!(!detect("i don't want to talk"));
        assert!(!detect("never again"));
    }

    #[test]
    fn test_curly_apostrophe_negator() {
        assert!(detect("I\u{2019}m not okay"));
    }

    #[test]
    fn test_conservative_fallback_fires_outside_window() {
        // The negator sits well outside the 4-token window of "good" yet the
        // override still fires: high recall over precision, by contract.
        assert!(detect(
            "the weather was good this morning on my walk although later there was no bus"
        ));
    }
}
