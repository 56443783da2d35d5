//! Input normalization.
//!
//! Lowercasing, curly-quote folding, tokenization, and the short-message
//! gate that controls Neutral Confirmation Mode. The original content is
//! preserved untouched for echoing in replies and summaries.

/// A message is "short" at or below this many characters.
const SHORT_CHAR_LIMIT: usize = 12;

/// A message is "short" at or below this many whitespace-delimited words.
const SHORT_WORD_LIMIT: usize = 2;

/// A message after normalization. `raw` keeps the original content.
#[derive(Debug, Clone)]
pub struct NormalizedMessage {
    /// Original content, untouched.
    pub raw: String,
    /// Lowercased content with curly quotes folded to straight ones.
    pub lowered: String,
    /// Whitespace-delimited tokens of `lowered`, stripped of surrounding
    /// punctuation (apostrophes inside words survive: "don't").
    pub tokens: Vec<String>,
    /// Short-message gate; controls Neutral Confirmation Mode only.
    pub is_short: bool,
}

/// Fold curly quotes into their straight equivalents.
fn fold_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Strip surrounding punctuation from a token, keeping inner apostrophes.
pub fn clean_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
}

/// Normalize a raw message for rule evaluation.
pub fn normalize(raw: &str) -> NormalizedMessage {
    let lowered = fold_quotes(raw).to_lowercase();
    let trimmed = lowered.trim();

    let tokens: Vec<String> = trimmed
        .split_whitespace()
        .map(|t| clean_token(t).to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let is_short = trimmed.chars().count() <= SHORT_CHAR_LIMIT || tokens.len() <= SHORT_WORD_LIMIT;

    NormalizedMessage {
        raw: raw.to_string(),
        lowered: trimmed.to_string(),
        tokens,
        is_short,
    }
}

/// The single deterministic variant selector.
///
/// Every place that needs a "random-feeling" pick uses this, seeded by the
/// normalized message length, so identical input always yields the identical
/// reply. Returns 0 for an empty variant set.
pub fn pick_variant(seed: usize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    seed % n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_quote_folding() {
        let msg = normalize("It\u{2019}s \u{201C}FINE\u{201D}");
        assert_eq!(msg.lowered, "it's \"fine\"");
        assert_eq!(msg.raw, "It\u{2019}s \u{201C}FINE\u{201D}");
    }

    #[test]
    fn test_short_gate_by_chars() {
        assert!(normalize("ok").is_short);
        assert!(normalize("got it").is_short);
        assert!(!normalize("this is a much longer message").is_short);
    }

    #[test]
    fn test_short_gate_by_words() {
        // Two words but over the char limit is still short.
        assert!(normalize("absolutely wonderful").is_short);
    }

    #[test]
    fn test_tokens_keep_inner_apostrophes() {
        let msg = normalize("I don't know, really...");
        assert_eq!(msg.tokens, vec!["i", "don't", "know", "really"]);
    }

    #[test]
    fn test_pick_variant_is_stable() {
        assert_eq!(pick_variant(7, 3), 1);
        assert_eq!(pick_variant(7, 3), pick_variant(7, 3));
        assert_eq!(pick_variant(5, 0), 0);
    }
}
