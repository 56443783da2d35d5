//! Word-boundary trigger matching.
//!
//! All trigger matching goes through here: a trigger phrase matches only on
//! word boundaries, never as a raw substring ("mad" must not match inside
//! "made"). Patterns are built from escaped trigger text and cached
//! process-wide; if a pattern ever fails to compile, that single entry falls
//! back to substring containment rather than aborting the pipeline.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use tracing::warn;

/// Compiled patterns keyed by trigger phrase. `None` records a compile
/// failure so the substring fallback is reused without retrying.
static PATTERN_CACHE: LazyLock<Mutex<HashMap<String, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn compile(trigger: &str) -> Option<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(trigger));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Trigger pattern failed to compile, using containment: {}", e);
            None
        }
    }
}

/// Does `text` contain `trigger` on word boundaries?
///
/// `text` is expected to be lowercased already; triggers are stored
/// lowercased in the rule tables.
pub fn word_match(text: &str, trigger: &str) -> bool {
    let mut cache = match PATTERN_CACHE.lock() {
        Ok(guard) => guard,
        // A poisoned cache only loses memoization; match without it.
        Err(poisoned) => poisoned.into_inner(),
    };
    let entry = cache
        .entry(trigger.to_string())
        .or_insert_with(|| compile(trigger));

    match entry {
        Some(re) => re.is_match(text),
        None => text.contains(trigger),
    }
}

/// First trigger from `triggers` that matches `text`, in table order.
pub fn first_match<'a>(text: &str, triggers: &[&'a str]) -> Option<&'a str> {
    triggers.iter().copied().find(|t| word_match(text, t))
}

/// Does any trigger from `triggers` match `text`?
pub fn any_match(text: &str, triggers: &[&str]) -> bool {
    first_match(text, triggers).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_matching() {
        assert!(word_match("i am so mad right now", "mad"));
        assert!(!word_match("i made dinner", "mad"));
    }

    #[test]
    fn test_phrase_matching() {
        assert!(word_match("can you help me with this", "help me with"));
        assert!(!word_match("helpless", "help"));
    }

    #[test]
    fn test_apostrophe_triggers() {
        assert!(word_match("i don't have money", "don't"));
        assert!(word_match("it can't wait", "can't"));
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        // A trigger containing regex metacharacters must match literally.
        assert!(word_match("what is a+b here", "a+b"));
        assert!(!word_match("aab", "a+b"));
    }

    #[test]
    fn test_first_match_respects_order() {
        let triggers = ["alone", "lonely"];
        assert_eq!(
            first_match("i feel lonely and alone", &triggers),
            Some("alone")
        );
    }
}
