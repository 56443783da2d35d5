//! Canonical emotion/topic labels.
//!
//! A closed enum replaces the free-form label strings of earlier detector
//! generations. Display strings and the legacy counter keys (which carried a
//! few synonyms, e.g. "angry" for anger) live behind explicit mappings so a
//! typo can no longer mint a new label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical tag summarizing a message's category, independent of reply text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Sad,
    Happy,
    Anger,
    Anxiety,
    Stress,
    Lonely,
    Hopeless,
    Confusion,
    Overthinking,
    Motivation,
    Calm,
    Financial,
    Career,
    Family,
    Friendship,
    Breakup,
    SelfWorth,
    Exam,
    SocialAnxiety,
    Fun,
}

impl Label {
    /// Every label, in a stable order.
    pub const ALL: &'static [Label] = &[
        Label::Sad,
        Label::Happy,
        Label::Anger,
        Label::Anxiety,
        Label::Stress,
        Label::Lonely,
        Label::Hopeless,
        Label::Confusion,
        Label::Overthinking,
        Label::Motivation,
        Label::Calm,
        Label::Financial,
        Label::Career,
        Label::Family,
        Label::Friendship,
        Label::Breakup,
        Label::SelfWorth,
        Label::Exam,
        Label::SocialAnxiety,
        Label::Fun,
    ];

    /// Returns the human-readable label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Sad => "sad",
            Label::Happy => "happy",
            Label::Anger => "anger",
            Label::Anxiety => "anxiety",
            Label::Stress => "stress",
            Label::Lonely => "lonely",
            Label::Hopeless => "hopeless",
            Label::Confusion => "confusion",
            Label::Overthinking => "overthinking",
            Label::Motivation => "motivation",
            Label::Calm => "calm",
            Label::Financial => "financial",
            Label::Career => "career",
            Label::Family => "family",
            Label::Friendship => "friendship",
            Label::Breakup => "breakup",
            Label::SelfWorth => "self_worth",
            Label::Exam => "exam",
            Label::SocialAnxiety => "social_anxiety",
            Label::Fun => "fun",
        }
    }

    /// Key used in persisted `emotion_counts` maps.
    ///
    /// Historical data counted a few labels under synonym keys; the mapping is
    /// kept so old counters keep accumulating instead of forking.
    pub fn count_key(&self) -> &'static str {
        match self {
            Label::Anger => "angry",
            Label::Confusion => "confused",
            Label::Anxiety => "anxious",
            Label::Stress => "stressed",
            other => other.as_str(),
        }
    }

    /// Title-case display name for user-facing summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Sad => "Sadness",
            Label::Happy => "Happiness",
            Label::Anger => "Anger",
            Label::Anxiety => "Anxiety",
            Label::Stress => "Stress",
            Label::Lonely => "Loneliness",
            Label::Hopeless => "Hopelessness",
            Label::Confusion => "Confusion",
            Label::Overthinking => "Overthinking",
            Label::Motivation => "Motivation",
            Label::Calm => "Calm",
            Label::Financial => "Financial stress",
            Label::Career => "Career",
            Label::Family => "Family",
            Label::Friendship => "Friendship",
            Label::Breakup => "Breakup",
            Label::SelfWorth => "Self-worth",
            Label::Exam => "Study pressure",
            Label::SocialAnxiety => "Social anxiety",
            Label::Fun => "Fun",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_key_synonyms() {
        assert_eq!(Label::Anger.count_key(), "angry");
        assert_eq!(Label::Confusion.count_key(), "confused");
        assert_eq!(Label::Sad.count_key(), "sad");
        assert_eq!(Label::Financial.count_key(), "financial");
    }

    #[test]
    fn test_serde_round_trip() {
        for label in Label::ALL {
            let json = serde_json::to_string(label).expect("serialize label");
            let back: Label = serde_json::from_str(&json).expect("deserialize label");
            assert_eq!(*label, back);
        }
    }

    #[test]
    fn test_all_is_exhaustive() {
        // A new variant must be added to ALL; the count is pinned here so the
        // mismatch shows up in review.
        assert_eq!(Label::ALL.len(), 20);
    }
}
