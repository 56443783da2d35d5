//! Label classification, independent of reply generation.
//!
//! The classifier walks its own precedence chain over the shared keyword
//! registry. It deliberately diverges from the dispatcher's ordering for
//! overlapping categories (career-phrased money trouble can get a career
//! reply with a `financial` label); both orders are contracts of their own.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::labels::Label;
use super::matcher::{any_match, first_match};
use super::negation::{has_negated_positive, POSITIVE_MARKERS};
use super::normalize::{normalize, NormalizedMessage};
use super::tables::{
    RuleEntry, ANGER_KEYWORDS, ANXIETY_KEYWORDS, BREAKUP_TABLE, CALM_CRISIS_KEYWORDS,
    CAREER_TABLE, CONFUSION_KEYWORDS, DEEP_LONELINESS_TABLE, EXPLORATION_PATTERNS, FAMILY_TABLE,
    FINANCIAL_KEYWORDS, FRIENDSHIP_TABLE, FUN_TABLE, HAPPY_KEYWORDS, HOPELESS_KEYWORDS,
    INCOME_LOSS_KEYWORDS, LONELY_KEYWORDS, MOTIVATION_KEYWORDS, OVERTHINKING_KEYWORDS,
    SAD_KEYWORDS, SELF_WORTH_TABLE, SOCIAL_ANXIETY_TABLE, STRESS_KEYWORDS, STUDY_TABLE,
};
use crate::models::MatchedRule;

/// Classification output: the single headline label, every matching label,
/// and the category/trigger that produced the headline.
///
/// Invariant: when `label` is `Some`, it is always a member of `labels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Original message text.
    pub text: String,
    /// Headline label from the single-label precedence chain.
    pub label: Option<Label>,
    /// Every matching label, first-match order, de-duplicated.
    pub labels: Vec<Label>,
    /// The category and trigger behind the headline label.
    pub matched: Option<MatchedRule>,
}

/// One step of the single-label precedence chain.
struct CategoryProbe {
    label: Label,
    category: &'static str,
    /// Keyword lists checked on word boundaries, in order.
    keywords: &'static [&'static str],
    /// Trigger tables whose triggers also activate this category.
    tables: &'static [&'static [RuleEntry]],
}

/// Classifier-side broadening of some categories beyond the block keywords.
const CAREER_PROBE_KEYWORDS: &[&str] = &[
    "job", "work", "career", "boss", "manager", "interview", "deadline", "office", "promotion",
    "workplace", "colleague", "coworker",
];

const FRIENDSHIP_PROBE_KEYWORDS: &[&str] = &["friend", "friends", "friendship", "bestie"];

const FAMILY_PROBE_KEYWORDS: &[&str] = &["family", "parents", "mom", "dad", "sibling"];

const BREAKUP_PROBE_KEYWORDS: &[&str] =
    &["breakup", "broke up", "break up", "heartbreak", "my ex", "dumped"];

const EXAM_PROBE_KEYWORDS: &[&str] = &["exam", "exams", "grades", "marks", "studying", "syllabus"];

const SOCIAL_ANXIETY_PROBE_KEYWORDS: &[&str] =
    &["social anxiety", "public speaking", "stage fright"];

const SELF_WORTH_PROBE_KEYWORDS: &[&str] =
    &["worthless", "useless", "hate myself", "not good enough"];

const HAPPY_PROBE_KEYWORDS: &[&str] = &["glad", "joy", "excited", "proud", "grateful"];

const FUN_PROBE_KEYWORDS: &[&str] = &["joke", "game", "bored", "fun fact", "play"];

/// The single-label precedence chain after the overrides. Hopelessness sits
/// just before the sadness group so "i feel hopeless" resolves to its own
/// label rather than generic sadness.
const PROBES: &[CategoryProbe] = &[
    CategoryProbe {
        label: Label::Calm,
        category: "calm",
        keywords: CALM_CRISIS_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Family,
        category: "family",
        keywords: FAMILY_PROBE_KEYWORDS,
        tables: &[FAMILY_TABLE],
    },
    CategoryProbe {
        label: Label::Friendship,
        category: "friendship",
        keywords: FRIENDSHIP_PROBE_KEYWORDS,
        tables: &[FRIENDSHIP_TABLE],
    },
    CategoryProbe {
        label: Label::Breakup,
        category: "breakup",
        keywords: BREAKUP_PROBE_KEYWORDS,
        tables: &[BREAKUP_TABLE],
    },
    CategoryProbe {
        label: Label::Lonely,
        category: "deep_loneliness",
        keywords: LONELY_KEYWORDS,
        tables: &[DEEP_LONELINESS_TABLE],
    },
    CategoryProbe {
        label: Label::SelfWorth,
        category: "self_worth",
        keywords: SELF_WORTH_PROBE_KEYWORDS,
        tables: &[SELF_WORTH_TABLE],
    },
    CategoryProbe {
        label: Label::Exam,
        category: "study",
        keywords: EXAM_PROBE_KEYWORDS,
        tables: &[STUDY_TABLE],
    },
    CategoryProbe {
        label: Label::SocialAnxiety,
        category: "social_anxiety",
        keywords: SOCIAL_ANXIETY_PROBE_KEYWORDS,
        tables: &[SOCIAL_ANXIETY_TABLE],
    },
    CategoryProbe {
        label: Label::Career,
        category: "career",
        keywords: CAREER_PROBE_KEYWORDS,
        tables: &[CAREER_TABLE],
    },
    CategoryProbe {
        label: Label::Financial,
        category: "financial",
        keywords: FINANCIAL_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Hopeless,
        category: "hopelessness",
        keywords: HOPELESS_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Sad,
        category: "sadness",
        keywords: SAD_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Stress,
        category: "stress",
        keywords: STRESS_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Anxiety,
        category: "anxiety",
        keywords: ANXIETY_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Anger,
        category: "anger",
        keywords: ANGER_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Confusion,
        category: "confusion",
        keywords: CONFUSION_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Overthinking,
        category: "overthinking",
        keywords: OVERTHINKING_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Happy,
        category: "happiness",
        keywords: HAPPY_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Happy,
        category: "happiness",
        keywords: HAPPY_PROBE_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Motivation,
        category: "motivation",
        keywords: MOTIVATION_KEYWORDS,
        tables: &[],
    },
    CategoryProbe {
        label: Label::Fun,
        category: "fun",
        keywords: FUN_PROBE_KEYWORDS,
        tables: &[FUN_TABLE],
    },
];

/// Find the first trigger in `probe` matching `lowered`.
fn probe_match(lowered: &str, probe: &CategoryProbe) -> Option<&'static str> {
    if let Some(trigger) = first_match(lowered, probe.keywords) {
        return Some(trigger);
    }
    for table in probe.tables {
        for entry in table.iter() {
            if let Some(trigger) = first_match(lowered, entry.triggers) {
                return Some(trigger);
            }
        }
    }
    None
}

/// Independent single- and multi-label categorization over the rule registry.
pub struct LabelClassifier;

impl Default for LabelClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Single-label precedence classification with matched-trigger
    /// introspection. Never fails on well-formed input; `None` means no
    /// category matched.
    pub fn classify(&self, message: &str) -> DetectionResult {
        let msg = normalize(message);
        let (label, matched) = self.headline(&msg);
        let mut labels = self.labels_inner(&msg);

        // label, when set, is always a member of labels.
        if let Some(l) = label {
            if !labels.contains(&l) {
                labels.insert(0, l);
            }
        }

        DetectionResult {
            text: message.to_string(),
            label,
            labels,
            matched,
        }
    }

    /// Headline label only.
    pub fn label_of(&self, message: &str) -> Option<Label> {
        let msg = normalize(message);
        self.headline(&msg).0
    }

    /// Every matching label, first-match order, de-duplicated.
    pub fn labels_of(&self, message: &str) -> Vec<Label> {
        let msg = normalize(message);
        let mut labels = self.labels_inner(&msg);
        if let Some(l) = self.headline(&msg).0 {
            if !labels.contains(&l) {
                labels.insert(0, l);
            }
        }
        labels
    }

    fn headline(&self, msg: &NormalizedMessage) -> (Option<Label>, Option<MatchedRule>) {
        if msg.lowered.is_empty() {
            return (None, None);
        }

        // Negated positives override everything.
        if has_negated_positive(&msg.lowered, &msg.tokens) {
            let trigger = first_match(&msg.lowered, POSITIVE_MARKERS).unwrap_or("not");
            return (
                Some(Label::Sad),
                Some(MatchedRule {
                    category: "negative_override".to_string(),
                    trigger: trigger.to_string(),
                }),
            );
        }

        // Explicit income loss outranks every topical category.
        if let Some(trigger) = first_match(&msg.lowered, INCOME_LOSS_KEYWORDS) {
            return (
                Some(Label::Financial),
                Some(MatchedRule {
                    category: "income_loss".to_string(),
                    trigger: trigger.to_string(),
                }),
            );
        }

        for probe in PROBES {
            if let Some(trigger) = probe_match(&msg.lowered, probe) {
                debug!(category = probe.category, trigger, "label matched");
                return (
                    Some(probe.label),
                    Some(MatchedRule {
                        category: probe.category.to_string(),
                        trigger: trigger.to_string(),
                    }),
                );
            }
        }

        (None, None)
    }

    fn labels_inner(&self, msg: &NormalizedMessage) -> Vec<Label> {
        if msg.lowered.is_empty() {
            return Vec::new();
        }

        // The override short-circuits the multi-label scan entirely.
        if has_negated_positive(&msg.lowered, &msg.tokens) {
            return vec![Label::Sad];
        }

        let mut labels = Vec::new();
        if any_match(&msg.lowered, INCOME_LOSS_KEYWORDS) {
            labels.push(Label::Financial);
        }
        for probe in PROBES {
            if probe_match(&msg.lowered, probe).is_some() && !labels.contains(&probe.label) {
                labels.push(probe.label);
            }
        }
        labels
    }
}

/// The six categories the exploration combiner looks at, in report order.
const EXPLORATION_CATEGORIES: &[(Label, &[&str])] = &[
    (Label::Anger, ANGER_KEYWORDS),
    (Label::Overthinking, OVERTHINKING_KEYWORDS),
    (Label::Stress, STRESS_KEYWORDS),
    (Label::Sad, SAD_KEYWORDS),
    (Label::Anxiety, ANXIETY_KEYWORDS),
    (Label::Lonely, LONELY_KEYWORDS),
];

/// Multi-label exploration extraction: when at least two emotional
/// categories co-occur with an exploration phrase ("work on", "fix", ...),
/// the dispatcher short-circuits with a combined reply.
pub fn exploration_labels(lowered: &str) -> Option<Vec<Label>> {
    if !any_match(lowered, EXPLORATION_PATTERNS) {
        return None;
    }
    let matched: Vec<Label> = EXPLORATION_CATEGORIES
        .iter()
        .filter(|(_, keywords)| any_match(lowered, keywords))
        .map(|(label, _)| *label)
        .collect();
    if matched.len() >= 2 {
        Some(matched)
    } else {
        None
    }
}

/// The combined "which feels heavier" reply for 2+ matched categories.
pub fn exploration_reply(labels: &[Label]) -> String {
    let names: Vec<&str> = labels.iter().map(|l| l.display_name()).collect();
    let joined = match names.len() {
        0 | 1 => names.first().copied().unwrap_or("These feelings").to_string(),
        2 => format!("{} and {}", names[0], names[1]),
        _ => format!(
            "{} and {}",
            names[..names.len() - 1].join(", "),
            names[names.len() - 1]
        ),
    };
    format!(
        "{} can interact and feed each other, so it makes sense this feels tangled. We can absolutely work on it together, one strand at a time. Which of them feels heavier right now?",
        joined
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negated_positive_forces_sad() {
        let clf = LabelClassifier::new();
        assert_eq!(clf.label_of("not good"), Some(Label::Sad));
        assert_eq!(clf.label_of("okay but not good"), Some(Label::Sad));
        assert_eq!(clf.label_of("it's fine, but actually not"), Some(Label::Sad));
    }

    #[test]
    fn test_multi_label_short_circuit_on_override() {
        let clf = LabelClassifier::new();
        assert_eq!(clf.labels_of("not happy about my job"), vec![Label::Sad]);
    }

    #[test]
    fn test_income_loss_outranks_career() {
        let clf = LabelClassifier::new();
        assert_eq!(clf.label_of("i lost my job last week"), Some(Label::Financial));
    }

    #[test]
    fn test_interpersonal_before_emotions() {
        let clf = LabelClassifier::new();
        assert_eq!(
            clf.label_of("i had a breakup and i am so sad"),
            Some(Label::Breakup)
        );
    }

    #[test]
    fn test_headline_is_member_of_labels() {
        let clf = LabelClassifier::new();
        for text in [
            "i am stressed about money and my exams",
            "i feel hopeless and alone",
            "work is fine but i can't stop overthinking",
            "tell me a joke",
        ] {
            let result = clf.classify(text);
            if let Some(label) = result.label {
                assert!(
                    result.labels.contains(&label),
                    "headline {:?} missing from labels {:?} for '{}'",
                    label,
                    result.labels,
                    text
                );
            }
        }
    }

    #[test]
    fn test_empty_input_yields_none() {
        let clf = LabelClassifier::new();
        assert_eq!(clf.label_of(""), None);
        assert!(clf.labels_of("   ").is_empty());
        let result = clf.classify("");
        assert!(result.label.is_none());
        assert!(result.matched.is_none());
    }

    #[test]
    fn test_exploration_requires_two_categories_and_pattern() {
        assert!(exploration_labels("help me with my stress and overthinking").is_some());
        assert!(exploration_labels("my stress and overthinking are bad").is_none());
        assert!(exploration_labels("help me with my stress").is_none());
    }

    #[test]
    fn test_exploration_reply_names_categories() {
        let labels = vec![Label::Stress, Label::Overthinking];
        let reply = exploration_reply(&labels);
        assert!(reply.contains("Stress and Overthinking"));
        assert!(reply.contains("heavier"));
    }
}
