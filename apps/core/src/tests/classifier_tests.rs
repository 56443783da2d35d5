//! Classifier tests: label precedence, negation override, divergence.

use crate::brain::{Label, LabelClassifier, Responder};

fn classifier() -> LabelClassifier {
    LabelClassifier::new()
}

#[cfg(test)]
mod negative_override_tests {
    use super::*;

    #[test]
    fn test_negated_positive_is_sad() {
        let clf = classifier();
        assert_eq!(clf.label_of("not good"), Some(Label::Sad));
        assert_eq!(clf.label_of("okay but not good"), Some(Label::Sad));
        assert_eq!(clf.label_of("it's fine, but actually not"), Some(Label::Sad));
    }

    #[test]
    fn test_override_short_circuits_multi_label() {
        let clf = classifier();
        assert_eq!(
            clf.labels_of("i'm not happy about my exams or my job"),
            vec![Label::Sad]
        );
    }

    #[test]
    fn test_conservative_fallback_is_preserved() {
        // A positive word plus an unrelated negator anywhere in the message
        // still forces Sad. High recall over precision, by contract.
        let clf = classifier();
        assert_eq!(clf.label_of("okay, no rain today"), Some(Label::Sad));
    }

    #[test]
    fn test_plain_positive_is_not_overridden() {
        let clf = classifier();
        assert_eq!(clf.label_of("today was a good day, i'm happy"), Some(Label::Happy));
    }
}

#[cfg(test)]
mod precedence_tests {
    use super::*;

    #[test]
    fn test_income_loss_forces_financial() {
        let clf = classifier();
        assert_eq!(
            clf.label_of("i got fired and my boss didn't even call"),
            Some(Label::Financial)
        );
    }

    #[test]
    fn test_calm_crisis_beats_anxiety() {
        let clf = classifier();
        assert_eq!(
            clf.label_of("i'm having a panic attack and feel anxious"),
            Some(Label::Calm)
        );
    }

    #[test]
    fn test_interpersonal_group_order() {
        let clf = classifier();
        // Family outranks friendship within the identity group.
        assert_eq!(
            clf.label_of("my parents hate my best friend"),
            Some(Label::Family)
        );
        assert_eq!(
            clf.label_of("my best friend and i had a fight"),
            Some(Label::Friendship)
        );
    }

    #[test]
    fn test_career_before_generic_financial() {
        let clf = classifier();
        assert_eq!(
            clf.label_of("work is stressful and i'm broke"),
            Some(Label::Career)
        );
    }

    #[test]
    fn test_hopeless_before_sadness() {
        let clf = classifier();
        assert_eq!(
            clf.label_of("i'm sad and everything feels pointless"),
            Some(Label::Hopeless)
        );
    }

    #[test]
    fn test_emotion_group_order() {
        let clf = classifier();
        assert_eq!(clf.label_of("so sad and stressed"), Some(Label::Sad));
        assert_eq!(clf.label_of("stressed and anxious"), Some(Label::Stress));
        assert_eq!(clf.label_of("anxious and angry"), Some(Label::Anxiety));
    }

    #[test]
    fn test_no_match_is_none() {
        let clf = classifier();
        assert_eq!(clf.label_of("the sky has clouds"), None);
        assert_eq!(clf.label_of(""), None);
    }
}

#[cfg(test)]
mod multi_label_tests {
    use super::*;

    #[test]
    fn test_accumulates_in_scan_order_deduplicated() {
        let clf = classifier();
        let labels = clf.labels_of("my exams are stressing me out and i feel anxious");
        assert_eq!(labels.first(), Some(&Label::Exam));
        assert!(labels.contains(&Label::Anxiety));
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels, deduped);
    }

    #[test]
    fn test_headline_always_member_of_labels() {
        let clf = classifier();
        for text in [
            "i'm lonely and hopeless about money",
            "panic attack at work today",
            "so sad about my breakup",
            "haha nothing at all",
        ] {
            let result = clf.classify(text);
            if let Some(label) = result.label {
                assert!(result.labels.contains(&label), "invariant broken for '{}'", text);
            }
        }
    }
}

#[cfg(test)]
mod divergence_tests {
    use super::*;

    /// The dispatcher and classifier deliberately disagree for overlapping
    /// career/financial phrasing: the reply chain ranks money hardship first,
    /// the label chain ranks career first. Both orders are contracts.
    #[test]
    fn test_career_financial_divergence() {
        let clf = classifier();
        let r = Responder::new();
        let text = "work is stressful and i'm broke";

        assert_eq!(clf.label_of(text), Some(Label::Career));
        assert_eq!(r.matched_rule(text, None), Some("financial_hardship"));
    }

    #[test]
    fn test_divergence_survives_for_income_phrasing() {
        let clf = classifier();
        let r = Responder::new();
        let text = "i lost my job";

        // Here the two chains happen to agree; the point is that each
        // reaches Financial through its own override, not shared code.
        assert_eq!(clf.label_of(text), Some(Label::Financial));
        assert_eq!(r.matched_rule(text, None), Some("financial_hardship"));
    }
}
