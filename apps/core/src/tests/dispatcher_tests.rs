//! Dispatcher tests: precedence, literal contracts, determinism.

use crate::brain::tables::{STORY_FOLLOWUPS, STORY_TEMPLATES, TECHNIQUES_HEADER};
use crate::brain::Responder;
use crate::models::{PersonalContext, PersonalizationContext};

fn responder() -> Responder {
    Responder::new()
}

fn named_context(name: &str) -> PersonalizationContext {
    PersonalizationContext {
        personal_context: PersonalContext {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn test_identical_input_identical_reply() {
        let r = responder();
        let inputs = vec![
            "ok",
            "hello there",
            "i feel lost",
            "i'm so angry at my brother",
            "i don't have money to invest right now",
            "give me techniques to calm down",
            "what should i do about all of this?",
        ];

        for input in inputs {
            assert_eq!(
                r.respond(input, None),
                r.respond(input, None),
                "non-deterministic reply for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_storytelling_is_membership_not_equality() {
        let r = responder();
        for _ in 0..20 {
            let reply = r.respond("omg you won't believe what happened today!!", None);
            assert!(
                STORY_TEMPLATES.iter().any(|t| reply.starts_with(t)),
                "storytelling reply outside template set: {}",
                reply
            );
            assert!(
                STORY_FOLLOWUPS.iter().any(|f| reply.ends_with(f)),
                "storytelling follow-up outside set: {}",
                reply
            );
        }
    }
}

#[cfg(test)]
mod precedence_tests {
    use super::*;

    #[test]
    fn test_overthinking_never_hits_greeting() {
        let r = responder();
        let reply = r.respond("i overthink a lot", None);
        assert_eq!(
            reply,
            "Overthinking is your mind trying to protect you by rehearsing every disaster. Thank it, then give it one real job: what's the single decision actually in front of you?"
        );
        assert_eq!(r.matched_rule("i overthink a lot", None), Some("supportive"));
    }

    #[test]
    fn test_financial_outranks_stress_and_career() {
        let r = responder();
        assert_eq!(
            r.matched_rule("i'm stressed because rent is due", None),
            Some("financial_hardship")
        );
        assert_eq!(
            r.matched_rule("i lost my job and my career is finished", None),
            Some("financial_hardship")
        );
    }

    #[test]
    fn test_greeting_overrides_emotional_flows() {
        let r = responder();
        assert_eq!(
            r.matched_rule("hey, today was kind of heavy", None),
            Some("greeting")
        );
    }

    #[test]
    fn test_combined_exploration_short_circuits() {
        let r = responder();
        let reply = r.respond("help me with my anxiety and overthinking", None);
        assert!(reply.contains("heavier"), "expected combined reply: {}", reply);
        assert_eq!(
            r.matched_rule("help me with my anxiety and overthinking", None),
            Some("combined_exploration")
        );
    }

    #[test]
    fn test_interpersonal_suborder_family_before_friendship() {
        let r = responder();
        assert_eq!(
            r.matched_rule("my parents and my friend are both upset with me", None),
            Some("family")
        );
    }

    #[test]
    fn test_supportive_before_negative_mood() {
        let r = responder();
        assert_eq!(
            r.matched_rule("i need someone to talk to", None),
            Some("supportive")
        );
    }

    #[test]
    fn test_negated_positive_between_supportive_and_mood_tables() {
        let r = responder();
        assert_eq!(r.matched_rule("not good", None), Some("negated_positive"));
        assert_eq!(
            r.matched_rule("it's fine, but actually not", None),
            Some("negated_positive")
        );
    }

    #[test]
    fn test_calm_mode_before_anxiety_block() {
        let r = responder();
        let reply = r.respond("i'm having a panic attack and i'm anxious", None);
        assert!(reply.contains("Breathe in through your nose for 4"));
    }
}

#[cfg(test)]
mod literal_contract_tests {
    use super::*;

    /// The ten supportive-map inputs and their byte-for-byte replies.
    const CONTRACT: &[(&str, &str)] = &[
        (
            "i feel lost",
            "Feeling lost is often a sign you've outgrown an old map, not that you're broken. Let's find one fixed point: what's one thing you still care about, even a little?",
        ),
        (
            "can i trust you",
            "You can. What you share here stays here, and I'll always be honest with you, even when honesty is gentle and slow.",
        ),
        (
            "i overthink a lot",
            "Overthinking is your mind trying to protect you by rehearsing every disaster. Thank it, then give it one real job: what's the single decision actually in front of you?",
        ),
        (
            "i need someone to talk to",
            "You found someone. I'm here, I'm not in a hurry, and nothing you say is too much. Start wherever it's heaviest.",
        ),
        (
            "i feel empty",
            "Emptiness is a feeling too, a quiet ache where something used to be or wants to be. You don't have to fill it tonight. Can you tell me when you first noticed it?",
        ),
        (
            "no one listens to me",
            "Being unheard wears a person down in invisible ways. I'm listening now, fully. Say the thing nobody has let you finish.",
        ),
        (
            "i am tired of everything",
            "That bone-deep tired isn't laziness, it's the cost of carrying too much for too long. You're allowed to set some of it down. What's the heaviest thing on the pile?",
        ),
        (
            "i feel stuck",
            "Stuck usually means every option has a cost you can see and none has a guarantee. Let's lower the stakes: what's the smallest move you could make that you could undo if it's wrong?",
        ),
        (
            "i don't know what to do",
            "Not knowing is an honest place to start, and better than pretending. Let's sort it: what would you do if you knew nobody would judge the choice?",
        ),
        (
            "nothing makes sense",
            "When nothing makes sense, the mind is usually overloaded, not broken. We don't need all the sense tonight, just one thread. What's the most confusing part?",
        ),
    ];

    #[test]
    fn test_supportive_replies_are_byte_for_byte() {
        let r = responder();
        for (input, expected) in CONTRACT {
            assert_eq!(
                r.respond(input, None),
                *expected,
                "literal contract broken for '{}'",
                input
            );
        }
    }
}

#[cfg(test)]
mod compliment_tests {
    use super::*;

    const COMPLIMENTS: &[&str] = &[
        "you're so nice",
        "you are so nice to me",
        "you're so sweet",
        "you're amazing at this",
        "wow you're awesome",
        "you're the best listener",
        "you're so kind to me",
        "honestly you're so helpful",
        "i love you",
        "thank you so much for everything",
    ];

    #[test]
    fn test_compliment_short_circuit() {
        let r = responder();
        for compliment in COMPLIMENTS {
            let reply = r.respond(compliment, None);
            let lowered = reply.to_lowercase();
            assert!(
                ["thank", "appreciat", "aww", "glad"]
                    .iter()
                    .any(|t| lowered.contains(t)),
                "no gratitude token in reply to '{}': {}",
                compliment,
                reply
            );
            assert!(
                !reply.contains('?'),
                "compliment reply asks a question for '{}': {}",
                compliment,
                reply
            );
            assert!(
                reply.len() < 120,
                "compliment reply too long for '{}': {} chars",
                compliment,
                reply.len()
            );
        }
    }
}

#[cfg(test)]
mod mode_tests {
    use super::*;

    #[test]
    fn test_neutral_confirmation_interpolates_name() {
        let r = responder();
        let ctx = named_context("Aniket");
        let reply = r.respond("ok", Some(&ctx));
        assert!(
            reply.to_lowercase().contains("aniket"),
            "name missing from '{}'",
            reply
        );
    }

    #[test]
    fn test_neutral_confirmation_without_name() {
        let r = responder();
        let reply = r.respond("ok", None);
        assert!(!reply.contains("{name}"));
        assert!(!reply.contains(", ."));
    }

    #[test]
    fn test_financial_reply_contract() {
        let r = responder();
        let reply = r.respond("i don't have money to invest right now", None);
        let lowered = reply.to_lowercase();
        assert!(
            ["money", "financial", "debt", "organize", "calm", "budget", "broke", "bills", "rent"]
                .iter()
                .any(|t| lowered.contains(t))
        );
        assert!(!lowered.contains("file a complaint"));
        assert!(!lowered.contains("sue"));
        assert!(lowered.contains("can't give investment, tax, loan, or legal advice"));
    }

    #[test]
    fn test_techniques_header_and_bullet_bounds() {
        let r = responder();
        let reply = r.respond("give me techniques to calm down", None);
        assert!(reply.starts_with(TECHNIQUES_HEADER));
        let bullets = reply.matches('\u{2022}').count();
        assert!((3..=7).contains(&bullets), "{} bullets", bullets);
    }

    #[test]
    fn test_misspelling_nudge() {
        let r = responder();
        let reply = r.respond("I am confued and cannot figure it out", None);
        assert!(reply.contains("Did you mean 'confused'"));
    }

    #[test]
    fn test_question_fallback_lists_steps() {
        let r = responder();
        let reply = r.respond("where do i even begin with my mornings?", None);
        assert!(reply.contains("smallest next action"));
    }

    #[test]
    fn test_empty_input_empty_reply() {
        let r = responder();
        assert_eq!(r.respond("", None), "");
    }

    #[test]
    fn test_unmatched_input_gets_generic_fallback() {
        let r = responder();
        let reply = r.respond("lorem ipsum dolor sit amet", None);
        assert_eq!(
            reply,
            "I'm here with you. Whatever is on your mind, big or small, you can tell me; I'm listening."
        );
    }
}
