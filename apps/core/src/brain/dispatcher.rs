//! Intent dispatching.
//!
//! An ordered rule chain evaluated top to bottom; the first rule that
//! produces a reply wins. The ordering is a contract, not an implementation
//! detail: tests pin it directly, and a reordering here is a behavior change
//! even when every individual rule is untouched.
//!
//! All variant selection is deterministic (`pick_variant` seeded by message
//! length). The storytelling rule is the single sanctioned exception and
//! draws from a fixed template set.

use rand::seq::SliceRandom;
use tracing::debug;

use super::classifier::{exploration_labels, exploration_reply};
use super::matcher::{any_match, word_match};
use super::negation::has_negated_positive;
use super::normalize::{normalize, pick_variant, NormalizedMessage};
use super::tables::*;
use super::techniques::build_techniques_reply;
use crate::models::PersonalizationContext;

/// Everything a rule may look at.
struct DispatchContext<'a> {
    msg: &'a NormalizedMessage,
    negated_positive: bool,
    name: Option<&'a str>,
}

/// One link of the chain. `apply` returns `Some(reply)` to stop evaluation.
struct Rule {
    name: &'static str,
    apply: fn(&DispatchContext) -> Option<String>,
}

/// Expand the optional `{name}` placeholder: ", <name>" or nothing.
fn interpolate_name(template: &str, name: Option<&str>) -> String {
    match name {
        Some(n) => template.replace("{name}", &format!(", {}", n)),
        None => template.replace("{name}", ""),
    }
}

/// First matching entry of a trigger table, in table order.
fn table_reply(lowered: &str, table: &[RuleEntry]) -> Option<&'static str> {
    for entry in table {
        if any_match(lowered, entry.triggers) {
            return Some(entry.reply);
        }
    }
    None
}

/// Rough emoji detection for the storytelling tone gate.
fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            c as u32,
            0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0xFE0F
        )
    })
}

/// Keywords strong enough to disqualify a message from the bare-help and
/// neutral paths: anything a rule-15 block or the financial override owns.
fn has_strong_keyword(lowered: &str) -> bool {
    [
        HOPELESS_KEYWORDS,
        LONELY_KEYWORDS,
        CALM_CRISIS_KEYWORDS,
        SAD_KEYWORDS,
        STRESS_KEYWORDS,
        ANXIETY_KEYWORDS,
        ANGER_KEYWORDS,
        CONFUSION_KEYWORDS,
        OVERTHINKING_KEYWORDS,
        FINANCIAL_KEYWORDS,
        MOTIVATION_KEYWORDS,
    ]
    .iter()
    .any(|list| any_match(lowered, list))
}

// --- Rule bodies, in chain order -------------------------------------------

fn neutral_confirmation(ctx: &DispatchContext) -> Option<String> {
    if ctx.negated_positive || !ctx.msg.is_short {
        return None;
    }
    let stripped = ctx
        .msg
        .lowered
        .trim_end_matches(|c: char| c == '.' || c == '!' || c == ',' || c.is_whitespace());
    if !NEUTRAL_CONFIRMATION_VOCAB.contains(&stripped) {
        return None;
    }
    let idx = pick_variant(ctx.msg.lowered.len(), NEUTRAL_CONFIRMATION_REPLIES.len());
    Some(interpolate_name(NEUTRAL_CONFIRMATION_REPLIES[idx], ctx.name))
}

fn compliment(ctx: &DispatchContext) -> Option<String> {
    if !any_match(&ctx.msg.lowered, COMPLIMENT_TRIGGERS) {
        return None;
    }
    let idx = pick_variant(ctx.msg.lowered.len(), COMPLIMENT_REPLIES.len());
    Some(COMPLIMENT_REPLIES[idx].to_string())
}

fn financial_hardship(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, FINANCIAL_KEYWORDS).then(|| FINANCIAL_REPLY.to_string())
}

fn combined_exploration(ctx: &DispatchContext) -> Option<String> {
    exploration_labels(&ctx.msg.lowered).map(|labels| exploration_reply(&labels))
}

fn greeting(ctx: &DispatchContext) -> Option<String> {
    if !any_match(&ctx.msg.lowered, GREETING_VOCAB) {
        return None;
    }
    let idx = pick_variant(ctx.msg.lowered.len(), GREETING_REPLIES.len());
    Some(interpolate_name(GREETING_REPLIES[idx], ctx.name))
}

fn direct(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, DIRECT_TABLE).map(str::to_string)
}

fn anger_table(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, ANGER_TABLE).map(str::to_string)
}

fn income_loss(ctx: &DispatchContext) -> Option<String> {
    // Forces the financial composite even when career phrasing co-occurs.
    any_match(&ctx.msg.lowered, INCOME_LOSS_KEYWORDS).then(|| FINANCIAL_REPLY.to_string())
}

fn career(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, CAREER_TABLE).map(str::to_string)
}

fn family(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, FAMILY_TABLE).map(str::to_string)
}

fn friendship(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, FRIENDSHIP_TABLE).map(str::to_string)
}

fn breakup(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, BREAKUP_TABLE).map(str::to_string)
}

fn deep_loneliness(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, DEEP_LONELINESS_TABLE).map(str::to_string)
}

fn self_worth(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, SELF_WORTH_TABLE).map(str::to_string)
}

fn study(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, STUDY_TABLE).map(str::to_string)
}

fn social_anxiety(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, SOCIAL_ANXIETY_TABLE).map(str::to_string)
}

fn supportive(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, SUPPORTIVE_TABLE).map(str::to_string)
}

fn negated_positive(ctx: &DispatchContext) -> Option<String> {
    ctx.negated_positive.then(|| NEGATED_POSITIVE_REPLY.to_string())
}

fn negative_mood(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, NEGATIVE_TABLE).map(str::to_string)
}

fn positive_mood(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, POSITIVE_TABLE).map(str::to_string)
}

fn coarse_tone(ctx: &DispatchContext) -> Option<String> {
    let lowered = &ctx.msg.lowered;
    let bare = lowered.trim_end_matches(|c: char| c == '?' || c == '.' || c == '!');
    if bare == "how are you" || bare == "how are you doing" {
        return Some(HOW_ARE_YOU_REPLY.to_string());
    }
    if word_match(lowered, "help") && !has_strong_keyword(lowered) {
        return Some(GROUNDING_BUNDLE_REPLY.to_string());
    }
    if any_match(lowered, COARSE_POSITIVE_SCAN) {
        return Some(COARSE_POSITIVE_REPLY.to_string());
    }
    if any_match(lowered, COARSE_NEGATIVE_SCAN) {
        return Some(COARSE_NEGATIVE_REPLY.to_string());
    }
    if any_match(lowered, COARSE_ANGER_SCAN) {
        return Some(COARSE_ANGER_REPLY.to_string());
    }
    None
}

fn hopelessness(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, HOPELESS_KEYWORDS).then(|| HOPELESS_REPLY.to_string())
}

fn loneliness(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, LONELY_KEYWORDS).then(|| LONELY_REPLY.to_string())
}

fn deep_talk(ctx: &DispatchContext) -> Option<String> {
    let lowered = &ctx.msg.lowered;
    // Betrayal and "harden my heart" get their own branches before the
    // general deep-talk opener.
    if any_match(lowered, BETRAYAL_KEYWORDS) {
        return Some(BETRAYAL_REPLY.to_string());
    }
    if any_match(lowered, HARDEN_KEYWORDS) {
        return Some(HARDEN_REPLY.to_string());
    }
    any_match(lowered, DEEP_TALK_KEYWORDS).then(|| DEEP_TALK_REPLY.to_string())
}

fn financial_narrow(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, NARROW_FINANCIAL_KEYWORDS).then(|| FINANCIAL_REPLY.to_string())
}

fn calm_mode(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, CALM_CRISIS_KEYWORDS).then(|| BREATHING_SCRIPT_REPLY.to_string())
}

fn sadness(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, SAD_KEYWORDS).then(|| SAD_REPLY.to_string())
}

fn stress(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, STRESS_KEYWORDS).then(|| STRESS_REPLY.to_string())
}

fn anxiety(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, ANXIETY_KEYWORDS).then(|| ANXIETY_REPLY.to_string())
}

fn anger_block(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, ANGER_KEYWORDS).then(|| ANGER_BLOCK_REPLY.to_string())
}

fn confusion(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, CONFUSION_KEYWORDS).then(|| CONFUSION_REPLY.to_string())
}

fn overthinking(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, OVERTHINKING_KEYWORDS).then(|| OVERTHINKING_REPLY.to_string())
}

fn celebration(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, HAPPY_KEYWORDS).then(|| CELEBRATION_REPLY.to_string())
}

fn motivation(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, MOTIVATION_KEYWORDS).then(|| MOTIVATION_REPLY.to_string())
}

fn fun_table(ctx: &DispatchContext) -> Option<String> {
    table_reply(&ctx.msg.lowered, FUN_TABLE).map(str::to_string)
}

fn storytelling(ctx: &DispatchContext) -> Option<String> {
    let lowered = &ctx.msg.lowered;
    let excited = lowered.matches('!').count() >= 2;
    if !any_match(lowered, STORY_TONE_MARKERS) && !contains_emoji(&ctx.msg.raw) && !excited {
        return None;
    }
    // The only non-deterministic branch in the pipeline: callers may rely on
    // the reply belonging to the template set, never on its exact text.
    let mut rng = rand::thread_rng();
    let template = STORY_TEMPLATES
        .choose(&mut rng)
        .copied()
        .unwrap_or(STORY_TEMPLATES[0]);
    let followup = STORY_FOLLOWUPS
        .choose(&mut rng)
        .copied()
        .unwrap_or(STORY_FOLLOWUPS[0]);
    Some(format!("{} {}", template, followup))
}

fn misspelling(ctx: &DispatchContext) -> Option<String> {
    for token in &ctx.msg.tokens {
        if let Some((_, correct)) = MISSPELLINGS.iter().find(|(typo, _)| typo == token) {
            return Some(format!(
                "Did you mean '{}'? If so, I'd love to hear more about what's going on. Tell me a little more and we'll sort through it together.",
                correct
            ));
        }
    }
    None
}

fn techniques(ctx: &DispatchContext) -> Option<String> {
    any_match(&ctx.msg.lowered, TECHNIQUES_REQUEST_KEYWORDS)
        .then(|| build_techniques_reply(&ctx.msg.lowered))
}

fn question(ctx: &DispatchContext) -> Option<String> {
    let lowered = &ctx.msg.lowered;
    let head: String = lowered.chars().take(40).collect();
    if lowered.ends_with('?') || any_match(&head, QUESTION_TOKENS) {
        return Some(QUESTION_FALLBACK_REPLY.to_string());
    }
    None
}

fn fallback(_ctx: &DispatchContext) -> Option<String> {
    Some(GENERIC_FALLBACK_REPLY.to_string())
}

/// The reply synthesizer: one ordered chain, first match wins.
pub struct Responder {
    rules: Vec<Rule>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Build the chain in its contractual order.
    pub fn new() -> Self {
        let rules = vec![
            Rule { name: "neutral_confirmation", apply: neutral_confirmation },
            Rule { name: "compliment", apply: compliment },
            Rule { name: "financial_hardship", apply: financial_hardship },
            Rule { name: "combined_exploration", apply: combined_exploration },
            Rule { name: "greeting", apply: greeting },
            Rule { name: "direct", apply: direct },
            Rule { name: "anger_table", apply: anger_table },
            Rule { name: "income_loss", apply: income_loss },
            Rule { name: "career", apply: career },
            Rule { name: "family", apply: family },
            Rule { name: "friendship", apply: friendship },
            Rule { name: "breakup", apply: breakup },
            Rule { name: "deep_loneliness", apply: deep_loneliness },
            Rule { name: "self_worth", apply: self_worth },
            Rule { name: "study", apply: study },
            Rule { name: "social_anxiety", apply: social_anxiety },
            Rule { name: "supportive", apply: supportive },
            Rule { name: "negated_positive", apply: negated_positive },
            Rule { name: "negative_mood", apply: negative_mood },
            Rule { name: "positive_mood", apply: positive_mood },
            Rule { name: "coarse_tone", apply: coarse_tone },
            Rule { name: "hopelessness", apply: hopelessness },
            Rule { name: "loneliness", apply: loneliness },
            Rule { name: "deep_talk", apply: deep_talk },
            Rule { name: "financial_narrow", apply: financial_narrow },
            Rule { name: "calm_mode", apply: calm_mode },
            Rule { name: "sadness", apply: sadness },
            Rule { name: "stress", apply: stress },
            Rule { name: "anxiety", apply: anxiety },
            Rule { name: "anger_block", apply: anger_block },
            Rule { name: "confusion", apply: confusion },
            Rule { name: "overthinking", apply: overthinking },
            Rule { name: "celebration", apply: celebration },
            Rule { name: "motivation", apply: motivation },
            Rule { name: "fun_table", apply: fun_table },
            Rule { name: "storytelling", apply: storytelling },
            Rule { name: "misspelling", apply: misspelling },
            Rule { name: "techniques", apply: techniques },
            Rule { name: "question", apply: question },
            Rule { name: "fallback", apply: fallback },
        ];
        Self { rules }
    }

    /// Synthesize a reply. Empty or whitespace-only input yields the empty
    /// string; everything else resolves to exactly one rule's reply.
    pub fn respond(&self, message: &str, context: Option<&PersonalizationContext>) -> String {
        if message.trim().is_empty() {
            return String::new();
        }

        let msg = normalize(message);
        let ctx = DispatchContext {
            negated_positive: has_negated_positive(&msg.lowered, &msg.tokens),
            name: context.and_then(|c| c.display_name()),
            msg: &msg,
        };

        for rule in &self.rules {
            if let Some(reply) = (rule.apply)(&ctx) {
                debug!(rule = rule.name, "dispatcher matched");
                return reply;
            }
        }

        // The chain ends in an unconditional fallback; this is unreachable
        // for non-empty input.
        GENERIC_FALLBACK_REPLY.to_string()
    }

    /// Name of the rule that would handle `message`; test and debug aid.
    pub fn matched_rule(&self, message: &str, context: Option<&PersonalizationContext>) -> Option<&'static str> {
        if message.trim().is_empty() {
            return None;
        }
        let msg = normalize(message);
        let ctx = DispatchContext {
            negated_positive: has_negated_positive(&msg.lowered, &msg.tokens),
            name: context.and_then(|c| c.display_name()),
            msg: &msg,
        };
        self.rules
            .iter()
            .find(|rule| (rule.apply)(&ctx).is_some())
            .map(|rule| rule.name)
    }
}
