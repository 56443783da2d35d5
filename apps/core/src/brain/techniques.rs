//! Categorized technique library.
//!
//! Backs Techniques-Request Mode: a header plus a bullet list drawn from the
//! categories the message hints at, padded to at least three bullets and
//! capped at seven.

use super::matcher::any_match;
use super::tables::TECHNIQUES_HEADER;

/// Minimum bullets in a techniques reply.
const MIN_BULLETS: usize = 3;

/// Maximum bullets in a techniques reply.
const MAX_BULLETS: usize = 7;

/// One technique category: a name, the keywords that select it, and its
/// technique lines.
struct TechniqueCategory {
    name: &'static str,
    keywords: &'static [&'static str],
    techniques: &'static [&'static str],
}

/// The full library, in padding-priority order: calm and motivation lead so
/// they can top up thin selections.
const LIBRARY: &[TechniqueCategory] = &[
    TechniqueCategory {
        name: "calm",
        keywords: &["calm", "relax", "anxious", "anxiety", "panic", "breathe", "breathing"],
        techniques: &[
            "Box breathing: in for 4 counts, hold for 4, out for 4, hold for 4; repeat five rounds",
            "5-4-3-2-1 grounding: name five things you can see, four you can touch, three you can hear, two you can smell, one you can taste",
            "Drop your shoulders, unclench your jaw, and take one breath out twice as long as the breath in",
            "Hold something cold, like an ice cube or a chilled glass, and focus only on the sensation for thirty seconds",
        ],
    },
    TechniqueCategory {
        name: "motivation",
        keywords: &["motivation", "motivated", "unmotivated", "lazy", "procrastinate", "procrastinating", "stuck"],
        techniques: &[
            "Two-minute rule: start the task with full permission to stop after two minutes",
            "Shrink the first step until it feels almost silly, then do just that step",
            "Write down why this matters to you and keep the note where you can see it",
            "Pair a task you avoid with something you enjoy, like music or a favorite drink",
        ],
    },
    TechniqueCategory {
        name: "stress",
        keywords: &["stress", "stressed", "pressure", "overwhelmed", "burnout"],
        techniques: &[
            "Brain-dump every open loop onto paper, then circle the one item that is actually urgent",
            "Work in 25-minute focus blocks with 5-minute breaks away from the screen",
            "Take a ten-minute walk without your phone and let your eyes rest on distant things",
            "Shrink today's list to three items; everything else moves to tomorrow on purpose",
        ],
    },
    TechniqueCategory {
        name: "anger",
        keywords: &["anger", "angry", "furious", "rage", "irritated"],
        techniques: &[
            "Leave the room for ten minutes before responding to anything",
            "Squeeze and release your fists ten times in rhythm with slow breaths",
            "Write the message you want to send, then delete it and wait an hour",
            "Burn the charge off physically: a fast walk, push-ups, or climbing stairs",
        ],
    },
    TechniqueCategory {
        name: "focus",
        keywords: &["focus", "concentrate", "concentration", "distracted", "attention"],
        techniques: &[
            "Put your phone in another room for one hour",
            "Pick one task, set a 20-minute timer, and protect it like a meeting",
            "Close every tab and window that is not part of the current task",
            "Use a single repeating playlist or steady background noise to blur distractions",
        ],
    },
    TechniqueCategory {
        name: "sleep",
        keywords: &["sleep", "insomnia", "awake", "can't sleep", "cant sleep"],
        techniques: &[
            "Keep the same wake-up time every day, even after a bad night",
            "No screens for the last thirty minutes before bed",
            "Still awake after twenty minutes? Get up and do something boring in dim light",
            "Write tomorrow's worries on paper before you turn off the light",
        ],
    },
    TechniqueCategory {
        name: "selflove",
        keywords: &["myself", "self love", "self-love", "worth", "confidence"],
        techniques: &[
            "Talk to yourself the way you would talk to a friend in the same situation",
            "Write down three things you did well today, however small",
            "Set one boundary this week and keep it",
            "Spend ten minutes on something you enjoy without calling it a waste of time",
        ],
    },
];

/// Build the techniques reply for an already-lowercased message.
///
/// Categories are inferred from keywords; selections thinner than three
/// bullets are padded from the front of the library, and everything is capped
/// at seven bullets.
pub fn build_techniques_reply(lowered: &str) -> String {
    let mut bullets: Vec<&'static str> = Vec::new();

    for category in LIBRARY {
        if any_match(lowered, category.keywords) {
            for t in category.techniques {
                if bullets.len() >= MAX_BULLETS {
                    break;
                }
                if !bullets.contains(t) {
                    bullets.push(t);
                }
            }
        }
    }

    // Pad thin selections from the library front (calm, then motivation).
    if bullets.len() < MIN_BULLETS {
        for category in LIBRARY {
            for t in category.techniques {
                if bullets.len() >= MIN_BULLETS {
                    break;
                }
                if !bullets.contains(t) {
                    bullets.push(t);
                }
            }
            if bullets.len() >= MIN_BULLETS {
                break;
            }
        }
    }

    bullets.truncate(MAX_BULLETS);

    let mut reply = String::from(TECHNIQUES_HEADER);
    for bullet in bullets {
        reply.push_str("\n\u{2022} ");
        reply.push_str(bullet);
    }
    reply
}
