//! Weekly reflection aggregation.
//!
//! Rolls the last seven days of labeled conversation into a summary:
//! dominant emotion, exemplar best/worst moments, an hour-of-day activity
//! heatmap, week-over-week deltas, a detected behavioral pattern, and a
//! suggested next step. Stateless and side-effect-free.

use chrono::{DateTime, Duration, Locale, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::brain::classifier::LabelClassifier;
use crate::brain::labels::Label;
use crate::brain::matcher::any_match;
use crate::models::{Message, Role, TrainingData};

/// Positive keywords that nominate a best moment.
const BEST_MOMENT_KEYWORDS: &[&str] = &[
    "completed", "finished", "did it", "success", "proud", "celebrate",
];

/// Negative keywords that nominate a toughest moment.
const TOUGH_MOMENT_KEYWORDS: &[&str] = &[
    "lonely", "hopeless", "sad", "overwhelmed", "anxious", "stress",
];

/// Labels that qualify a message as a toughest-moment fallback.
const TOUGH_LABELS: &[Label] = &[
    Label::Sad,
    Label::Lonely,
    Label::Hopeless,
    Label::Stress,
    Label::Anxiety,
    Label::Anger,
    Label::Confusion,
];

/// Keyword signatures for the detected behavioral patterns.
const OVERTHINKING_PATTERN_KEYWORDS: &[&str] = &[
    "overthink", "overthinking", "can't stop thinking", "cant stop thinking", "racing thoughts",
];

const RUMINATION_PATTERN_KEYWORDS: &[&str] =
    &["can't sleep", "cant sleep", "thinking", "overthink", "awake"];

const LONELINESS_PATTERN_KEYWORDS: &[&str] = &["lonely", "alone", "no one", "nobody"];

/// Night-bucket share of recent activity that flags late-night usage.
const NIGHT_RATIO_THRESHOLD: f64 = 0.3;

/// Top-label count and share that flag a frequent-emotion pattern.
const FREQ_MIN_COUNT: usize = 3;
const FREQ_MIN_RATIO: f64 = 0.4;

/// This-week/last-week counts for one measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDelta {
    pub this_week: i64,
    pub last_week: i64,
    pub delta: i64,
}

impl WeekDelta {
    fn new(this_week: i64, last_week: i64) -> Self {
        Self {
            this_week,
            last_week,
            delta: this_week - last_week,
        }
    }
}

/// Week-over-week comparison: per-label emotion counts plus raw activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekComparison {
    pub emotions: BTreeMap<Label, WeekDelta>,
    pub activity: WeekDelta,
}

/// The weekly reflection summary. Purely computed; no persisted lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Highest-count label over the recent window, if any.
    pub most_common_emotion: Option<Label>,
    /// Most recent positive exemplar, formatted "<content> — <Weekday>".
    pub best_moment: Option<String>,
    /// Most recent difficult exemplar, same format.
    pub toughest_moment: Option<String>,
    /// Detected behavioral pattern, if one dominates.
    pub pattern: Option<String>,
    /// Suggested next step keyed off the dominant emotion or pattern.
    pub growth_suggestion: String,
    /// Message count per hour of day over the recent window.
    pub hour_heatmap: [u32; 24],
    /// Week-over-week emotion and activity deltas.
    pub week_comparison: WeekComparison,
    /// "Late night activity" when the night share crosses the threshold.
    pub time_pattern: Option<String>,
    /// "Frequent <emotion>" when one label dominates the window.
    pub emotion_freq_pattern: Option<String>,
}

/// Label a message: attached detection first, classifier for user messages.
fn label_for(message: &Message, classifier: &LabelClassifier) -> Option<Label> {
    if let Some(detection) = &message.detection {
        return detection.label;
    }
    match message.role {
        Role::User => classifier.label_of(&message.content),
        Role::Assistant => None,
    }
}

fn count_labels<'a>(
    messages: impl Iterator<Item = &'a Message>,
    classifier: &LabelClassifier,
) -> HashMap<Label, i64> {
    let mut counts = HashMap::new();
    for message in messages {
        if let Some(label) = label_for(message, classifier) {
            *counts.entry(label).or_insert(0) += 1;
        }
    }
    counts
}

/// Highest-count label; ties broken by label order for determinism.
fn top_label(counts: &HashMap<Label, i64>) -> Option<(Label, i64)> {
    counts
        .iter()
        .map(|(l, c)| (*l, *c))
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}

/// Format an exemplar moment: the original content plus the weekday.
fn format_moment(message: &Message, locale: Locale) -> String {
    let weekday = message.timestamp.format_localized("%A", locale);
    format!("{} \u{2014} {}", message.content, weekday)
}

fn growth_suggestion(emotion: Option<Label>, pattern: Option<&str>) -> String {
    if let Some(label) = emotion {
        let suggestion = match label {
            Label::Sad => "Try writing down one small thing each evening that felt okay; gentle noticing adds up.",
            Label::Stress => "Pick one recurring stressor this week and remove or shrink a single piece of it.",
            Label::Anxiety => "Practice one slow breathing round each morning before you pick up your phone.",
            Label::Anger => "When the spike hits, give yourself a ten-minute pause before responding, then decide.",
            Label::Lonely => "Reach out to one person this week, even with something small; connection grows from tiny pings.",
            Label::Hopeless => "Keep the horizon short: plan only the next day, and let that be enough for now.",
            Label::Overthinking => "Set a daily ten-minute worry window; outside it, park thoughts on paper for later.",
            Label::Happy => "Note what made this week good so you can do more of it on purpose.",
            Label::Financial => "Spend twenty minutes listing what comes in and what goes out this month; clarity lowers the volume.",
            Label::Career => "Write down what a better work week would look like, then pick one change to try.",
            Label::Motivation => "Shrink the first step until it is almost too easy to skip, then take it daily.",
            Label::Exam => "Plan tomorrow's single most calming topic to review, and protect your sleep.",
            _ => "",
        };
        if !suggestion.is_empty() {
            return suggestion.to_string();
        }
    }

    match pattern {
        Some("Overthinking") => {
            "Set a daily ten-minute worry window; outside it, park thoughts on paper for later.".to_string()
        }
        Some("Late night rumination") => {
            "Try moving wind-down half an hour earlier and keep a notepad by the bed for late thoughts.".to_string()
        }
        Some("Loneliness") => {
            "Reach out to one person this week, even with something small; connection grows from tiny pings.".to_string()
        }
        _ => "Keep showing up and checking in with yourself; small consistent reflection is how change sticks.".to_string(),
    }
}

/// Summarize the week ending at `now`.
///
/// Pure function of its inputs: identical `(messages, training, now, locale)`
/// always produce the identical summary.
pub fn summarize_week(
    messages: &[Message],
    training: &TrainingData,
    now: DateTime<Utc>,
    locale: Option<Locale>,
) -> WeeklySummary {
    let classifier = LabelClassifier::new();
    let locale = locale.unwrap_or(Locale::en_US);

    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);

    let recent: Vec<&Message> = messages
        .iter()
        .filter(|m| m.timestamp > week_ago && m.timestamp <= now)
        .collect();
    let previous: Vec<&Message> = messages
        .iter()
        .filter(|m| m.timestamp > two_weeks_ago && m.timestamp <= week_ago)
        .collect();

    // Step 2: dominant emotion, falling back to supplied training counters.
    let recent_counts = count_labels(recent.iter().copied(), &classifier);
    let most_common_emotion = top_label(&recent_counts).map(|(l, _)| l).or_else(|| {
        training
            .emotion_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .and_then(|(key, _)| Label::ALL.iter().find(|l| l.count_key() == key).copied())
    });

    // Steps 3-4: exemplar moments, most recent first.
    let mut newest_first: Vec<&Message> = recent.clone();
    newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let best_moment = newest_first
        .iter()
        .find(|m| m.role == Role::User && any_match(&m.content.to_lowercase(), BEST_MOMENT_KEYWORDS))
        .or_else(|| {
            newest_first
                .iter()
                .find(|m| label_for(m, &classifier) == Some(Label::Happy))
        })
        .map(|m| format_moment(m, locale));

    let toughest_moment = newest_first
        .iter()
        .find(|m| m.role == Role::User && any_match(&m.content.to_lowercase(), TOUGH_MOMENT_KEYWORDS))
        .or_else(|| {
            newest_first.iter().find(|m| {
                label_for(m, &classifier).is_some_and(|l| TOUGH_LABELS.contains(&l))
            })
        })
        .map(|m| format_moment(m, locale));

    // Steps 5-6: behavioral pattern and the hour heatmap.
    let mut hour_heatmap = [0u32; 24];
    let mut night_count = 0usize;
    let mut overthinking_hits = 0usize;
    let mut rumination_hits = 0usize;
    let mut loneliness_hits = 0usize;

    for message in &recent {
        let hour = message.timestamp.hour() as usize;
        hour_heatmap[hour] += 1;
        let at_night = !(5..22).contains(&hour);
        if at_night {
            night_count += 1;
        }
        let lowered = message.content.to_lowercase();
        if any_match(&lowered, OVERTHINKING_PATTERN_KEYWORDS) {
            overthinking_hits += 1;
        }
        if at_night && any_match(&lowered, RUMINATION_PATTERN_KEYWORDS) {
            rumination_hits += 1;
        }
        if any_match(&lowered, LONELINESS_PATTERN_KEYWORDS) {
            loneliness_hits += 1;
        }
    }

    let pattern = [
        ("Overthinking", overthinking_hits),
        ("Late night rumination", rumination_hits),
        ("Loneliness", loneliness_hits),
    ]
    .iter()
    .filter(|(_, hits)| *hits > 0)
    .max_by_key(|(_, hits)| *hits)
    .map(|(name, _)| name.to_string());

    let time_pattern = if !recent.is_empty()
        && night_count as f64 / recent.len() as f64 >= NIGHT_RATIO_THRESHOLD
    {
        Some("Late night activity".to_string())
    } else {
        None
    };

    // Step 7: frequent-emotion pattern.
    let emotion_freq_pattern = top_label(&recent_counts).and_then(|(label, count)| {
        let ratio = if recent.is_empty() {
            0.0
        } else {
            count as f64 / recent.len() as f64
        };
        if count as usize >= FREQ_MIN_COUNT || ratio >= FREQ_MIN_RATIO {
            Some(format!("Frequent {}", label.display_name()))
        } else {
            None
        }
    });

    // Step 8: week-over-week comparison.
    let previous_counts = count_labels(previous.iter().copied(), &classifier);
    let mut emotions = BTreeMap::new();
    for label in recent_counts.keys().chain(previous_counts.keys()) {
        emotions.entry(*label).or_insert_with(|| {
            WeekDelta::new(
                recent_counts.get(label).copied().unwrap_or(0),
                previous_counts.get(label).copied().unwrap_or(0),
            )
        });
    }
    let week_comparison = WeekComparison {
        emotions,
        activity: WeekDelta::new(recent.len() as i64, previous.len() as i64),
    };

    // Step 9: growth suggestion.
    let growth_suggestion = growth_suggestion(most_common_emotion, pattern.as_deref());

    WeeklySummary {
        most_common_emotion,
        best_moment,
        toughest_moment,
        pattern,
        growth_suggestion,
        hour_heatmap,
        week_comparison,
        time_pattern,
        emotion_freq_pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(now: DateTime<Utc>, days_back: i64, hour: u32) -> DateTime<Utc> {
        (now - Duration::days(days_back))
            .date_naive()
            .and_hms_opt(hour, 30, 0)
            .expect("valid time")
            .and_utc()
    }

    fn fixture_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("valid now")
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let now = fixture_now();
        let messages = vec![
            Message::user("i feel so stressed about work", at(now, 1, 9)),
            Message::user("i finished my project, proud of it", at(now, 2, 18)),
        ];
        let training = TrainingData::default();

        let a = summarize_week(&messages, &training, now, None);
        let b = summarize_week(&messages, &training, now, None);
        assert_eq!(
            serde_json::to_string(&a).expect("summary json"),
            serde_json::to_string(&b).expect("summary json")
        );
    }

    #[test]
    fn test_training_fallback_when_week_is_quiet() {
        let now = fixture_now();
        let mut training = TrainingData::default();
        training.emotion_counts.insert("angry".to_string(), 5);
        training.emotion_counts.insert("sad".to_string(), 2);

        let summary = summarize_week(&[], &training, now, None);
        assert_eq!(summary.most_common_emotion, Some(Label::Anger));
        assert_eq!(summary.week_comparison.activity.this_week, 0);
    }

    #[test]
    fn test_late_night_pattern() {
        let now = fixture_now();
        let messages: Vec<Message> = (0..4)
            .map(|i| Message::user("still awake thinking about everything", at(now, i + 1, 23)))
            .collect();

        let summary = summarize_week(&messages, &TrainingData::default(), now, None);
        assert_eq!(summary.time_pattern.as_deref(), Some("Late night activity"));
        assert_eq!(summary.pattern.as_deref(), Some("Late night rumination"));
    }

    #[test]
    fn test_best_moment_prefers_keyword_over_label() {
        let now = fixture_now();
        let messages = vec![
            Message::user("i am happy today", at(now, 3, 10)),
            Message::user("i completed the marathon", at(now, 5, 10)),
        ];

        let summary = summarize_week(&messages, &TrainingData::default(), now, None);
        let best = summary.best_moment.expect("best moment");
        assert!(best.contains("completed the marathon"));
        assert!(best.contains('\u{2014}'));
    }
}
