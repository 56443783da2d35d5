use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::brain::labels::Label;

/// The sender of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// The rule-table entry that produced a detection: the category the trigger
/// belongs to and the trigger phrase itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRule {
    /// Name of the rule table / keyword category (e.g. "breakup").
    pub category: String,
    /// The trigger phrase that matched.
    pub trigger: String,
}

/// Detection metadata attached to assistant messages by the dispatcher's
/// caller or the backfill utility. Once set it is never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Canonical label for the user message this reply answered, if any.
    pub label: Option<Label>,
    /// The matched category and trigger, if a rule matched.
    pub matched: Option<MatchedRule>,
}

/// Represents a single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message (UUID).
    pub id: String,
    /// The role of the message sender.
    pub role: Role,
    /// The text content of the message.
    pub content: String,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// Detection metadata; assistant messages only.
    #[serde(default)]
    pub detection: Option<Detection>,
}

impl Message {
    /// Build a user message with a fresh id.
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            timestamp,
            detection: None,
        }
    }

    /// Build an assistant message with a fresh id.
    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            timestamp,
            detection: None,
        }
    }
}

/// Stated preferences about how the user likes the conversation to feel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Preferred conversation style (e.g. "gentle", "direct").
    #[serde(default)]
    pub conversation_style: Option<String>,
    /// Topics the user keeps coming back to.
    #[serde(default)]
    pub topics_of_interest: Vec<String>,
    /// Greetings the user tends to open with.
    #[serde(default)]
    pub common_greetings: Vec<String>,
    /// Overall emotional tone the user responds well to.
    #[serde(default)]
    pub emotional_tone: Option<String>,
}

/// Aggregated facts about the conversation so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationHistory {
    /// Total messages exchanged.
    #[serde(default)]
    pub total_messages: u64,
    /// Topics that recur across sessions.
    #[serde(default)]
    pub frequent_topics: Vec<String>,
    /// Per-emotion counters, keyed by the legacy count key (see
    /// [`Label::count_key`]).
    #[serde(default)]
    pub emotion_counts: HashMap<String, u32>,
    /// How many replies the user reacted positively to.
    #[serde(default)]
    pub successful_responses: u64,
}

/// Personal facts the user has shared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalContext {
    /// Display name, used only for reply interpolation.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Personalization context supplied by the embedding application.
///
/// Read-only to the dispatcher (only the display name is interpolated into
/// replies); only the backfill utility mutates `emotion_counts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalizationContext {
    #[serde(default)]
    pub user_preferences: UserPreferences,
    #[serde(default)]
    pub conversation_history: ConversationHistory,
    #[serde(default)]
    pub personal_context: PersonalContext,
}

impl PersonalizationContext {
    /// The display name to interpolate into replies, if the user shared one.
    pub fn display_name(&self) -> Option<&str> {
        self.personal_context.name.as_deref()
    }
}

/// Accumulated detector training data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingData {
    /// Per-emotion counters, keyed by the legacy count key (see
    /// [`Label::count_key`]).
    #[serde(default)]
    pub emotion_counts: HashMap<String, u32>,
}

/// The persisted unit the backfill utility reads, annotates, and writes back.
///
/// Invariant: `detector_migration_version` is monotonically non-decreasing;
/// re-running with an already-applied target version is a guaranteed no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationBundle {
    /// Full conversation history.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Personalization state carried alongside the history.
    #[serde(default)]
    pub personality: PersonalizationContext,
    /// Detector training data, including the emotion counters.
    #[serde(default)]
    pub training_data: TrainingData,
    /// Highest migration version already applied to this bundle.
    #[serde(rename = "_detectorMigrationVersion", default)]
    pub detector_migration_version: u32,
}

impl MigrationBundle {
    /// Empty bundle at version zero.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            personality: PersonalizationContext::default(),
            training_data: TrainingData::default(),
            detector_migration_version: 0,
        }
    }
}

impl Default for MigrationBundle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let now = Utc::now();
        let user = Message::user("hello", now);
        let reply = Message::assistant("hi there", now);

        assert_eq!(user.role, Role::User);
        assert_eq!(reply.role, Role::Assistant);
        assert!(user.detection.is_none());
        assert_ne!(user.id, reply.id);
    }

    #[test]
    fn test_bundle_version_field_round_trips_under_legacy_name() {
        let mut bundle = MigrationBundle::new();
        bundle.detector_migration_version = 3;

        let json = serde_json::to_string(&bundle).expect("serialize bundle");
        assert!(json.contains("_detectorMigrationVersion"));

        let back: MigrationBundle = serde_json::from_str(&json).expect("deserialize bundle");
        assert_eq!(back.detector_migration_version, 3);
    }

    #[test]
    fn test_personalization_defaults_from_empty_json() {
        let ctx: PersonalizationContext = serde_json::from_str("{}").expect("empty context");
        assert!(ctx.display_name().is_none());
        assert_eq!(ctx.conversation_history.total_messages, 0);
    }
}
