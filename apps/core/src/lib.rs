//! # Solace Core
//!
//! Deterministic, rule-based companion-chat core: reply synthesis, label
//! classification, weekly reflection analytics, and a versioned detection
//! backfill. Consumed as a library by UI and analytics layers; no network
//! I/O, no ML model, no persistence of its own beyond the key-value boundary
//! the backfill talks to.
//!
//! ## Components
//! - `brain`: input normalization, the rule-table registry, the ordered
//!   reply dispatcher, and the independent label classifier
//! - `insights`: the weekly reflection aggregator
//! - `migrate`: the idempotent detection backfill
//! - `storage`: the external key-value store boundary
//! - `models`: shared message and personalization types

pub mod brain;
pub mod error;
pub mod insights;
pub mod migrate;
pub mod models;
pub mod storage;

#[cfg(test)]
mod tests;

pub use brain::{CompanionBrain, DetectionResult, Label, LabelClassifier, Responder};
pub use error::AppError;
pub use insights::{summarize_week, WeekComparison, WeekDelta, WeeklySummary};
pub use migrate::{backfill_detection, BackfillOutcome, BackfillRequest, BUNDLE_STORE_KEY};
pub use models::{
    Detection, MatchedRule, Message, MigrationBundle, PersonalizationContext, Role, TrainingData,
};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};

/// Synthesize a reply for `message`. Convenience wrapper over
/// [`CompanionBrain::respond`] for callers without a long-lived brain.
pub fn classify_and_respond(message: &str, context: Option<&PersonalizationContext>) -> String {
    CompanionBrain::new().respond(message, context)
}

/// Headline label for `message`, if any category matches.
pub fn label_of(message: &str) -> Option<Label> {
    LabelClassifier::new().label_of(message)
}

/// Every matching label for `message`, first-match order, de-duplicated.
pub fn labels_of(message: &str) -> Vec<Label> {
    LabelClassifier::new().labels_of(message)
}

/// Full classification with matched-trigger introspection.
pub fn classify(message: &str) -> DetectionResult {
    LabelClassifier::new().classify(message)
}
