//! Backfill migration: retrofitting detection metadata onto history.
//!
//! An idempotent, versioned batch job. For every assistant message without
//! detection metadata it classifies the nearest preceding user message,
//! attaches `{label, matched}`, bumps the persisted emotion counters, and
//! writes the updated bundle plus the version stamp back as one store write.
//!
//! Callers must serialize migrations per storage key: re-invoking at the
//! same target version is a safe no-op, but concurrent writers at different
//! target versions are not supported.

use tracing::{debug, info, warn};

use crate::brain::classifier::LabelClassifier;
use crate::error::AppError;
use crate::models::{Detection, MigrationBundle, PersonalizationContext, Role, TrainingData};
use crate::storage::KeyValueStore;

/// Fixed storage key for the detector bundle.
pub const BUNDLE_STORE_KEY: &str = "solace.detector.bundle";

/// Explicit configuration for a backfill run. Replaces the loose options bag
/// of earlier generations; every field is optional with a default.
#[derive(Debug, Clone, Default)]
pub struct BackfillRequest {
    /// Habit identifiers carried by the caller; logged for traceability.
    pub habits: Vec<String>,
    /// Goal identifiers carried by the caller; logged for traceability.
    pub goals: Vec<String>,
    /// Personality state to mirror emotion-counter increments into.
    pub personality: Option<PersonalizationContext>,
    /// Display name of the user, if known.
    pub user_name: Option<String>,
}

/// What a backfill run produced.
#[derive(Debug, Clone)]
pub struct BackfillOutcome {
    /// Messages, with detection metadata attached where it was missing.
    pub messages: Vec<crate::models::Message>,
    /// Training data after counter increments.
    pub training_data: TrainingData,
    /// The version the bundle now sits at.
    pub migration_version: u32,
}

/// Classify one user message for backfill purposes.
///
/// Kept fallible so a single bad message can be isolated without aborting
/// the batch; the classifier itself never fails on string input.
fn classify_for_backfill(
    classifier: &LabelClassifier,
    content: &str,
) -> Result<Detection, AppError> {
    let result = classifier.classify(content);
    Ok(Detection {
        label: result.label,
        matched: result.matched,
    })
}

/// Run the detection backfill up to `target_version`.
///
/// If the bundle already sits at or beyond `target_version`, the input is
/// returned unchanged and nothing is written.
pub fn backfill_detection(
    store: &mut dyn KeyValueStore,
    mut bundle: MigrationBundle,
    request: &BackfillRequest,
    target_version: u32,
) -> Result<BackfillOutcome, AppError> {
    if !request.habits.is_empty() || !request.goals.is_empty() {
        debug!(
            habits = request.habits.len(),
            goals = request.goals.len(),
            "backfill carrying caller state"
        );
    }

    if bundle.detector_migration_version >= target_version {
        info!(
            version = bundle.detector_migration_version,
            target = target_version,
            "backfill already applied, skipping"
        );
        return Ok(BackfillOutcome {
            messages: bundle.messages,
            training_data: bundle.training_data,
            migration_version: bundle.detector_migration_version,
        });
    }

    let classifier = LabelClassifier::new();
    if let Some(personality) = &request.personality {
        bundle.personality = personality.clone();
    }

    let mut annotated = 0usize;
    for i in 0..bundle.messages.len() {
        if bundle.messages[i].role != Role::Assistant || bundle.messages[i].detection.is_some() {
            continue;
        }

        // The assistant reply answers the nearest preceding user message.
        let source = bundle.messages[..i]
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone());

        let detection = match source {
            Some(content) => match classify_for_backfill(&classifier, &content) {
                Ok(detection) => detection,
                Err(e) => {
                    // Per-message failures are isolated; the batch continues.
                    warn!("backfill classification failed for one message: {}", e);
                    Detection {
                        label: None,
                        matched: None,
                    }
                }
            },
            None => Detection {
                label: None,
                matched: None,
            },
        };

        if let Some(label) = detection.label {
            let key = label.count_key().to_string();
            *bundle
                .training_data
                .emotion_counts
                .entry(key.clone())
                .or_insert(0) += 1;
            *bundle
                .personality
                .conversation_history
                .emotion_counts
                .entry(key)
                .or_insert(0) += 1;
        }

        bundle.messages[i].detection = Some(detection);
        annotated += 1;
    }

    bundle.detector_migration_version = target_version;

    // One logical write: the annotated bundle plus the version stamp.
    let payload = serde_json::to_string(&bundle)?;
    store.set(BUNDLE_STORE_KEY, payload)?;
    info!(annotated, target = target_version, "backfill persisted");

    Ok(BackfillOutcome {
        messages: bundle.messages,
        training_data: bundle.training_data,
        migration_version: bundle.detector_migration_version,
    })
}
