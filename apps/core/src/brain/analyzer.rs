//! Companion Brain - main orchestrator for the brain module.
//!
//! Bundles the reply chain and the label classifier behind one entry point.
//! Both read the same rule-table registry but walk it in their own documented
//! orders, so the reply flavor and the analytics label can legitimately
//! disagree on ambiguous input.

use tracing::debug;

use super::classifier::{DetectionResult, LabelClassifier};
use super::dispatcher::Responder;
use super::labels::Label;
use crate::models::PersonalizationContext;

/// Main brain: deterministic reply synthesis plus independent labeling.
pub struct CompanionBrain {
    responder: Responder,
    classifier: LabelClassifier,
}

impl Default for CompanionBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanionBrain {
    /// Create a brain over the static rule registry.
    pub fn new() -> Self {
        Self {
            responder: Responder::new(),
            classifier: LabelClassifier::new(),
        }
    }

    /// Synthesize the supportive/conversational reply for a message.
    pub fn respond(&self, message: &str, context: Option<&PersonalizationContext>) -> String {
        self.responder.respond(message, context)
    }

    /// Headline label for a message, if any category matches.
    pub fn label_of(&self, message: &str) -> Option<Label> {
        self.classifier.label_of(message)
    }

    /// Every matching label, first-match order, de-duplicated.
    pub fn labels_of(&self, message: &str) -> Vec<Label> {
        self.classifier.labels_of(message)
    }

    /// Full classification with matched-trigger introspection.
    pub fn classify(&self, message: &str) -> DetectionResult {
        let result = self.classifier.classify(message);
        debug!(
            label = ?result.label,
            labels = result.labels.len(),
            "classified message"
        );
        result
    }
}
