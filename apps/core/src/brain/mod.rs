//! # Brain Module
//!
//! Deterministic, rule-based analysis core for Solace.
//! Turns a free-form chat message into a reply and, independently, into
//! zero-or-more canonical labels. No ML model, no I/O: pure string and
//! table work.
//!
//! ## Components
//! - `normalize`: lowercasing, quote folding, tokenization, short-message gate
//! - `matcher`: word-boundary trigger matching with a compiled-pattern cache
//! - `negation`: negative-modifier override detection
//! - `tables`: the immutable rule-table registry
//! - `techniques`: categorized technique library
//! - `labels`: the closed label enum
//! - `classifier`: single- and multi-label categorization
//! - `dispatcher`: the ordered reply rule chain
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod classifier;
pub mod dispatcher;
pub mod labels;
pub mod matcher;
pub mod negation;
pub mod normalize;
pub mod tables;
pub mod techniques;

pub use analyzer::CompanionBrain;
pub use classifier::{DetectionResult, LabelClassifier};
pub use dispatcher::Responder;
pub use labels::Label;
