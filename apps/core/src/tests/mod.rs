//! Test Module
//!
//! Comprehensive test suite for the Solace core.
//!
//! ## Test Categories
//! - `dispatcher_tests`: reply chain precedence, literal-reply contracts,
//!   determinism
//! - `classifier_tests`: single/multi-label precedence, negation override,
//!   dispatcher/classifier divergence
//! - `weekly_tests`: weekly reflection aggregation fixtures
//! - `migrate_tests`: backfill idempotence and persistence
//! - `scenario_tests`: end-to-end conversational scenarios

pub mod classifier_tests;
pub mod dispatcher_tests;
pub mod migrate_tests;
