//! # Insights Module
//!
//! Derived analytics over labeled conversation history. Pure functions:
//! identical inputs and `now` produce identical output.

pub mod weekly;

pub use weekly::{summarize_week, WeekComparison, WeekDelta, WeeklySummary};
