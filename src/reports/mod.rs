//! Reports module for fintrack
//!
//! Provides income/expense analytics and their terminal reports.

pub mod analytics;
pub mod summary;

pub use analytics::{Analytics, CategoryTotal, DateRange, UNKNOWN_CATEGORY};
pub use summary::{CategoryReport, SummaryReport};
