//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::init_logging;
pub use paths::FintrackPaths;
pub use settings::Settings;
