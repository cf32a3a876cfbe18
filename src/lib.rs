//! fintrack - personal finance tracker with JSON/CSV data transfer
//!
//! Tracks bank accounts, income/expense categories and dated operations, and
//! moves the whole dataset in and out of JSON and CSV files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, user settings and logging setup
//! - `error`: Custom error types
//! - `models`: Accounts, categories, operations and the entity factory
//! - `storage`: In-memory repositories and the workspace file
//! - `services`: Business logic layer
//! - `export`: Export visitors (JSON, CSV)
//! - `import`: Decoding, validation and materialization of imports
//! - `transfer`: Format selection and file I/O over export and import
//! - `reports`: Income/expense analytics
//! - `cli`, `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::transfer::DataTransfer;
//!
//! let result = DataTransfer::default().import_from_file("backup.csv")?;
//! println!("{}", result.message);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod transfer;

pub use error::{FintrackError, FintrackResult};
pub use transfer::{DataTransfer, TransferFormat, TransferResult};
