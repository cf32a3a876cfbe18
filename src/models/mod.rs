//! Core data models for fintrack
//!
//! This module contains the data structures of the finance domain: accounts,
//! categories, operations, their identities, and the factory that builds them.

pub mod account;
pub mod category;
pub mod factory;
pub mod ids;
pub mod kind;
pub mod operation;
pub mod snapshot;

pub use account::Account;
pub use category::Category;
pub use factory::{create_account, create_category, create_operation};
pub use ids::{AccountId, CategoryId, Identifiable, OperationId};
pub use kind::OperationKind;
pub use operation::Operation;
pub use rust_decimal::Decimal;
pub use snapshot::Snapshot;
