//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling lookups by name, duplicate checks, and cross-entity operations.

pub mod account;
pub mod category;
pub mod operation;

pub use account::AccountService;
pub use category::CategoryService;
pub use operation::OperationService;
