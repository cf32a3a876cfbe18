//! Display formatting for terminal output
//!
//! Provides table and register formatting for the data models.

pub mod account;
pub mod category;
pub mod operation;

pub use account::format_account_list;
pub use category::format_category_list;
pub use operation::{format_operation_register, format_operation_row, NameLookup};
