//! hearth-domain
//!
//! Pure domain models for the household budgeting core (categories, budgets,
//! line items, goals) and the computed view models served to collaborators.
//! No I/O, no services. Only data types and core enums.

pub mod budget;
pub mod category;
pub mod common;
pub mod goal;
pub mod report;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use goal::*;
pub use report::*;
