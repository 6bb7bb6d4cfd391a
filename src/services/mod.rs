//! High-level business logic built on top of the repository and the core
//! scheduling algorithms.

pub mod allocation;

pub use allocation::{allocate_date, compute_allocation_plan, compute_plan, explain_schedule};
