//! Data models for the Employee Management System.

mod employee;
mod filter;
mod stats;

pub use employee::*;
pub use filter::*;
pub use stats::*;
