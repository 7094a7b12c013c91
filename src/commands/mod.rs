//! Command implementations

pub mod filter;
pub mod simple;

pub use filter::{FilterConfig, FilterResult, run_filter};
pub use simple::{run_simple, run_simple_with};
