//! Command implementations for the CLI
//!
//! - ui: Interactive cost analyzer (default)
//! - compare: Single-point comparison
//! - sweep: Cost curves over a parameter range
//! - config: Configuration display and validation

pub mod compare;
pub mod config;
pub mod sweep;
pub mod ui;
