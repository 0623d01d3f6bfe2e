//! Interactive cost analyzer
//!
//! A single "Cost Analysis" tab: parameter form, plot controls, a chart of
//! both cost curves and a result area, drawn with ratatui.

pub mod app;
pub mod ui;

pub use app::{AnalysisApp, Field, ResultArea};
