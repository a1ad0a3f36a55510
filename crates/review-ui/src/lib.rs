//! Terminal UI layer for the Park Review Explorer.
//!
//! Provides themes, the stdin prompt and menu plumbing, chart rendering
//! built on [`ratatui`], and the interactive application loop that ties the
//! query engine and exporter to the user.

pub mod app;
pub mod charts;
pub mod menu;
pub mod prompts;
pub mod themes;
