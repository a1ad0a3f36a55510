//! Shared core types for the Park Review Explorer.
//!
//! Holds the review record and summary models, the error taxonomy, display
//! formatting helpers, and the CLI settings shared by the other crates.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
