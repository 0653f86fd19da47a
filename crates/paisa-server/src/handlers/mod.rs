//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod categorize;
pub mod expenses;
pub mod export;
pub mod reports;
pub mod settings;

// Re-export all handlers for use in router
pub use categorize::*;
pub use expenses::*;
pub use export::*;
pub use reports::*;
pub use settings::*;
