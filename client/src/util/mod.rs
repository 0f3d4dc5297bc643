//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! math from page and component logic to improve reuse and testability.

pub mod chart;
pub mod config;
pub mod markdown;
pub mod severity;
pub mod timeline;
