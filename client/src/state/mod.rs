//! Reactive state models shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each model is a plain struct wrapped in an `RwSignal` by its page. Models
//! own their transition rules so they can be tested without a browser.

pub mod analysis;
pub mod chat;
pub mod live;
pub mod player;
pub mod upload;
