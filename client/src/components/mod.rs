//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render charts, overlays, and panels while reading/writing
//! page state passed in as signals or pulled from Leptos context.

pub mod breakdown_bars;
pub mod chat_panel;
pub mod live_metrics;
pub mod nav_bar;
pub mod pose_overlay;
pub mod risk_chart;
pub mod risk_events;
pub mod severity_badge;
