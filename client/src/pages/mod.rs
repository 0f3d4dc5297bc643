//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, polling, capture
//! lifecycle) and delegates rendering details to `components`.

pub mod analysis;
pub mod live;
pub mod player;
pub mod upload;
