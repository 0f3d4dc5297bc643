//! Networking modules for the analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `poll` drives analysis polling, and
//! `camera_client` manages the `/ws/camera` socket for one live capture run.

pub mod api;
pub mod camera_client;
pub mod poll;
