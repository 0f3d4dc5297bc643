//! Browser media plumbing for live capture.
//!
//! SYSTEM CONTEXT
//! ==============
//! `camera` acquires and releases the webcam stream, `frame_capture` turns the
//! current video frame into base64 JPEG, and `live_capture` ties stream,
//! socket, and sampling timer into one owned handle.

pub mod camera;
#[cfg(feature = "hydrate")]
pub mod frame_capture;
#[cfg(feature = "hydrate")]
pub mod live_capture;
