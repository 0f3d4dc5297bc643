//! Start/stop orchestration for one live capture run.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start_live_capture` walks the session through camera grant, socket open,
//! and sampling. Every resource it acquires lands in a [`LiveCaptureHandle`]
//! stored in a page-owned slot; dropping or releasing the handle stops the
//! sampler, closes the socket, and turns the camera off. The release is
//! idempotent, so stop, unexpected close, and page teardown may all call it.
//!
//! Each run is tagged with the session's run generation. Continuations that
//! resolve after a newer start (a slow permission prompt, a late socket)
//! release what they acquired and never touch the newer run.

use std::cell::RefCell;
use std::rc::Rc;

use capture::{CaptureError, CaptureEvent, SAMPLE_INTERVAL_MS, SamplerGate, TickConditions, TickOutcome};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wire::ClientMessage;

use super::camera::{acquire_camera, release_stream};
use super::frame_capture::FrameCapturer;
use crate::net::api::CAMERA_WS_PATH;
use crate::net::camera_client::{CameraLink, spawn_camera_client};
use crate::state::live::LiveState;
use crate::util::config::ApiConfig;

/// Page-owned storage for the active run's resources.
pub type CaptureSlot = StoredValue<Option<LiveCaptureHandle>, LocalStorage>;

/// Owner of every browser resource held by a running capture.
#[derive(Default)]
pub struct LiveCaptureHandle {
    stream: Option<web_sys::MediaStream>,
    link: Option<CameraLink>,
    sampler: Option<Interval>,
    gate: Option<Rc<RefCell<SamplerGate>>>,
    video: Option<web_sys::HtmlVideoElement>,
}

impl LiveCaptureHandle {
    /// Release everything still held. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(sampler) = self.sampler.take() {
            sampler.cancel();
        }
        if let Some(link) = self.link.take() {
            link.close();
        }
        if let Some(gate) = self.gate.take() {
            let gate = gate.borrow();
            leptos::logging::log!("sampler stopped: {} sampled, {} dropped", gate.sampled(), gate.dropped());
        }
        let stream = self.stream.take();
        // The element may already show a newer run's stream.
        if let Some(video) = self.video.take() {
            if stream.is_some() && video.src_object() == stream {
                video.set_src_object(None);
            }
        }
        if let Some(stream) = stream {
            release_stream(&stream);
        }
    }
}

impl Drop for LiveCaptureHandle {
    fn drop(&mut self) {
        self.release();
    }
}

fn dispatch(live: RwSignal<LiveState>, event: &CaptureEvent) {
    let _ = live.try_update(|s| s.dispatch(event));
}

fn dispatch_for(live: RwSignal<LiveState>, run: u64, event: &CaptureEvent) {
    let _ = live.try_update(|s| s.dispatch_for(run, event));
}

fn is_connecting_run(live: RwSignal<LiveState>, run: u64) -> bool {
    live.try_with_untracked(|s| s.session.is_connecting_run(run)).unwrap_or(false)
}

/// Drop whatever the slot holds. Tolerates an already disposed slot.
pub fn release_capture(slot: CaptureSlot) {
    let _ = slot.try_update_value(|handle| {
        if let Some(mut handle) = handle.take() {
            handle.release();
        }
    });
}

/// Begin a run: reset the session, request the camera, then open the socket.
pub fn start_live_capture(
    api: ApiConfig,
    live: RwSignal<LiveState>,
    video_ref: NodeRef<leptos::html::Video>,
    slot: CaptureSlot,
) {
    if !live.with_untracked(|s| s.session.can_start()) {
        return;
    }
    release_capture(slot);
    dispatch(live, &CaptureEvent::StartRequested);
    let run = live.with_untracked(|s| s.session.run);

    leptos::task::spawn_local(async move {
        let stream = match acquire_camera().await {
            Ok(stream) => stream,
            Err(e) => {
                leptos::logging::warn!("camera unavailable: {e}");
                dispatch_for(live, run, &CaptureEvent::Failed(e));
                return;
            }
        };

        // The user may have stopped, restarted, or left the page while the
        // prompt was open.
        if !is_connecting_run(live, run) {
            release_stream(&stream);
            return;
        }
        let Some(video) = video_ref.get_untracked() else {
            release_stream(&stream);
            dispatch_for(live, run, &CaptureEvent::Failed(CaptureError::Unsupported));
            return;
        };
        video.set_src_object(Some(&stream));
        let _ = video.play();

        let link = spawn_camera_client(api.ws_endpoint(CAMERA_WS_PATH), live, run);
        let gate = Rc::new(RefCell::new(SamplerGate::default()));
        let sampler = start_sampler(live, run, video.clone(), link.clone(), gate.clone());
        let handle = LiveCaptureHandle {
            stream: Some(stream),
            link: Some(link),
            sampler,
            gate: Some(gate),
            video: Some(video),
        };
        if slot.try_update_value(|current| *current = Some(handle)).is_none() {
            leptos::logging::log!("capture page gone before start finished");
        }
    });
}

/// User-initiated stop: the session stops sampling first, then resources go.
pub fn stop_live_capture(live: RwSignal<LiveState>, slot: CaptureSlot) {
    dispatch(live, &CaptureEvent::StopRequested);
    release_capture(slot);
}

/// Fixed-rate sampler. A tick is skipped, never queued, while the session is
/// not running, the socket is not open, the video has no frame yet, or the
/// previous frame is still encoding.
fn start_sampler(
    live: RwSignal<LiveState>,
    run: u64,
    video: web_sys::HtmlVideoElement,
    link: CameraLink,
    gate: Rc<RefCell<SamplerGate>>,
) -> Option<Interval> {
    let capturer = FrameCapturer::new()?;
    let run_is_sampling = move || {
        live.try_with_untracked(|s| s.session.run == run && s.session.is_sampling_allowed()).unwrap_or(false)
    };

    Some(Interval::new(SAMPLE_INTERVAL_MS, move || {
        let conditions = TickConditions::from_ready_state(run_is_sampling(), link.is_open(), video.ready_state());
        let outcome = gate.borrow_mut().tick(conditions);
        if outcome != TickOutcome::Sample {
            return;
        }

        let gate = gate.clone();
        let link = link.clone();
        capturer.capture(&video, move |encoded| {
            gate.borrow_mut().finish();
            let Some(data) = encoded else {
                return;
            };
            // Stop may have landed while the frame was encoding.
            if run_is_sampling() {
                let _ = link.send(ClientMessage::Frame { data });
            }
        });
    }))
}
