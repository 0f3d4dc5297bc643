//! WebSocket client for the `/ws/camera` live analysis channel.
//!
//! One socket per capture run. The loop opens the socket, reports
//! `ChannelOpened` once the handshake completes, forwards outbound
//! [`ClientMessage`]s from an mpsc queue, and feeds decoded inbound messages
//! into the capture reducer. When the socket ends for any reason it reports
//! `ChannelClosed`; there is no reconnect. Every event is tagged with the run
//! that opened the socket, so a socket outliving its run cannot touch the next.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "camera_client_test.rs"]
mod camera_client_test;

use capture::CaptureEvent;
use wire::{ServerMessage, WireError, decode_server_message};
#[cfg(feature = "hydrate")]
use wire::ClientMessage;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::live::LiveState;

/// Handshake progress check interval while the socket is connecting.
#[cfg(feature = "hydrate")]
const OPEN_POLL_MS: u64 = 20;

/// Reducer event for one inbound server message, if it affects the session.
pub fn server_message_to_event(message: ServerMessage) -> Option<CaptureEvent> {
    match message {
        ServerMessage::SessionStart { session_id } => Some(CaptureEvent::SessionStarted { session_id }),
        ServerMessage::Analysis(frame) => Some(CaptureEvent::Analysis(frame)),
        ServerMessage::Error { .. } | ServerMessage::Unknown => None,
    }
}

/// Decode one text frame into a reducer event.
///
/// # Errors
///
/// Returns the [`WireError`] for malformed frames; callers log and skip them.
pub fn inbound_event(text: &str) -> Result<Option<CaptureEvent>, WireError> {
    let message = decode_server_message(text)?;
    if let ServerMessage::Error { message } = &message {
        #[cfg(feature = "hydrate")]
        leptos::logging::warn!("camera socket error from server: {message}");
        #[cfg(not(feature = "hydrate"))]
        let _ = message;
    }
    Ok(server_message_to_event(message))
}

/// Outbound side of a running camera socket, shared with the frame sampler.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct CameraLink {
    pub sender: futures::channel::mpsc::UnboundedSender<ClientMessage>,
    open: std::rc::Rc<std::cell::Cell<bool>>,
}

#[cfg(feature = "hydrate")]
impl CameraLink {
    /// Socket handshake finished and the queue still accepts messages.
    pub fn is_open(&self) -> bool {
        self.open.get() && !self.sender.is_closed()
    }

    /// Queue a message. Returns `false` once the socket is gone.
    pub fn send(&self, message: ClientMessage) -> bool {
        self.sender.unbounded_send(message).is_ok()
    }

    /// Send a best-effort `stop`, then close the queue so the socket shuts down.
    pub fn close(&self) {
        let _ = self.sender.unbounded_send(ClientMessage::Stop);
        self.sender.close_channel();
    }
}

/// Spawn the socket task for capture run `run`.
#[cfg(feature = "hydrate")]
pub fn spawn_camera_client(url: String, live: RwSignal<LiveState>, run: u64) -> CameraLink {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<ClientMessage>();
    let open = std::rc::Rc::new(std::cell::Cell::new(false));
    let link = CameraLink { sender: tx, open: open.clone() };

    leptos::task::spawn_local(async move {
        match connect_and_run(&url, live, run, &open, rx).await {
            Ok(()) => leptos::logging::log!("camera socket closed (run {run})"),
            Err(e) => {
                leptos::logging::warn!("camera socket failed to open: {e}");
                dispatch(live, run, &CaptureEvent::Failed(capture::CaptureError::ChannelOpen(e)));
            }
        }
        open.set(false);
        dispatch(live, run, &CaptureEvent::ChannelClosed);
    });

    link
}

#[cfg(feature = "hydrate")]
fn dispatch(live: RwSignal<LiveState>, run: u64, event: &CaptureEvent) {
    let _ = live.try_update(|s| s.dispatch_for(run, event));
}

/// Wait for the handshake; fails if the socket closes first or the run was
/// abandoned while connecting.
#[cfg(feature = "hydrate")]
async fn wait_for_open(
    ws: &gloo_net::websocket::futures::WebSocket,
    live: RwSignal<LiveState>,
    run: u64,
) -> Result<(), String> {
    use gloo_net::websocket::State;

    loop {
        match ws.state() {
            State::Open => return Ok(()),
            State::Closing | State::Closed => return Err("connection refused".to_owned()),
            State::Connecting => {}
        }
        let connecting = live.try_with_untracked(|s| s.session.is_connecting_run(run)).unwrap_or(false);
        if !connecting {
            return Err("capture cancelled while connecting".to_owned());
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(OPEN_POLL_MS)).await;
    }
}

/// Connect to the socket and pump messages until either side ends.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    live: RwSignal<LiveState>,
    run: u64,
    open: &std::cell::Cell<bool>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<ClientMessage>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    wait_for_open(&ws, live, run).await?;
    open.set(true);
    dispatch(live, run, &CaptureEvent::ChannelOpened);

    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(message) = rx.next().await {
            let stop = matches!(message, ClientMessage::Stop);
            match wire::encode_client_message(&message) {
                Ok(text) => {
                    if ws_write.send(Message::Text(text)).await.is_err() {
                        break;
                    }
                }
                Err(e) => leptos::logging::warn!("camera message encode failed: {e}"),
            }
            if stop {
                break;
            }
        }
        let _ = ws_write.close().await;
    };

    let recv_task = async {
        while let Some(message) = ws_read.next().await {
            match message {
                Ok(Message::Text(text)) => match inbound_event(&text) {
                    Ok(Some(event)) => dispatch(live, run, &event),
                    Ok(None) => {}
                    Err(e) => leptos::logging::warn!("camera message decode failed: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("camera socket recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}
