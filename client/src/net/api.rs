//! REST API helpers for communicating with the analysis backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers decide whether a failure
//! is ignored (polling), substituted (chat), or shown inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use wire::UploadResponse;
use wire::{AnalysisResponse, CameraSaveRequest, CameraSaveResponse, ChatRequest, ChatResponse, PlayerProfile};

use crate::util::config::ApiConfig;

/// Path of the live camera socket.
pub const CAMERA_WS_PATH: &str = "/ws/camera";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_path() -> &'static str {
    "/upload"
}

#[cfg(any(test, feature = "hydrate"))]
fn analysis_path(video_id: &str) -> String {
    format!("/analysis/{video_id}")
}

/// Query pairs for the analysis fetch; gloo-net encodes the values.
#[cfg(any(test, feature = "hydrate"))]
fn analysis_query(sport: &str) -> [(&'static str, &str); 1] {
    [("sport", sport)]
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_path(video_id: &str) -> String {
    format!("/chat/{video_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn player_path(player_id: &str) -> String {
    format!("/players/{player_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn camera_save_path() -> &'static str {
    "/camera/save"
}

/// URL of the original upload, served by `GET /video/{videoId}`.
pub fn original_video_url(api: &ApiConfig, video_id: &str) -> String {
    api.endpoint(&format!("/video/{video_id}"))
}

/// URL of the annotated render, falling back to the original upload when the
/// backend did not produce one.
pub fn playback_url(api: &ApiConfig, analysis: &AnalysisResponse) -> String {
    match analysis.annotated_video_url.as_deref().filter(|u| !u.is_empty()) {
        Some(reference) => api.asset_url(reference),
        None => original_video_url(api, &analysis.video_id),
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Upload a video with `POST /upload` (multipart field `file`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that is not an upload response.
#[cfg(feature = "hydrate")]
pub async fn upload_video(api: &ApiConfig, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("form data unavailable".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport("could not attach file".to_owned()))?;
    let resp = gloo_net::http::Request::post(&api.endpoint(upload_path()))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_json(resp).await
}

/// Fetch the analysis envelope with `GET /analysis/{videoId}?sport=`.
///
/// # Errors
///
/// Returns an [`ApiError`]; a `404` before the job is registered surfaces as
/// [`ApiError::Status`].
pub async fn fetch_analysis(api: &ApiConfig, video_id: &str, sport: &str) -> Result<AnalysisResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api.endpoint(&analysis_path(video_id)))
            .query(analysis_query(sport))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, video_id, sport);
        Err(ApiError::Unavailable)
    }
}

/// Ask the assistant about a video with `POST /chat/{videoId}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure; the chat panel substitutes a
/// fallback reply.
pub async fn send_chat(api: &ApiConfig, video_id: &str, message: &str) -> Result<ChatResponse, ApiError> {
    let body = ChatRequest { message: message.to_owned(), video_id: Some(video_id.to_owned()) };
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api.endpoint(&chat_path(video_id)))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, body);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a player profile with `GET /players/{playerId}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn fetch_player(api: &ApiConfig, player_id: &str) -> Result<PlayerProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api.endpoint(&player_path(player_id)))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, player_id);
        Err(ApiError::Unavailable)
    }
}

/// Persist a stopped live session with `POST /camera/save`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn save_camera_session(api: &ApiConfig, request: &CameraSaveRequest) -> Result<CameraSaveResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api.endpoint(camera_save_path()))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, request);
        Err(ApiError::Unavailable)
    }
}
