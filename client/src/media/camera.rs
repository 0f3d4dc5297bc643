//! Webcam acquisition via `navigator.mediaDevices.getUserMedia`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use capture::{CaptureError, FRAME_HEIGHT, FRAME_WIDTH};

/// `getUserMedia` constraints: front camera at the sampling resolution, no audio.
pub fn camera_constraints() -> serde_json::Value {
    serde_json::json!({
        "video": {
            "width": { "ideal": FRAME_WIDTH },
            "height": { "ideal": FRAME_HEIGHT },
            "facingMode": "user",
        },
        "audio": false,
    })
}

/// Map a `getUserMedia` rejection (DOMException name and message) to a capture error.
pub fn classify_media_error(name: &str, message: &str) -> CaptureError {
    match name {
        "NotFoundError" | "DevicesNotFoundError" | "OverconstrainedError" => {
            CaptureError::PermissionDenied("no usable camera was found".to_owned())
        }
        "NotReadableError" | "TrackStartError" | "AbortError" => {
            CaptureError::PermissionDenied("the camera is in use by another application".to_owned())
        }
        "NotSupportedError" | "TypeError" => CaptureError::Unsupported,
        _ if message.is_empty() => CaptureError::PermissionDenied(name.to_owned()),
        _ => CaptureError::PermissionDenied(message.to_owned()),
    }
}

#[cfg(feature = "hydrate")]
fn js_error(value: &wasm_bindgen::JsValue) -> CaptureError {
    let field = |key: &str| {
        js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    classify_media_error(&field("name"), &field("message"))
}

/// Prompt for camera access and return the granted stream.
///
/// # Errors
///
/// Returns [`CaptureError::Unsupported`] without `mediaDevices`, otherwise
/// [`CaptureError::PermissionDenied`] when the user or platform refuses.
#[cfg(feature = "hydrate")]
pub async fn acquire_camera() -> Result<web_sys::MediaStream, CaptureError> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(CaptureError::Unsupported)?;
    let devices = window.navigator().media_devices().map_err(|_| CaptureError::Unsupported)?;

    let constraints_value =
        js_sys::JSON::parse(&camera_constraints().to_string()).map_err(|_| CaptureError::Unsupported)?;
    let constraints: web_sys::MediaStreamConstraints = constraints_value.unchecked_into();

    let promise = devices.get_user_media_with_constraints(&constraints).map_err(|e| js_error(&e))?;
    let stream = wasm_bindgen_futures::JsFuture::from(promise).await.map_err(|e| js_error(&e))?;
    stream.dyn_into::<web_sys::MediaStream>().map_err(|_| CaptureError::Unsupported)
}

/// Stop every track so the camera indicator turns off.
#[cfg(feature = "hydrate")]
pub fn release_stream(stream: &web_sys::MediaStream) {
    use wasm_bindgen::JsCast;

    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}
