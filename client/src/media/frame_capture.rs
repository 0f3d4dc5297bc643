//! Offscreen canvas that encodes video frames as base64 JPEG.
//!
//! Encoding is asynchronous (`canvas.toBlob` then `FileReader.readAsDataURL`),
//! so the result is delivered to a callback that runs exactly once, with
//! `None` when any step fails.

use std::cell::RefCell;
use std::rc::Rc;

use capture::{FRAME_HEIGHT, FRAME_MIME, FRAME_WIDTH, JPEG_QUALITY, strip_data_url};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type EncodeCallback = Box<dyn FnOnce(Option<String>)>;

/// Completion shared by every step of one encode.
#[derive(Clone)]
struct Completion(Rc<RefCell<Option<EncodeCallback>>>);

impl Completion {
    fn new(callback: impl FnOnce(Option<String>) + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(callback)))))
    }

    fn fire(&self, encoded: Option<String>) {
        let callback = self.0.borrow_mut().take();
        if let Some(callback) = callback {
            callback(encoded);
        }
    }
}

pub struct FrameCapturer {
    canvas: web_sys::HtmlCanvasElement,
    ctx: web_sys::CanvasRenderingContext2d,
}

impl FrameCapturer {
    /// Create the detached capture canvas at the sampling resolution.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas = document.create_element("canvas").ok()?.dyn_into::<web_sys::HtmlCanvasElement>().ok()?;
        canvas.set_width(FRAME_WIDTH);
        canvas.set_height(FRAME_HEIGHT);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Encode the frame currently shown by `video`.
    pub fn capture(&self, video: &web_sys::HtmlVideoElement, on_done: impl FnOnce(Option<String>) + 'static) {
        let done = Completion::new(on_done);
        let (width, height) = (f64::from(FRAME_WIDTH), f64::from(FRAME_HEIGHT));
        if self.ctx.draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, width, height).is_err() {
            done.fire(None);
            return;
        }

        let on_blob = {
            let done = done.clone();
            Closure::once_into_js(move |blob: JsValue| read_blob(blob, done))
        };
        if self
            .canvas
            .to_blob_with_type_and_encoder_options(on_blob.unchecked_ref(), FRAME_MIME, &JsValue::from_f64(JPEG_QUALITY))
            .is_err()
        {
            done.fire(None);
        }
    }
}

fn read_blob(blob: JsValue, done: Completion) {
    // toBlob passes null when the canvas could not be encoded.
    let Ok(blob) = blob.dyn_into::<web_sys::Blob>() else {
        done.fire(None);
        return;
    };
    let Ok(reader) = web_sys::FileReader::new() else {
        done.fire(None);
        return;
    };

    let on_load_end = {
        let reader = reader.clone();
        let done = done.clone();
        Closure::once_into_js(move || {
            let encoded = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .and_then(|url| strip_data_url(&url).map(str::to_owned));
            done.fire(encoded);
        })
    };
    reader.set_onloadend(Some(on_load_end.unchecked_ref()));
    if reader.read_as_data_url(&blob).is_err() {
        done.fire(None);
    }
}
