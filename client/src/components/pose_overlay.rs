//! Skeleton overlay drawn over the analysis video.
//!
//! Keypoints arrive normalized (0..1) so the overlay scales with whatever size
//! the video is rendered at.

#[cfg(test)]
#[path = "pose_overlay_test.rs"]
mod pose_overlay_test;

use leptos::prelude::*;
use wire::Keypoint;

/// Keypoints below this confidence are not drawn.
pub const MIN_CONFIDENCE: f64 = 0.3;

/// Limb connections between named keypoints.
pub const SKELETON: &[(&str, &str)] = &[
    ("nose", "left_eye"),
    ("nose", "right_eye"),
    ("left_eye", "left_ear"),
    ("right_eye", "right_ear"),
    ("left_shoulder", "right_shoulder"),
    ("left_shoulder", "left_elbow"),
    ("left_elbow", "left_wrist"),
    ("right_shoulder", "right_elbow"),
    ("right_elbow", "right_wrist"),
    ("left_shoulder", "left_hip"),
    ("right_shoulder", "right_hip"),
    ("left_hip", "right_hip"),
    ("left_hip", "left_knee"),
    ("left_knee", "left_ankle"),
    ("right_hip", "right_knee"),
    ("right_knee", "right_ankle"),
];

type Point = (f64, f64);

/// Confident keypoints, in normalized coordinates.
pub fn visible_joints(pose: &[Keypoint]) -> Vec<Point> {
    pose.iter().filter(|k| k.confidence >= MIN_CONFIDENCE).map(|k| (k.x, k.y)).collect()
}

/// Limb segments whose both ends are confident, in normalized coordinates.
pub fn skeleton_segments(pose: &[Keypoint]) -> Vec<(Point, Point)> {
    let find = |name: &str| {
        pose.iter()
            .find(|k| k.name == name && k.confidence >= MIN_CONFIDENCE)
            .map(|k| (k.x, k.y))
    };
    SKELETON
        .iter()
        .filter_map(|&(from, to)| Some((find(from)?, find(to)?)))
        .collect()
}

#[component]
pub fn PoseOverlay(
    #[prop(into)] pose: Signal<Option<Vec<Keypoint>>>,
    /// Risk at the playhead; tints the skeleton.
    #[prop(into)]
    risk: Signal<Option<u32>>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let pose = pose.get();
        let color = crate::util::severity::risk_color(risk.get().unwrap_or(0));
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        draw_pose(&canvas, pose.as_deref().unwrap_or_default(), color);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (pose, risk);

    view! { <canvas class="pose-overlay" node_ref=canvas_ref aria-hidden="true"></canvas> }
}

#[cfg(feature = "hydrate")]
fn draw_pose(canvas: &web_sys::HtmlCanvasElement, pose: &[Keypoint], color: &str) {
    use wasm_bindgen::JsCast;

    let width = f64::from(canvas.client_width().max(1));
    let height = f64::from(canvas.client_height().max(1));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(width.round() as u32);
        canvas.set_height(height.round() as u32);
    }

    let Some(ctx_value) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx_value.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_line_width(3.0);
    ctx.set_stroke_style_str(color);
    for ((x1, y1), (x2, y2)) in skeleton_segments(pose) {
        ctx.begin_path();
        ctx.move_to(x1 * width, y1 * height);
        ctx.line_to(x2 * width, y2 * height);
        ctx.stroke();
    }

    ctx.set_fill_style_str("#ffffff");
    for (x, y) in visible_joints(pose) {
        ctx.begin_path();
        let _ = ctx.arc(x * width, y * height, 4.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}
