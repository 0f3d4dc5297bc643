//! Canvas line chart of 0-100 risk scores.
//!
//! Used for the analysis timeline (playhead + click-to-seek), the live risk
//! history, and the player trend. Segments are coloured by severity band and
//! long series are downsampled per pixel, keeping peaks.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::chart::{PlotBox, series_points};
#[cfg(feature = "hydrate")]
use crate::util::severity::risk_color;
#[cfg(feature = "hydrate")]
use crate::util::timeline::downsample_peaks;

/// Inner padding between canvas edge and plot box, in CSS pixels.
#[cfg(feature = "hydrate")]
const CHART_PADDING: f64 = 8.0;

#[component]
pub fn RiskChart(
    #[prop(into)] values: Signal<Vec<u32>>,
    /// Playhead position along the series (0..=1).
    #[prop(optional, into)]
    playhead: Option<Signal<f64>>,
    /// Receives the clicked position along the series (0..=1).
    #[prop(optional)]
    on_seek: Option<Callback<f64>>,
    /// Mark each sample with a dot (sparse series such as session history).
    #[prop(optional)]
    show_points: bool,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let values = values.get();
        let playhead = playhead.map(|p| p.get());
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        draw_risk_chart(&canvas, &values, playhead, show_points);
    });
    // The canvas is only drawn after hydration.
    #[cfg(not(feature = "hydrate"))]
    let _ = (playhead, show_points);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(on_seek) = on_seek else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let width = f64::from(canvas.client_width().max(1));
            let height = f64::from(canvas.client_height().max(1));
            let plot = PlotBox::inset(width, height, CHART_PADDING);
            on_seek.run(plot.fraction_at(f64::from(ev.offset_x())));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_seek);
        }
    };

    view! {
        <figure class="risk-chart" class:risk-chart--seekable=on_seek.is_some()>
            {label.map(|text| view! { <figcaption class="risk-chart__label">{text}</figcaption> })}
            <canvas class="risk-chart__canvas" node_ref=canvas_ref on:click=on_click></canvas>
            <Show when=move || values.with(Vec::is_empty)>
                <span class="risk-chart__empty">"No data yet"</span>
            </Show>
        </figure>
    }
}

#[cfg(feature = "hydrate")]
fn draw_risk_chart(canvas: &web_sys::HtmlCanvasElement, values: &[u32], playhead: Option<f64>, show_points: bool) {
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
    let plot = PlotBox::inset(width, height, CHART_PADDING);

    // Severity band boundaries.
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str("#e5e7eb");
    for level in [30, 60, 80] {
        let y = plot.y_for_risk(level);
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.right(), y);
        ctx.stroke();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_points = (plot.width.round() as usize).max(2);
    let samples = downsample_peaks(values, max_points);
    let points = series_points(&samples, &plot);

    ctx.set_line_width(2.0);
    for (segment, risk) in points.windows(2).zip(samples.iter().skip(1)) {
        ctx.set_stroke_style_str(risk_color(*risk));
        ctx.begin_path();
        ctx.move_to(segment[0].0, segment[0].1);
        ctx.line_to(segment[1].0, segment[1].1);
        ctx.stroke();
    }

    if show_points || points.len() == 1 {
        for ((x, y), risk) in points.iter().zip(samples.iter()) {
            ctx.set_fill_style_str(risk_color(*risk));
            ctx.begin_path();
            let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }

    if let Some(fraction) = playhead {
        let x = plot.x_at(fraction);
        ctx.set_line_width(1.5);
        ctx.set_stroke_style_str("#111827");
        ctx.begin_path();
        ctx.move_to(x, plot.top);
        ctx.line_to(x, plot.bottom());
        ctx.stroke();
    }
}
