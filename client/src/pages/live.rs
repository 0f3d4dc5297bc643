//! Live capture page: webcam preview, annotated feedback, and running metrics.
//!
//! SYSTEM CONTEXT
//! ==============
//! All transitions go through `LiveState::dispatch`. The page owns the
//! capture slot: resources are released whenever the session stops holding
//! them (stop, failure, unexpected close) and on navigation away.

use leptos::prelude::*;

#[cfg(not(feature = "hydrate"))]
use capture::CaptureEvent;
use capture::CaptureStatus;

use crate::components::breakdown_bars::BreakdownBars;
use crate::components::live_metrics::LiveMetrics;
use crate::components::risk_chart::RiskChart;
use crate::components::severity_badge::SeverityBadge;
#[cfg(feature = "hydrate")]
use crate::media::live_capture::{CaptureSlot, release_capture, start_live_capture, stop_live_capture};
use crate::state::live::{LiveState, SaveStatus};
use crate::util::config::ApiConfig;
use crate::util::severity::part_label;

#[component]
pub fn LivePage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiConfig>());
    let live = RwSignal::new(LiveState::default());
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "hydrate")]
    let slot: CaptureSlot = StoredValue::new_local(None);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if !live.with(|s| s.session.holds_resources()) {
                release_capture(slot);
            }
        });
        on_cleanup(move || {
            let _ = live.try_update(|s| s.dispatch(&capture::CaptureEvent::StopRequested));
            release_capture(slot);
        });
    }

    let on_start = move |_| {
        #[cfg(feature = "hydrate")]
        start_live_capture(api.get_value(), live, video_ref, slot);
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, video_ref);
    };

    let on_stop = move |_| {
        #[cfg(feature = "hydrate")]
        stop_live_capture(live, slot);
        #[cfg(not(feature = "hydrate"))]
        live.update(|s| s.dispatch(&CaptureEvent::StopRequested));
    };

    let on_save = move |_| {
        let Some(request) = live.try_update(LiveState::begin_save).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::save_camera_session(&api, &request)
                    .await
                    .map(|saved| saved.video_id)
                    .map_err(|e| e.to_string());
                if let Err(e) = &result {
                    leptos::logging::warn!("saving live session failed: {e}");
                }
                let _ = live.try_update(|s| s.finish_save(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let status = move || live.with(|s| s.session.status);
    let history = Signal::derive(move || live.with(|s| s.session.risk_history.to_vec()));
    let breakdown = Signal::derive(move || {
        live.with(|s| s.session.breakdown.iter().map(|(zone, risk)| (zone.clone(), *risk)).collect::<Vec<_>>())
    });
    let annotated = move || {
        live.with(|s| s.session.annotated_frame.clone())
            .map(|frame| view! { <img class="live-page__annotated" src=format!("data:image/jpeg;base64,{frame}") alt="Annotated frame" /> })
    };

    view! {
        <section class="live-page">
            <h1 class="live-page__title">"Live monitoring"</h1>
            <div class="live-page__stage">
                <video
                    class="live-page__preview"
                    node_ref=video_ref
                    autoplay=true
                    muted=true
                    playsinline=true
                ></video>
                {annotated}
            </div>
            {move || live.with(|s| s.session.error.clone()).map(|e| view! { <p class="live-page__error">{e}</p> })}
            <div class="live-page__controls">
                <button
                    class="btn btn--primary"
                    on:click=on_start
                    disabled=move || !live.with(|s| s.session.can_start())
                >
                    {move || if status() == CaptureStatus::Stopped { "Start new session" } else { "Start" }}
                </button>
                <button
                    class="btn"
                    on:click=on_stop
                    disabled=move || !live.with(|s| s.session.holds_resources())
                >
                    "Stop"
                </button>
                <Show when=move || status() == CaptureStatus::Stopped>
                    <button class="btn" on:click=on_save disabled=move || !live.with(LiveState::can_save)>
                        "Save session"
                    </button>
                </Show>
                <span class="live-page__save-status">
                    {move || match live.with(|s| s.save.clone()) {
                        SaveStatus::Idle => String::new(),
                        SaveStatus::Saving => "Saving...".to_owned(),
                        SaveStatus::Saved(id) => format!("Saved as session {id}"),
                        SaveStatus::Failed(e) => format!("Save failed: {e}"),
                    }}
                </span>
            </div>
            <LiveMetrics live=live />
            <div class="live-page__panels">
                <RiskChart values=history label="Risk (last 120 frames)" />
                <BreakdownBars entries=breakdown />
            </div>
            <section class="live-page__events">
                <h3>"Flagged moments"</h3>
                {move || {
                    let events = live.with(|s| s.session.events.events().to_vec());
                    if events.is_empty() {
                        return view! { <p class="live-page__events-empty">"Nothing flagged yet."</p> }.into_any();
                    }
                    view! {
                        <ul class="live-page__events-list">
                            {events
                                .into_iter()
                                .map(|event| {
                                    let part = part_label(&event.part);
                                    view! {
                                        <li>
                                            <span class="live-page__event-time">{event.timestamp}</span>
                                            <span>{part}</span>
                                            <SeverityBadge severity=event.severity score=event.risk />
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>
        </section>
    }
}
