//! Analysis viewer: annotated video with pose overlay, risk timeline, events,
//! suggestions, and the assistant chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route is `/analysis/:id?sport=`. A poll task fills `AnalysisState`
//! once the backend finishes; afterwards the video clock is the single
//! playhead shared by the chart, overlay, and event list.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use wire::{AnalysisResponse, Severity};

use crate::components::chat_panel::ChatPanel;
use crate::components::pose_overlay::PoseOverlay;
use crate::components::risk_chart::RiskChart;
use crate::components::risk_events::RiskEvents;
use crate::components::severity_badge::SeverityBadge;
use crate::net::api::playback_url;
use crate::state::analysis::{AnalysisPhase, AnalysisState};
use crate::util::config::ApiConfig;
use crate::util::timeline;

const DEFAULT_SPORT: &str = "general";

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    // Re-mount the screen when the route points at another video.
    move || {
        let video_id = params.with(|p| p.get("id")).unwrap_or_default();
        let sport = query
            .with(|q| q.get("sport"))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SPORT.to_owned());
        view! { <AnalysisScreen video_id=video_id sport=sport /> }
    }
}

#[component]
fn AnalysisScreen(video_id: String, sport: String) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let state = RwSignal::new(AnalysisState::new(&video_id, &sport));

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        crate::net::poll::spawn_analysis_poll(api.clone(), state, alive.clone());
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Keyed on the phase alone: playhead and seek writes must not rebuild
    // the result view (and with it the seek effect and chat input).
    let phase = Memo::new(move |_| state.with(AnalysisState::phase));
    let attempts = Memo::new(move |_| state.with(|s| s.attempts));

    let body = move || match phase.get() {
        AnalysisPhase::Loading => view! {
            <div class="analysis-page__loading">
                <div class="spinner"></div>
                <p>"Analysing movement... this can take a few minutes for longer clips."</p>
                <p class="analysis-page__attempts">{move || format!("Checked {} times", attempts.get())}</p>
            </div>
        }
            .into_any(),
        AnalysisPhase::Failed(reason) => view! {
            <div class="analysis-page__error">
                <h2>"Analysis failed"</h2>
                <p>{reason}</p>
                <a class="btn btn--primary" href="/">
                    "Upload another video"
                </a>
            </div>
        }
            .into_any(),
        AnalysisPhase::TimedOut => view! {
            <div class="analysis-page__error">
                <h2>"Still processing"</h2>
                <p>"The analysis is taking longer than expected. Reload this page later to check again."</p>
                <a class="btn" href="/">
                    "Back to upload"
                </a>
            </div>
        }
            .into_any(),
        AnalysisPhase::Ready => {
            let src = state.with_untracked(|s| s.result().map(|r| playback_url(&api, r))).unwrap_or_default();
            view! { <AnalysisResult state=state src=src video_id=video_id.clone() /> }.into_any()
        }
    };

    view! { <section class="analysis-page">{body}</section> }
}

/// Header and recommendation fields of a finished analysis. The result is
/// immutable once shown, so these are read once at mount.
#[derive(Default)]
struct ResultSummary {
    title: String,
    meta: String,
    peak_risk: u32,
    overall_risk: u32,
    overall_severity: Severity,
    suggestions: Vec<String>,
    risk_timeline: Vec<u32>,
}

impl ResultSummary {
    fn of(result: &AnalysisResponse) -> Self {
        Self {
            title: result.player_name.clone().unwrap_or_else(|| "Session analysis".to_owned()),
            meta: format!(
                "{} · {} · {} fps · {} frames",
                result.sport.as_deref().unwrap_or(DEFAULT_SPORT),
                result.duration.as_deref().unwrap_or("0:00"),
                result.fps,
                result.total_frames,
            ),
            peak_risk: result.peak_risk,
            overall_risk: result.overall_risk,
            overall_severity: result.overall_severity,
            suggestions: result.suggestions.clone(),
            risk_timeline: result.risk_timeline.clone(),
        }
    }
}

#[component]
fn AnalysisResult(state: RwSignal<AnalysisState>, src: String, video_id: String) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let summary = state.with_untracked(|s| s.result().map(ResultSummary::of)).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let seek = Memo::new(move |_| state.with(|s| s.seek));
        let applied_seq = StoredValue::new(state.with_untracked(|s| s.seek.map_or(0, |k| k.seq)));
        Effect::new(move || {
            let Some(seek) = seek.get() else {
                return;
            };
            if seek.seq == applied_seq.get_value() {
                return;
            }
            applied_seq.set_value(seek.seq);
            if let Some(video) = video_ref.get_untracked() {
                video.set_current_time(seek.seconds);
            }
        });
    }

    let on_time_update = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(video) = video_ref.get_untracked() {
            let seconds = video.current_time();
            state.update(|s| s.set_playhead(seconds));
        }
    };
    let on_metadata = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(video) = video_ref.get_untracked() {
            let seconds = video.duration();
            state.update(|s| s.set_media_duration(seconds));
        }
    };

    let playhead = Memo::new(move |_| state.with(|s| timeline::fraction_of(s.playhead, s.duration())));
    let pose = Memo::new(move |_| state.with(|s| s.current_pose().map(<[_]>::to_vec)));
    let current_risk = Memo::new(move |_| state.with(AnalysisState::current_risk));
    let clock = Memo::new(move |_| {
        state.with(|s| match s.current_risk() {
            Some(risk) => format!("{} · risk {risk}%", timeline::format_timestamp(s.playhead)),
            None => timeline::format_timestamp(s.playhead),
        })
    });
    let on_seek = Callback::new(move |fraction: f64| state.update(|s| s.seek_fraction(fraction)));

    let ResultSummary { title, meta, peak_risk, overall_risk, overall_severity, suggestions, risk_timeline } = summary;

    view! {
        <header class="analysis-page__header">
            <div>
                <h1>{title}</h1>
                <p class="analysis-page__meta">{meta}</p>
            </div>
            <div class="analysis-page__score">
                <span>"Overall risk"</span>
                <SeverityBadge severity=overall_severity score=overall_risk />
                <span class="analysis-page__peak">{format!("Peak {peak_risk}%")}</span>
            </div>
        </header>
        <div class="analysis-page__grid">
            <div class="analysis-page__player">
                <div class="analysis-page__stage">
                    <video
                        class="analysis-page__video"
                        src=src
                        controls=true
                        playsinline=true
                        node_ref=video_ref
                        on:timeupdate=on_time_update
                        on:loadedmetadata=on_metadata
                    ></video>
                    <PoseOverlay pose=pose risk=current_risk />
                </div>
                <div class="analysis-page__clock">{move || clock.get()}</div>
                <RiskChart values=risk_timeline playhead=playhead on_seek=on_seek label="Risk timeline" />
                <RiskEvents state=state />
            </div>
            <aside class="analysis-page__side">
                <section class="analysis-page__suggestions">
                    <h3>"Recommendations"</h3>
                    <ul>{suggestions.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}</ul>
                </section>
                <ChatPanel video_id=video_id analysis=state />
            </aside>
        </div>
    }
}
