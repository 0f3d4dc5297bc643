//! Status and metric readout for a live capture session.

use leptos::prelude::*;

use crate::components::severity_badge::SeverityBadge;
use crate::state::live::LiveState;

#[component]
pub fn LiveMetrics(live: RwSignal<LiveState>) -> impl IntoView {
    let status = move || live.with(|s| s.session.status.label());
    let severity = Signal::derive(move || live.with(|s| s.session.severity));
    let risk = Signal::derive(move || live.with(|s| s.session.current_risk));

    view! {
        <dl class="live-metrics">
            <div class="live-metrics__item">
                <dt>"Status"</dt>
                <dd class="live-metrics__status">{status}</dd>
            </div>
            <div class="live-metrics__item">
                <dt>"Current"</dt>
                <dd>
                    <SeverityBadge severity=severity score=risk />
                </dd>
            </div>
            <div class="live-metrics__item">
                <dt>"Average"</dt>
                <dd>{move || format!("{:.1}%", live.with(|s| s.session.avg_risk))}</dd>
            </div>
            <div class="live-metrics__item">
                <dt>"Peak"</dt>
                <dd>{move || format!("{}%", live.with(|s| s.session.peak_risk))}</dd>
            </div>
            <div class="live-metrics__item">
                <dt>"Frames"</dt>
                <dd>{move || live.with(|s| s.session.frame_count)}</dd>
            </div>
            <div class="live-metrics__item">
                <dt>"Elapsed"</dt>
                <dd>{move || capture::format_timestamp(live.with(|s| s.session.elapsed))}</dd>
            </div>
            <div class="live-metrics__item">
                <dt>"FPS"</dt>
                <dd>{move || format!("{:.1}", live.with(|s| s.session.fps))}</dd>
            </div>
            <Show when=move || live.with(|s| s.session.stale_dropped > 0)>
                <div class="live-metrics__item live-metrics__item--warn">
                    <dt>"Out of order"</dt>
                    <dd>{move || live.with(|s| s.session.stale_dropped)}</dd>
                </div>
            </Show>
        </dl>
    }
}
