//! Clickable list of detected risk events.

use leptos::prelude::*;

use crate::components::severity_badge::SeverityBadge;
use crate::state::analysis::AnalysisState;
use crate::util::severity::part_label;

#[component]
pub fn RiskEvents(state: RwSignal<AnalysisState>) -> impl IntoView {
    // Memos keep playhead updates from rebuilding the list.
    let events = Memo::new(move |_| state.with(|s| s.result().map(|r| r.risks.clone()).unwrap_or_default()));
    let selected = Memo::new(move |_| state.with(|s| s.selected_event));

    view! {
        <section class="risk-events">
            <h3 class="risk-events__title">"Risk events"</h3>
            <Show
                when=move || events.with(|e| !e.is_empty())
                fallback=|| view! { <p class="risk-events__empty">"No risk events detected."</p> }
            >
                <ol class="risk-events__list">
                    {move || {
                        events
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, event)| {
                                let angle = event.angle.map(|a| format!("{a:.1}°"));
                                view! {
                                    <li
                                        class="risk-events__item"
                                        class:risk-events__item--selected=move || selected.get() == Some(index)
                                        on:click=move |_| state.update(|s| s.select_event(index))
                                    >
                                        <span class="risk-events__time">{event.timestamp.clone()}</span>
                                        <span class="risk-events__part">{part_label(&event.part)}</span>
                                        <SeverityBadge severity=event.severity score=event.risk />
                                        <span class="risk-events__description">{event.description.clone()}</span>
                                        {angle.map(|a| view! { <span class="risk-events__angle">{a}</span> })}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </Show>
        </section>
    }
}
