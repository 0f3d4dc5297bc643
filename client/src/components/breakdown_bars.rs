//! Horizontal bars for a per-zone risk breakdown.

use leptos::prelude::*;
use wire::Severity;

use crate::util::severity::{part_label, severity_class};

/// Renders `(zone, risk)` pairs, highest risk first.
#[component]
pub fn BreakdownBars(#[prop(into)] entries: Signal<Vec<(String, u32)>>) -> impl IntoView {
    let sorted = move || {
        let mut entries = entries.get();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    };

    view! {
        <div class="breakdown">
            <Show
                when=move || !entries.with(Vec::is_empty)
                fallback=|| view! { <p class="breakdown__empty">"No zone data yet."</p> }
            >
                <For each=sorted key=|(zone, risk)| (zone.clone(), *risk) let:entry>
                    {
                        let (zone, risk) = entry;
                        let class = format!("breakdown__fill {}", severity_class(Severity::from_score(risk)));
                        let width = format!("width: {}%", risk.min(100));
                        view! {
                            <div class="breakdown__row">
                                <span class="breakdown__label">{part_label(&zone)}</span>
                                <span class="breakdown__track">
                                    <span class=class style=width></span>
                                </span>
                                <span class="breakdown__value">{format!("{risk}%")}</span>
                            </div>
                        }
                    }
                </For>
            </Show>
        </div>
    }
}
