//! Coloured severity pill with an optional score.

use leptos::prelude::*;
use wire::Severity;

use crate::util::severity::severity_class;

#[component]
pub fn SeverityBadge(#[prop(into)] severity: Signal<Severity>, #[prop(optional, into)] score: Option<Signal<u32>>) -> impl IntoView {
    view! {
        <span class=move || format!("severity-badge {}", severity_class(severity.get()))>
            {move || match score {
                Some(score) => format!("{}% {}", score.get(), severity.get()),
                None => severity.get().to_string(),
            }}
        </span>
    }
}
