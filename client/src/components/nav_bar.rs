//! Top navigation bar.

use leptos::prelude::*;

/// Player whose dashboard the nav links to; the backend aggregates every
/// completed session under one profile.
const DEFAULT_PLAYER_ID: u32 = 1;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "PoseGuard"
            </a>
            <nav class="nav-bar__links">
                <a class="nav-bar__link" href="/">
                    "Upload"
                </a>
                <a class="nav-bar__link" href="/live">
                    "Live"
                </a>
                <a class="nav-bar__link" href=format!("/player/{DEFAULT_PLAYER_ID}")>
                    "Player"
                </a>
            </nav>
        </header>
    }
}
