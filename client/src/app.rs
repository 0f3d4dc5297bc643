//! Root component, HTML shell, and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `shell` with the backend base URL embedded as a meta tag;
//! after hydration `App` reads it back so both halves agree on where the
//! analysis backend lives.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::nav_bar::NavBar;
use crate::pages::analysis::AnalysisPage;
use crate::pages::live::LivePage;
use crate::pages::player::PlayerPage;
use crate::pages::upload::UploadPage;
use crate::state::chat::ChatState;
use crate::util::config::{API_BASE_META, ApiConfig};

/// HTML document shell rendered on the server for every route.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let api_base = api.base_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name=API_BASE_META content=api_base />
                <AutoReload options=options.clone() />
                <HydrationScripts options=options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the backend configuration and the shared chat history, then
/// mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::detect);
    provide_context(api);
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/poseguard.css" />
        <Title text="PoseGuard" />
        <Router>
            <NavBar />
            <main class="app-main">
                <Routes fallback=|| view! { <p class="app-main__missing">"Page not found."</p> }>
                    <Route path=path!("/") view=UploadPage />
                    <Route path=path!("/live") view=LivePage />
                    <Route path=path!("/analysis/:id") view=AnalysisPage />
                    <Route path=path!("/player/:id") view=PlayerPage />
                </Routes>
            </main>
        </Router>
    }
}
