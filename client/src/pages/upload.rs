//! Upload intake page: choose a sport and a video, then hand off to analysis.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::upload::{ACCEPT_ATTR, SPORTS, UploadState};
use crate::util::config::ApiConfig;

#[cfg(feature = "hydrate")]
fn selected_file(file_ref: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    file_ref.get_untracked()?.files()?.get(0)
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiConfig>());
    let upload = RwSignal::new(UploadState::default());
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let navigate = use_navigate();

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(file) = selected_file(file_ref) {
            upload.update(|u| {
                u.select_file(&file.name());
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = selected_file(file_ref) else {
                upload.update(|u| u.fail("Choose a video file first.".to_owned()));
                return;
            };
            if !upload.try_update(UploadState::begin).unwrap_or(false) {
                return;
            }
            let sport = upload.with_untracked(|u| u.sport.clone());
            let api = api.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_video(&api, &file).await {
                    Ok(response) => {
                        leptos::logging::log!("uploaded {} as {}", response.filename, response.video_id);
                        let route = crate::state::upload::analysis_route(&response.video_id, &sport);
                        navigate(&route, NavigateOptions::default());
                    }
                    Err(e) => {
                        let _ = upload.try_update(|u| u.fail(format!("Upload failed: {e}")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, &navigate, file_ref);
        }
    };

    view! {
        <section class="upload-page">
            <h1 class="upload-page__title">"Analyse a training clip"</h1>
            <p class="upload-page__lead">
                "Upload a video and PoseGuard will track joint angles frame by frame and flag injury-risk moments."
            </p>
            <form class="upload-form" on:submit=on_submit>
                <label class="upload-form__field">
                    <span>"Sport"</span>
                    <select
                        class="upload-form__select"
                        on:change=move |ev| upload.update(|u| u.select_sport(&event_target_value(&ev)))
                        prop:value=move || upload.with(|u| u.sport.clone())
                    >
                        {SPORTS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="upload-form__field">
                    <span>"Video"</span>
                    <input
                        class="upload-form__file"
                        type="file"
                        accept=ACCEPT_ATTR
                        node_ref=file_ref
                        on:change=on_file_change
                    />
                </label>
                {move || {
                    upload.with(|u| u.error.clone()).map(|e| view! { <p class="upload-form__error">{e}</p> })
                }}
                <button
                    class="btn btn--primary upload-form__submit"
                    type="submit"
                    disabled=move || upload.with(|u| u.uploading || u.file_name.is_none())
                >
                    {move || if upload.with(|u| u.uploading) { "Uploading..." } else { "Upload and analyse" }}
                </button>
            </form>
            <p class="upload-page__alt">
                "No recording? " <a href="/live">"Monitor live from your camera"</a> "."
            </p>
        </section>
    }
}
