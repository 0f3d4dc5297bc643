//! Assistant chat panel for one analysed video.
//!
//! SYSTEM CONTEXT
//! ==============
//! Questions go to `POST /chat/{videoId}`; replies are rendered as markdown.
//! A reply that references a moment (`relatedTimestamp`) offers a jump link
//! that seeks the video.

use leptos::prelude::*;

use crate::state::analysis::AnalysisState;
use crate::state::chat::{ChatRole, ChatState};
use crate::util::config::ApiConfig;
use crate::util::markdown::render_markdown_html;

/// Starter questions matching the topics the backend answers.
const SUGGESTED_QUESTIONS: &[&str] = &["Give me an overall summary", "How is my knee?", "Any lower back risk?"];

#[component]
pub fn ChatPanel(video_id: String, analysis: RwSignal<AnalysisState>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let api = expect_context::<ApiConfig>();

    chat.update(|c| c.open(&video_id));

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let video_id = StoredValue::new(video_id);
    let api = StoredValue::new(api);

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.pending));
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let send = move |text: String| {
        let Some(question) = chat.try_update(|c| c.push_user(&text)).flatten() else {
            return;
        };
        input.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            let video_id = video_id.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::send_chat(&api, &video_id, &question).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("chat request failed: {e}");
                }
                if chat.try_update(|c| c.resolve(&video_id, result)) == Some(false) {
                    leptos::logging::log!("dropped chat reply for {video_id}: conversation moved on");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (question, api, video_id);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send(input.get_untracked());
        }
    };

    let pending = move || chat.with(|c| c.pending);
    let can_send = move || !input.with(|t| t.trim().is_empty()) && !pending();

    view! {
        <section class="chat-panel">
            <h3 class="chat-panel__title">"Ask PoseGuard"</h3>
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.with(|c| c.messages.clone());
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__suggestions">
                                {SUGGESTED_QUESTIONS
                                    .iter()
                                    .map(|question| {
                                        view! {
                                            <button
                                                class="chat-panel__suggestion"
                                                on:click=move |_| send((*question).to_owned())
                                            >
                                                {*question}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|msg| {
                            let is_assistant = msg.role == ChatRole::Assistant;
                            let body = if is_assistant {
                                let rendered = render_markdown_html(&msg.content);
                                view! { <div class="chat-panel__markdown" inner_html=rendered></div> }.into_any()
                            } else {
                                view! { <span>{msg.content}</span> }.into_any()
                            };
                            let confidence = msg
                                .confidence
                                .filter(|_| is_assistant)
                                .map(|c| {
                                    view! {
                                        <span class="chat-panel__confidence">
                                            {format!("{:.0}% confidence", c * 100.0)}
                                        </span>
                                    }
                                });
                            let jump = msg
                                .related_timestamp
                                .map(|timestamp| {
                                    let label = format!("Jump to {timestamp}");
                                    view! {
                                        <button
                                            class="chat-panel__jump"
                                            on:click=move |_| {
                                                analysis.update(|a| {
                                                    a.seek_timestamp(&timestamp);
                                                });
                                            }
                                        >
                                            {label}
                                        </button>
                                    }
                                });
                            view! {
                                <div class="chat-panel__message" class:chat-panel__message--assistant=is_assistant>
                                    {body}
                                    {confidence}
                                    {jump}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
                {move || pending().then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })}
            </div>
            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about this session..."
                    disabled=pending
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=move |_| send(input.get_untracked())
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}
