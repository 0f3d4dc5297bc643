//! Player dashboard: risk trend across sessions, injury zones, past matches,
//! and recommended drills.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::PlayerProfile;

use crate::components::risk_chart::RiskChart;
use crate::state::player::{PlayerState, PlayerView, parse_player_id};
use crate::util::config::ApiConfig;
use crate::util::severity::{delta_label, part_label, risk_color, trend_arrow, trend_class};

#[component]
pub fn PlayerPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let player_id = params.with(|p| p.get("id")).unwrap_or_default();
        view! { <PlayerScreen player_id=player_id /> }
    }
}

#[component]
fn PlayerScreen(player_id: String) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let state = RwSignal::new(PlayerState::new(&player_id));

    if parse_player_id(&player_id).is_none() {
        state.update(|s| s.view = PlayerView::Failed(format!("Unknown player id \"{player_id}\"")));
    } else {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_player(&api, &player_id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("player {player_id} fetch failed: {e}");
            }
            let _ = state.try_update(|s| s.apply(&player_id, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = api;
    }

    view! {
        <section class="player-page">
            {move || match state.with(|s| s.view.clone()) {
                PlayerView::Loading => view! { <div class="spinner"></div> }.into_any(),
                PlayerView::Failed(reason) => view! {
                    <div class="player-page__error">
                        <h2>"Player unavailable"</h2>
                        <p>{reason}</p>
                    </div>
                }
                    .into_any(),
                PlayerView::Ready(profile) if !profile.has_history() => view! {
                    <div class="player-page__empty">
                        <h2>{profile.name.clone()}</h2>
                        <p>"No completed sessions yet. Upload a clip to start building this player's history."</p>
                        <a class="btn btn--primary" href="/">
                            "Upload a video"
                        </a>
                    </div>
                }
                    .into_any(),
                PlayerView::Ready(profile) => {
                    let trend = Signal::derive(move || state.with(PlayerState::trend_values));
                    view! { <PlayerDashboard profile=*profile trend=trend /> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn PlayerDashboard(profile: PlayerProfile, trend: Signal<Vec<u32>>) -> impl IntoView {
    let latest = profile.latest_risk().unwrap_or(0);
    let delta = profile.risk_delta().map(delta_label);
    let zones: Vec<_> = profile.zones_by_risk().into_iter().cloned().collect();
    let age = (profile.age > 0).then(|| format!("Age {}", profile.age));

    view! {
        <header class="player-page__header">
            <div>
                <h1>{profile.name.clone()}</h1>
                <p class="player-page__meta">
                    {format!("{} · {} · {}", profile.sport, profile.team, profile.position)} {age.map(|a| format!(" · {a}"))}
                </p>
            </div>
            <div class="player-page__latest" style=format!("color: {}", risk_color(latest))>
                <span class="player-page__latest-value">{format!("{latest}%")}</span>
                <span class="player-page__latest-label">"latest risk"</span>
                {delta.map(|d| view! { <span class="player-page__delta">{d}</span> })}
            </div>
        </header>

        <RiskChart values=trend show_points=true label="Risk across sessions" />

        <section class="player-page__zones">
            <h3>"Injury zones"</h3>
            <ul>
                {zones
                    .into_iter()
                    .map(|zone| {
                        view! {
                            <li class="player-page__zone">
                                <span>{part_label(&zone.part)}</span>
                                <span style=format!("color: {}", risk_color(zone.risk))>{format!("{}%", zone.risk)}</span>
                                <span class=trend_class(zone.trend)>{trend_arrow(zone.trend)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>

        <section class="player-page__matches">
            <h3>"Past sessions"</h3>
            <table>
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Session"</th>
                        <th>"Risk"</th>
                        <th>"Status"</th>
                        <th>"Highlights"</th>
                    </tr>
                </thead>
                <tbody>
                    {profile
                        .past_matches
                        .into_iter()
                        .map(|m| {
                            view! {
                                <tr>
                                    <td>{m.date}</td>
                                    <td>{m.opponent}</td>
                                    <td style=format!("color: {}", risk_color(m.risk_score))>{format!("{}%", m.risk_score)}</td>
                                    <td>{m.status}</td>
                                    <td>{m.highlights}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>

        <section class="player-page__drills">
            <h3>"Recommended drills"</h3>
            <div class="player-page__drill-grid">
                {profile
                    .drills
                    .into_iter()
                    .map(|drill| {
                        view! {
                            <article class="drill-card">
                                <h4>{drill.name}</h4>
                                <p>{drill.description}</p>
                                <dl>
                                    <dt>"Target"</dt>
                                    <dd>{part_label(&drill.target_area)}</dd>
                                    <dt>"Dose"</dt>
                                    <dd>{format!("{} · {}", drill.duration, drill.frequency)}</dd>
                                    <dt>"Difficulty"</dt>
                                    <dd>{drill.difficulty}</dd>
                                    <dt>"Expected reduction"</dt>
                                    <dd>{format!("-{}%", drill.risk_reduction)}</dd>
                                </dl>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
