use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::api;
use crate::components::{ScreenHeader, UserCard};
use crate::shared::actions::{run_fetch, run_simulate};
use crate::shared::view_state::{Mode, ViewState};
use crate::utils::theme::{prefers_dark_script, system_prefers_dark, Palette};

#[allow(non_snake_case)]
#[component]
pub fn LeaderboardScreen() -> Element {
    let mut view = use_signal(|| ViewState::new(system_prefers_dark()));

    // Initial load
    use_effect(move || {
        let request = view.write().mount();
        spawn(run_fetch(view, api::client(), request));
    });

    // Desktop/mobile webviews only answer asynchronously
    use_future(move || async move {
        match document::eval(&prefers_dark_script()).join::<bool>().await {
            Ok(dark) => view.write().apply_system_theme(dark),
            Err(e) => debug!("[view] system color scheme unavailable: {e:?}"),
        }
    });

    let state = view.read();
    let palette = Palette::for_mode(state.dark_mode);
    let color_scheme = if state.dark_mode { "dark" } else { "light" };
    let list_title = match state.mode {
        Mode::Leaderboard => "TOP PLAYERS",
        Mode::Search => "SEARCH RESULTS",
    };

    rsx! {
        document::Meta { name: "theme-color", content: "{palette.header_bg}" }
        document::Meta { name: "color-scheme", content: "{color_scheme}" }

        div { class: "root", style: "background-color:{palette.bg}",
            ScreenHeader {
                query: state.query.clone(),
                dark: state.dark_mode,
                simulating: state.simulating,
                on_query: move |text: String| {
                    let request = view.write().set_query(text);
                    if let Some(request) = request {
                        spawn(run_fetch(view, api::client(), request));
                    }
                },
                on_clear: move |_| {
                    let request = view.write().clear_query();
                    if let Some(request) = request {
                        spawn(run_fetch(view, api::client(), request));
                    }
                },
                on_simulate: move |_| {
                    spawn(run_simulate(view, api::client()));
                },
                on_toggle_theme: move |_| view.write().toggle_theme(),
            }

            main { class: "body",
                div { class: "list-header",
                    span { class: "list-section-title", style: "color:{palette.header_bg}", "{list_title}" }
                    span { style: "color:{palette.subtext}", "Updated live" }
                }

                if state.loading {
                    div { class: "center", style: "color:{palette.header_bg}",
                        div { class: "spinner" }
                    }
                } else {
                    div { class: "list-content",
                        for user in state.users.iter() {
                            UserCard {
                                key: "{user.username}",
                                user: user.clone(),
                                mode: state.mode,
                                dark: state.dark_mode,
                            }
                        }
                    }
                }
            }
        }
    }
}
