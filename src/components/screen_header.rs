use dioxus::prelude::*;

use crate::utils::theme::Palette;

/// Title row, search box and the simulate / clear controls.
#[allow(non_snake_case)]
#[component]
pub fn ScreenHeader(
    query: String,
    dark: bool,
    simulating: bool,
    on_query: EventHandler<String>,
    on_clear: EventHandler<()>,
    on_simulate: EventHandler<()>,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let palette = Palette::for_mode(dark);
    let theme_icon = if dark { "☀️" } else { "🌙" };

    rsx! {
        header { class: "header", style: "background-color:{palette.header_bg}",
            div { class: "header-content",
                div { class: "top-row",
                    div {
                        h1 { class: "header-title", style: "color:{palette.header_text}", "Leaderboard" }
                        p { class: "header-subtitle", style: "color:{palette.header_text}", "Global Rankings • Season 5" }
                    }
                    button {
                        class: "theme-toggle",
                        title: "Toggle theme",
                        onclick: move |_| on_toggle_theme.call(()),
                        "{theme_icon}"
                    }
                }

                div { class: "search-container", style: "background-color:{palette.input_bg}",
                    input {
                        class: "search-input",
                        style: "color:{palette.input_text};caret-color:#fff",
                        r#type: "text",
                        placeholder: "Search player by name...",
                        value: "{query}",
                        oninput: move |evt| on_query.call(evt.value()),
                    }

                    button {
                        class: "simulate-btn",
                        disabled: simulating,
                        onclick: move |_| on_simulate.call(()),
                        if simulating { "..." } else { "Simulate" }
                    }

                    if query.is_empty() {
                        span { class: "icon-btn", "🔍" }
                    } else {
                        button {
                            class: "icon-btn",
                            title: "Clear search",
                            onclick: move |_| on_clear.call(()),
                            "✕"
                        }
                    }
                }
            }
        }
    }
}
