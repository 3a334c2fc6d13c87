use dioxus::prelude::*;

use crate::shared::types::User;
use crate::shared::view_state::Mode;
use crate::utils::style::{avatar_color, initials, rank_style};
use crate::utils::theme::Palette;

#[allow(non_snake_case)]
#[component]
pub fn UserCard(user: User, mode: Mode, dark: bool) -> Element {
    let palette = Palette::for_mode(dark);
    let style = rank_style(user.rank, mode, dark);

    let card_style = match style.border {
        Some(border) => format!("background-color:{};border-color:{border}", style.card_bg),
        None => format!("background-color:{}", style.card_bg),
    };
    let badge_style = format!(
        "background-color:{};color:{}",
        style.badge_bg, style.badge_text
    );
    let avatar_style = format!("background-color:{}", avatar_color(&user.username));

    rsx! {
        div { class: "card", style: "{card_style}",
            div { class: "left-section",
                div { class: "rank-badge", style: "{badge_style}", "#{user.rank}" }
                div { class: "avatar", style: "{avatar_style}", "{initials(&user.username)}" }
                div { class: "user-info",
                    div { class: "username", style: "color:{palette.text}", "{user.username}" }
                    div { class: "user-subtext", style: "color:{palette.subtext}", "Grandmaster • Level 50" }
                }
            }
            div { class: "right-section",
                span { class: "rating-value", style: "color:{palette.text}", "{user.rating}" }
                span { class: "rating-label", style: "color:{palette.subtext}", "MMR" }
            }
        }
    }
}
