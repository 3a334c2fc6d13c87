use dioxus::prelude::*;

use crate::components::LeaderboardScreen;
use crate::{FAVICON, MAIN_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "Leaderboard" }
        LeaderboardScreen {}
    }
}
