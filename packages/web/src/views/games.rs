use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card};
use ui::icons::{FaArrowLeft, FaGamepad};
use ui::Icon;

use crate::Route;

/// Landing page for the games section linked from the profile.
#[component]
pub fn Games() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "view-page",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    nav.push(Route::Profile {});
                },
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                "Back to profile"
            }
            h1 { class: "view-title", "Interactive Games & Quizzes" }
            Card {
                class: "games-card",
                div { class: "games-icon", Icon { icon: FaGamepad, width: 32, height: 32 } }
                p { "Learn while having fun. New games are added with every course." }
            }
        }
    }
}
