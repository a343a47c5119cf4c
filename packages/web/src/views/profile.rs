use dioxus::prelude::*;
use store::HerVoiceConfig;
use ui::views::ProfileView;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let config = use_context::<HerVoiceConfig>();
    let nav = use_navigator();

    rsx! {
        ProfileView {
            about: config.about,
            on_navigate_games: move |_| {
                nav.push(Route::Games {});
            },
            on_logged_out: move |_| {
                nav.replace(Route::Login { from: String::new() });
            },
        }
    }
}
