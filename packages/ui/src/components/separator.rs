use dioxus::prelude::*;

#[component]
pub fn Separator() -> Element {
    rsx! {
        div { class: "separator", role: "separator" }
    }
}
