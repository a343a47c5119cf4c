use dioxus::prelude::*;
use dioxus_primitives::switch::{self, SwitchThumb};

#[component]
pub fn Switch(
    checked: bool,
    on_checked_change: EventHandler<bool>,
    #[props(default = "".to_string())] class: String,
) -> Element {
    rsx! {
        switch::Switch {
            class: "switch {class}",
            checked: Some(checked),
            on_checked_change: move |value: bool| on_checked_change.call(value),
            SwitchThumb { class: "switch-thumb" }
        }
    }
}
