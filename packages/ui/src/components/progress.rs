use dioxus::prelude::*;

/// Horizontal bar filled to `value` percent.
#[component]
pub fn ProgressBar(value: u8, #[props(default = "".to_string())] class: String) -> Element {
    let value = value.min(100);

    rsx! {
        div {
            class: "progress {class}",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{value}",
            div {
                class: "progress-indicator",
                style: "width: {value}%",
            }
        }
    }
}
