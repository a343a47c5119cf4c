//! Small component kit used by the views.
//!
//! Interactive pieces (switch, toast) wrap `dioxus-primitives`; the rest are
//! plain styled elements.

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::Card;

mod progress;
pub use progress::ProgressBar;

mod separator;
pub use separator::Separator;

mod switch;
pub use switch::Switch;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
