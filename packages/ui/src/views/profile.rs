use dioxus::prelude::*;

use store::config::AboutConfig;
use store::{load_summary, ProfileSummary, ProgressError};

use crate::components::{use_toast, Button, ButtonVariant, Card, ProgressBar, Separator, Switch, ToastOptions};
use crate::icons::{FaAward, FaBook, FaBriefcase, FaGamepad, FaGear, FaPen, FaRightFromBracket};
use crate::progress::ApiProgressSource;
use crate::{toggle_theme, use_auth, use_theme, Icon, LogoutButton};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Profile dashboard: account details, settings, learning progress and links.
///
/// Progress is fetched once per user identity. A failed fetch is logged and
/// the previous numbers stay on screen.
#[component]
pub fn ProfileView(
    about: AboutConfig,
    on_navigate_games: EventHandler<()>,
    on_logged_out: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let mut theme = use_theme();
    let toast = use_toast();
    let mut summary = use_signal(ProfileSummary::default);

    let user_id = use_memo(move || auth().user_id());

    // Owned by this scope: a fetch still in flight at unmount is dropped
    // instead of writing into a dead signal.
    let _loader = use_resource(move || async move {
        let Some(user_id) = user_id() else {
            return;
        };
        match load_summary(&ApiProgressSource, &user_id).await {
            Ok(fresh) => summary.set(fresh),
            Err(ProgressError::Unauthenticated) => {
                tracing::warn!(user_id = %user_id, "Session expired before progress loaded");
            }
            Err(e) => tracing::error!("Error fetching user progress: {}", e),
        }
    });

    let handle_theme_toggle = move |_: bool| {
        let next = toggle_theme(&mut theme);
        let label = next.label();
        toast.info(
            format!("{label} mode activated"),
            ToastOptions::new().description(format!(
                "The app theme has been changed to {} mode.",
                label.to_lowercase()
            )),
        );
    };

    let handle_logged_out = move |_| {
        toast.success(
            "Logged out".to_string(),
            ToastOptions::new().description("You have been logged out successfully.".to_string()),
        );
        on_logged_out.call(());
    };

    let user = auth().user;
    let initial = user.as_ref().map(|u| u.initial()).unwrap_or('U');
    let name = user.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default();
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let language = user.as_ref().map(|u| u.preferred_language.clone()).unwrap_or_default();
    let current_theme = theme();
    let stats = summary();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "Your Profile" }

            Card {
                class: "profile-card",
                div {
                    class: "profile-header",
                    div {
                        class: "profile-avatar",
                        span { "{initial}" }
                        button {
                            class: "profile-avatar-edit",
                            title: "Edit avatar",
                            Icon { icon: FaPen, width: 14, height: 14 }
                        }
                    }
                    h2 { class: "profile-name", "{name}" }
                    p { class: "view-muted", "{email}" }
                }

                div {
                    class: "settings-list",
                    SettingsRow {
                        title: "Learning Language",
                        detail: language,
                        Button { variant: ButtonVariant::Ghost, "Change" }
                    }
                    SettingsRow {
                        title: "Notification Settings",
                        detail: "Course reminders, updates",
                        Button { variant: ButtonVariant::Ghost, "Manage" }
                    }
                    SettingsRow {
                        title: "App Theme",
                        detail: format!("{} mode", current_theme.label()),
                        Switch {
                            checked: current_theme.is_dark(),
                            on_checked_change: handle_theme_toggle,
                        }
                    }
                }
            }

            h2 { class: "view-section-title", "Learning Progress" }

            Card {
                class: "progress-card",
                div {
                    class: "stat-grid",
                    StatTile {
                        value: stats.courses_in_progress,
                        label: "Courses in Progress",
                        Icon { icon: FaBook, width: 24, height: 24 }
                    }
                    StatTile {
                        value: stats.achievements_count,
                        label: "Achievements",
                        Icon { icon: FaAward, width: 24, height: 24 }
                    }
                }

                if stats.shows_overall_progress() {
                    div {
                        class: "overall-progress",
                        p { class: "overall-progress-label", "Overall Progress" }
                        ProgressBar { value: stats.average_progress }
                        p { class: "view-muted text-right", "{stats.average_progress}% Complete" }
                    }
                }
            }

            h2 { class: "view-section-title", "Learning Resources" }

            Card {
                ResourceLink {
                    title: "Interactive Games & Quizzes",
                    detail: "Learn while having fun",
                    onclick: move |_| on_navigate_games.call(()),
                    Icon { icon: FaGamepad, width: 20, height: 20 }
                }
                Separator {}
                ResourceLink {
                    title: "Job Opportunities",
                    detail: "Browse jobs matching your skills",
                    Icon { icon: FaBriefcase, width: 20, height: 20 }
                }
                Separator {}
                ResourceLink {
                    title: "Skill Assessment",
                    detail: "Test your skills and get recommendations",
                    Icon { icon: FaGear, width: 20, height: 20 }
                }
            }

            LogoutButton {
                variant: ButtonVariant::Outline,
                class: "sign-out",
                on_logged_out: handle_logged_out,
                Icon { icon: FaRightFromBracket, width: 16, height: 16 }
            }

            p {
                class: "profile-footer",
                "HerVoice v{about.version} - Powered by {about.powered_by}"
                br {}
                span { class: "helpline", "Women Safety Helpline: {about.helpline}" }
            }
        }
    }
}

#[component]
fn SettingsRow(title: String, detail: String, children: Element) -> Element {
    rsx! {
        div {
            class: "settings-row",
            div {
                p { class: "settings-row-title", "{title}" }
                p { class: "view-muted", "{detail}" }
            }
            {children}
        }
    }
}

#[component]
fn StatTile(value: u32, label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "stat-tile",
            div { class: "stat-icon", {children} }
            p { class: "stat-value", "{value}" }
            p { class: "view-muted", "{label}" }
        }
    }
}

#[component]
fn ResourceLink(
    title: String,
    detail: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "resource-link",
            onclick: move |evt| onclick.call(evt),
            div { class: "resource-icon", {children} }
            div {
                class: "resource-text",
                p { class: "resource-title", "{title}" }
                p { class: "view-muted", "{detail}" }
            }
        }
    }
}
