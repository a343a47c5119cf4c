use dioxus::prelude::*;

use store::HerVoiceConfig;
use ui::{AuthProvider, ThemeProvider};
use views::{Games, Login, Profile, ProtectedRoute, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[route("/")]
    Root {},
    #[route("/login?:from")]
    Login { from: String },
    #[route("/register")]
    Register {},
    #[layout(ProtectedRoute)]
        #[route("/profile")]
        Profile {},
        #[route("/games")]
        Games {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_TOML: &str = include_str!("../hervoice.toml");

fn load_config() -> HerVoiceConfig {
    HerVoiceConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", HerVoiceConfig::filename(), e);
        HerVoiceConfig::default()
    })
}

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Failed to start runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server stopped: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pool = api::db::get_pool().await?;

    api::db::MIGRATOR.run(pool).await?;

    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    // 7 days of inactivity
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(std::env::var("SESSION_SECURE").is_ok_and(|v| v == "true"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into()?,
        ));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ThemeProvider {
                ui::components::ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Redirect `/` to the profile or the login page.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        if state.user.is_some() {
            nav.replace(Route::Profile {});
        } else {
            nav.replace(Route::Login { from: String::new() });
        }
    });

    rsx! {}
}
