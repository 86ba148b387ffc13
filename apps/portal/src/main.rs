#![allow(non_snake_case)]

mod api;
mod config;
mod fixtures;
mod hooks;
mod models;
mod state;
mod ui;

use api::{ClientError, MemberApiClient};
use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::AppState;
use tracing::{error, info};
use ui::hierarchy::TeamsPage;
use ui::invalid_link::InvalidLinkPage;
use ui::notifications::NotificationCenter;
use ui::plans::PlansPage;
use ui::use_document_title;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static API_CLIENT: OnceCell<MemberApiClient> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap_infrastructure();
    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap_infrastructure() {
    let config = AppConfig::from_env();
    let _ = APP_CONFIG.set(config.clone());

    match MemberApiClient::new(config) {
        Ok(client) => {
            let _ = API_CLIENT.set(client);
            info!("member API client initialized");
        }
        Err(err) => {
            report_client_error("failed to initialize member API client", &err);
        }
    }
}

fn report_client_error(context: &str, err: &ClientError) {
    error!(%context, ?err, status = ?err.status(), "api bootstrap error");
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    PlansPage {},
    #[route("/teams")]
    TeamsPage {},
    #[route("/register?:plan")]
    RegisterPage { plan: String },
    #[route("/invalid-link")]
    InvalidLinkPage {},
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-50",
            nav { class: "border-b border-slate-200 bg-white",
                div { class: "mx-auto flex max-w-5xl items-center gap-6 px-4 py-3",
                    span { class: "text-sm font-bold text-slate-900", "FitLink" }
                    Link { to: Route::PlansPage {}, class: "text-xs text-slate-600 hover:text-slate-900", "Plans" }
                    Link { to: Route::TeamsPage {}, class: "text-xs text-slate-600 hover:text-slate-900", "My teams" }
                }
            }
            main { class: "mx-auto max-w-5xl px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}

/// Sign-up landing reached after a plan was picked. The form itself lives
/// outside this portal; this page only carries the chosen plan forward.
#[component]
fn RegisterPage(plan: String) -> Element {
    use_document_title("Sign up · FitLink");

    rsx! {
        section { class: "mx-auto max-w-md space-y-3 pt-12 text-center",
            h2 { class: "text-lg font-semibold text-slate-900", "Create your account" }
            p { class: "text-xs text-slate-500", "Selected plan: {plan}" }
            p { class: "text-xs text-slate-500",
                "Registration opens here once your company portal is connected."
            }
            Link {
                to: Route::PlansPage {},
                class: "inline-block rounded border border-slate-300 px-4 py-2 text-xs text-slate-700 hover:border-slate-500",
                "Back to plans"
            }
        }
    }
}
