use dioxus::prelude::*;

use store::AcmeConfig;
use ui::Destination;
use views::{Dashboard, DashboardLayout, Landing, Login, NotFound, Profile, PublicOnly, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[layout(PublicOnly)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
    #[end_layout]
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::SignIn => Route::Login {},
            Destination::Dashboard => Route::Dashboard {},
        }
    }
}

fn main() {
    // No filesystem or process environment in the browser; settings are baked in
    let config = AcmeConfig::from_build_env();

    if let Err(e) = dioxus::logger::init(config.log_level()) {
        eprintln!("Failed to initialise logging: {e}");
    }
    tracing::info!(api = config.api_base_url(), "Starting web client");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AcmeConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::ACME_CSS }
        document::Title { "Acme" }

        ui::SessionProvider { config,
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
