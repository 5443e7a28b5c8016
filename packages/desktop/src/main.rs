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
    let (config, load_error) = match AcmeConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AcmeConfig::default(), Some(e)),
    };

    if let Err(e) = dioxus::logger::init(config.log_level()) {
        eprintln!("Failed to initialise logging: {e}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Falling back to default settings: {e}");
    }
    tracing::info!(api = config.api_base_url(), "Starting desktop client");

    let builder = dioxus::LaunchBuilder::new().with_context(config);
    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(
        dioxus::desktop::Config::new()
            .with_window(dioxus::desktop::WindowBuilder::new().with_title("Acme")),
    );
    builder.launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AcmeConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::ACME_CSS }

        ui::SessionProvider { config,
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
