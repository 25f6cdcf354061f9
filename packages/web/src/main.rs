use api::{ApiConfig, Club};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{BackendProvider, LogoutButton, Navbar};
use views::{ClubPage, Home, Login, Signup, Submit};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/club/:name")]
        ClubPage { name: String },
        #[route("/submit")]
        Submit {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BUNDLED_CONFIG: &str = include_str!("../clubs.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(App);
}

/// Bundled configuration with the build-time base URL override applied.
fn load_config() -> ApiConfig {
    let config = ApiConfig::from_toml(BUNDLED_CONFIG).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid {}: {}", ApiConfig::filename(), e);
        ApiConfig::default()
    });
    config.override_base_url(option_env!("CLUBS_API_BASE"))
}

/// The club the list handed to the detail page.
pub fn use_selected_club() -> Signal<Option<Club>> {
    use_context::<Signal<Option<Club>>>()
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let selected_club = use_signal(|| Option::<Club>::None);
    use_context_provider(|| selected_club);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        BackendProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Navbar above every page.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Submit {}, "Submit" }
            Link { to: Route::Login {}, "Login" }
            Link { to: Route::Signup {}, "Signup" }
            LogoutButton { class: "navbar-logout" }
        }
        main {
            class: "container",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::BackendMode;

    #[test]
    fn test_bundled_config_parses() {
        let config = ApiConfig::from_toml(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.backend.mode, BackendMode::Http);
        assert!(!config.api.base_url.is_empty());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Submit {}.to_string(), "/submit");
        let club = Route::ClubPage {
            name: "Chess".into(),
        };
        assert_eq!(club.to_string(), "/club/Chess");
    }
}
