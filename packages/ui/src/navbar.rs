use api::ClubBackend;
use dioxus::prelude::*;

use crate::navigation::{alert, hard_redirect, HOME};
use crate::notice::GENERIC_ERROR;
use crate::use_backend;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            a { class: "navbar-brand", href: HOME, "Penn Club Review" }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}

/// Ends the session, shows the server's reply and reloads the home page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let backend = use_backend();

    let onclick = move |_| async move {
        let backend = backend();
        match backend.logout().await {
            Ok(message) => {
                alert(&message);
                hard_redirect(HOME);
            }
            Err(e) => {
                tracing::error!("Logout failed: {}", e);
                alert(GENERIC_ERROR);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
