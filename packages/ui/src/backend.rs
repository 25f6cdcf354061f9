//! Backend context for the component tree.
//!
//! [`BackendProvider`] builds the configured [`Backend`] once and provides it
//! as a `Signal<Backend>`; components read it with [`use_backend`] and clone
//! it into their tasks with `backend()`.

use api::{ApiConfig, ApiError, Backend};
use dioxus::prelude::*;

use crate::navigation::page_origin;

/// Build the backend `config` asks for, resolving relative base URLs against
/// the page origin.
pub fn make_backend(config: &ApiConfig) -> Result<Backend, ApiError> {
    Backend::from_config(config, page_origin().as_deref())
}

/// Get the backend provided by [`BackendProvider`].
pub fn use_backend() -> Signal<Backend> {
    use_context::<Signal<Backend>>()
}

/// Wrap the app with this component so views can reach the API.
#[component]
pub fn BackendProvider(config: ApiConfig, children: Element) -> Element {
    let backend = use_hook(|| make_backend(&config).map_err(|e| e.to_string()));

    match backend {
        Ok(backend) => rsx! {
            BackendScope { backend: backend, {children} }
        },
        Err(message) => {
            tracing::error!("Invalid API configuration: {}", message);
            rsx! {
                div {
                    class: "notice notice-error",
                    "The club directory is misconfigured: {message}"
                }
            }
        }
    }
}

#[component]
fn BackendScope(backend: Backend, children: Element) -> Element {
    let signal = use_signal(move || backend);
    use_context_provider(|| signal);

    rsx! {
        {children}
    }
}
