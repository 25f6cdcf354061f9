//! Login page with a username and password form.

use dioxus::prelude::*;
use ui::forms::{submit_login, LoginForm};
use ui::navigation::hard_redirect;
use ui::{use_backend, Notice, NoticeBanner};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let backend = use_backend();
    let mut form = use_signal(LoginForm::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            notice.set(None);
            loading.set(true);
            let backend = backend();
            match submit_login(&backend, &form()).await {
                Ok(route) => hard_redirect(route),
                Err(n) => {
                    loading.set(false);
                    notice.set(Some(n));
                }
            }
        });
    };

    rsx! {
        div {
            class: "form-page",
            h1 { "Login" }

            form {
                class: "form-stack",
                onsubmit: handle_login,

                NoticeBanner { notice: notice() }

                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Username",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                input {
                    class: "form-control",
                    r#type: "password",
                    placeholder: "Password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                class: "form-footer",
                "No account yet? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
