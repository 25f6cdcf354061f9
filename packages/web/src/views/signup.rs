//! Signup page.

use dioxus::prelude::*;
use ui::forms::{submit_signup, SignupForm};
use ui::navigation::hard_redirect;
use ui::{use_backend, Notice, NoticeBanner};

#[component]
pub fn Signup() -> Element {
    let backend = use_backend();
    let mut form = use_signal(SignupForm::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            notice.set(None);
            loading.set(true);
            let backend = backend();
            match submit_signup(&backend, &form()).await {
                Ok(route) => hard_redirect(route),
                Err(n) => {
                    loading.set(false);
                    notice.set(Some(n));
                }
            }
        });
    };

    let current = form();

    rsx! {
        div {
            class: "form-page",
            h1 { "Sign up" }

            form {
                class: "form-stack",
                onsubmit: handle_signup,

                NoticeBanner { notice: notice() }

                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Full name",
                    value: current.name,
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                input {
                    class: "form-control",
                    r#type: "email",
                    placeholder: "Email",
                    value: current.email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Username",
                    value: current.username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                input {
                    class: "form-control",
                    r#type: "password",
                    placeholder: "Password",
                    value: current.password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                input {
                    class: "form-control",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: current.confirm_password,
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }
                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Major (optional)",
                    value: current.major,
                    oninput: move |evt: FormEvent| form.write().major = evt.value(),
                }
                input {
                    class: "form-control",
                    r#type: "number",
                    placeholder: "Graduation year (optional)",
                    value: current.grad_year,
                    oninput: move |evt: FormEvent| form.write().grad_year = evt.value(),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing up..." } else { "Sign up" }
                }
            }
        }
    }
}
