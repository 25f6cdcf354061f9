//! Create-club page.

use api::ClubBackend;
use dioxus::prelude::*;
use ui::forms::{submit_club, ClubForm, TagChoices};
use ui::navigation::hard_redirect;
use ui::{use_backend, Notice, NoticeBanner, TagButton};

#[component]
pub fn Submit() -> Element {
    let backend = use_backend();
    let mut form = use_signal(ClubForm::default);
    let mut tags = use_signal(TagChoices::default);
    let mut new_tag = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    // Offer every tag the server knows
    let _tags = use_resource(move || async move {
        let backend = backend();
        match backend.all_tags().await {
            Ok(all) => tags.set(TagChoices::new(all)),
            Err(e) => notice.set(Some(Notice::for_load("tags", &e))),
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            notice.set(None);
            loading.set(true);
            let backend = backend();
            match submit_club(&backend, &form(), &tags()).await {
                Ok(route) => hard_redirect(route),
                Err(n) => {
                    loading.set(false);
                    notice.set(Some(n));
                }
            }
        });
    };

    let add_tag = move |_| {
        if let Some(tag) = tags.write().add(&new_tag()) {
            tracing::debug!("Added tag {}", tag);
            new_tag.set(String::new());
        }
    };

    let current = form();
    let choices = tags();

    rsx! {
        div {
            class: "form-page",
            h1 { "Create a club" }

            form {
                class: "form-stack",
                onsubmit: handle_submit,

                NoticeBanner { notice: notice() }

                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Club name",
                    value: current.name,
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Code (optional)",
                    value: current.code,
                    oninput: move |evt: FormEvent| form.write().code = evt.value(),
                }
                textarea {
                    class: "form-control",
                    placeholder: "Description",
                    value: current.description,
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }

                section {
                    class: "tag-picker",
                    for tag in choices.options().iter() {
                        TagButton {
                            key: "{tag}",
                            tag: tag.clone(),
                            selected: choices.is_selected(tag),
                            on_click: move |t: String| tags.write().toggle(&t),
                        }
                    }
                }

                div {
                    class: "tag-add",
                    input {
                        class: "form-control",
                        r#type: "text",
                        placeholder: "New tag",
                        value: new_tag(),
                        oninput: move |evt: FormEvent| new_tag.set(evt.value()),
                    }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: add_tag,
                        "Add tag"
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating..." } else { "Create club" }
                }
            }
        }
    }
}
