use api::Club;
use dioxus::prelude::*;

use crate::icons::FaTag;
use crate::Icon;

/// A tag pill. Selected tags render filled.
#[component]
pub fn TagButton(
    tag: String,
    selected: bool,
    #[props(default)] count: Option<u32>,
    on_click: EventHandler<String>,
) -> Element {
    let label = match count {
        Some(count) => format!("{tag} ({count})"),
        None => tag.clone(),
    };

    rsx! {
        button {
            r#type: "button",
            class: if selected { "tag-pill tag-pill--selected" } else { "tag-pill" },
            onclick: move |_| on_click.call(tag.clone()),
            Icon { icon: FaTag, width: 10, height: 10 }
            " {label}"
        }
    }
}

/// Card for one club in the directory grid.
#[component]
pub fn ClubCard(
    club: Club,
    selected_tag: Option<String>,
    on_tag_click: EventHandler<String>,
    on_open: EventHandler<Club>,
) -> Element {
    let open = {
        let club = club.clone();
        move |_| on_open.call(club.clone())
    };

    rsx! {
        div {
            class: "club-card",
            h4 {
                class: "club-card-name",
                onclick: open,
                "{club.name}"
            }
            hr {}
            p { class: "club-card-description", "{club.description}" }
            section {
                class: "club-card-tags",
                for tag in club.tags.iter() {
                    TagButton {
                        key: "{tag}",
                        tag: tag.clone(),
                        selected: selected_tag.as_deref() == Some(tag.as_str()),
                        on_click: on_tag_click,
                    }
                }
            }
        }
    }
}
