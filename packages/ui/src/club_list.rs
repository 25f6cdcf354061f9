use api::{Club, ClubBackend, TagCount};
use dioxus::prelude::*;

use crate::club_card::{ClubCard, TagButton};
use crate::club_listing::{ClubListing, ClubQuery};
use crate::notice::{Notice, NoticeBanner};
use crate::use_backend;

/// The directory: search box, tag overview and the club grid.
#[component]
pub fn ClubList(on_open: EventHandler<Club>) -> Element {
    let backend = use_backend();
    let mut listing = use_signal(ClubListing::default);
    let mut tag_counts = use_signal(Vec::<TagCount>::new);
    let mut keyword = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);

    // Every club and the tag overview on mount
    let _loader = use_resource(move || async move {
        let backend = backend();
        match ClubListing::load(&backend, ClubQuery::All).await {
            Ok(all) => listing.set(all),
            Err(e) => notice.set(Some(Notice::for_load("clubs", &e))),
        }
        match backend.tag_counts().await {
            Ok(counts) => tag_counts.set(counts),
            Err(e) => tracing::warn!("Tag overview unavailable: {}", e),
        }
    });

    let apply = move |query: ClubQuery| {
        spawn(async move {
            let backend = backend();
            match ClubListing::load(&backend, query).await {
                Ok(next) => {
                    notice.set(None);
                    keyword.set(next.query.keyword().to_string());
                    listing.set(next);
                }
                Err(e) => notice.set(Some(Notice::for_load("clubs", &e))),
            }
        });
    };

    let on_tag_click = move |tag: String| {
        spawn(async move {
            let backend = backend();
            let current = listing();
            match current.click_tag(&backend, &tag).await {
                Ok(next) => {
                    notice.set(None);
                    keyword.set(next.query.keyword().to_string());
                    listing.set(next);
                }
                Err(e) => notice.set(Some(Notice::for_load("clubs", &e))),
            }
        });
    };

    let current = listing();
    let selected_tag = current.query.active_tag().map(str::to_string);
    let heading = current.heading();
    let clubs = current.clubs;

    rsx! {
        NoticeBanner { notice: notice() }

        form {
            class: "club-search",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                apply(ClubQuery::search(&keyword()));
            },
            input {
                r#type: "search",
                class: "form-control",
                placeholder: "Search clubs by name",
                value: keyword(),
                oninput: move |evt: FormEvent| keyword.set(evt.value()),
            }
            button { r#type: "submit", class: "btn btn-primary", "Search" }
        }

        if !tag_counts().is_empty() {
            section {
                class: "tag-overview",
                for entry in tag_counts() {
                    TagButton {
                        key: "{entry.tag}",
                        tag: entry.tag.clone(),
                        selected: selected_tag.as_deref() == Some(entry.tag.as_str()),
                        count: entry.count,
                        on_click: on_tag_click,
                    }
                }
            }
        }

        if let Some(heading) = heading {
            div {
                class: "club-filter-header",
                h1 { "{heading}" }
                p {
                    class: "club-filter-back",
                    onclick: move |_| apply(ClubQuery::All),
                    "Back to all clubs"
                }
            }
        }

        section {
            class: "club-grid",
            for club in clubs {
                ClubCard {
                    key: "{club.name}",
                    club: club.clone(),
                    selected_tag: selected_tag.clone(),
                    on_tag_click: on_tag_click,
                    on_open: on_open,
                }
            }
        }
    }
}
