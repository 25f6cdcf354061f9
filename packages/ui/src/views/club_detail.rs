//! Club page: description, favorite count and the comment thread.

use api::{Club, ClubBackend};
use dioxus::prelude::*;

use crate::comments::CommentThread;
use crate::favorites::toggle_and_count;
use crate::icons::FaHeart;
use crate::notice::{Notice, NoticeBanner};
use crate::{use_backend, Icon};

#[component]
pub fn ClubDetailView(club: Club) -> Element {
    let backend = use_backend();
    let mut club_name = use_signal(|| club.name.clone());
    let mut thread = use_signal(|| CommentThread::new(&club.name));
    let mut favorites = use_signal(|| Option::<u32>::None);
    let mut draft = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut posting = use_signal(|| false);

    // Keep the signal in sync when the route moves to another club
    if *club_name.peek() != club.name {
        club_name.set(club.name.clone());
    }

    let _loader = use_resource(move || async move {
        let name = club_name();
        let backend = backend();
        match CommentThread::load(&backend, &name).await {
            Ok(loaded) => thread.set(loaded),
            Err(e) => notice.set(Some(Notice::for_load("comments", &e))),
        }
        match backend.favorite_count(&name).await {
            Ok(count) => favorites.set(Some(count)),
            Err(e) => tracing::warn!("Favorite count unavailable for {}: {}", name, e),
        }
    });

    let handle_comment = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            posting.set(true);
            let backend = backend();
            let mut next = thread();
            match next.submit(&backend, &draft()).await {
                Ok(()) => {
                    thread.set(next);
                    draft.set(String::new());
                    notice.set(None);
                }
                Err(e) => notice.set(Some(Notice::for_comment(&e))),
            }
            posting.set(false);
        });
    };

    let handle_favorite = move |_| async move {
        let backend = backend();
        match toggle_and_count(&backend, &club_name()).await {
            Ok(count) => favorites.set(Some(count)),
            Err(e) => notice.set(Some(Notice::for_favorite(&e))),
        }
    };

    rsx! {
        div {
            class: "club-page",
            h1 { "{club.name}" }
            h4 { class: "club-page-description", "{club.description}" }

            div {
                class: "club-page-favorites",
                button {
                    class: "btn btn-outline",
                    onclick: handle_favorite,
                    Icon { icon: FaHeart, width: 14, height: 14 }
                    " Favorite"
                }
                if let Some(count) = favorites() {
                    span { class: "favorite-count", "{count} favorites" }
                }
            }

            h2 { "Comments" }
            NoticeBanner { notice: notice() }

            form {
                class: "comment-form",
                onsubmit: handle_comment,
                input {
                    r#type: "text",
                    class: "form-control",
                    placeholder: "New comment",
                    value: draft(),
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: posting(),
                    "Post comment"
                }
            }

            for (index, comment) in thread().comments.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "comment",
                    hr {}
                    h3 { "{comment.author}" }
                    p { "{comment.text}" }
                }
            }
        }
    }
}
