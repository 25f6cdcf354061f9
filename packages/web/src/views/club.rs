use dioxus::prelude::*;
use ui::club_listing::resolve_club;
use ui::use_backend;
use ui::views::ClubDetailView;

use crate::use_selected_club;

/// `/club/:name`
#[component]
pub fn ClubPage(name: String) -> Element {
    let backend = use_backend();
    let selected_club = use_selected_club();
    let mut route_name = use_signal(|| name.clone());

    if *route_name.peek() != name {
        route_name.set(name.clone());
    }

    let club = use_resource(move || async move {
        let name = route_name();
        let handed_over = selected_club.peek().clone();
        resolve_club(&backend(), &name, handed_over).await
    });

    match club() {
        Some(club) => rsx! {
            ClubDetailView { club: club }
        },
        None => rsx! {
            p { class: "loading", "Loading..." }
        },
    }
}
