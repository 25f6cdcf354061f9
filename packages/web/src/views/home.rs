use api::Club;
use dioxus::prelude::*;
use ui::ClubList;

use crate::{use_selected_club, Route};

/// Directory home page.
#[component]
pub fn Home() -> Element {
    let mut selected_club = use_selected_club();
    let nav = use_navigator();

    let open_club = move |club: Club| {
        let name = club.name.clone();
        selected_club.set(Some(club));
        nav.push(Route::ClubPage { name });
    };

    rsx! {
        ClubList { on_open: open_club }
    }
}
