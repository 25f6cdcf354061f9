//! Shared UI for the club directory.
//!
//! The request and state logic (listing queries, comment posting, form
//! validation, error wording) lives in plain modules that take any
//! [`api::ClubBackend`] and are tested against [`api::MemoryBackend`]. The
//! components on top only wire signals to those calls.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod club_listing;
pub mod comments;
pub mod favorites;
pub mod forms;
pub mod navigation;
pub mod notice;
pub mod views;

mod backend;
pub use backend::{make_backend, use_backend, BackendProvider};

mod club_card;
pub use club_card::{ClubCard, TagButton};

mod club_list;
pub use club_list::ClubList;

mod navbar;
pub use navbar::{LogoutButton, Navbar};

pub use notice::{Notice, NoticeBanner};
