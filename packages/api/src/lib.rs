//! # API crate: typed access to the club directory server
//!
//! The club directory frontend owns no data. Clubs, tags, comments and the
//! login session all live in an external REST server; this crate is the only
//! place that knows its paths, bodies and status codes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`ClubBackend`] trait (one async method per endpoint) and the config-selected [`Backend`] enum |
//! | [`client`] | [`ClubsClient`], the reqwest implementation that talks to the real server |
//! | [`memory`] | [`MemoryBackend`], an in-process emulation with the same status semantics |
//! | [`config`] | [`ApiConfig`], parsed from `clubs.toml` |
//! | [`error`] | [`ApiError`] and the status-code mapping |
//! | [`models`] | Request and response bodies |
//!
//! ## Endpoints
//!
//! - **Clubs**: `list_clubs`, `search_clubs`, `clubs_with_tag`, `create_club`
//! - **Tags**: `all_tags`, `tag_counts`
//! - **Club page**: `comments`, `post_comment`, `favorite_count`, `toggle_favorite`
//! - **Account**: `login`, `signup`, `logout`

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;

pub use backend::{Backend, ClubBackend};
pub use client::ClubsClient;
pub use config::{ApiConfig, BackendMode};
pub use error::ApiError;
pub use memory::MemoryBackend;
pub use models::{
    Club, Comment, Credentials, NewClub, PostedComment, Signup, TagCount,
};
