//! # `ClubBackend`: one method per API endpoint
//!
//! The UI never builds requests itself. Every screen goes through this trait,
//! so the same view logic runs against the real server ([`ClubsClient`]) or
//! the in-process emulation ([`MemoryBackend`]) used by tests and the offline
//! demo mode.
//!
//! The futures are not `Send`: in the browser they run on the single-threaded
//! WASM executor and reqwest's fetch futures are `!Send` there.
//!
//! [`Backend`] is the concrete type the UI stores in context. It picks an
//! implementation from [`ApiConfig`] and forwards every call.

use std::future::Future;

use crate::config::{ApiConfig, BackendMode};
use crate::models::{Club, Comment, Credentials, NewClub, PostedComment, Signup, TagCount};
use crate::{ApiError, ClubsClient, MemoryBackend};

/// Async interface to the club directory API.
pub trait ClubBackend {
    /// `GET /api/clubs`
    fn list_clubs(&self) -> impl Future<Output = Result<Vec<Club>, ApiError>>;

    /// `GET /api/clubs?search=keyword`
    fn search_clubs(&self, keyword: &str) -> impl Future<Output = Result<Vec<Club>, ApiError>>;

    /// `GET /api/clubs/:tag`
    fn clubs_with_tag(&self, tag: &str) -> impl Future<Output = Result<Vec<Club>, ApiError>>;

    /// `POST /api/clubs`
    fn create_club(&self, club: &NewClub) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/all_tags`
    fn all_tags(&self) -> impl Future<Output = Result<Vec<String>, ApiError>>;

    /// `GET /api/tag_count`
    fn tag_counts(&self) -> impl Future<Output = Result<Vec<TagCount>, ApiError>>;

    /// `GET /api/:club/comment`
    fn comments(&self, club: &str) -> impl Future<Output = Result<Vec<Comment>, ApiError>>;

    /// `POST /api/:club/comment`
    fn post_comment(
        &self,
        club: &str,
        text: &str,
    ) -> impl Future<Output = Result<PostedComment, ApiError>>;

    /// `GET /api/:club/favorite`
    fn favorite_count(&self, club: &str) -> impl Future<Output = Result<u32, ApiError>>;

    /// `POST /api/:club/favorite`
    fn toggle_favorite(&self, club: &str) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /api/login`
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /api/signup`
    fn signup(&self, signup: &Signup) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/logout`, returning the server's message.
    fn logout(&self) -> impl Future<Output = Result<String, ApiError>>;
}

/// The backend selected by configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum Backend {
    Http(ClubsClient),
    Memory(MemoryBackend),
}

impl Backend {
    /// Build the backend `config` asks for.
    ///
    /// `origin` is the page origin, needed only when the base URL is relative.
    pub fn from_config(config: &ApiConfig, origin: Option<&str>) -> Result<Self, ApiError> {
        match config.backend.mode {
            BackendMode::Http => {
                let base = config.resolve_base(origin)?;
                tracing::info!("Using club API at {}", base);
                Ok(Backend::Http(ClubsClient::new(base)?))
            }
            BackendMode::Memory => {
                tracing::info!("Using in-memory club data");
                Ok(Backend::Memory(MemoryBackend::with_demo_data()))
            }
        }
    }
}

macro_rules! forward {
    ($self:ident, $backend:ident => $call:expr) => {
        match $self {
            Backend::Http($backend) => $call.await,
            Backend::Memory($backend) => $call.await,
        }
    };
}

impl ClubBackend for Backend {
    async fn list_clubs(&self) -> Result<Vec<Club>, ApiError> {
        forward!(self, b => b.list_clubs())
    }

    async fn search_clubs(&self, keyword: &str) -> Result<Vec<Club>, ApiError> {
        forward!(self, b => b.search_clubs(keyword))
    }

    async fn clubs_with_tag(&self, tag: &str) -> Result<Vec<Club>, ApiError> {
        forward!(self, b => b.clubs_with_tag(tag))
    }

    async fn create_club(&self, club: &NewClub) -> Result<(), ApiError> {
        forward!(self, b => b.create_club(club))
    }

    async fn all_tags(&self) -> Result<Vec<String>, ApiError> {
        forward!(self, b => b.all_tags())
    }

    async fn tag_counts(&self) -> Result<Vec<TagCount>, ApiError> {
        forward!(self, b => b.tag_counts())
    }

    async fn comments(&self, club: &str) -> Result<Vec<Comment>, ApiError> {
        forward!(self, b => b.comments(club))
    }

    async fn post_comment(&self, club: &str, text: &str) -> Result<PostedComment, ApiError> {
        forward!(self, b => b.post_comment(club, text))
    }

    async fn favorite_count(&self, club: &str) -> Result<u32, ApiError> {
        forward!(self, b => b.favorite_count(club))
    }

    async fn toggle_favorite(&self, club: &str) -> Result<(), ApiError> {
        forward!(self, b => b.toggle_favorite(club))
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        forward!(self, b => b.login(credentials))
    }

    async fn signup(&self, signup: &Signup) -> Result<(), ApiError> {
        forward!(self, b => b.signup(signup))
    }

    async fn logout(&self) -> Result<String, ApiError> {
        forward!(self, b => b.logout())
    }
}
