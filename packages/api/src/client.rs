//! HTTP implementation of [`ClubBackend`] on top of reqwest.
//!
//! Every request carries the session cookie: in the browser through
//! `credentials: include` on the underlying fetch, natively through reqwest's
//! cookie store. Path segments are pushed through [`Url::path_segments_mut`]
//! so club names and tags with spaces or slashes are percent-encoded.

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{
    Club, ClubList, Comment, CommentBody, Credentials, FavoriteCount, NewClub, PostedComment,
    Signup, TagCount,
};
use crate::{ApiError, ClubBackend};

const LOGGED_OUT: &str = "Logged out";

/// Client for the club directory REST API.
#[derive(Clone, Debug)]
pub struct ClubsClient {
    http: reqwest::Client,
    base: Url,
}

/// Two clients are interchangeable when they talk to the same server.
impl PartialEq for ClubsClient {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

impl ClubsClient {
    /// Create a client rooted at `base`, which must be able to carry a path.
    pub fn new(base: Url) -> Result<Self, ApiError> {
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base.to_string()));
        }

        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Join percent-encoded `segments` onto the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send and return the body of a success response.
    async fn send(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!("{} answered {}", url, status);
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let body = self.send(self.request(Method::GET, url)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<String, ApiError> {
        self.send(self.request(Method::POST, url).json(body)).await
    }
}

impl ClubBackend for ClubsClient {
    async fn list_clubs(&self) -> Result<Vec<Club>, ApiError> {
        let list: ClubList = self.get_json(self.endpoint(&["api", "clubs"])?).await?;
        Ok(list.clubs)
    }

    async fn search_clubs(&self, keyword: &str) -> Result<Vec<Club>, ApiError> {
        let mut url = self.endpoint(&["api", "clubs"])?;
        url.query_pairs_mut().append_pair("search", keyword);
        let list: ClubList = self.get_json(url).await?;
        Ok(list.clubs)
    }

    async fn clubs_with_tag(&self, tag: &str) -> Result<Vec<Club>, ApiError> {
        let list: ClubList = self.get_json(self.endpoint(&["api", "clubs", tag])?).await?;
        Ok(list.clubs)
    }

    async fn create_club(&self, club: &NewClub) -> Result<(), ApiError> {
        self.post_json(self.endpoint(&["api", "clubs"])?, club).await?;
        tracing::info!("Created club {}", club.name);
        Ok(())
    }

    async fn all_tags(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(self.endpoint(&["api", "all_tags"])?).await
    }

    async fn tag_counts(&self) -> Result<Vec<TagCount>, ApiError> {
        self.get_json(self.endpoint(&["api", "tag_count"])?).await
    }

    async fn comments(&self, club: &str) -> Result<Vec<Comment>, ApiError> {
        self.get_json(self.endpoint(&["api", club, "comment"])?).await
    }

    async fn post_comment(&self, club: &str, text: &str) -> Result<PostedComment, ApiError> {
        let body = CommentBody {
            text: text.to_string(),
        };
        let response = self
            .post_json(self.endpoint(&["api", club, "comment"])?, &body)
            .await?;
        Ok(serde_json::from_str(&response)?)
    }

    async fn favorite_count(&self, club: &str) -> Result<u32, ApiError> {
        let fav: FavoriteCount = self
            .get_json(self.endpoint(&["api", club, "favorite"])?)
            .await?;
        Ok(fav.count)
    }

    async fn toggle_favorite(&self, club: &str) -> Result<(), ApiError> {
        self.post_json(
            self.endpoint(&["api", club, "favorite"])?,
            &serde_json::Map::new(),
        )
        .await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_json(self.endpoint(&["api", "login"])?, credentials)
            .await?;
        tracing::info!("Logged in as {}", credentials.username);
        Ok(())
    }

    async fn signup(&self, signup: &Signup) -> Result<(), ApiError> {
        self.post_json(self.endpoint(&["api", "signup"])?, signup)
            .await?;
        tracing::info!("Signed up {}", signup.username);
        Ok(())
    }

    async fn logout(&self) -> Result<String, ApiError> {
        let body = self
            .send(self.request(Method::GET, self.endpoint(&["api", "logout"])?))
            .await?;
        let message = serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| LOGGED_OUT.to_string());
        Ok(message)
    }
}
