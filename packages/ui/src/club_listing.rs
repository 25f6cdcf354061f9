//! # Club listing state
//!
//! The home page shows one server-side query at a time: every club, the clubs
//! carrying a tag, or a name search. [`ClubListing`] pairs that query with
//! the clubs it returned. Transitions fetch first and only then produce the
//! next listing, so a failed request leaves the current one on screen.
//!
//! Tag clicks toggle: clicking the active tag again goes back to every club.

use api::{ApiError, Club, ClubBackend};

/// The query behind the visible club list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClubQuery {
    #[default]
    All,
    Tag(String),
    Search(String),
}

impl ClubQuery {
    /// A name search; a blank keyword is the unfiltered list.
    pub fn search(keyword: &str) -> Self {
        match keyword.trim() {
            "" => ClubQuery::All,
            k => ClubQuery::Search(k.to_string()),
        }
    }

    /// Text the search box shows for this query; empty unless searching.
    pub fn keyword(&self) -> &str {
        match self {
            ClubQuery::Search(keyword) => keyword,
            _ => "",
        }
    }

    pub fn active_tag(&self) -> Option<&str> {
        match self {
            ClubQuery::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    pub async fn fetch<B: ClubBackend>(&self, backend: &B) -> Result<Vec<Club>, ApiError> {
        match self {
            ClubQuery::All => backend.list_clubs().await,
            ClubQuery::Tag(tag) => backend.clubs_with_tag(tag).await,
            ClubQuery::Search(keyword) => backend.search_clubs(keyword).await,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClubListing {
    pub query: ClubQuery,
    pub clubs: Vec<Club>,
}

impl ClubListing {
    /// Run `query` and build the listing for it.
    pub async fn load<B: ClubBackend>(backend: &B, query: ClubQuery) -> Result<Self, ApiError> {
        let clubs = query.fetch(backend).await?;
        tracing::debug!("Loaded {} clubs for {:?}", clubs.len(), query);
        Ok(Self { query, clubs })
    }

    /// Query that follows a click on `tag`.
    pub fn query_after_tag_click(&self, tag: &str) -> ClubQuery {
        if self.query.active_tag() == Some(tag) {
            ClubQuery::All
        } else {
            ClubQuery::Tag(tag.to_string())
        }
    }

    pub async fn click_tag<B: ClubBackend>(&self, backend: &B, tag: &str) -> Result<Self, ApiError> {
        Self::load(backend, self.query_after_tag_click(tag)).await
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.query.active_tag() == Some(tag)
    }

    /// Heading shown above a filtered list.
    pub fn heading(&self) -> Option<String> {
        match &self.query {
            ClubQuery::All => None,
            ClubQuery::Tag(tag) => Some(format!("Clubs with the tag {tag}")),
            ClubQuery::Search(keyword) => Some(format!("Clubs matching \"{keyword}\"")),
        }
    }
}

/// The club a detail page shows for the route name `name`.
///
/// `handed_over` is the club the list stored before navigating; it wins when
/// its name matches. Otherwise the name is searched and matched exactly. A
/// club that cannot be found keeps its name and an empty description.
pub async fn resolve_club<B: ClubBackend>(backend: &B, name: &str, handed_over: Option<Club>) -> Club {
    if let Some(club) = handed_over.filter(|c| c.name == name) {
        return club;
    }

    match backend.search_clubs(name).await {
        Ok(found) => {
            if let Some(club) = found.into_iter().find(|c| c.name == name) {
                return club;
            }
        }
        Err(e) => tracing::warn!("Lookup of club {} failed: {}", name, e),
    }
    Club {
        name: name.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryBackend;

    #[tokio::test]
    async fn test_tag_click_filters() {
        let backend = MemoryBackend::with_demo_data();
        let listing = ClubListing::load(&backend, ClubQuery::All).await.unwrap();
        assert_eq!(listing.clubs.len(), 4);

        let health = listing.click_tag(&backend, "Health").await.unwrap();
        assert_eq!(health.query, ClubQuery::Tag("Health".into()));
        assert!(health.is_selected("Health"));
        assert_eq!(health.clubs.len(), 1);
        assert_eq!(health.heading().as_deref(), Some("Clubs with the tag Health"));
    }

    #[tokio::test]
    async fn test_second_click_on_same_tag_reverts() {
        let backend = MemoryBackend::with_demo_data();
        let all = ClubListing::load(&backend, ClubQuery::All).await.unwrap();

        let filtered = all.click_tag(&backend, "Graduate").await.unwrap();
        assert_eq!(filtered.clubs.len(), 3);

        let reverted = filtered.click_tag(&backend, "Graduate").await.unwrap();
        assert_eq!(reverted.query, ClubQuery::All);
        assert_eq!(reverted.clubs, all.clubs);
        assert!(reverted.heading().is_none());
    }

    #[tokio::test]
    async fn test_other_tag_switches_filter() {
        let backend = MemoryBackend::with_demo_data();
        let games = ClubListing::load(&backend, ClubQuery::Tag("Games".into()))
            .await
            .unwrap();
        let next = games.click_tag(&backend, "Technology").await.unwrap();
        assert_eq!(next.query.active_tag(), Some("Technology"));
        assert!(!next.is_selected("Games"));
    }

    #[tokio::test]
    async fn test_search_clears_tag() {
        let backend = MemoryBackend::with_demo_data();
        let listing = ClubListing::load(&backend, ClubQuery::search("  water "))
            .await
            .unwrap();
        assert_eq!(listing.query, ClubQuery::Search("water".into()));
        assert!(listing.query.active_tag().is_none());
        assert_eq!(listing.clubs[0].name, "Water Club");

        assert_eq!(ClubQuery::search("   "), ClubQuery::All);
    }

    #[tokio::test]
    async fn test_tag_click_hits_server_each_time() {
        let backend = MemoryBackend::with_demo_data();
        let listing = ClubListing::default();
        let listing = listing.click_tag(&backend, "Games").await.unwrap();
        let _ = listing.click_tag(&backend, "Games").await.unwrap();
        assert_eq!(backend.requests(), 2);
    }

    #[tokio::test]
    async fn test_resolve_prefers_handed_over_club() {
        let backend = MemoryBackend::with_demo_data();
        let handed = Club {
            name: "Water Club".into(),
            description: "from the list".into(),
            ..Default::default()
        };
        let club = resolve_club(&backend, "Water Club", Some(handed)).await;
        assert_eq!(club.description, "from the list");
        assert_eq!(backend.requests(), 0);
    }

    #[tokio::test]
    async fn test_resolve_direct_load() {
        let backend = MemoryBackend::with_demo_data();
        let stale = Club {
            name: "Locust Labs".into(),
            ..Default::default()
        };
        let club = resolve_club(&backend, "Water Club", Some(stale)).await;
        assert_eq!(club.name, "Water Club");
        assert!(!club.description.is_empty());

        let missing = resolve_club(&backend, "Club", None).await;
        assert_eq!(missing.name, "Club");
        assert!(missing.description.is_empty());
    }

    #[tokio::test]
    async fn test_tag_click_clears_search_keyword() {
        let backend = MemoryBackend::with_demo_data();
        let searched = ClubListing::load(&backend, ClubQuery::search("club"))
            .await
            .unwrap();
        assert_eq!(searched.query.keyword(), "club");

        let tagged = searched.click_tag(&backend, "Health").await.unwrap();
        assert_eq!(tagged.query.keyword(), "");
        assert_eq!(tagged.query.active_tag(), Some("Health"));
    }
}
