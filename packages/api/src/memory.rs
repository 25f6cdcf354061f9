use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{Club, Comment, Credentials, NewClub, PostedComment, Signup, TagCount};
use crate::{ApiError, ClubBackend};

const LOGGED_OUT: &str = "Successfully logged out";

/// In-process emulation of the club API for tests and the offline demo.
///
/// Answers with the same status semantics as the server: writes need a
/// logged-in session (`401`), duplicate names or codes are rejected (`400`).
/// Every call counts as one request, see [`MemoryBackend::requests`].
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
    requests: Arc<AtomicUsize>,
}

#[derive(Debug, Default)]
struct State {
    clubs: Vec<Club>,
    comments: HashMap<String, Vec<Comment>>,
    /// username -> password
    users: HashMap<String, String>,
    /// club name -> usernames
    favorites: HashMap<String, BTreeSet<String>>,
    session: Option<String>,
}

/// Clones share state, so equality is identity of that state.
impl PartialEq for MemoryBackend {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-filled with a handful of clubs, one account
    /// (`demo` / `demo`) and a comment.
    pub fn with_demo_data() -> Self {
        let backend = Self::new();
        {
            let mut state = backend.lock();
            state.clubs = vec![
                club("Locust Labs", "LL", "Building tools for students.", &["Technology", "Undergraduate"]),
                club("Penn Chess Club", "PCC", "Weekly blitz and rated games.", &["Games", "Undergraduate", "Graduate"]),
                club("Water Club", "WC", "We drink water.", &["Health", "Graduate"]),
                club("Data Science Society", "DSS", "Talks, datathons and reading groups.", &["Technology", "Graduate"]),
            ];
            state.users.insert("demo".into(), "demo".into());
            state.comments.insert(
                "Locust Labs".into(),
                vec![Comment {
                    author: "demo".into(),
                    text: "Great first meeting!".into(),
                }],
            );
        }
        backend
    }

    /// Register an account directly, bypassing signup.
    pub fn add_user(&self, username: &str, password: &str) {
        self.lock()
            .users
            .insert(username.to_string(), password.to_string());
    }

    pub fn add_club(&self, club: Club) {
        self.lock().clubs.push(club);
    }

    /// Number of calls made against this backend so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// The username the emulated session cookie belongs to.
    pub fn session_user(&self) -> Option<String> {
        self.lock().session.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means a panicking test; the data is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Count a request and lock the state for it.
    fn begin(&self) -> MutexGuard<'_, State> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.lock()
    }
}

fn club(name: &str, code: &str, description: &str, tags: &[&str]) -> Club {
    Club {
        name: name.into(),
        description: description.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        code: Some(code.into()),
    }
}

fn rejected(message: &str) -> ApiError {
    ApiError::Rejected(Some(message.to_string()))
}

impl State {
    fn user(&self) -> Result<String, ApiError> {
        self.session.clone().ok_or(ApiError::Unauthorized)
    }

    fn club_exists(&self, name: &str) -> Result<(), ApiError> {
        if self.clubs.iter().any(|c| c.name == name) {
            Ok(())
        } else {
            Err(rejected("No such club"))
        }
    }
}

impl ClubBackend for MemoryBackend {
    async fn list_clubs(&self) -> Result<Vec<Club>, ApiError> {
        Ok(self.begin().clubs.clone())
    }

    async fn search_clubs(&self, keyword: &str) -> Result<Vec<Club>, ApiError> {
        let state = self.begin();
        let needle = keyword.to_lowercase();
        Ok(state
            .clubs
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn clubs_with_tag(&self, tag: &str) -> Result<Vec<Club>, ApiError> {
        let state = self.begin();
        Ok(state.clubs.iter().filter(|c| c.has_tag(tag)).cloned().collect())
    }

    async fn create_club(&self, new: &NewClub) -> Result<(), ApiError> {
        let mut state = self.begin();
        state.user()?;
        if new.name.trim().is_empty() {
            return Err(rejected("Bad request"));
        }
        let code = new.code.clone().unwrap_or_else(|| new.derived_code());
        let duplicate = state
            .clubs
            .iter()
            .any(|c| c.name == new.name || c.code.as_deref() == Some(code.as_str()));
        if duplicate {
            return Err(rejected("Duplicate fields"));
        }
        state.clubs.push(Club {
            name: new.name.clone(),
            description: new.description.clone(),
            tags: new.tags.clone(),
            code: Some(code),
        });
        Ok(())
    }

    async fn all_tags(&self) -> Result<Vec<String>, ApiError> {
        let state = self.begin();
        let tags: BTreeSet<&String> = state.clubs.iter().flat_map(|c| &c.tags).collect();
        Ok(tags.into_iter().cloned().collect())
    }

    async fn tag_counts(&self) -> Result<Vec<TagCount>, ApiError> {
        let state = self.begin();
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for tag in state.clubs.iter().flat_map(|c| &c.tags) {
            *counts.entry(tag).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(tag, count)| TagCount {
                tag: tag.to_string(),
                count,
            })
            .collect())
    }

    async fn comments(&self, club: &str) -> Result<Vec<Comment>, ApiError> {
        let state = self.begin();
        state.club_exists(club)?;
        Ok(state.comments.get(club).cloned().unwrap_or_default())
    }

    async fn post_comment(&self, club: &str, text: &str) -> Result<PostedComment, ApiError> {
        let mut state = self.begin();
        let author = state.user()?;
        state.club_exists(club)?;
        state.comments.entry(club.to_string()).or_default().push(Comment {
            author: author.clone(),
            text: text.to_string(),
        });
        Ok(PostedComment { author })
    }

    async fn favorite_count(&self, club: &str) -> Result<u32, ApiError> {
        let state = self.begin();
        state.club_exists(club)?;
        Ok(state.favorites.get(club).map_or(0, |f| f.len() as u32))
    }

    async fn toggle_favorite(&self, club: &str) -> Result<(), ApiError> {
        let mut state = self.begin();
        let user = state.user()?;
        state.club_exists(club)?;
        let fans = state.favorites.entry(club.to_string()).or_default();
        if !fans.remove(&user) {
            fans.insert(user);
        }
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let mut state = self.begin();
        match state.users.get(&credentials.username) {
            Some(password) if *password == credentials.password => {
                state.session = Some(credentials.username.clone());
                Ok(())
            }
            _ => Err(ApiError::Unauthorized),
        }
    }

    async fn signup(&self, signup: &Signup) -> Result<(), ApiError> {
        let mut state = self.begin();
        if signup.username.trim().is_empty() || signup.password.is_empty() {
            return Err(rejected("Username and password are required"));
        }
        if state.users.contains_key(&signup.username) {
            return Err(rejected("Username already exists"));
        }
        state
            .users
            .insert(signup.username.clone(), signup.password.clone());
        state.session = Some(signup.username.clone());
        Ok(())
    }

    async fn logout(&self) -> Result<String, ApiError> {
        self.begin().session = None;
        Ok(LOGGED_OUT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_tag_filter_and_search() {
        let backend = MemoryBackend::with_demo_data();

        let graduate = backend.clubs_with_tag("Graduate").await.unwrap();
        assert_eq!(graduate.len(), 3);
        assert!(graduate.iter().all(|c| c.has_tag("Graduate")));

        let found = backend.search_clubs("club").await.unwrap();
        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Penn Chess Club", "Water Club"]);

        assert_eq!(backend.search_clubs("").await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_comment_requires_session() {
        let backend = MemoryBackend::with_demo_data();

        let err = backend.post_comment("Locust Labs", "hi").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(backend.comments("Locust Labs").await.unwrap().len(), 1);

        backend.login(&credentials("demo", "demo")).await.unwrap();
        let posted = backend.post_comment("Locust Labs", "hi").await.unwrap();
        assert_eq!(posted.author, "demo");

        let comments = backend.comments("Locust Labs").await.unwrap();
        assert_eq!(comments.last().unwrap().text, "hi");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let backend = MemoryBackend::with_demo_data();
        let err = backend.login(&credentials("demo", "nope")).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(backend.session_user().is_none());
    }

    #[tokio::test]
    async fn test_create_club_duplicates_and_code() {
        let backend = MemoryBackend::new();
        backend.add_user("ann", "pw");

        let new = NewClub {
            name: "Film Society".into(),
            ..Default::default()
        };
        assert!(backend.create_club(&new).await.unwrap_err().is_unauthorized());

        backend.login(&credentials("ann", "pw")).await.unwrap();
        backend.create_club(&new).await.unwrap();
        let clubs = backend.list_clubs().await.unwrap();
        assert_eq!(clubs[0].code.as_deref(), Some("FS"));

        let err = backend.create_club(&new).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Duplicate fields"));
    }

    #[tokio::test]
    async fn test_tags_and_counts_are_sorted() {
        let backend = MemoryBackend::with_demo_data();
        let tags = backend.all_tags().await.unwrap();
        assert_eq!(tags, ["Games", "Graduate", "Health", "Technology", "Undergraduate"]);

        let counts = backend.tag_counts().await.unwrap();
        let technology = counts.iter().find(|c| c.tag == "Technology").unwrap();
        assert_eq!(technology.count, 2);
    }

    #[tokio::test]
    async fn test_favorite_toggles() {
        let backend = MemoryBackend::with_demo_data();
        backend.login(&credentials("demo", "demo")).await.unwrap();

        backend.toggle_favorite("Water Club").await.unwrap();
        assert_eq!(backend.favorite_count("Water Club").await.unwrap(), 1);
        backend.toggle_favorite("Water Club").await.unwrap();
        assert_eq!(backend.favorite_count("Water Club").await.unwrap(), 0);

        assert!(backend.favorite_count("Nope").await.is_err());
    }

    #[tokio::test]
    async fn test_signup_logs_in_and_logout_clears() {
        let backend = MemoryBackend::new();
        let signup = Signup {
            username: "bo".into(),
            name: "Bo".into(),
            password: "secret".into(),
            email: "bo@example.edu".into(),
            ..Default::default()
        };
        backend.signup(&signup).await.unwrap();
        assert_eq!(backend.session_user().as_deref(), Some("bo"));

        let err = backend.signup(&signup).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Username already exists"));

        backend.logout().await.unwrap();
        assert!(backend.session_user().is_none());
        assert_eq!(backend.requests(), 3);
    }
}
