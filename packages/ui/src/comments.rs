//! Comment thread of a club page.

use api::{ApiError, ClubBackend, Comment};

#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("No empty comments! Include words or letters")]
    Empty,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Comments as observed by this page, in server order plus local appends.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentThread {
    pub club: String,
    pub comments: Vec<Comment>,
}

impl CommentThread {
    /// An empty thread, shown until the first load completes.
    pub fn new(club: &str) -> Self {
        Self {
            club: club.to_string(),
            comments: Vec::new(),
        }
    }

    pub async fn load<B: ClubBackend>(backend: &B, club: &str) -> Result<Self, ApiError> {
        let comments = backend.comments(club).await?;
        Ok(Self {
            club: club.to_string(),
            comments,
        })
    }

    /// Post `draft` and append it under the author the server reports.
    ///
    /// A blank draft never reaches the server. The thread is untouched unless
    /// the post succeeds.
    pub async fn submit<B: ClubBackend>(
        &mut self,
        backend: &B,
        draft: &str,
    ) -> Result<(), CommentError> {
        let text = draft.trim();
        if text.is_empty() {
            return Err(CommentError::Empty);
        }

        let posted = backend.post_comment(&self.club, text).await?;
        self.comments.push(Comment {
            author: posted.author,
            text: text.to_string(),
        });
        Ok(())
    }
}
