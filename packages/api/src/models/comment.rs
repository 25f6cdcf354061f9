use serde::{Deserialize, Serialize};

/// A comment on a club page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
}

/// Body of `POST /api/:club/comment`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentBody {
    pub text: String,
}

/// Response of a successful comment POST. The author is whoever the session
/// cookie belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostedComment {
    pub author: String,
}
