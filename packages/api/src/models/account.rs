//! Request bodies for the account endpoints.
//!
//! The client never sees a token: login and signup set a session cookie on
//! the response and later requests carry it.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/signup`.
///
/// `year` and `major` are optional and serialize as `null` when missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Signup {
    pub username: String,
    pub name: String,
    pub password: String,
    pub email: String,
    pub year: Option<i32>,
    pub major: Option<String>,
}
