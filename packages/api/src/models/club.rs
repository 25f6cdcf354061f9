//! # Club models
//!
//! [`Club`] is what the list and tag endpoints return inside a [`ClubList`]
//! envelope. [`NewClub`] is the body of the create request; an absent `code`
//! lets the server derive an acronym from the name.
//!
//! [`TagCount`] and [`FavoriteCount`] are the small read-only projections the
//! home and detail pages show next to the club data.

use serde::{Deserialize, Serialize};

/// A club as listed by the directory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Club {
    /// Unique, user-facing identifier
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Tags in server order
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Club {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Envelope of `GET /api/clubs` and `GET /api/clubs/:tag`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubList {
    pub clubs: Vec<Club>,
}

/// Body of `POST /api/clubs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClub {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewClub {
    /// Acronym of the club name, used when no code was supplied.
    ///
    /// `"Penn Labs Club"` becomes `"PLC"`.
    pub fn derived_code(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// One entry of `GET /api/tag_count`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u32,
}

/// Body of `GET /api/:club/favorite`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteCount {
    #[serde(rename = "favorite count")]
    pub count: u32,
}
