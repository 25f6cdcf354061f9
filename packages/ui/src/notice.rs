//! # Notices: user-facing failure messages
//!
//! Every failed request ends in a message on screen. [`Notice`] is that
//! message; the `for_*` constructors hold the per-screen wording, keyed on the
//! status class carried by [`ApiError`]:
//!
//! | Screen | `401` | `400` | other |
//! |--------|-------|-------|-------|
//! | comment | login prompt | generic | generic |
//! | favorite | login prompt | generic | generic |
//! | create club | login prompt | duplicate field | "Club create failed" |
//! | signup | server message | server message | generic |
//! | login | generic | generic | generic |
//!
//! [`NoticeBanner`] renders one, with a link to the login page for
//! [`Notice::LoginRequired`].

use api::ApiError;
use dioxus::prelude::*;

use crate::comments::CommentError;
use crate::forms::FormError;
use crate::navigation::LOGIN;

pub const GENERIC_ERROR: &str = "An error has occurred";

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// The action needs a session; rendered with a link to the login page.
    LoginRequired(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::LoginRequired(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_login_prompt(&self) -> bool {
        matches!(self, Notice::LoginRequired(_))
    }

    /// A list or page failed to load.
    pub fn for_load(what: &str, err: &ApiError) -> Self {
        tracing::error!("Failed to load {}: {}", what, err);
        Notice::Error(format!("Could not load {what}"))
    }

    pub fn for_comment(err: &CommentError) -> Self {
        match err {
            CommentError::Empty => Notice::Error(err.to_string()),
            CommentError::Api(ApiError::Unauthorized) => {
                Notice::LoginRequired("Please login to comment".into())
            }
            CommentError::Api(_) => Notice::Error(GENERIC_ERROR.into()),
        }
    }

    pub fn for_favorite(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => {
                Notice::LoginRequired("Please login to favorite a club".into())
            }
            _ => Notice::Error(GENERIC_ERROR.into()),
        }
    }

    pub fn for_create_club(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => {
                Notice::LoginRequired("Please login to create a club".into())
            }
            ApiError::Rejected(Some(message)) => {
                Notice::Error(format!("Club create failed: {message}"))
            }
            ApiError::Rejected(None) => {
                Notice::Error("Club create failed. There is a duplicate field".into())
            }
            _ => Notice::Error("Club create failed".into()),
        }
    }

    pub fn for_signup(err: &ApiError) -> Self {
        Notice::Error(err.server_message().unwrap_or("Signup failed").to_string())
    }

    pub fn for_login(_err: &ApiError) -> Self {
        Notice::Error("Error logging in. Please verify credentials".into())
    }
}

impl From<FormError> for Notice {
    fn from(err: FormError) -> Self {
        Notice::Error(err.to_string())
    }
}

/// Inline banner for an optional notice.
#[component]
pub fn NoticeBanner(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };

    rsx! {
        div {
            class: if notice.is_login_prompt() { "notice notice-login" } else { "notice notice-error" },
            role: "alert",
            span { "{notice.message()}" }
            if notice.is_login_prompt() {
                a { class: "notice-link", href: LOGIN, "Log in" }
            }
        }
    }
}
