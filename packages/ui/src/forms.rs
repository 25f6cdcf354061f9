//! # Account and club forms
//!
//! Raw field values live in the `*Form` structs exactly as typed. `validate`
//! applies the checks that need no server (required fields, matching
//! passwords) and produces the request body; the `submit_*` functions then
//! post it and translate the status into either the route to load next or a
//! [`Notice`].
//!
//! [`TagChoices`] backs the tag picker on the create-club form: the tags the
//! server already knows plus any the user typed, and which of them are
//! selected.

use api::{ClubBackend, Credentials, NewClub, Signup};

use crate::navigation::HOME;
use crate::notice::Notice;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a username and password")]
    MissingCredentials,
    #[error("Characters are required in the required fields")]
    MissingRequired,
    #[error("Passwords must match")]
    PasswordMismatch,
    #[error("Not a valid club name")]
    InvalidClubName,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// The username is sent exactly as typed; blank input is rejected.
    pub fn validate(&self) -> Result<Credentials, FormError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub major: String,
    pub grad_year: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<Signup, FormError> {
        let required = [&self.name, &self.username, &self.password];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(FormError::MissingRequired);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        let major = self.major.trim();
        Ok(Signup {
            username: self.username.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            year: self.grad_year.trim().parse().ok(),
            major: (!major.is_empty()).then(|| major.to_string()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClubForm {
    pub name: String,
    pub code: String,
    pub description: String,
}

impl ClubForm {
    /// Build the create request with the tags selected in `tags`.
    pub fn validate(&self, tags: &TagChoices) -> Result<NewClub, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::InvalidClubName);
        }
        let code = self.code.trim();
        Ok(NewClub {
            name: name.to_string(),
            code: (!code.is_empty()).then(|| code.to_string()),
            description: self.description.trim().to_string(),
            tags: tags.selected().to_vec(),
        })
    }
}

/// Trim and title-case a typed tag: `" data SCIENCE"` becomes `"Data Science"`.
///
/// A word starts at its first ASCII letter, digit or underscore, so
/// `"(ART) club"` becomes `"(Art) Club"`. Inner whitespace is kept as typed.
/// Returns `None` when nothing is left.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut tag = String::with_capacity(trimmed.len());
    let mut in_word = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            in_word = false;
            tag.push(c);
        } else if in_word {
            tag.extend(c.to_lowercase());
        } else if c.is_ascii_alphanumeric() || c == '_' {
            in_word = true;
            tag.extend(c.to_uppercase());
        } else {
            tag.push(c);
        }
    }
    Some(tag)
}

/// Tags offered by the create-club form and the current selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagChoices {
    options: Vec<String>,
    selected: Vec<String>,
}

impl TagChoices {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: Vec::new(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Selected tags in the order they were picked.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    pub fn toggle(&mut self, tag: &str) {
        if let Some(pos) = self.selected.iter().position(|t| t == tag) {
            self.selected.remove(pos);
        } else if self.options.iter().any(|t| t == tag) {
            self.selected.push(tag.to_string());
        }
    }

    /// Add a typed tag and select it. Returns the normalised tag when it was
    /// new; blank input and tags already offered change nothing.
    pub fn add(&mut self, raw: &str) -> Option<String> {
        let tag = normalize_tag(raw)?;
        if self.options.contains(&tag) {
            return None;
        }
        self.options.push(tag.clone());
        self.selected.push(tag.clone());
        Some(tag)
    }
}

/// Log in and return the route to load on success.
pub async fn submit_login<B: ClubBackend>(
    backend: &B,
    form: &LoginForm,
) -> Result<&'static str, Notice> {
    let credentials = form.validate()?;
    backend
        .login(&credentials)
        .await
        .map_err(|e| Notice::for_login(&e))?;
    Ok(HOME)
}

/// Sign up and return the route to load on success.
pub async fn submit_signup<B: ClubBackend>(
    backend: &B,
    form: &SignupForm,
) -> Result<&'static str, Notice> {
    let signup = form.validate()?;
    backend
        .signup(&signup)
        .await
        .map_err(|e| Notice::for_signup(&e))?;
    Ok(HOME)
}

/// Create the club and return the route to load on success.
pub async fn submit_club<B: ClubBackend>(
    backend: &B,
    form: &ClubForm,
    tags: &TagChoices,
) -> Result<&'static str, Notice> {
    let club = form.validate(tags)?;
    backend
        .create_club(&club)
        .await
        .map_err(|e| Notice::for_create_club(&e))?;
    Ok(HOME)
}
