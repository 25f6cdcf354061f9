//! Data models exchanged with the club directory API.

mod account;
mod club;
mod comment;

pub use account::{Credentials, Signup};
pub use club::{Club, ClubList, FavoriteCount, NewClub, TagCount};
pub use comment::{Comment, CommentBody, PostedComment};
