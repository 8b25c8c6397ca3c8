//! Read-only projections that are built on demand and never stored.

use crate::{comment::*, id::*, user::*};

/// A comment enriched with the photo of its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    /// `None` if the author no longer exists
    pub photo: Option<String>,
}

impl CommentView {
    pub fn new(comment: Comment, author: Option<&User>) -> Self {
        let photo = author.map(|user| user.photo_url().to_owned());
        Self { comment, photo }
    }
}

/// Minimal projection of a user for displaying
/// the author of a comment.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id    : Id,
    pub name  : String,
    pub email : String,
    pub photo : String,
}

impl From<User> for Author {
    fn from(from: User) -> Self {
        let photo = from.photo_url().to_owned();
        let User { id, name, email, .. } = from;
        Self {
            id,
            name,
            email,
            photo,
        }
    }
}
