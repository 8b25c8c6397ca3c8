use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The comment does not exist")]
    CommentDoesNotExist,
    #[error("Invalid user id")]
    UserId,
    #[error("Invalid project id")]
    ProjectId,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Rating value out of range")]
    RatingValue,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// A referenced user, project or comment is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserDoesNotExist
                | Self::CommentDoesNotExist
                | Self::Repo(repositories::Error::NotFound)
        )
    }
}
