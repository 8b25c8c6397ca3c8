// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepo {
    fn create_comment(&self, comment: Comment) -> Result<()>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    // Ordered by creation time, oldest first
    fn load_comments_by_user(&self, user_id: &str) -> Result<Vec<Comment>>;
    fn load_comments_by_project(&self, project_id: &str) -> Result<Vec<Comment>>;

    fn try_load_comment(&self, id: &str) -> Result<Option<Comment>> {
        match self.load_comment(id) {
            Ok(comment) => Ok(Some(comment)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

pub trait CommentChangelogRepo {
    fn append_changelog_entry(&self, comment_id: &str, entry: ChangelogEntry) -> Result<()>;

    // Insertion order, no upper bound
    fn load_changelog_of_comment(&self, comment_id: &str) -> Result<Vec<ChangelogEntry>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;

    // Unknown ids are silently skipped
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>>;
}
