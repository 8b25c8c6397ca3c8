mod create_comment;
mod create_user;
mod delete_user;
mod edit_comment;
mod error;
mod find_comments_by_project;
mod find_comments_by_user;
mod load_comment_author;
mod load_comment_changelog;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_comment::*, create_user::*, delete_user::*, edit_comment::*, error::Error,
    find_comments_by_project::*, find_comments_by_user::*, load_comment_author::*,
    load_comment_changelog::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
