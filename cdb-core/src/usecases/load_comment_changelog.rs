use super::prelude::*;

/// The recorded edits of a comment in the order they happened.
pub fn load_comment_changelog<R>(repo: &R, comment_id: &str) -> Result<Vec<ChangelogEntry>>
where
    R: CommentRepo + CommentChangelogRepo,
{
    if repo.try_load_comment(comment_id)?.is_none() {
        return Err(Error::CommentDoesNotExist);
    }
    Ok(repo.load_changelog_of_comment(comment_id)?)
}
