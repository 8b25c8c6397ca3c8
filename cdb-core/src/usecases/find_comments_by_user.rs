use super::prelude::*;

/// All comments written by the given user.
///
/// Every view carries the photo of that same user.
pub fn find_comments_by_user<R>(repo: &R, user_id: &str) -> Result<Vec<CommentView>>
where
    R: CommentRepo + UserRepo,
{
    let Some(user) = repo.try_get_user(user_id)? else {
        log::debug!("Cannot find comments of unknown user {user_id}");
        return Err(Error::UserDoesNotExist);
    };
    let comments = repo.load_comments_by_user(user.id.as_str())?;
    log::debug!("Found {} comments of user {}", comments.len(), user.id);
    Ok(comments
        .into_iter()
        .map(|comment| CommentView::new(comment, Some(&user)))
        .collect())
}
