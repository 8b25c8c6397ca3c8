use super::prelude::*;

pub fn load_comment_author<R: UserRepo>(repo: &R, comment: &Comment) -> Result<Author> {
    repo.try_get_user(comment.user_id.as_str())?
        .map(Into::into)
        .ok_or(Error::UserDoesNotExist)
}

pub fn load_comment_author_by_id<R>(repo: &R, comment_id: &str) -> Result<Author>
where
    R: CommentRepo + UserRepo,
{
    let comment = repo
        .try_load_comment(comment_id)?
        .ok_or(Error::CommentDoesNotExist)?;
    load_comment_author(repo, &comment)
}
