use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id    : String,
    pub project_id : String,
    pub text       : String,
    pub rate       : i8,
}

pub(crate) fn validate_text(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    Ok(text.to_owned())
}

pub(crate) fn validate_rate(rate: i8) -> Result<RatingValue> {
    let rate = RatingValue::from(rate);
    if !rate.is_valid() {
        return Err(Error::RatingValue);
    }
    Ok(rate)
}

pub fn create_comment<R>(repo: &R, c: NewComment) -> Result<Comment>
where
    R: CommentRepo + UserRepo,
{
    let NewComment {
        user_id,
        project_id,
        text,
        rate,
    } = c;
    let user_id = Id::from(user_id.trim());
    if !user_id.is_valid() {
        return Err(Error::UserId);
    }
    let project_id = Id::from(project_id.trim());
    if !project_id.is_valid() {
        return Err(Error::ProjectId);
    }
    let text = validate_text(&text)?;
    let rate = validate_rate(rate)?;
    if repo.try_get_user(user_id.as_str())?.is_none() {
        return Err(Error::UserDoesNotExist);
    }
    let comment = Comment {
        id: Id::new(),
        user_id,
        project_id,
        created_at: Timestamp::now(),
        text,
        rate,
    };
    log::debug!(
        "Creating new comment {} of user {} for project {}",
        comment.id,
        comment.user_id,
        comment.project_id
    );
    repo.create_comment(comment.clone())?;
    Ok(comment)
}
