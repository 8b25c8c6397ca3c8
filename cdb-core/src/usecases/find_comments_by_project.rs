use std::collections::HashMap;

use super::prelude::*;

/// All comments attached to the given project.
///
/// Comments may have different authors. The authors are loaded
/// at once for the distinct set of user ids and each view carries
/// the photo of its own author, or none if the author no longer
/// exists. An unknown project simply has no comments.
pub fn find_comments_by_project<R>(repo: &R, project_id: &str) -> Result<Vec<CommentView>>
where
    R: CommentRepo + UserRepo,
{
    let comments = repo.load_comments_by_project(project_id)?;
    if comments.is_empty() {
        return Ok(vec![]);
    }
    let mut user_ids: Vec<&str> = comments.iter().map(|c| c.user_id.as_str()).collect();
    user_ids.sort_unstable();
    user_ids.dedup();
    let authors: HashMap<Id, User> = repo
        .get_users(&user_ids)?
        .into_iter()
        .map(|user| (user.id.clone(), user))
        .collect();
    if authors.len() < user_ids.len() {
        log::debug!(
            "{} of {} authors of project {} no longer exist",
            user_ids.len() - authors.len(),
            user_ids.len(),
            project_id
        );
    }
    Ok(comments
        .into_iter()
        .map(|comment| {
            let author = authors.get(&comment.user_id);
            CommentView::new(comment, author)
        })
        .collect())
}
