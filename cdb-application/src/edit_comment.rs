use super::*;

/// Update a comment and record the change in its changelog.
///
/// Both the changelog entry and the updated comment are
/// stored within a single transaction.
pub fn edit_comment(
    connections: &sqlite::Connections,
    comment_id: &str,
    edit: usecases::EditComment,
) -> Result<Comment> {
    let comment = {
        let mut connection = connections.exclusive()?;
        connection.transaction(|conn| usecases::edit_comment(conn, comment_id, edit))
    }
    .inspect_err(|err| {
        warn!("Failed to edit comment {}: {}", comment_id, err);
    })?;
    Ok(comment)
}
