use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    let comment = {
        let mut connection = connections.exclusive()?;
        connection.transaction(|conn| usecases::create_comment(conn, new_comment))
    }
    .inspect_err(|err| {
        warn!("Failed to create new comment: {}", err);
    })?;
    info!(
        "Created comment {} for project {}",
        comment.id, comment.project_id
    );
    Ok(comment)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_comment_of_existing_user() {
        let fixture = BackendFixture::new();
        fixture.create_user("u1", Some("u1.png"));
        let comment = flows::create_comment(
            &fixture.db_connections,
            new_comment("u1", "p1", "Nice project", 4),
        )
        .unwrap();
        assert_eq!(Some(comment.clone()), fixture.try_get_comment(comment.id.as_str()));
    }

    #[test]
    fn create_comment_of_unknown_user() {
        let fixture = BackendFixture::new();
        let err = flows::create_comment(
            &fixture.db_connections,
            new_comment("u1", "p1", "Nice project", 4),
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert!(fixture.comments_of_project("p1").is_empty());
    }
}
