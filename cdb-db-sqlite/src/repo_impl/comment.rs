use super::*;

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_by_user(&self, user_id: &str) -> Result<Vec<Comment>> {
        load_comments_by_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn load_comments_by_project(&self, project_id: &str) -> Result<Vec<Comment>> {
        load_comments_by_project(&mut self.conn.borrow_mut(), project_id)
    }
}

impl<'a> CommentRepo for DbConnection<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_by_user(&self, user_id: &str) -> Result<Vec<Comment>> {
        load_comments_by_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn load_comments_by_project(&self, project_id: &str) -> Result<Vec<Comment>> {
        load_comments_by_project(&mut self.conn.borrow_mut(), project_id)
    }
}

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        unreachable!();
    }
    fn update_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_by_user(&self, user_id: &str) -> Result<Vec<Comment>> {
        load_comments_by_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn load_comments_by_project(&self, project_id: &str) -> Result<Vec<Comment>> {
        load_comments_by_project(&mut self.conn.borrow_mut(), project_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let new_comment = models::NewComment::from(&comment);
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    use schema::comments::dsl;
    // Only the text and the rating are mutable
    let count = diesel::update(dsl::comments.filter(dsl::cid.eq(comment.id.as_str())))
        .set((
            dsl::comment.eq(&comment.text),
            dsl::rate.eq(i16::from(comment.rate)),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count < 1 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::cid.eq(id))
        .first::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_comments_by_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::uid.eq(user_id))
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_comments_by_project(
    conn: &mut SqliteConnection,
    project_id: &str,
) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::pid.eq(project_id))
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
