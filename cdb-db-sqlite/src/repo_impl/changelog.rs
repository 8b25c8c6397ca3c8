use super::*;

impl<'a> CommentChangelogRepo for DbReadWrite<'a> {
    fn append_changelog_entry(&self, comment_id: &str, entry: ChangelogEntry) -> Result<()> {
        append_changelog_entry(&mut self.conn.borrow_mut(), comment_id, entry)
    }
    fn load_changelog_of_comment(&self, comment_id: &str) -> Result<Vec<ChangelogEntry>> {
        load_changelog_of_comment(&mut self.conn.borrow_mut(), comment_id)
    }
}

impl<'a> CommentChangelogRepo for DbConnection<'a> {
    fn append_changelog_entry(&self, comment_id: &str, entry: ChangelogEntry) -> Result<()> {
        append_changelog_entry(&mut self.conn.borrow_mut(), comment_id, entry)
    }
    fn load_changelog_of_comment(&self, comment_id: &str) -> Result<Vec<ChangelogEntry>> {
        load_changelog_of_comment(&mut self.conn.borrow_mut(), comment_id)
    }
}

impl<'a> CommentChangelogRepo for DbReadOnly<'a> {
    fn append_changelog_entry(&self, _comment_id: &str, _entry: ChangelogEntry) -> Result<()> {
        unreachable!();
    }
    fn load_changelog_of_comment(&self, comment_id: &str) -> Result<Vec<ChangelogEntry>> {
        load_changelog_of_comment(&mut self.conn.borrow_mut(), comment_id)
    }
}

fn append_changelog_entry(
    conn: &mut SqliteConnection,
    comment_id: &str,
    entry: ChangelogEntry,
) -> Result<()> {
    let parent_rowid = resolve_comment_rowid(conn, comment_id)?;
    let ChangelogEntry {
        created_at,
        before,
        after,
    } = entry;
    let new_entry = models::NewChangelogEntry {
        parent_rowid,
        created_at: created_at.as_millis(),
        before: &before,
        after: &after,
    };
    let _count = diesel::insert_into(schema::comment_changelog::table)
        .values(&new_entry)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_changelog_of_comment(
    conn: &mut SqliteConnection,
    comment_id: &str,
) -> Result<Vec<ChangelogEntry>> {
    use schema::{comment_changelog::dsl as changelog_dsl, comments::dsl as comment_dsl};
    Ok(schema::comment_changelog::table
        .inner_join(schema::comments::table)
        .select((
            changelog_dsl::rowid,
            changelog_dsl::parent_rowid,
            changelog_dsl::created_at,
            changelog_dsl::before,
            changelog_dsl::after,
        ))
        .filter(comment_dsl::cid.eq(comment_id))
        // The row id reflects the insertion order
        .order_by(changelog_dsl::rowid)
        .load::<models::ChangelogEntryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
