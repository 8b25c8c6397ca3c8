#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use cdb_core::entities::*;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub photo: Option<&'a str>,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(u: &'a User) -> Self {
        Self {
            id: u.id.as_str(),
            name: &u.name,
            email: &u.email,
            photo: u.photo.as_deref(),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            name,
            email,
            photo,
            ..
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            photo,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub cid: &'a str,
    pub uid: &'a str,
    pub pid: &'a str,
    pub created_at: i64,
    pub comment: &'a str,
    pub rate: i16,
}

impl<'a> From<&'a Comment> for NewComment<'a> {
    fn from(c: &'a Comment) -> Self {
        Self {
            cid: c.id.as_str(),
            uid: c.user_id.as_str(),
            pid: c.project_id.as_str(),
            created_at: c.created_at.as_millis(),
            comment: &c.text,
            rate: c.rate.into(),
        }
    }
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub rowid: i64,
    pub cid: String,
    pub uid: String,
    pub pid: String,
    pub created_at: i64,
    pub comment: String,
    pub rate: i16,
}

impl From<CommentEntity> for Comment {
    fn from(from: CommentEntity) -> Self {
        let CommentEntity {
            cid,
            uid,
            pid,
            created_at,
            comment,
            rate,
            ..
        } = from;
        let rate = i8::try_from(rate).unwrap_or_else(|_| {
            // This should never happen if ratings have been validated properly on insert
            log::warn!("Rating of comment {cid} is out of range: {rate}");
            if rate < 0 {
                i8::MIN
            } else {
                i8::MAX
            }
        });
        Self {
            id: cid.into(),
            user_id: uid.into(),
            project_id: pid.into(),
            created_at: Timestamp::from_millis(created_at),
            text: comment,
            rate: RatingValue::from(rate),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = comment_changelog)]
pub struct NewChangelogEntry<'a> {
    pub parent_rowid: i64,
    pub created_at: i64,
    pub before: &'a str,
    pub after: &'a str,
}

#[derive(Queryable)]
pub struct ChangelogEntryEntity {
    pub rowid: i64,
    pub parent_rowid: i64,
    pub created_at: i64,
    pub before: String,
    pub after: String,
}

impl From<ChangelogEntryEntity> for ChangelogEntry {
    fn from(from: ChangelogEntryEntity) -> Self {
        let ChangelogEntryEntity {
            created_at,
            before,
            after,
            ..
        } = from;
        Self {
            created_at: Timestamp::from_millis(created_at),
            before,
            after,
        }
    }
}
