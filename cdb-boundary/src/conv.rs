use super::*;
use cdb_entities as e;

impl From<e::view::CommentView> for Comment {
    fn from(from: e::view::CommentView) -> Self {
        let e::view::CommentView { comment, photo } = from;
        let e::comment::Comment {
            id,
            user_id,
            project_id,
            created_at,
            text,
            rate,
        } = comment;
        Self {
            cid: id.into(),
            uid: user_id.into(),
            pid: project_id.into(),
            comment: text,
            rate: rate.into(),
            created_at: created_at.as_millis(),
            photo,
        }
    }
}

impl From<e::changelog::ChangelogEntry> for ChangelogEntry {
    fn from(from: e::changelog::ChangelogEntry) -> Self {
        let e::changelog::ChangelogEntry { before, after, .. } = from;
        Self { before, after }
    }
}

impl From<e::view::Author> for Author {
    fn from(from: e::view::Author) -> Self {
        let e::view::Author {
            id,
            name,
            email,
            photo,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            photo,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            photo,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            photo,
        }
    }
}
