// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use cdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod changelog;
mod comment;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

// SQLite limits the number of host parameters per statement
const MAX_IDS_PER_QUERY: usize = 500;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_comment_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::comments::dsl;
    schema::comments::table
        .select(dsl::rowid)
        .filter(dsl::cid.eq(id))
        .first::<i64>(conn)
        .map_err(|err| {
            log::warn!("Failed to resolve comment id '{}': {}", id, err);
            err
        })
        .map_err(from_diesel_err)
}
