#[macro_use]
extern crate log;

mod create_comment;
mod create_user;
mod delete_user;
mod edit_comment;

pub mod prelude {
    pub use super::{create_comment::*, create_user::*, delete_user::*, edit_comment::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use cdb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use cdb_db_sqlite::Connections;
}
