pub mod entities {
    pub use cdb_entities::{
        changelog::*, comment::*, id::*, rating::*, time::*, user::*, view::*,
    };
}

pub mod repositories;
pub mod usecases;

pub use repositories::Error as RepoError;
