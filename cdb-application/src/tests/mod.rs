pub mod prelude {

    pub use cdb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub fn new_comment(
        user_id: &str,
        project_id: &str,
        text: &str,
        rate: i8,
    ) -> usecases::NewComment {
        usecases::NewComment {
            user_id: user_id.into(),
            project_id: project_id.into(),
            text: text.into(),
            rate,
        }
    }

    pub fn edit_text(text: &str) -> usecases::EditComment {
        usecases::EditComment {
            text: Some(text.into()),
            rate: None,
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            cdb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn create_user(&self, id: &str, photo: Option<&str>) -> User {
            flows::create_user(
                &self.db_connections,
                usecases::NewUser {
                    id: id.into(),
                    name: format!("User {id}"),
                    email: format!("{id}@example.com"),
                    photo: photo.map(Into::into),
                },
            )
            .unwrap()
        }

        pub fn create_comment(&self, user_id: &str, project_id: &str, text: &str) -> Comment {
            flows::create_comment(
                &self.db_connections,
                new_comment(user_id, project_id, text, 3),
            )
            .unwrap()
        }

        pub fn try_get_comment(&self, id: &str) -> Option<Comment> {
            match self.db_connections.shared().unwrap().load_comment(id) {
                Ok(comment) => Some(comment),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn changelog(&self, id: &str) -> Vec<ChangelogEntry> {
            usecases::load_comment_changelog(&self.db_connections.shared().unwrap(), id).unwrap()
        }

        pub fn comments_of_project(&self, project_id: &str) -> Vec<CommentView> {
            usecases::find_comments_by_project(&self.db_connections.shared().unwrap(), project_id)
                .unwrap()
        }
    }
}
