pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, user_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.comment.user_id = user_id.into();
            self
        }
        pub fn project_id(mut self, project_id: &str) -> Self {
            self.comment.project_id = project_id.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn rate(mut self, rate: i8) -> Self {
            self.comment.rate = rate.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    user_id: Id::default(),
                    project_id: Id::default(),
                    created_at: Timestamp::now(),
                    text: "".into(),
                    rate: RatingValue::default(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::user::*;

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn photo(mut self, photo: Option<&str>) -> Self {
            self.user.photo = photo.map(Into::into);
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: "".into(),
                    name: "".into(),
                    email: "".into(),
                    photo: None,
                },
            }
        }
    }
}
