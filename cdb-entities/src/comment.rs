use crate::{id::*, rating::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub user_id    : Id,
    pub project_id : Id,
    pub created_at : Timestamp,
    pub text       : String,
    pub rate       : RatingValue,
}
