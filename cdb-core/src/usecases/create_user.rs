use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let NewUser {
        id,
        name,
        email,
        photo,
    } = u;
    let id = Id::from(id.trim());
    if !id.is_valid() {
        return Err(Error::UserId);
    }
    if repo.try_get_user(id.as_str())?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id,
        name,
        email,
        photo: photo.filter(|photo| !photo.trim().is_empty()),
    };
    log::debug!("Creating new user: id = {}", new_user.id);
    repo.create_user(&new_user)?;
    Ok(new_user)
}
