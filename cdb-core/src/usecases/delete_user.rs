use super::prelude::*;

/// Delete a user from the directory.
///
/// The comments of the user are kept and will be
/// displayed without an author photo.
pub fn delete_user<R: UserRepo>(repo: &R, id: &str) -> Result<()> {
    match repo.delete_user(id) {
        Ok(()) => {
            log::info!("Deleted user {id}");
            Ok(())
        }
        Err(RepoError::NotFound) => Err(Error::UserDoesNotExist),
        Err(err) => Err(err.into()),
    }
}
