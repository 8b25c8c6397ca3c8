use super::*;

pub fn create_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    let user = {
        let mut connection = connections.exclusive()?;
        connection.transaction(|conn| usecases::create_new_user(conn, new_user))
    }?;
    info!("Created user {}", user.id);
    Ok(user)
}
