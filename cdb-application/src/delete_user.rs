use super::*;

pub fn delete_user(connections: &sqlite::Connections, id: &str) -> Result<()> {
    let connection = connections.exclusive()?;
    Ok(usecases::delete_user(&connection, id)?)
}
