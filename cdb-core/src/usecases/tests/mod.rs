use std::{cell::RefCell, result};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

pub use cdb_entities::builders::*;

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for Comment {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub comments: RefCell<Vec<Comment>>,
    pub changelog: RefCell<Vec<(Id, ChangelogEntry)>>,
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment)
    }

    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        update(&mut self.comments.borrow_mut(), comment)
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        get(&self.comments.borrow(), id)
    }

    fn load_comments_by_user(&self, user_id: &str) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn load_comments_by_project(&self, project_id: &str) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.project_id.as_str() == project_id)
            .cloned()
            .collect())
    }
}

impl CommentChangelogRepo for MockDb {
    fn append_changelog_entry(&self, comment_id: &str, entry: ChangelogEntry) -> RepoResult<()> {
        if !self
            .comments
            .borrow()
            .iter()
            .any(|c| c.id.as_str() == comment_id)
        {
            return Err(RepoError::NotFound);
        }
        self.changelog.borrow_mut().push((comment_id.into(), entry));
        Ok(())
    }

    fn load_changelog_of_comment(&self, comment_id: &str) -> RepoResult<Vec<ChangelogEntry>> {
        Ok(self
            .changelog
            .borrow()
            .iter()
            .filter(|(id, _)| id.as_str() == comment_id)
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }

    fn delete_user(&self, id: &str) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let len_before = users.len();
        users.retain(|u| u.id.as_str() != id);
        if users.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn try_get_user(&self, id: &str) -> RepoResult<Option<User>> {
        match get(&self.users.borrow(), id) {
            Ok(user) => Ok(Some(user)),
            Err(RepoError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn get_users(&self, ids: &[&str]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| ids.contains(&u.id.as_str()))
            .cloned()
            .collect())
    }
}

/// Counts the calls of batch user lookups.
#[derive(Default)]
pub struct CountingDb {
    pub db: MockDb,
    pub get_user_calls: RefCell<usize>,
    pub get_users_calls: RefCell<usize>,
}

impl CommentRepo for CountingDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        self.db.create_comment(comment)
    }
    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        self.db.update_comment(comment)
    }
    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        self.db.load_comment(id)
    }
    fn load_comments_by_user(&self, user_id: &str) -> RepoResult<Vec<Comment>> {
        self.db.load_comments_by_user(user_id)
    }
    fn load_comments_by_project(&self, project_id: &str) -> RepoResult<Vec<Comment>> {
        self.db.load_comments_by_project(project_id)
    }
}

impl UserRepo for CountingDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        self.db.create_user(user)
    }
    fn delete_user(&self, id: &str) -> RepoResult<()> {
        self.db.delete_user(id)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        *self.get_user_calls.borrow_mut() += 1;
        self.db.get_user(id)
    }
    fn try_get_user(&self, id: &str) -> RepoResult<Option<User>> {
        *self.get_user_calls.borrow_mut() += 1;
        self.db.try_get_user(id)
    }
    fn get_users(&self, ids: &[&str]) -> RepoResult<Vec<User>> {
        *self.get_users_calls.borrow_mut() += 1;
        self.db.get_users(ids)
    }
}

/// Every query fails with a storage error.
pub struct BrokenDb;

fn broken<T>() -> RepoResult<T> {
    Err(RepoError::Other(anyhow::anyhow!("storage unavailable")))
}

impl CommentRepo for BrokenDb {
    fn create_comment(&self, _: Comment) -> RepoResult<()> {
        broken()
    }
    fn update_comment(&self, _: &Comment) -> RepoResult<()> {
        broken()
    }
    fn load_comment(&self, _: &str) -> RepoResult<Comment> {
        broken()
    }
    fn load_comments_by_user(&self, _: &str) -> RepoResult<Vec<Comment>> {
        broken()
    }
    fn load_comments_by_project(&self, _: &str) -> RepoResult<Vec<Comment>> {
        broken()
    }
}

impl UserRepo for BrokenDb {
    fn create_user(&self, _: &User) -> RepoResult<()> {
        broken()
    }
    fn delete_user(&self, _: &str) -> RepoResult<()> {
        broken()
    }
    fn get_user(&self, _: &str) -> RepoResult<User> {
        broken()
    }
    fn try_get_user(&self, _: &str) -> RepoResult<Option<User>> {
        broken()
    }
    fn get_users(&self, _: &[&str]) -> RepoResult<Vec<User>> {
        broken()
    }
}

pub fn user(id: &str, photo: Option<&str>) -> User {
    User::build()
        .id(id)
        .name(id)
        .email(&format!("{id}@example.com"))
        .photo(photo)
        .finish()
}

pub fn comment(id: &str, user_id: &str, project_id: &str) -> Comment {
    Comment::build()
        .id(id)
        .user_id(user_id)
        .project_id(project_id)
        .text(&format!("comment {id}"))
        .rate(3)
        .finish()
}
