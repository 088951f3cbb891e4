// tests/support/mocks/users.rs
use async_trait::async_trait;
use std::sync::Mutex;
use yanote::domain::errors::{DomainError, DomainResult};
use yanote::domain::user::{NewUser, User, UserId, UserRepository, Username};

/// User table in a vector; usernames are unique like the real constraint.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn set_active(&self, id: UserId, active: bool) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|user| user.id == id) {
            user.is_active = active;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: UserId::new(i64::try_from(users.len()).unwrap() + 1)?,
            username: new_user.username,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }
}
