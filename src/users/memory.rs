use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::users::repo::{RepoError, UserRepository};
use crate::users::repo_types::{User, UserId};

/// Process-local user store. Records are kept in insertion order, ids start at 1.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Store>,
    capacity: Option<usize>,
}

#[derive(Default)]
struct Store {
    last_id: UserId,
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts past `capacity` records fail with `RepoError::CapacityExceeded`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::default(),
            capacity: Some(capacity),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> Result<User, RepoError> {
        let mut store = self.inner.write().await;

        if let Some(id) = user.id {
            let slot = store
                .users
                .iter_mut()
                .find(|u| u.same_identity(&user))
                .ok_or(RepoError::UnknownId(id))?;
            *slot = user.clone();
            return Ok(user);
        }

        if let Some(capacity) = self.capacity {
            if store.users.len() >= capacity {
                return Err(RepoError::CapacityExceeded { capacity });
            }
        }

        let id = store
            .last_id
            .checked_add(1)
            .ok_or(RepoError::IdSpaceExhausted)?;
        store.last_id = id;
        user.id = Some(id);
        store.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let store = self.inner.read().await;
        Ok(store.users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepoError> {
        let store = self.inner.read().await;
        Ok(store.users.iter().find(|u| u.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.inner.read().await.users.clone())
    }
}
