use std::sync::Arc;

use axum::extract::FromRef;

use crate::state::AppState;
use crate::users::{
    dto::NewUser,
    repo::{RepoError, UserRepository},
    repo_types::{User, UserId},
};

/// Orchestrates user operations over a shared repository. Holds no state of its own.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.users))
    }
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Always inserts: the stored record gets a fresh id.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, RepoError> {
        let user = self.repo.save(User::from(new_user)).await?;
        debug_assert!(user.is_persisted());
        Ok(user)
    }

    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<User>, RepoError> {
        self.repo.find_by_name(name).await
    }

    pub async fn list_all(&self) -> Result<Vec<User>, RepoError> {
        self.repo.find_all().await
    }
}
