use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub type UserId = i64;

/// User record as held by the persistence layer.
///
/// `id` is `None` until the record has been saved; the repository assigns it
/// and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

impl User {
    /// A record that has not been stored yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Two records denote the same user when both are stored under the same id.
    pub fn same_identity(&self, other: &User) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}
