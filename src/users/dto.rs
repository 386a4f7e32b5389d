use serde::Deserialize;

use crate::users::repo_types::User;

/// Request body for user creation. An `id` key, if sent, is ignored.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl From<NewUser> for User {
    fn from(n: NewUser) -> Self {
        User::new(n.name, n.email)
    }
}
