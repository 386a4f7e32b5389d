use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::users::repo_types::{User, UserId};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("user store is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },

    #[error("user id space exhausted")]
    IdSpaceExhausted,

    #[error("no stored user with id {0}")]
    UnknownId(UserId),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Storage operations over user records.
///
/// `save` inserts when `user.id` is `None` and overwrites the stored record
/// when it is set; an id that was never assigned is `RepoError::UnknownId`.
/// Lookups return `Ok(None)` on absence, errors are reserved for storage
/// failures.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: User) -> Result<User, RepoError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError>;

    /// Exact, case-sensitive match. With duplicates the earliest insert wins.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepoError>;

    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<User>, RepoError>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn migrate(&self) -> Result<(), RepoError> {
        sqlx::migrate!("./migrations").run(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: User) -> Result<User, RepoError> {
        let Some(id) = user.id else {
            let created = sqlx::query_as::<_, User>(
                r#"
                INSERT INTO users (name, email)
                VALUES ($1, $2)
                RETURNING id, name, email
                "#,
            )
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.db)
            .await?;
            debug!(id = ?created.id, "user inserted");
            return Ok(created);
        };

        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
               SET name = $2, email = $3
             WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .fetch_optional(&self.db)
        .await?;

        updated.ok_or(RepoError::UnknownId(id))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE name = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
