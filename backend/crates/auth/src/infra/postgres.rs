//! PostgreSQL Repository Implementations

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::error::{AuthError, AuthResult};

/// Upper bound for a single statement, pool acquisition included
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(10);

/// PostgreSQL-backed credential repository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
    op_timeout: Duration,
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    username: String,
    password: String,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    /// Provision a credential unless the username is already taken.
    ///
    /// Returns `true` when a row was inserted.
    pub async fn insert_if_absent(&self, credential: &Credential) -> AuthResult<bool> {
        let inserted = self
            .bounded(
                sqlx::query(
                    r#"
                    INSERT INTO credentials (username, password)
                    VALUES ($1, $2)
                    ON CONFLICT (username) DO NOTHING
                    "#,
                )
                .bind(&credential.username)
                .bind(&credential.password)
                .execute(&self.pool),
            )
            .await?
            .rows_affected();

        Ok(inserted > 0)
    }

    async fn bounded<T, F>(&self, fut: F) -> AuthResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(AuthError::Timeout(self.op_timeout)),
        }
    }
}

impl CredentialRepository for PgCredentialRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>> {
        let row = self
            .bounded(
                sqlx::query_as::<_, CredentialRow>(
                    "SELECT username, password FROM credentials WHERE username = $1",
                )
                .bind(username)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(row.map(|r| Credential::new(r.username, r.password)))
    }
}
