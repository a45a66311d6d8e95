//! PostgreSQL Repository Implementation

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;

use crate::domain::entity::{ApiState, ApiStatus, DEFAULT_MESSAGE, STATE_ID};
use crate::domain::repository::ApiStateRepository;
use crate::error::{StateError, StateResult};

/// Upper bound for a single statement, pool acquisition included
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(10);

/// PostgreSQL-backed state repository
#[derive(Clone)]
pub struct PgApiStateRepository {
    pool: PgPool,
    op_timeout: Duration,
}

#[derive(sqlx::FromRow)]
struct ApiStateRow {
    status: String,
    message: String,
}

impl ApiStateRow {
    fn into_state(self) -> StateResult<ApiState> {
        let status = self
            .status
            .parse::<ApiStatus>()
            .map_err(StateError::InvalidRecord)?;

        Ok(ApiState {
            status,
            message: self.message,
        })
    }
}

impl PgApiStateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    /// Insert the default record if none exists.
    ///
    /// Returns `true` when this call created it.
    pub async fn init_if_absent(&self) -> StateResult<bool> {
        let inserted = self
            .bounded(
                sqlx::query(
                    r#"
                    INSERT INTO api_state (id, status, message)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id) DO NOTHING
                    "#,
                )
                .bind(STATE_ID)
                .bind(ApiStatus::Off.as_str())
                .bind(DEFAULT_MESSAGE)
                .execute(&self.pool),
            )
            .await?
            .rows_affected();

        if inserted > 0 {
            tracing::info!(state_id = STATE_ID, "Initialized default API state");
        }

        Ok(inserted > 0)
    }

    async fn find(&self) -> StateResult<Option<ApiState>> {
        let row = self
            .bounded(
                sqlx::query_as::<_, ApiStateRow>(
                    "SELECT status, message FROM api_state WHERE id = $1",
                )
                .bind(STATE_ID)
                .fetch_optional(&self.pool),
            )
            .await?;

        row.map(ApiStateRow::into_state).transpose()
    }

    async fn bounded<T, F>(&self, fut: F) -> StateResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StateError::Timeout(self.op_timeout)),
        }
    }
}

impl ApiStateRepository for PgApiStateRepository {
    async fn get_or_init(&self) -> StateResult<ApiState> {
        if let Some(state) = self.find().await? {
            return Ok(state);
        }

        // Concurrent initializers race on the primary key; the loser reads
        // whatever the winner wrote.
        self.init_if_absent().await?;

        Ok(self.find().await?.unwrap_or_default())
    }

    async fn set_status(&self, status: ApiStatus) -> StateResult<()> {
        self.bounded(
            sqlx::query(
                r#"
                INSERT INTO api_state (id, status, message)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO UPDATE SET status = EXCLUDED.status
                "#,
            )
            .bind(STATE_ID)
            .bind(status.as_str())
            .bind(DEFAULT_MESSAGE)
            .execute(&self.pool),
        )
        .await?;

        tracing::info!(status = %status, "API status updated");
        Ok(())
    }

    async fn set_message(&self, message: &str) -> StateResult<()> {
        self.bounded(
            sqlx::query(
                r#"
                INSERT INTO api_state (id, status, message)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO UPDATE SET message = EXCLUDED.message
                "#,
            )
            .bind(STATE_ID)
            .bind(ApiStatus::Off.as_str())
            .bind(message)
            .execute(&self.pool),
        )
        .await?;

        tracing::info!(message_len = message.len(), "API message updated");
        Ok(())
    }
}
