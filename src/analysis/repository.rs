use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::{StoreKey, StoredResult};
use crate::shared::AppError;

/// Key/value store for finished analyses and comparisons
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn get(&self, key: &StoreKey) -> Result<Option<StoredResult>, AppError>;

    /// Inserts or replaces the result stored under `key`
    async fn put(&self, key: &StoreKey, result: serde_json::Value) -> Result<(), AppError>;
}

/// In-memory implementation of AnalysisRepository for development and testing
///
/// Entries are lost when the process exits.
pub struct InMemoryAnalysisRepository {
    entries: Mutex<HashMap<StoreKey, StoredResult>>,
}

impl Default for InMemoryAnalysisRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn has_entry(&self, key: &StoreKey) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    #[instrument(skip(self))]
    async fn get(&self, key: &StoreKey) -> Result<Option<StoredResult>, AppError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::DatabaseError("Analysis store lock poisoned".to_string()))?;
        let entry = entries.get(key).cloned();

        debug!(hit = entry.is_some(), "Looked up analysis in memory");
        Ok(entry)
    }

    #[instrument(skip(self, result))]
    async fn put(&self, key: &StoreKey, result: serde_json::Value) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::DatabaseError("Analysis store lock poisoned".to_string()))?;
        entries.insert(
            key.clone(),
            StoredResult {
                result,
                stored_at: Utc::now(),
            },
        );

        debug!("Stored analysis in memory");
        Ok(())
    }
}

/// PostgreSQL implementation of analysis repository
pub struct PostgresAnalysisRepository {
    pool: PgPool,
}

impl PostgresAnalysisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the backing table when it does not exist yet
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS analysis_results (
                player TEXT NOT NULL,
                feature TEXT NOT NULL,
                result TEXT NOT NULL,
                stored_at TIMESTAMPTZ NOT NULL,
                PRIMARY KEY (player, feature)
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create analysis_results table");
            AppError::DatabaseError(e.to_string())
        })?;
        Ok(())
    }
}

#[async_trait]
impl AnalysisRepository for PostgresAnalysisRepository {
    #[instrument(skip(self))]
    async fn get(&self, key: &StoreKey) -> Result<Option<StoredResult>, AppError> {
        let row = sqlx::query(
            "SELECT result, stored_at FROM analysis_results WHERE player = $1 AND feature = $2",
        )
        .bind(&key.player)
        .bind(&key.feature)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to fetch analysis from database");
            AppError::DatabaseError(e.to_string())
        })?;

        let Some(row) = row else {
            debug!("Analysis not found in database");
            return Ok(None);
        };

        let raw: String = row.get("result");
        let result = serde_json::from_str(&raw).map_err(|e| {
            warn!(error = %e, "Stored analysis is not valid JSON");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!("Analysis found in database");
        Ok(Some(StoredResult {
            result,
            stored_at: row.get("stored_at"),
        }))
    }

    #[instrument(skip(self, result))]
    async fn put(&self, key: &StoreKey, result: serde_json::Value) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO analysis_results (player, feature, result, stored_at) VALUES ($1, $2, $3, $4)
             ON CONFLICT (player, feature) DO UPDATE SET result = EXCLUDED.result, stored_at = EXCLUDED.stored_at",
        )
        .bind(&key.player)
        .bind(&key.feature)
        .bind(result.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to store analysis in database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!("Analysis stored in database");
        Ok(())
    }
}
