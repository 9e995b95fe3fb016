//! MySQL implementation of the VerificationRepository trait.
//!
//! Persists the single outstanding code per email in the
//! `verification_requests` table, whose `email` column carries a UNIQUE
//! constraint. The upsert uses `INSERT ... ON DUPLICATE KEY UPDATE` so
//! concurrent writers for the same email serialize inside the database and
//! the stored row is always one writer's complete code/expiry pair.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use vp_core::domain::entities::VerificationRecord;
use vp_core::errors::ProcessingError;
use vp_core::repositories::VerificationRepository;

/// MySQL implementation of VerificationRepository
pub struct MySqlVerificationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationRepository {
    /// Create a new MySQL verification repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a VerificationRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<VerificationRecord, ProcessingError> {
        Ok(VerificationRecord {
            email: row.try_get("email").map_err(|e| ProcessingError::Persistence {
                message: format!("Failed to get email: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| ProcessingError::Persistence {
                message: format!("Failed to get code: {}", e),
            })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| ProcessingError::Persistence {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, ProcessingError> {
        let query = r#"
            SELECT email, code, expires_at
            FROM verification_requests
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ProcessingError::Persistence {
                message: format!("Failed to find verification record: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert(&self, record: &VerificationRecord) -> Result<(), ProcessingError> {
        // Atomic per key on the UNIQUE email column; the row after the
        // statement is exactly one writer's (code, expires_at) pair.
        let query = r#"
            INSERT INTO verification_requests (email, code, expires_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                code = VALUES(code),
                expires_at = VALUES(expires_at)
        "#;

        sqlx::query(query)
            .bind(&record.email)
            .bind(&record.code)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| ProcessingError::Persistence {
                message: format!("Failed to upsert verification record: {}", e),
            })?;

        Ok(())
    }
}
