//! Integration tests for the MySQL verification repository
//!
//! These tests require a running MySQL instance to execute.
//! Run with: cargo test -p vp_infra --test verification_repository_integration -- --ignored

use chrono::{Duration, Utc};
use sqlx::MySqlPool;

use vp_core::domain::entities::VerificationRecord;
use vp_core::domain::value_objects::EmailAddress;
use vp_core::repositories::VerificationRepository;
use vp_infra::database::{create_pool, MySqlVerificationRepository};
use vp_shared::config::DatabaseConfig;

async fn test_pool() -> MySqlPool {
    let config = DatabaseConfig::from_env();
    let pool = create_pool(&config).await.expect("Failed to connect to MySQL");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS verification_requests (
            email      VARCHAR(320)  NOT NULL,
            code       CHAR(6)       NOT NULL,
            expires_at TIMESTAMP(6)  NOT NULL,
            PRIMARY KEY (email)
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create test table");

    pool
}

fn record_for(email: &str, code: &str) -> VerificationRecord {
    let email = EmailAddress::parse(email).expect("valid test email");
    VerificationRecord::new(&email, code.to_string(), 30)
}

#[tokio::test]
#[ignore] // Requires MySQL server
async fn test_upsert_inserts_then_overwrites() {
    let pool = test_pool().await;
    let repo = MySqlVerificationRepository::new(pool.clone());
    let email = "integration-overwrite@example.com";

    sqlx::query("DELETE FROM verification_requests WHERE email = ?")
        .bind(email)
        .execute(&pool)
        .await
        .unwrap();

    repo.upsert(&record_for(email, "111111")).await.unwrap();
    let second = record_for(email, "222222");
    repo.upsert(&second).await.unwrap();

    let stored = repo.find_by_email(email).await.unwrap().unwrap();
    assert_eq!(stored.code, "222222");

    // Expiry was recomputed from the second request
    let remaining = stored.expires_at - Utc::now();
    assert!(remaining <= Duration::minutes(30));
    assert!(remaining > Duration::minutes(29));

    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM verification_requests WHERE email = ?")
            .bind(email)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
#[ignore] // Requires MySQL server
async fn test_find_by_email_missing_record() {
    let pool = test_pool().await;
    let repo = MySqlVerificationRepository::new(pool);

    let found = repo
        .find_by_email("integration-absent@example.com")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
#[ignore] // Requires MySQL server
async fn test_upserts_for_different_emails_are_isolated() {
    let pool = test_pool().await;
    let repo = MySqlVerificationRepository::new(pool.clone());

    for email in ["integration-a@example.com", "integration-b@example.com"] {
        sqlx::query("DELETE FROM verification_requests WHERE email = ?")
            .bind(email)
            .execute(&pool)
            .await
            .unwrap();
    }

    repo.upsert(&record_for("integration-a@example.com", "111111"))
        .await
        .unwrap();
    repo.upsert(&record_for("integration-b@example.com", "222222"))
        .await
        .unwrap();

    let a = repo
        .find_by_email("integration-a@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(a.code, "111111");
}
