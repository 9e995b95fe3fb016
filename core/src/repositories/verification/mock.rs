//! In-memory implementation of VerificationRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::VerificationRecord;
use crate::errors::ProcessingError;

use super::trait_::VerificationRepository;

/// Mock verification repository for testing
///
/// Stores records in a `HashMap` keyed by email, mirroring the unique-key
/// semantics of the real store. Write failures can be injected to exercise
/// the orchestrator's persistence-error path.
pub struct MockVerificationRepository {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
    fail_writes: AtomicBool,
    upsert_calls: AtomicUsize,
}

impl MockVerificationRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: AtomicBool::new(false),
            upsert_calls: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent upsert fail with a persistence error
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Number of upsert calls made against this mock
    pub fn upsert_call_count(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }

    /// Number of records currently stored
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for MockVerificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationRepository for MockVerificationRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, ProcessingError> {
        let records = self.records.read().await;
        Ok(records.get(email).cloned())
    }

    async fn upsert(&self, record: &VerificationRecord) -> Result<(), ProcessingError> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ProcessingError::Persistence {
                message: "injected write failure".to_string(),
            });
        }

        // Whole-record insert under the write lock keeps the stored
        // (code, expires_at) pair from one writer only.
        let mut records = self.records.write().await;
        records.insert(record.email.clone(), record.clone());
        Ok(())
    }
}
