use async_trait::async_trait;
use tokio::sync::RwLock;

use wellness_core::models::Assessment;

use crate::assessments::{AssessmentStore, ensure_consistent};
use crate::error::StorageError;

/// In-process store for local runs and tests. Records live as long as the
/// process does.
#[derive(Default)]
pub struct MemoryAssessmentStore {
    records: RwLock<Vec<Assessment>>,
}

impl MemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Every stored record, oldest first.
    pub async fn all(&self) -> Vec<Assessment> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl AssessmentStore for MemoryAssessmentStore {
    async fn put(&self, assessment: &Assessment) -> Result<(), StorageError> {
        ensure_consistent(assessment)?;

        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == assessment.id) {
            return Err(StorageError::AlreadyExists {
                key: assessment.id.to_string(),
            });
        }
        records.push(assessment.clone());
        Ok(())
    }

    async fn most_recent_for(&self, user_id: &str) -> Result<Option<Assessment>, StorageError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .find(|r| r.user_id.as_deref() == Some(user_id))
            .cloned())
    }
}
