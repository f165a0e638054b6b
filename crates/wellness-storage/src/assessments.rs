use async_trait::async_trait;
use aws_sdk_s3::Client;

use wellness_core::models::{Assessment, Identity, SubScores};
use wellness_core::s3_keys;
use wellness_instruments::scoring;

use crate::error::StorageError;
use crate::objects;

/// Append-only persistence for assessment records.
///
/// Records are never updated or deleted, and there is no lookup by session.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Persist one new record. Implementations must reject records whose
    /// derived fields disagree with the scoring formula, and must never
    /// overwrite an existing record.
    async fn put(&self, assessment: &Assessment) -> Result<(), StorageError>;

    /// The latest record submitted by `user_id`, if any.
    async fn most_recent_for(&self, user_id: &str) -> Result<Option<Assessment>, StorageError>;
}

/// Score `sub_scores`, persist the resulting record, and return it.
pub async fn create(
    store: &dyn AssessmentStore,
    sub_scores: SubScores,
    identity: &Identity,
) -> Result<Assessment, StorageError> {
    let assessment = scoring::assess(sub_scores, identity);
    store.put(&assessment).await?;

    tracing::info!(
        assessment_id = %assessment.id,
        stress_level = %assessment.stress_level,
        authenticated = identity.is_authenticated(),
        "assessment stored"
    );

    Ok(assessment)
}

pub(crate) fn ensure_consistent(assessment: &Assessment) -> Result<(), StorageError> {
    if scoring::is_consistent(assessment) {
        Ok(())
    } else {
        Err(StorageError::Inconsistent { id: assessment.id })
    }
}

/// One JSON object per assessment, keyed by owner and creation time.
#[derive(Clone)]
pub struct S3AssessmentStore {
    client: Client,
    bucket: String,
}

impl S3AssessmentStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl AssessmentStore for S3AssessmentStore {
    async fn put(&self, assessment: &Assessment) -> Result<(), StorageError> {
        ensure_consistent(assessment)?;

        let key = s3_keys::assessment(assessment);
        objects::create_json(&self.client, &self.bucket, &key, assessment).await
    }

    async fn most_recent_for(&self, user_id: &str) -> Result<Option<Assessment>, StorageError> {
        let prefix = s3_keys::user_assessments_prefix(user_id);

        // Keys sort in creation order under a user's prefix.
        let Some(latest) = objects::last_key(&self.client, &self.bucket, &prefix).await? else {
            return Ok(None);
        };

        objects::get_json(&self.client, &self.bucket, &latest)
            .await
            .map(Some)
    }
}
