//! Progress persistence: three schema-tagged slots mirrored from the study session.

use std::sync::Arc;

use study_core::{ProgressSnapshot, QuestionId};
use tracing::{debug, warn};

use crate::repository::{KeyValueStore, StorageError};

/// Slot holding the mastered ids (JSON array of integers).
pub const MASTERED_KEY: &str = "equistudy_mastered_v8";
/// Slot holding the session queue (JSON array of integers).
pub const QUEUE_KEY: &str = "equistudy_session_queue_v8";
/// Slot holding the session index (decimal string).
pub const INDEX_KEY: &str = "equistudy_session_index_v8";

/// Passive mirror of study progress over an injected slot backend.
///
/// Reads never fail: a missing, unreadable or corrupt slot falls back to its
/// default independently of the other two.
#[derive(Clone)]
pub struct ProgressStore {
    slots: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(slots: Arc<dyn KeyValueStore>) -> Self {
        Self { slots }
    }

    /// Last persisted progress, or defaults for absent/corrupt slots.
    pub async fn read(&self) -> ProgressSnapshot {
        let mastered = self
            .read_slot(MASTERED_KEY, decode_ids)
            .await
            .unwrap_or_default();
        let queue = self
            .read_slot(QUEUE_KEY, decode_ids)
            .await
            .unwrap_or_default();
        let index = self
            .read_slot(INDEX_KEY, decode_index)
            .await
            .unwrap_or_default();

        ProgressSnapshot {
            mastered,
            queue,
            index,
        }
    }

    /// Persist all three slots, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if a slot cannot be encoded or written.
    pub async fn try_write(&self, snapshot: &ProgressSnapshot) -> Result<(), StorageError> {
        let mastered = encode_ids(&snapshot.mastered)?;
        let queue = encode_ids(&snapshot.queue)?;

        self.slots.set(MASTERED_KEY, &mastered).await?;
        self.slots.set(QUEUE_KEY, &queue).await?;
        self.slots
            .set(INDEX_KEY, &snapshot.index.to_string())
            .await?;
        Ok(())
    }

    /// Best-effort write: failures are logged and dropped.
    ///
    /// Returns whether the write went through.
    pub async fn write(&self, snapshot: &ProgressSnapshot) -> bool {
        match self.try_write(snapshot).await {
            Ok(()) => {
                debug!(
                    mastered = snapshot.mastered.len(),
                    queue = snapshot.queue.len(),
                    index = snapshot.index,
                    "progress saved"
                );
                true
            }
            Err(err) => {
                warn!(error = %err, "progress write failed; keeping in-memory state");
                false
            }
        }
    }

    async fn read_slot<T>(
        &self,
        key: &str,
        decode: impl FnOnce(&str) -> Result<T, StorageError>,
    ) -> Option<T> {
        let raw = match self.slots.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key, error = %err, "progress slot unreadable; using default");
                return None;
            }
        };

        match decode(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "progress slot corrupt; using default");
                None
            }
        }
    }
}

fn encode_ids(ids: &[QuestionId]) -> Result<String, StorageError> {
    serde_json::to_string(ids).map_err(|err| StorageError::Serialization(err.to_string()))
}

fn decode_ids(raw: &str) -> Result<Vec<QuestionId>, StorageError> {
    serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
}

fn decode_index(raw: &str) -> Result<usize, StorageError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|err| StorageError::Serialization(format!("index {raw:?}: {err}")))
}
