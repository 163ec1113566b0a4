//! Offline copy of the question corpus.
//!
//! Serves the last successfully parsed corpus text when the primary source is
//! unavailable or returns something unusable. It never touches study progress.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::questions::{LoadError, QuestionSource, parse_question_bank};
use crate::repository::KeyValueStore;

/// Slot holding the cached corpus text, versioned like a cache name.
pub const QUESTIONS_CACHE_KEY: &str = "equistudy-v1:questions.json";

pub struct CachedSource<S> {
    primary: S,
    cache: Arc<dyn KeyValueStore>,
}

impl<S: QuestionSource> CachedSource<S> {
    #[must_use]
    pub fn new(primary: S, cache: Arc<dyn KeyValueStore>) -> Self {
        Self { primary, cache }
    }

    async fn fetch_valid(&self) -> Result<String, LoadError> {
        let raw = self.primary.fetch().await?;
        parse_question_bank(&raw)?;
        Ok(raw)
    }
}

#[async_trait]
impl<S: QuestionSource> QuestionSource for CachedSource<S> {
    fn describe(&self) -> String {
        format!("{} (cached)", self.primary.describe())
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        match self.fetch_valid().await {
            Ok(raw) => {
                if let Err(err) = self.cache.set(QUESTIONS_CACHE_KEY, &raw).await {
                    warn!(error = %err, "could not refresh question cache");
                }
                Ok(raw)
            }
            Err(primary_err) => match self.cache.get(QUESTIONS_CACHE_KEY).await {
                Ok(Some(cached)) => {
                    warn!(
                        source = %self.primary.describe(),
                        error = %primary_err,
                        "question source unusable; serving cached copy"
                    );
                    Ok(cached)
                }
                Ok(None) => {
                    debug!("no cached question data");
                    Err(primary_err)
                }
                Err(err) => {
                    warn!(error = %err, "question cache unreadable");
                    Err(primary_err)
                }
            },
        }
    }
}
