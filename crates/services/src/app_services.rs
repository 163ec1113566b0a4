use std::path::Path;
use std::sync::Arc;

use storage::{
    CachedSource, FileQuestionSource, ProgressStore, QuestionSource, Storage, load_question_bank,
};
use study_core::QuestionBank;
use tracing::error;

use crate::error::AppServicesError;
use crate::study_loop::StudyLoopService;

/// Assembles app-facing services from storage and the question source.
#[derive(Clone)]
pub struct AppServices {
    study_loop: Arc<StudyLoopService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and a cached question file.
    ///
    /// A corpus that fails to load is logged and leaves the bank empty; the UI
    /// then stays on its loading screen instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        questions_path: &Path,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let source = CachedSource::new(
            FileQuestionSource::new(questions_path),
            Arc::clone(&storage.slots),
        );
        Ok(Self::from_parts(&storage, &source).await)
    }

    /// Build services from an existing storage and question source.
    pub async fn from_parts(storage: &Storage, source: &dyn QuestionSource) -> Self {
        let bank = match load_question_bank(source).await {
            Ok(bank) => bank,
            Err(err) => {
                error!(source = %source.describe(), error = %err, "question bank failed to load");
                QuestionBank::empty()
            }
        };

        let progress = ProgressStore::new(Arc::clone(&storage.slots));
        let study_loop = Arc::new(StudyLoopService::new(Arc::new(bank), progress));
        Self { study_loop }
    }

    #[must_use]
    pub fn study_loop(&self) -> Arc<StudyLoopService> {
        Arc::clone(&self.study_loop)
    }
}
