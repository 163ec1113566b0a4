use std::path::PathBuf;

use async_trait::async_trait;
use study_core::{Question, QuestionBank, QuestionBankError};
use thiserror::Error;
use tracing::info;

/// Default location of the question corpus, relative to the working directory.
pub const DEFAULT_QUESTIONS_PATH: &str = "data/questions.json";

/// Failure to produce the question corpus.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question source unreachable: {0}")]
    Io(#[from] std::io::Error),

    #[error("question data malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Bank(#[from] QuestionBankError),
}

/// Raw provider of the corpus bytes (a JSON array of question records).
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable origin for logs.
    fn describe(&self) -> String;

    /// Fetch the raw corpus text.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the source cannot be reached.
    async fn fetch(&self) -> Result<String, LoadError>;
}

/// Reads the corpus from a file on disk.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Parse corpus text into a bank, keeping file order.
///
/// # Errors
///
/// Returns `LoadError::Malformed` if the text is not a JSON array of questions,
/// or `LoadError::Bank` if ids repeat.
pub fn parse_question_bank(raw: &str) -> Result<QuestionBank, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(raw)?;
    Ok(QuestionBank::from_questions(questions)?)
}

/// Fetch and parse the corpus into a [`QuestionBank`].
///
/// # Errors
///
/// Returns `LoadError` if the source fails, the data is malformed or ids repeat.
pub async fn load_question_bank(source: &dyn QuestionSource) -> Result<QuestionBank, LoadError> {
    let raw = source.fetch().await?;
    let bank = parse_question_bank(&raw)?;
    info!(source = %source.describe(), questions = bank.len(), "question bank loaded");
    Ok(bank)
}
