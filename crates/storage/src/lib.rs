#![forbid(unsafe_code)]

pub mod cache;
pub mod progress;
pub mod questions;
pub mod repository;
pub mod sqlite;

pub use cache::CachedSource;
pub use progress::ProgressStore;
pub use questions::{FileQuestionSource, LoadError, QuestionSource, load_question_bank};
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
