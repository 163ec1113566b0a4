mod bank;
mod ids;
mod progress;
mod question;

pub use ids::QuestionId;

pub use bank::{LookupError, QuestionBank, QuestionBankError};
pub use progress::ProgressSnapshot;
pub use question::{Language, Question};
