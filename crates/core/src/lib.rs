#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use model::{
    Language, LookupError, ProgressSnapshot, Question, QuestionBank, QuestionBankError,
    QuestionId,
};
pub use session::{AnswerOutcome, SessionState, StudySession};
