use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Question, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),
}

/// A queued id has no matching question (stale progress after a corpus change).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("question {id} is not in the question bank")]
pub struct LookupError {
    pub id: QuestionId,
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Immutable, ordered question corpus with an id index.
///
/// An empty bank is the "not yet loaded" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    /// Build a bank from questions in corpus order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::DuplicateId` if two questions share an id.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        let mut positions = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if positions.insert(question.id, position).is_some() {
                return Err(QuestionBankError::DuplicateId(question.id));
            }
        }
        Ok(Self {
            questions,
            positions,
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All ids in corpus order.
    #[must_use]
    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(Question::id).collect()
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.positions.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.positions.get(&id).map(|&pos| &self.questions[pos])
    }

    /// # Errors
    ///
    /// Returns `LookupError` when the id is unknown.
    pub fn lookup(&self, id: QuestionId) -> Result<&Question, LookupError> {
        self.get(id).ok_or(LookupError { id })
    }
}
