use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// Language side of a bilingual card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    De,
    En,
}

impl Language {
    /// Both languages in display order (German first).
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::De => "DE",
            Language::En => "EN",
        }
    }
}

/// A single bilingual question/answer pair from the corpus.
///
/// The field names match the corpus file, so a question deserializes directly
/// from one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question_de: String,
    pub answer_de: String,
    pub question_en: String,
    pub answer_en: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self, language: Language) -> &str {
        match language {
            Language::De => &self.question_de,
            Language::En => &self.question_en,
        }
    }

    #[must_use]
    pub fn answer(&self, language: Language) -> &str {
        match language {
            Language::De => &self.answer_de,
            Language::En => &self.answer_en,
        }
    }
}
