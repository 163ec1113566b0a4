use services::StudyError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NoQuestions,
    NoActiveSession,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoQuestions => "No questions are available yet.",
            Self::NoActiveSession => "There is no session to continue.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<StudyError> for ViewError {
    fn from(err: StudyError) -> Self {
        match err {
            StudyError::NoQuestions => Self::NoQuestions,
            StudyError::NoActiveSession => Self::NoActiveSession,
            _ => Self::Unknown,
        }
    }
}
