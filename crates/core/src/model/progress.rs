use crate::model::QuestionId;

/// Persisted shape of study progress: the three slots mirrored to storage.
///
/// `Default` is the fresh-install state (nothing mastered, no session).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub mastered: Vec<QuestionId>,
    pub queue: Vec<QuestionId>,
    pub index: usize,
}

impl ProgressSnapshot {
    /// True when the queue still has a card at `index`.
    #[must_use]
    pub fn has_active_session(&self) -> bool {
        !self.queue.is_empty() && self.index < self.queue.len()
    }
}
