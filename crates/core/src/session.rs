use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{ProgressSnapshot, QuestionId};

//
// ─── STATES & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Coarse state of the study session, derived from queue/index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No queue (fresh install, or restored without an active session).
    Idle,
    /// `index` points at a card in the queue.
    InSession,
    /// The last card of the round was answered correctly.
    RoundComplete,
}

/// What an answer did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct answer, cursor moved to the next card.
    Advanced,
    /// Incorrect answer, card moved to the tail of the queue.
    Requeued,
    /// Card dropped from the queue without mastery; cursor now on the next card.
    Skipped,
    /// The last card of the queue was answered or skipped; queue cleared.
    RoundComplete,
    /// Nothing to answer; state untouched.
    NoActiveCard,
}

impl AnswerOutcome {
    /// True when the transition mutated the session.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, AnswerOutcome::NoActiveCard)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Study progress state machine.
///
/// Owns the pending queue, the cursor into it and the mastered set. All
/// transitions are synchronous and infallible; persistence is the caller's job
/// (see [`StudySession::snapshot`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudySession {
    // Insertion ordered, no duplicates.
    mastered: Vec<QuestionId>,
    queue: Vec<QuestionId>,
    index: usize,
    round_complete: bool,
}

impl StudySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a session from persisted progress.
    ///
    /// Duplicate mastered ids (hand-edited or corrupt storage) are collapsed,
    /// keeping the first occurrence. The queue and index are taken as-is; an
    /// out-of-range index simply reads as "no active session".
    #[must_use]
    pub fn from_snapshot(snapshot: ProgressSnapshot) -> Self {
        let mut mastered = Vec::with_capacity(snapshot.mastered.len());
        for id in snapshot.mastered {
            if !mastered.contains(&id) {
                mastered.push(id);
            }
        }
        Self {
            mastered,
            queue: snapshot.queue,
            index: snapshot.index,
            round_complete: false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            mastered: self.mastered.clone(),
            queue: self.queue.clone(),
            index: self.index,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.has_active_session() {
            SessionState::InSession
        } else if self.round_complete {
            SessionState::RoundComplete
        } else {
            SessionState::Idle
        }
    }

    #[must_use]
    pub fn queue(&self) -> &[QuestionId] {
        &self.queue
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn mastered(&self) -> &[QuestionId] {
        &self.mastered
    }

    #[must_use]
    pub fn mastered_count(&self) -> usize {
        self.mastered.len()
    }

    #[must_use]
    pub fn has_active_session(&self) -> bool {
        !self.queue.is_empty() && self.index < self.queue.len()
    }

    /// Id of the card under the cursor, if any.
    #[must_use]
    pub fn current_id(&self) -> Option<QuestionId> {
        self.queue.get(self.index).copied()
    }

    #[must_use]
    pub fn is_fully_mastered(&self, total_questions: usize) -> bool {
        total_questions > 0 && self.mastered.len() == total_questions
    }

    /// Mastered share of the corpus in whole percent, rounded half up.
    ///
    /// Returns 0 for an empty corpus.
    #[must_use]
    pub fn mastery_percent(&self, total_questions: usize) -> u32 {
        if total_questions == 0 {
            return 0;
        }
        let mastered = self.mastered.len().saturating_mul(200);
        let percent = (mastered + total_questions) / (2 * total_questions);
        u32::try_from(percent).unwrap_or(u32::MAX)
    }

    /// Discard all mastery and queue every id exactly once in random order.
    ///
    /// Returns `false` (and leaves the session untouched) when `all_ids` is empty.
    pub fn start_new_round<R: Rng + ?Sized>(
        &mut self,
        all_ids: &[QuestionId],
        rng: &mut R,
    ) -> bool {
        if all_ids.is_empty() {
            return false;
        }

        let mut queue = all_ids.to_vec();
        queue.shuffle(rng);

        self.mastered.clear();
        self.queue = queue;
        self.index = 0;
        self.round_complete = false;
        true
    }

    /// Re-enter the persisted session without modifying it.
    ///
    /// Returns `false` if there is no active session to resume.
    pub fn resume(&mut self) -> bool {
        if !self.has_active_session() {
            return false;
        }
        self.round_complete = false;
        true
    }

    pub fn answer(&mut self, correct: bool) -> AnswerOutcome {
        if correct {
            self.answer_correct()
        } else {
            self.answer_incorrect()
        }
    }

    /// Mark the current card mastered and advance.
    pub fn answer_correct(&mut self) -> AnswerOutcome {
        let Some(id) = self.current_id() else {
            return AnswerOutcome::NoActiveCard;
        };

        if !self.mastered.contains(&id) {
            self.mastered.push(id);
        }

        if self.index + 1 >= self.queue.len() {
            self.finish_round();
            AnswerOutcome::RoundComplete
        } else {
            self.index += 1;
            AnswerOutcome::Advanced
        }
    }

    /// Move the current card to the tail of the queue.
    ///
    /// The cursor stays put, so it now points at what was the next card.
    pub fn answer_incorrect(&mut self) -> AnswerOutcome {
        if !self.has_active_session() {
            return AnswerOutcome::NoActiveCard;
        }

        let id = self.queue.remove(self.index);
        self.queue.push(id);
        AnswerOutcome::Requeued
    }

    /// Drop the current card from the queue without granting mastery.
    ///
    /// Skipping the last remaining position completes the round.
    pub fn skip_current(&mut self) -> AnswerOutcome {
        if !self.has_active_session() {
            return AnswerOutcome::NoActiveCard;
        }

        self.queue.remove(self.index);
        if self.index >= self.queue.len() {
            self.finish_round();
            AnswerOutcome::RoundComplete
        } else {
            AnswerOutcome::Skipped
        }
    }

    fn finish_round(&mut self) {
        self.queue.clear();
        self.index = 0;
        self.round_complete = true;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
