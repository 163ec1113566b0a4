use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::ProgressStore;
use study_core::{AnswerOutcome, LookupError, Question, QuestionBank, StudySession};
use tracing::{debug, info};

use crate::error::StudyError;

/// The card under the session cursor, resolved against the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentCard<'a> {
    Question(&'a Question),
    /// Queued id with no matching question; the card can only be skipped.
    Missing(LookupError),
}

/// Drives the study session and mirrors every change into the progress store.
///
/// The session itself stays with the caller; this service applies transitions
/// and persists the result after the in-memory state is committed. Nothing is
/// written until [`StudyLoopService::hydrate`] has read the saved progress, so
/// defaults can never clobber a previous run.
pub struct StudyLoopService {
    bank: Arc<QuestionBank>,
    progress: ProgressStore,
    hydrated: AtomicBool,
    rng: Mutex<StdRng>,
}

impl StudyLoopService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, progress: ProgressStore) -> Self {
        Self {
            bank,
            progress,
            hydrated: AtomicBool::new(false),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Use a deterministic shuffle (tests, reproducible demos).
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::Acquire)
    }

    /// Restore the session from persisted progress and open the write gate.
    pub async fn hydrate(&self) -> StudySession {
        let snapshot = self.progress.read().await;
        let session = StudySession::from_snapshot(snapshot);
        self.hydrated.store(true, Ordering::Release);
        info!(
            mastered = session.mastered_count(),
            queued = session.queue().len(),
            index = session.index(),
            active = session.has_active_session(),
            "study progress restored"
        );
        session
    }

    /// Wipe mastery and start a freshly shuffled round over every question.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NoQuestions` if the question bank is empty.
    pub async fn start_new_round(&self, session: &mut StudySession) -> Result<(), StudyError> {
        let ids = self.bank.ids();
        let started = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            session.start_new_round(&ids, &mut *rng)
        };
        if !started {
            return Err(StudyError::NoQuestions);
        }

        info!(questions = ids.len(), "new round started");
        self.persist(session).await;
        Ok(())
    }

    /// Continue the persisted session as-is.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NoActiveSession` if there is nothing to resume.
    pub fn resume(&self, session: &mut StudySession) -> Result<(), StudyError> {
        if session.resume() {
            debug!(index = session.index(), queued = session.queue().len(), "session resumed");
            Ok(())
        } else {
            Err(StudyError::NoActiveSession)
        }
    }

    /// Apply a self-reported answer to the current card and persist.
    pub async fn answer_current(&self, session: &mut StudySession, correct: bool) -> AnswerOutcome {
        let id = session.current_id();
        let outcome = session.answer(correct);
        debug!(?id, correct, ?outcome, "answer recorded");

        if outcome.changed() {
            if outcome == AnswerOutcome::RoundComplete {
                info!(
                    mastered = session.mastered_count(),
                    total = self.bank.len(),
                    "round complete"
                );
            }
            self.persist(session).await;
        }
        outcome
    }

    /// Drop a queued id that has no question behind it.
    ///
    /// Cards that resolve against the bank are left alone; they must be answered.
    pub async fn skip_missing(&self, session: &mut StudySession) -> AnswerOutcome {
        let Some(id) = session.current_id() else {
            return AnswerOutcome::NoActiveCard;
        };
        if self.bank.contains(id) {
            debug!(%id, "card is known; skip ignored");
            return AnswerOutcome::NoActiveCard;
        }

        let outcome = session.skip_current();
        info!(%id, ?outcome, "unknown card skipped");
        self.persist(session).await;
        outcome
    }

    /// Resolve the card under the cursor.
    ///
    /// Returns `None` when there is no active session.
    #[must_use]
    pub fn current_card(&self, session: &StudySession) -> Option<CurrentCard<'_>> {
        let id = session.current_id()?;
        Some(match self.bank.lookup(id) {
            Ok(question) => CurrentCard::Question(question),
            Err(err) => CurrentCard::Missing(err),
        })
    }

    async fn persist(&self, session: &StudySession) {
        if !self.is_hydrated() {
            debug!("progress not hydrated yet; skipping write");
            return;
        }
        self.progress.write(&session.snapshot()).await;
    }
}

impl fmt::Debug for StudyLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudyLoopService")
            .field("questions", &self.bank.len())
            .field("hydrated", &self.is_hydrated())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
