use services::StudyLoopService;
use study_core::{AnswerOutcome, QuestionBank, QuestionId, StudySession};
use tracing::debug;

use crate::views::ViewError;
use crate::vm::screen_vm::{ScreenVm, UiAction, ViewMode, map_screen};

/// View controller: owns the session plus the two bits of purely visual state
/// (current screen and whether the card's answer is showing).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyVm {
    session: StudySession,
    mode: ViewMode,
    // Card the answer was revealed for; any other card reads as hidden.
    revealed_for: Option<QuestionId>,
}

impl StudyVm {
    #[must_use]
    pub fn new(session: StudySession) -> Self {
        Self {
            session,
            mode: ViewMode::Dashboard,
            revealed_for: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn session(&self) -> &StudySession {
        &self.session
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed_for.is_some() && self.revealed_for == self.session.current_id()
    }

    #[must_use]
    pub fn screen(&self, bank: &QuestionBank) -> ScreenVm {
        map_screen(self.mode, &self.session, bank, self.is_revealed())
    }

    /// Route a user action into the session and update the visual state.
    ///
    /// Actions the current screen does not offer are ignored; returns whether
    /// the action was applied.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` when a transition is rejected by the service.
    pub async fn dispatch(
        &mut self,
        study: &StudyLoopService,
        action: UiAction,
    ) -> Result<bool, ViewError> {
        if !self.screen(study.bank()).allows(action) {
            debug!(?action, mode = ?self.mode, "action not available; ignored");
            return Ok(false);
        }

        match action {
            UiAction::Reveal => {
                self.revealed_for = self.session.current_id();
            }
            UiAction::AnswerCorrect | UiAction::AnswerIncorrect | UiAction::SkipMissing => {
                let outcome = if action == UiAction::SkipMissing {
                    study.skip_missing(&mut self.session).await
                } else {
                    let correct = action == UiAction::AnswerCorrect;
                    study.answer_current(&mut self.session, correct).await
                };
                self.revealed_for = None;
                if outcome == AnswerOutcome::RoundComplete {
                    self.mode = ViewMode::Summary;
                }
            }
            UiAction::Continue => {
                study.resume(&mut self.session)?;
                self.revealed_for = None;
                self.mode = ViewMode::Study;
            }
            UiAction::StartNewRound => {
                study.start_new_round(&mut self.session).await?;
                self.revealed_for = None;
                self.mode = ViewMode::Study;
            }
            UiAction::ExitToDashboard => {
                self.mode = ViewMode::Dashboard;
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::{InMemoryStore, ProgressStore};
    use study_core::{ProgressSnapshot, Question, SessionState};

    use crate::vm::screen_vm::ScreenBody;

    fn study(ids: &[u64], store: &InMemoryStore) -> StudyLoopService {
        let questions = ids
            .iter()
            .map(|&id| Question {
                id: QuestionId::new(id),
                question_de: format!("Frage {id}"),
                answer_de: format!("Antwort {id}"),
                question_en: format!("Question {id}"),
                answer_en: format!("Answer {id}"),
            })
            .collect();
        StudyLoopService::new(
            Arc::new(QuestionBank::from_questions(questions).unwrap()),
            ProgressStore::new(Arc::new(store.clone())),
        )
        .with_shuffle_seed(5)
    }

    #[tokio::test]
    async fn new_round_enters_study_with_hidden_card() {
        let store = InMemoryStore::new();
        let svc = study(&[1, 2, 3], &store);
        let mut vm = StudyVm::new(svc.hydrate().await);

        assert!(vm.dispatch(&svc, UiAction::StartNewRound).await.unwrap());

        assert_eq!(vm.mode(), ViewMode::Study);
        assert!(!vm.is_revealed());
        assert_eq!(vm.session().state(), SessionState::InSession);
    }

    #[tokio::test]
    async fn answers_require_reveal_first() {
        let store = InMemoryStore::new();
        let svc = study(&[1, 2], &store);
        let mut vm = StudyVm::new(svc.hydrate().await);
        vm.dispatch(&svc, UiAction::StartNewRound).await.unwrap();

        assert!(!vm.dispatch(&svc, UiAction::AnswerCorrect).await.unwrap());
        assert_eq!(vm.session().mastered_count(), 0);

        vm.dispatch(&svc, UiAction::Reveal).await.unwrap();
        assert!(vm.is_revealed());
        assert!(vm.dispatch(&svc, UiAction::AnswerCorrect).await.unwrap());
        assert_eq!(vm.session().mastered_count(), 1);
        assert!(!vm.is_revealed(), "next card starts hidden");
    }

    #[tokio::test]
    async fn incorrect_answer_hides_next_card() {
        let store = InMemoryStore::new();
        let svc = study(&[1, 2], &store);
        let mut vm = StudyVm::new(svc.hydrate().await);
        vm.dispatch(&svc, UiAction::StartNewRound).await.unwrap();
        let first = vm.session().current_id();

        vm.dispatch(&svc, UiAction::Reveal).await.unwrap();
        vm.dispatch(&svc, UiAction::AnswerIncorrect).await.unwrap();

        assert_ne!(vm.session().current_id(), first);
        assert_eq!(vm.session().queue().last().copied(), first);
        assert!(!vm.is_revealed());
    }

    #[tokio::test]
    async fn finishing_round_shows_summary_then_dashboard() {
        let store = InMemoryStore::new();
        let svc = study(&[1, 2], &store);
        let mut vm = StudyVm::new(svc.hydrate().await);
        vm.dispatch(&svc, UiAction::StartNewRound).await.unwrap();

        for _ in 0..2 {
            vm.dispatch(&svc, UiAction::Reveal).await.unwrap();
            vm.dispatch(&svc, UiAction::AnswerCorrect).await.unwrap();
        }

        assert_eq!(vm.mode(), ViewMode::Summary);
        let ScreenBody::Summary(summary) = vm.screen(svc.bank()).body else {
            panic!("expected summary");
        };
        assert!(summary.fully_mastered);

        vm.dispatch(&svc, UiAction::ExitToDashboard).await.unwrap();
        assert_eq!(vm.mode(), ViewMode::Dashboard);
        assert!(!vm.screen(svc.bank()).allows(UiAction::Continue));
    }

    #[tokio::test]
    async fn exit_keeps_session_and_continue_resumes_it() {
        let store = InMemoryStore::new();
        let svc = study(&[1, 2, 3], &store);
        let mut vm = StudyVm::new(svc.hydrate().await);
        vm.dispatch(&svc, UiAction::StartNewRound).await.unwrap();
        vm.dispatch(&svc, UiAction::Reveal).await.unwrap();
        vm.dispatch(&svc, UiAction::AnswerCorrect).await.unwrap();
        let before = vm.session().snapshot();

        vm.dispatch(&svc, UiAction::ExitToDashboard).await.unwrap();
        assert_eq!(vm.session().snapshot(), before);

        assert!(vm.dispatch(&svc, UiAction::Continue).await.unwrap());
        assert_eq!(vm.mode(), ViewMode::Study);
        assert_eq!(vm.session().snapshot(), before);
    }

    #[tokio::test]
    async fn missing_card_can_be_skipped() {
        let store = InMemoryStore::new();
        ProgressStore::new(Arc::new(store.clone()))
            .write(&ProgressSnapshot {
                mastered: Vec::new(),
                queue: vec![QuestionId::new(77), QuestionId::new(1)],
                index: 0,
            })
            .await;
        let svc = study(&[1], &store);
        let mut vm = StudyVm::new(svc.hydrate().await);
        vm.dispatch(&svc, UiAction::Continue).await.unwrap();

        assert!(vm.dispatch(&svc, UiAction::SkipMissing).await.unwrap());

        assert_eq!(vm.session().current_id(), Some(QuestionId::new(1)));
        assert_eq!(vm.session().queue(), &[QuestionId::new(1)]);
        assert_eq!(vm.session().mastered_count(), 0);
    }

    #[tokio::test]
    async fn skipping_unknown_last_card_shows_summary() {
        let store = InMemoryStore::new();
        ProgressStore::new(Arc::new(store.clone()))
            .write(&ProgressSnapshot {
                mastered: vec![QuestionId::new(1)],
                queue: vec![QuestionId::new(1), QuestionId::new(99)],
                index: 1,
            })
            .await;
        let svc = study(&[1], &store);
        let mut vm = StudyVm::new(svc.hydrate().await);
        vm.dispatch(&svc, UiAction::Continue).await.unwrap();

        assert!(vm.dispatch(&svc, UiAction::SkipMissing).await.unwrap());

        assert_eq!(vm.mode(), ViewMode::Summary);
        assert_eq!(vm.session().state(), SessionState::RoundComplete);
        let ScreenBody::Summary(summary) = vm.screen(svc.bank()).body else {
            panic!("expected summary");
        };
        assert!(summary.fully_mastered);
    }
}
