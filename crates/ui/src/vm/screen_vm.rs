use study_core::{Language, QuestionBank, QuestionId, StudySession};

/// Which screen the user is looking at. Presentational only, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Dashboard,
    Study,
    Summary,
}

/// User intents routed from the screens into the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    Reveal,
    AnswerCorrect,
    AnswerIncorrect,
    /// Move past a card whose question no longer exists.
    SkipMissing,
    Continue,
    StartNewRound,
    ExitToDashboard,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderVm {
    pub mastered: usize,
    pub total: usize,
    pub label: String,
    pub progress_percent: u32,
    pub show_exit: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub percent: u32,
    pub mastered: usize,
    pub total: usize,
    pub can_continue: bool,
    /// "Start New Round" is the primary button when there is nothing to continue.
    pub start_is_primary: bool,
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideVm {
    pub label: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFaceVm {
    pub prompts: Vec<SideVm>,
    /// Empty until the card is revealed.
    pub answers: Vec<SideVm>,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardContentVm {
    Ready(CardFaceVm),
    Missing { id: QuestionId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyCardVm {
    pub position_label: String,
    pub content: CardContentVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub fully_mastered: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenBody {
    Loading,
    Dashboard(DashboardVm),
    Study(StudyCardVm),
    Summary(SummaryVm),
}

/// Everything a screen needs to render, plus the actions it may emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenVm {
    pub header: Option<HeaderVm>,
    pub body: ScreenBody,
    pub actions: Vec<UiAction>,
}

impl ScreenVm {
    #[must_use]
    pub fn allows(&self, action: UiAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Map controller state onto a renderable screen.
///
/// An empty bank is the loading state. `Study` without an active session falls
/// back to the dashboard.
#[must_use]
pub fn map_screen(
    mode: ViewMode,
    session: &StudySession,
    bank: &QuestionBank,
    revealed: bool,
) -> ScreenVm {
    if bank.is_empty() {
        return ScreenVm {
            header: None,
            body: ScreenBody::Loading,
            actions: Vec::new(),
        };
    }

    let mode = match mode {
        ViewMode::Study if !session.has_active_session() => ViewMode::Dashboard,
        other => other,
    };
    let total = bank.len();
    let mastered = session.mastered_count();
    let header = HeaderVm {
        mastered,
        total,
        label: format!("{mastered} / {total} Mastered"),
        progress_percent: session.mastery_percent(total),
        show_exit: mode != ViewMode::Dashboard,
    };

    let (body, actions) = match mode {
        ViewMode::Dashboard => dashboard(session, total),
        ViewMode::Study => study(session, bank, revealed),
        ViewMode::Summary => summary(session, total),
    };

    ScreenVm {
        header: Some(header),
        body,
        actions,
    }
}

fn dashboard(session: &StudySession, total: usize) -> (ScreenBody, Vec<UiAction>) {
    let can_continue = session.has_active_session();
    let mut actions = Vec::with_capacity(2);
    if can_continue {
        actions.push(UiAction::Continue);
    }
    actions.push(UiAction::StartNewRound);

    let vm = DashboardVm {
        percent: session.mastery_percent(total),
        mastered: session.mastered_count(),
        total,
        can_continue,
        start_is_primary: !can_continue,
        hint: format!(
            "Tap \"Start New Round\" to clear history and begin the full set of {total} questions."
        ),
    };
    (ScreenBody::Dashboard(vm), actions)
}

fn study(
    session: &StudySession,
    bank: &QuestionBank,
    revealed: bool,
) -> (ScreenBody, Vec<UiAction>) {
    let position_label = format!(
        "Card {} of {}",
        session.index() + 1,
        session.queue().len()
    );

    let Some(question) = session.current_id().and_then(|id| bank.get(id)) else {
        let id = session.current_id().unwrap_or(QuestionId::new(0));
        let card = StudyCardVm {
            position_label,
            content: CardContentVm::Missing { id },
        };
        let actions = vec![
            UiAction::ExitToDashboard,
            UiAction::SkipMissing,
            UiAction::StartNewRound,
        ];
        return (ScreenBody::Study(card), actions);
    };

    let side = |label: &str, language: Language, text: &str| SideVm {
        label: format!("{label} ({})", language.label()),
        text: text.to_owned(),
    };
    let prompts = Language::ALL
        .iter()
        .map(|&lang| side("Question", lang, question.prompt(lang)))
        .collect();
    let answers = if revealed {
        Language::ALL
            .iter()
            .map(|&lang| side("Answer", lang, question.answer(lang)))
            .collect()
    } else {
        Vec::new()
    };

    let actions = if revealed {
        vec![
            UiAction::ExitToDashboard,
            UiAction::AnswerIncorrect,
            UiAction::AnswerCorrect,
        ]
    } else {
        vec![UiAction::ExitToDashboard, UiAction::Reveal]
    };

    let card = StudyCardVm {
        position_label,
        content: CardContentVm::Ready(CardFaceVm {
            prompts,
            answers,
            revealed,
        }),
    };
    (ScreenBody::Study(card), actions)
}

fn summary(session: &StudySession, total: usize) -> (ScreenBody, Vec<UiAction>) {
    let fully_mastered = session.is_fully_mastered(total);
    let message = if fully_mastered {
        format!("Outstanding! You've mastered all {total} facts for the Horse Brevet.")
    } else {
        format!(
            "You finished this round. Mastery: {} / {total}",
            session.mastered_count()
        )
    };
    let vm = SummaryVm {
        fully_mastered,
        message,
    };
    (
        ScreenBody::Summary(vm),
        vec![UiAction::ExitToDashboard, UiAction::StartNewRound],
    )
}
