use std::sync::Arc;

use storage::{InMemoryStore, ProgressStore};
use study_core::{ProgressSnapshot, QuestionId, StudySession};

use super::test_harness::{bank, render_screen, render_screen_with, setup_study_harness};
use crate::vm::{UiAction, ViewMode, map_screen};

fn ids(raw: &[u64]) -> Vec<QuestionId> {
    raw.iter().copied().map(QuestionId::new).collect()
}

fn session(mastered: &[u64], queue: &[u64], index: usize) -> StudySession {
    StudySession::from_snapshot(ProgressSnapshot {
        mastered: ids(mastered),
        queue: ids(queue),
        index,
    })
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_shows_dashboard_after_restore() {
    let mut harness = setup_study_harness(bank(&[1, 2, 3]), InMemoryStore::new());

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("0 / 3 Mastered"), "missing header in {html}");
    assert!(html.contains("Total Set"), "missing total label in {html}");
    assert!(html.contains("Start New Round"), "missing new round in {html}");
    assert!(!html.contains("Continue Session"), "unexpected continue in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_offers_continue_for_saved_session() {
    let store = InMemoryStore::new();
    ProgressStore::new(Arc::new(store.clone()))
        .write(&ProgressSnapshot {
            mastered: ids(&[2]),
            queue: ids(&[2, 3, 1]),
            index: 1,
        })
        .await;
    let mut harness = setup_study_harness(bank(&[1, 2, 3]), store);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("1 / 3 Mastered"), "missing header in {html}");
    assert!(html.contains("Continue Session"), "missing continue in {html}");
    assert!(html.contains("33%"), "missing percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_stays_loading_without_questions() {
    let mut harness = setup_study_harness(bank(&[]), InMemoryStore::new());

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Loading questions"), "missing loading in {html}");
    assert!(!html.contains("Mastered"), "unexpected header in {html}");
}

#[test]
fn screen_panel_smoke_hides_answer_until_revealed() {
    let b = bank(&[1, 2]);
    let s = session(&[], &[2, 1], 0);

    let hidden = render_screen(map_screen(ViewMode::Study, &s, &b, false));
    assert!(hidden.contains("Card 1 of 2"), "missing position in {hidden}");
    assert!(hidden.contains("Frage 2"), "missing prompt in {hidden}");
    assert!(hidden.contains("Tap to reveal answer"), "missing hint in {hidden}");
    assert!(!hidden.contains("Antwort 2"), "answer leaked in {hidden}");
    assert!(!hidden.contains("Got It"), "grading shown early in {hidden}");

    let shown = render_screen(map_screen(ViewMode::Study, &s, &b, true));
    assert!(shown.contains("Antwort 2"), "missing answer in {shown}");
    assert!(shown.contains("Answer 2"), "missing answer in {shown}");
    assert!(shown.contains("Needs Review"), "missing review in {shown}");
    assert!(shown.contains("Got It"), "missing got it in {shown}");
}

#[test]
fn screen_panel_smoke_renders_missing_card() {
    let html = render_screen(map_screen(
        ViewMode::Study,
        &session(&[], &[9, 1], 0),
        &bank(&[1]),
        false,
    ));

    assert!(html.contains("Card 9"), "missing id in {html}");
    assert!(html.contains("Skip card"), "missing skip in {html}");
}

#[test]
fn screen_panel_smoke_renders_summary() {
    let html = render_screen(map_screen(
        ViewMode::Summary,
        &session(&[1, 2], &[], 0),
        &bank(&[1, 2]),
        false,
    ));

    assert!(html.contains("Round Finished!"), "missing title in {html}");
    assert!(html.contains("mastered all 2 facts"), "missing message in {html}");
    assert!(html.contains("Exit"), "missing exit in {html}");
    assert!(html.contains("M20 6 9 17l-5-5"), "missing checkmark in {html}");
    assert!(!html.contains('🏆'), "emoji icon in {html}");
}

#[test]
fn screen_panel_smoke_disables_controls_while_busy() {
    let screen = map_screen(
        ViewMode::Dashboard,
        &session(&[], &[], 0),
        &bank(&[1, 2]),
        false,
    );

    let idle = render_screen_with(screen.clone(), false);
    assert!(idle.contains(r#"aria-busy="false""#), "idle marker missing in {idle}");

    let busy = render_screen_with(screen, true);
    assert!(busy.contains("disabled"), "controls enabled in {busy}");
    assert!(busy.contains(r#"aria-busy="true""#), "busy marker missing in {busy}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_plays_round_through_dispatch() {
    let store = InMemoryStore::new();
    let progress = ProgressStore::new(Arc::new(store.clone()));
    let mut harness = setup_study_harness(bank(&[1, 2]), store);
    harness.rebuild();
    harness.drive_async().await;

    harness.act(UiAction::StartNewRound).await;
    let html = harness.render();
    assert!(html.contains("Card 1 of 2"), "missing first card in {html}");
    assert!(html.contains("Tap to reveal answer"), "card not hidden in {html}");
    assert_eq!(progress.read().await.queue.len(), 2);

    harness.act(UiAction::Reveal).await;
    let html = harness.render();
    assert!(html.contains("Got It"), "missing grading in {html}");

    harness.act(UiAction::AnswerCorrect).await;
    let html = harness.render();
    assert!(html.contains("Card 2 of 2"), "missing second card in {html}");
    assert!(html.contains("1 / 2 Mastered"), "missing progress in {html}");
    let saved = progress.read().await;
    assert_eq!(saved.mastered.len(), 1);
    assert_eq!(saved.index, 1);

    harness.act(UiAction::Reveal).await;
    harness.act(UiAction::AnswerCorrect).await;
    let html = harness.render();
    assert!(html.contains("Round Finished!"), "missing summary in {html}");
    assert!(html.contains("2 / 2 Mastered"), "missing progress in {html}");

    let saved = progress.read().await;
    assert_eq!(saved.mastered.len(), 2);
    assert!(saved.queue.is_empty());
    assert_eq!(saved.index, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_skips_stale_tail_card() {
    let store = InMemoryStore::new();
    let progress = ProgressStore::new(Arc::new(store.clone()));
    progress
        .write(&ProgressSnapshot {
            mastered: ids(&[1]),
            queue: ids(&[1, 99]),
            index: 1,
        })
        .await;
    let mut harness = setup_study_harness(bank(&[1]), store);
    harness.rebuild();
    harness.drive_async().await;

    harness.act(UiAction::Continue).await;
    let html = harness.render();
    assert!(html.contains("Skip card"), "missing skip in {html}");

    harness.act(UiAction::SkipMissing).await;
    let html = harness.render();
    assert!(html.contains("Round Finished!"), "missing summary in {html}");

    let saved = progress.read().await;
    assert_eq!(saved.mastered, ids(&[1]));
    assert!(saved.queue.is_empty());
}
