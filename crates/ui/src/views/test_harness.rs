use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::StudyLoopService;
use storage::{InMemoryStore, ProgressStore};
use study_core::{Question, QuestionBank, QuestionId};

use crate::context::{UiApp, build_app_context};
use crate::views::{ScreenPanel, StudyTestHandles, StudyView};
use crate::vm::{ScreenVm, UiAction};

#[derive(Clone)]
struct TestApp {
    study_loop: Arc<StudyLoopService>,
}

impl UiApp for TestApp {
    fn study_loop(&self) -> Arc<StudyLoopService> {
        Arc::clone(&self.study_loop)
    }
}

#[derive(Props, Clone)]
struct StudyHarnessProps {
    app: Arc<TestApp>,
    handles: StudyTestHandles,
}

impl PartialEq for StudyHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn StudyHarness(props: StudyHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { StudyView {} }
}

#[component]
fn ScreenHarness(screen: ScreenVm, busy: bool) -> Element {
    rsx! {
        ScreenPanel { screen, error: None, busy, on_action: move |_: UiAction| {} }
    }
}

pub fn question(id: u64) -> Question {
    Question {
        id: QuestionId::new(id),
        question_de: format!("Frage {id}"),
        answer_de: format!("Antwort {id}"),
        question_en: format!("Question {id}"),
        answer_en: format!("Answer {id}"),
    }
}

pub fn bank(ids: &[u64]) -> QuestionBank {
    QuestionBank::from_questions(ids.iter().copied().map(question).collect())
        .expect("unique ids")
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: StudyTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Route an action through the mounted view's dispatch and let it settle.
    pub async fn act(&mut self, action: UiAction) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(action));
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount `StudyView` over an in-memory store the test can pre-seed.
pub fn setup_study_harness(bank: QuestionBank, store: InMemoryStore) -> ViewHarness {
    let progress = ProgressStore::new(Arc::new(store.clone()));
    let study_loop =
        Arc::new(StudyLoopService::new(Arc::new(bank), progress).with_shuffle_seed(1));
    let app = Arc::new(TestApp { study_loop });
    let handles = StudyTestHandles::default();
    let dom = VirtualDom::new_with_props(
        StudyHarness,
        StudyHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

pub fn render_screen(screen: ScreenVm) -> String {
    render_screen_with(screen, false)
}

pub fn render_screen_with(screen: ScreenVm, busy: bool) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { screen, busy });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}
