use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::dashboard::DashboardPanel;
use crate::views::flashcard::StudyPanel;
use crate::views::header::Header;
use crate::views::loading::LoadingPanel;
use crate::views::summary::SummaryPanel;
use crate::vm::{ScreenBody, ScreenVm, StudyVm, UiAction};

#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

/// Root screen: restores saved progress once, then routes every user action
/// through [`StudyVm::dispatch`].
#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let study = ctx.study_loop();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<StudyVm>);
    let screen = use_signal(|| None::<ScreenVm>);
    let busy = use_signal(|| false);

    let study_for_resource = study.clone();
    let _hydrate = use_resource(move || {
        let study = study_for_resource.clone();
        let mut vm = vm;
        let mut screen = screen;

        async move {
            let restored = StudyVm::new(study.hydrate().await);
            screen.set(Some(restored.screen(study.bank())));
            vm.set(Some(restored));
        }
    });

    let dispatch = {
        let study = study.clone();
        use_callback(move |action: UiAction| {
            let study = study.clone();
            let mut error = error;
            let mut vm = vm;
            let mut screen = screen;
            let mut busy = busy;

            spawn(async move {
                // Holding the vm out of the signal serializes actions; controls
                // stay disabled until it is put back.
                let taken = {
                    let mut guard = vm.write();
                    guard.take()
                };
                let Some(mut current) = taken else {
                    warn!(?action, "action dropped while another is in flight");
                    return;
                };
                busy.set(true);

                let result = current.dispatch(&study, action).await;

                screen.set(Some(current.screen(study.bank())));
                {
                    let mut guard = vm.write();
                    *guard = Some(current);
                }
                busy.set(false);

                match result {
                    Ok(_) => error.set(None),
                    Err(err) => error.set(Some(err)),
                }
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let current_error = error();

    rsx! {
        div { class: "page",
            match screen() {
                Some(screen) => rsx! {
                    ScreenPanel { screen, error: current_error, busy: busy(), on_action: dispatch }
                },
                None => rsx! {
                    LoadingPanel {}
                },
            }
        }
    }
}

/// Renders a mapped screen; stateless so it can be rendered in isolation.
///
/// While `busy`, every control is disabled and actions are not forwarded.
#[component]
pub fn ScreenPanel(
    screen: ScreenVm,
    error: Option<ViewError>,
    busy: bool,
    on_action: EventHandler<UiAction>,
) -> Element {
    let on_action = use_callback(move |action: UiAction| {
        if busy {
            return;
        }
        on_action.call(action);
    });

    rsx! {
        fieldset { class: "screen", disabled: busy, "aria-busy": "{busy}",
            if let Some(header) = screen.header {
                Header { header, on_action }
            }
            main { class: "content",
                if let Some(err) = error {
                    p { class: "error", "{err.message()}" }
                }
                match screen.body {
                    ScreenBody::Loading => rsx! {
                        LoadingPanel {}
                    },
                    ScreenBody::Dashboard(vm) => rsx! {
                        DashboardPanel { vm, on_action }
                    },
                    ScreenBody::Study(card) => rsx! {
                        StudyPanel { card, on_action }
                    },
                    ScreenBody::Summary(vm) => rsx! {
                        SummaryPanel { vm, on_action }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct StudyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<UiAction>>>>,
}

#[cfg(test)]
impl StudyTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<UiAction>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<UiAction> {
        (*self.dispatch.borrow()).expect("study dispatch registered")
    }
}
