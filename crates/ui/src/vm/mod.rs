mod screen_vm;
mod study_vm;

pub use screen_vm::{
    CardContentVm, CardFaceVm, DashboardVm, HeaderVm, ScreenBody, ScreenVm, SideVm, StudyCardVm,
    SummaryVm, UiAction, ViewMode, map_screen,
};
pub use study_vm::StudyVm;
