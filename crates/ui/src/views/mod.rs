mod dashboard;
mod flashcard;
mod header;
mod loading;
mod state;
mod study;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use study::{ScreenPanel, StudyView};
#[cfg(test)]
pub(crate) use study::StudyTestHandles;
pub use state::ViewError;
