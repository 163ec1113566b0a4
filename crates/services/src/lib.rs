#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod study_loop;

pub use app_services::AppServices;
pub use error::{AppServicesError, StudyError};
pub use study_loop::{CurrentCard, StudyLoopService};
