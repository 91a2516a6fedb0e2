pub mod config;
pub mod form;
pub mod logging;
pub mod output;
pub mod platform;
pub mod review;
pub mod ui;

pub use form::FormController;
pub use platform::Platform;
pub use review::{ReviewClient, ReviewError, ReviewRequest, ReviewResult, Reviewer};
