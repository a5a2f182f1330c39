//! Resume-analysis wizard: Upload → Review → Predict.
//!
//! `WizardController` owns the only `WizardSession` and is the single writer to it.
//! All mutating operations take `&mut self`, so at most one upload or prediction is
//! ever in flight per session.

pub mod controller;
pub mod file;
pub mod session;
pub mod step;
pub mod validation;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::{PredictMode, WizardController, WizardOptions};
pub use file::ResumeFile;
pub use session::{Analysis, UploadedResume, WizardSession};
pub use step::Step;
pub use view::WizardView;
