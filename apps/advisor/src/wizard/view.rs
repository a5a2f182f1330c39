use crate::errors::WizardError;
use crate::render::{JobFitView, PredictionView, UploadSummary};
use crate::wizard::Step;

/// Display capability the controller is constructed with. Every sink is required,
/// so a front end cannot silently drop one.
pub trait WizardView {
    fn show_step(&mut self, step: Step);

    /// Enables or disables the control that moves to the next step.
    fn set_forward_enabled(&mut self, enabled: bool);

    fn render_upload(&mut self, summary: &UploadSummary);

    fn render_skills(&mut self, skills: &[String]);

    fn render_prediction(&mut self, prediction: &PredictionView);

    fn render_job_fit(&mut self, job_fit: &JobFitView);

    fn show_notice(&mut self, message: &str);

    fn show_error(&mut self, error: &WizardError);
}
