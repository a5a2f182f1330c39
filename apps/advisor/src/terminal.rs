//! Line-oriented `WizardView` for the CLI.

use std::io::{self, Stdout, Write};

use crate::errors::WizardError;
use crate::render::{JobFitView, PredictionView, UploadSummary};
use crate::wizard::{Step, WizardView};

pub struct TerminalView<W: Write = Stdout> {
    out: W,
    forward_enabled: bool,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            forward_enabled: false,
        }
    }

    /// Last value the controller set for the forward control.
    pub fn forward_enabled(&self) -> bool {
        self.forward_enabled
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // stdout going away mid-session is not worth failing a wizard operation over
    fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", text.as_ref());
    }
}

impl<W: Write> WizardView for TerminalView<W> {
    fn show_step(&mut self, step: Step) {
        self.line("");
        self.line(format!("== {step} =="));
    }

    fn set_forward_enabled(&mut self, enabled: bool) {
        self.forward_enabled = enabled;
    }

    fn render_upload(&mut self, summary: &UploadSummary) {
        self.line(format!("Resume: {}", summary.file_name));
        self.line(&summary.headline);
        if let Some(preview) = &summary.preview {
            self.line("Preview:");
            self.line(format!("  {preview}"));
        }
    }

    fn render_skills(&mut self, skills: &[String]) {
        if skills.is_empty() {
            self.line("No skills. Add some with `add <skill>`.");
            return;
        }
        self.line(format!("Skills ({}):", skills.len()));
        for (i, skill) in skills.iter().enumerate() {
            self.line(format!("  [{}] {skill}", i + 1));
        }
    }

    fn render_prediction(&mut self, prediction: &PredictionView) {
        self.line(format!(
            "Predicted role: {} ({})",
            prediction.role, prediction.confidence
        ));
        if let Some(warning) = &prediction.warning {
            self.line(format!("! {warning}"));
        }
        for verdict in &prediction.models {
            self.line(format!(
                "  {:<20} {} ({})",
                verdict.model, verdict.role, verdict.confidence
            ));
        }
        if !prediction.top_roles.is_empty() {
            self.line("Top career matches:");
            for ranked in &prediction.top_roles {
                self.line(format!(
                    "  {}. {} - {} match",
                    ranked.rank, ranked.role, ranked.confidence
                ));
            }
        }
    }

    fn render_job_fit(&mut self, job_fit: &JobFitView) {
        self.line(format!("Job fit for {}: {}", job_fit.job_role, job_fit.fit_score));
        self.line(format!("  Skills match:     {}", job_fit.skills_match));
        self.line(format!("  Experience level: {}", job_fit.experience_level));
    }

    fn show_notice(&mut self, message: &str) {
        self.line(message);
    }

    fn show_error(&mut self, error: &WizardError) {
        self.line(format!("Error: {error}"));
    }
}
