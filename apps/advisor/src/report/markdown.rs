use super::AnalysisReport;

pub(super) fn render(report: &AnalysisReport) -> String {
    let mut lines = vec![
        "# Career Analysis Report".to_string(),
        String::new(),
        format!("- Generated: {}", report.generated_at.to_rfc3339()),
        format!("- Session: {}", report.session_id),
    ];
    if let Some(file_name) = &report.file_name {
        lines.push(format!("- Resume: {file_name}"));
    }

    lines.push(String::new());
    lines.push(format!("## Skills ({})", report.skills.len()));
    lines.push(String::new());
    if report.skills.is_empty() {
        lines.push("_none_".to_string());
    }
    lines.extend(report.skills.iter().map(|s| format!("- {s}")));

    let prediction = &report.prediction;
    lines.push(String::new());
    lines.push("## Predicted Career Role".to_string());
    lines.push(String::new());
    lines.push(format!(
        "**{}** ({})",
        prediction.role, prediction.confidence
    ));

    if let Some(warning) = &prediction.warning {
        lines.push(String::new());
        lines.push(format!("> ⚠ {warning}"));
    }

    lines.push(String::new());
    lines.push("### Model Predictions".to_string());
    lines.push(String::new());
    lines.push("| Model | Role | Confidence |".to_string());
    lines.push("|---|---|---|".to_string());
    lines.extend(
        prediction
            .models
            .iter()
            .map(|m| format!("| {} | {} | {} |", m.model, m.role, m.confidence)),
    );

    if !prediction.top_roles.is_empty() {
        lines.push(String::new());
        lines.push("### Top Career Matches".to_string());
        lines.push(String::new());
        lines.extend(
            prediction
                .top_roles
                .iter()
                .map(|r| format!("{}. {} - {} match", r.rank, r.role, r.confidence)),
        );
    }

    if let Some(fit) = &report.job_fit {
        lines.push(String::new());
        lines.push(format!("## Job Fit Analysis: {}", fit.job_role));
        lines.push(String::new());
        lines.push(format!("- Fit Score: {}", fit.fit_score));
        lines.push(format!("- Skills Match: {}", fit.skills_match));
        lines.push(format!("- Experience Level: {}", fit.experience_level));
    }

    lines.push(String::new());
    lines.join("\n")
}
