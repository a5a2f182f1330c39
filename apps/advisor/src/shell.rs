//! Interactive line-command front end over a `WizardController`.

use std::path::PathBuf;

use anyhow::{bail, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::report::ReportFormat;
use crate::wizard::{WizardController, WizardView};

pub const HELP: &str = "\
Commands:
  upload <path>              upload a PDF or TXT resume
  next | back                move between steps
  add <skill>                add a skill
  remove <skill> | #<n>      remove a skill by name or by its number
  skills                     list the current skills
  predict                    predict a career role from the skills
  fit [role]                 job fit against a role (default: predicted role)
  export <path> [md|json]    save the analysis report
  status                     show the current step
  help                       show this message
  quit                       leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillRef {
    Name(String),
    /// Zero-based; parsed from the one-based `#n` form.
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Upload(PathBuf),
    Next,
    Back,
    Add(String),
    Remove(SkillRef),
    Skills,
    Predict,
    Fit(Option<String>),
    Export {
        path: PathBuf,
        format: Option<ReportFormat>,
    },
    Status,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one input line. `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "upload" => {
                if rest.is_empty() {
                    bail!("usage: upload <path>");
                }
                ShellCommand::Upload(PathBuf::from(rest))
            }
            "next" => ShellCommand::Next,
            "back" => ShellCommand::Back,
            // blank skills are rejected by the wizard itself
            "add" => ShellCommand::Add(rest.to_string()),
            "remove" | "rm" => ShellCommand::Remove(parse_skill_ref(rest)?),
            "skills" => ShellCommand::Skills,
            "predict" => ShellCommand::Predict,
            "fit" => ShellCommand::Fit((!rest.is_empty()).then(|| rest.to_string())),
            "export" => {
                let mut parts = rest.split_whitespace();
                let Some(path) = parts.next() else {
                    bail!("usage: export <path> [markdown|json]");
                };
                let format = parts.next().map(str::parse::<ReportFormat>).transpose()?;
                ShellCommand::Export {
                    path: PathBuf::from(path),
                    format,
                }
            }
            "status" => ShellCommand::Status,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => bail!("unknown command '{other}' (type `help`)"),
        };
        Ok(Some(command))
    }
}

fn parse_skill_ref(rest: &str) -> Result<SkillRef> {
    if rest.is_empty() {
        bail!("usage: remove <skill> | remove #<n>");
    }
    match rest.strip_prefix('#') {
        Some(number) => match number.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(SkillRef::Index(n - 1)),
            _ => bail!("skill numbers start at 1 (got '{rest}')"),
        },
        None => Ok(SkillRef::Name(rest.to_string())),
    }
}

/// Reads commands until `quit` or end of input. Wizard errors are already shown
/// by the view, so they do not end the loop.
pub async fn run_shell<V, R>(wizard: &mut WizardController<V>, input: R) -> Result<()>
where
    V: WizardView,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                wizard.view_mut().show_notice(&err.to_string());
                continue;
            }
        };
        debug!("Shell command: {command:?}");
        if command == ShellCommand::Quit {
            break;
        }
        execute(wizard, command).await;
    }
    Ok(())
}

async fn execute<V: WizardView>(wizard: &mut WizardController<V>, command: ShellCommand) {
    match command {
        ShellCommand::Upload(path) => {
            let _ = wizard.submit_path(&path).await;
        }
        ShellCommand::Next => {
            let _ = wizard.advance().await;
        }
        ShellCommand::Back => {
            wizard.back();
        }
        ShellCommand::Add(skill) => {
            let _ = wizard.add_skill(&skill);
        }
        ShellCommand::Remove(SkillRef::Name(skill)) => wizard.remove_skill(&skill),
        ShellCommand::Remove(SkillRef::Index(index)) => wizard.remove_skill_at(index),
        ShellCommand::Skills => {
            let skills = wizard.skills().to_vec();
            wizard.view_mut().render_skills(&skills);
        }
        ShellCommand::Predict => {
            let _ = wizard.request_prediction().await;
        }
        ShellCommand::Fit(role) => {
            let role = role.unwrap_or_else(|| predicted_role(wizard));
            let _ = wizard.request_job_fit(&role).await;
        }
        ShellCommand::Export { path, format } => {
            let format = format.unwrap_or_else(|| ReportFormat::from_path(&path));
            let _ = wizard.export_report(&path, format).await;
        }
        ShellCommand::Status => {
            let step = wizard.step();
            let notice = format!(
                "{step} ({} skills, prediction: {})",
                wizard.skills().len(),
                if wizard.session().last_prediction().is_some() { "yes" } else { "no" }
            );
            wizard.view_mut().show_notice(&notice);
        }
        ShellCommand::Help => wizard.view_mut().show_notice(HELP),
        ShellCommand::Quit => {}
    }
}

/// Role of the last prediction, or empty so the wizard reports the missing role.
pub fn predicted_role<V: WizardView>(wizard: &WizardController<V>) -> String {
    wizard
        .session()
        .last_prediction()
        .map(|p| p.predicted_role.clone())
        .unwrap_or_default()
}
