use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use advisor::config::{normalize_base, Config};
use advisor::gateway::HttpGateway;
use advisor::render::{ResultRenderer, TopRolesLayout};
use advisor::report::ReportFormat;
use advisor::shell::{predicted_role, run_shell, HELP};
use advisor::terminal::TerminalView;
use advisor::wizard::{PredictMode, Step, WizardController, WizardOptions, WizardView};

#[derive(Parser)]
#[command(name = "advisor", version)]
#[command(about = "Resume analysis and career prediction against the Career Advisor backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend origin, overrides ADVISOR_API_BASE
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// explicit | on-entry, overrides ADVISOR_PREDICT_MODE
    #[arg(long, global = true)]
    predict_mode: Option<PredictMode>,

    /// slots | list, overrides ADVISOR_TOP_ROLES_LAYOUT
    #[arg(long, global = true)]
    layout: Option<TopRolesLayout>,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one resume end to end and exit
    Run(RunArgs),
    /// Step through the wizard interactively
    Shell {
        /// Resume to upload before the prompt opens
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RunArgs {
    /// PDF or TXT resume
    file: PathBuf,

    /// Skill to add after extraction (repeatable)
    #[arg(long = "add", value_name = "SKILL")]
    add: Vec<String>,

    /// Extracted skill to drop (repeatable)
    #[arg(long = "remove", value_name = "SKILL")]
    remove: Vec<String>,

    /// Score the skills against this role after predicting
    #[arg(long, conflicts_with = "job_fit")]
    job_role: Option<String>,

    /// Score the skills against the predicted role
    #[arg(long)]
    job_fit: bool,

    /// Write a report here
    #[arg(long)]
    export: Option<PathBuf>,

    /// markdown | json (default: from the export file extension)
    #[arg(long, requires = "export")]
    format: Option<ReportFormat>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_base) = &cli.api_base {
        config.api_base = normalize_base(api_base);
    }
    if let Some(mode) = cli.predict_mode {
        config.predict_mode = mode;
    }
    if let Some(layout) = cli.layout {
        config.top_roles_layout = layout;
    }

    // Logs go to stderr so they never interleave with wizard output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Starting advisor v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_base
    );

    let gateway = Arc::new(HttpGateway::from_config(&config)?);
    let wizard = WizardController::new(
        gateway.clone(),
        gateway,
        ResultRenderer::new(config.top_roles_layout),
        TerminalView::stdout(),
        WizardOptions {
            predict_mode: config.predict_mode,
            auto_advance: config.auto_advance,
        },
    );

    match cli.command {
        Command::Run(args) => run(wizard, args).await,
        Command::Shell { file } => shell(wizard, file).await,
    }
}

async fn run(mut wizard: WizardController<TerminalView>, args: RunArgs) -> Result<()> {
    wizard.submit_path(&args.file).await?;

    for skill in &args.remove {
        wizard.remove_skill(skill);
    }
    for skill in &args.add {
        wizard.add_skill(skill)?;
    }

    while wizard.step() != Step::Predict {
        wizard.advance().await?;
    }
    if wizard.session().last_prediction().is_none() {
        wizard.request_prediction().await?;
    }

    let job_role = match args.job_role {
        Some(role) => Some(role),
        None if args.job_fit => Some(predicted_role(&wizard)),
        None => None,
    };
    if let Some(role) = job_role {
        wizard.request_job_fit(&role).await?;
    }

    if let Some(path) = args.export {
        let format = args
            .format
            .unwrap_or_else(|| ReportFormat::from_path(&path));
        wizard.export_report(&path, format).await?;
    }
    Ok(())
}

async fn shell(mut wizard: WizardController<TerminalView>, file: Option<PathBuf>) -> Result<()> {
    wizard.view_mut().show_notice(HELP);
    if let Some(path) = file {
        // shown by the view; the prompt stays open
        let _ = wizard.submit_path(&path).await;
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_shell(&mut wizard, stdin).await
}
