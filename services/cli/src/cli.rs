use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use job_application::config::AppConfig;
use job_application::error::AppError;
use job_application::form::{
    ApplicationIntake, DisabledTransport, FieldName, FormEvent, FormView, HttpSubmissionClient,
    Skill, SubmissionTransport,
};
use job_application::telemetry;
use tracing::{info, warn};

use crate::events::{parse_line, Command as LineCommand, HELP};
use crate::render::{render_form, render_view};

#[derive(Parser, Debug)]
#[command(
    name = "job-application",
    about = "Fill in, validate, and submit a job application from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit an application in one step from flags
    Submit(SubmitArgs),
    /// Edit the form line by line from stdin (type `help` for commands)
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct TransportArgs {
    /// Override the configured submission endpoint
    #[arg(long)]
    pub(crate) submit_url: Option<String>,
    /// Validate and summarize without sending anything
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SubmitArgs {
    #[arg(long)]
    pub(crate) full_name: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    #[arg(long)]
    pub(crate) phone_number: Option<String>,
    /// Developer, Designer or Manager
    #[arg(long)]
    pub(crate) position: Option<String>,
    /// Relevant experience in years (Developer and Designer)
    #[arg(long)]
    pub(crate) experience: Option<String>,
    /// Portfolio URL (Designer)
    #[arg(long)]
    pub(crate) portfolio_url: Option<String>,
    /// Management experience (Manager)
    #[arg(long)]
    pub(crate) management_experience: Option<String>,
    /// Additional skill; repeat for several (JavaScript, CSS, Python)
    #[arg(long = "skill", value_parser = parse_skill)]
    pub(crate) skills: Vec<Skill>,
    /// Preferred interview time (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub(crate) interview_time: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) transport: TransportArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct InteractiveArgs {
    #[command(flatten)]
    pub(crate) transport: TransportArgs,
}

/// How a run ended, so the binary can pick an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Submitted,
    Rejected,
    Closed,
}

fn parse_skill(raw: &str) -> Result<Skill, String> {
    raw.parse::<Skill>().map_err(|err| err.to_string())
}

pub(crate) fn run() -> Result<RunOutcome, AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "job application form ready");

    match cli.command {
        Command::Submit(args) => {
            let transport = build_transport(&config, &args.transport)?;
            run_submit(args, transport, &mut io::stdout().lock())
        }
        Command::Interactive(args) => {
            let transport = build_transport(&config, &args.transport)?;
            run_interactive(transport, io::stdin().lock(), &mut io::stdout().lock())
        }
    }
}

fn build_transport(
    config: &AppConfig,
    args: &TransportArgs,
) -> Result<Box<dyn SubmissionTransport>, AppError> {
    if args.dry_run {
        return Ok(Box::new(DisabledTransport));
    }

    let mut transport = config.transport.clone();
    if let Some(url) = &args.submit_url {
        transport.endpoint = url.clone();
        transport.validate()?;
    }
    Ok(Box::new(HttpSubmissionClient::from_config(&transport)?))
}

pub(crate) fn submit_events(args: &SubmitArgs) -> Vec<FormEvent> {
    let fields = [
        (FieldName::FullName, &args.full_name),
        (FieldName::Email, &args.email),
        (FieldName::PhoneNumber, &args.phone_number),
        (FieldName::Position, &args.position),
        (FieldName::Experience, &args.experience),
        (FieldName::PortfolioUrl, &args.portfolio_url),
        (FieldName::ManagementExperience, &args.management_experience),
        (FieldName::PreferredInterviewTime, &args.interview_time),
    ];

    let mut events: Vec<FormEvent> = fields
        .into_iter()
        .filter_map(|(name, value)| {
            value.as_ref().map(|value| FormEvent::FieldChanged {
                name,
                value: value.clone(),
            })
        })
        .collect();
    events.extend(args.skills.iter().map(|skill| FormEvent::SkillToggled {
        skill: *skill,
        included: true,
    }));
    events.push(FormEvent::SubmitRequested);
    events
}

pub(crate) fn run_submit<T, W>(
    args: SubmitArgs,
    transport: T,
    out: &mut W,
) -> Result<RunOutcome, AppError>
where
    T: SubmissionTransport,
    W: Write,
{
    let mut intake = ApplicationIntake::new(transport);
    let mut view = intake.view();
    for event in submit_events(&args) {
        view = intake.handle(event)?;
    }

    render_view(out, &view, args.json)?;
    Ok(match view {
        FormView::Summary(_) => RunOutcome::Submitted,
        FormView::Editing { .. } => RunOutcome::Rejected,
    })
}

pub(crate) fn run_interactive<T, R, W>(
    transport: T,
    input: R,
    out: &mut W,
) -> Result<RunOutcome, AppError>
where
    T: SubmissionTransport,
    R: BufRead,
    W: Write,
{
    let mut intake = ApplicationIntake::new(transport);
    writeln!(out, "Job Application (type 'help' for commands)")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match command {
            LineCommand::Event(event) => {
                let announces = matches!(event, FormEvent::SubmitRequested | FormEvent::StartNew);
                match intake.handle(event) {
                    Ok(view) if announces => render_view(out, &view, false)?,
                    Ok(_) => {}
                    Err(err) => {
                        warn!(error = %err, "event rejected");
                        writeln!(out, "error: {err}")?;
                    }
                }
            }
            LineCommand::Show => render_form(out, intake.model())?,
            LineCommand::Help => writeln!(out, "{HELP}")?,
            LineCommand::Quit => break,
        }
        out.flush()?;
    }

    Ok(if intake.model().is_submitted() {
        RunOutcome::Submitted
    } else {
        RunOutcome::Closed
    })
}
