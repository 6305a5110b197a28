use crate::demo::{run_assessment_report, run_demo, AssessReportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sra_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HIPAA SRA Assistant",
    about = "Run HIPAA Security Rule risk assessments from the command line or as an HTTP service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run an assessment against the question library
    Assess {
        #[command(subcommand)]
        command: AssessCommand,
    },
    /// Run a canned assessment demo with sample clinic answers
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessCommand {
    /// Generate a risk report from an answers file and print the dashboard
    Report(AssessReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess {
            command: AssessCommand::Report(args),
        } => run_assessment_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
