use crate::demo::{run_advise, run_cohort_report, run_demo, AdviseArgs, CohortReportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use welfare_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Citizen Welfare Advisor",
    about = "Demonstrate and run the citizen welfare advisory service from the command line",
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
    /// Print the full advisory report for one citizen profile
    Advise(AdviseArgs),
    /// Generate a cohort welfare report for program reviews
    Cohort {
        #[command(subcommand)]
        command: CohortCommand,
    },
    /// Run an end-to-end CLI demo covering enrollment and advisory workflows
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CohortCommand {
    /// Summarize an enrollment roster CSV without persisting anything
    Report(CohortReportArgs),
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
        Command::Advise(args) => run_advise(args),
        Command::Cohort {
            command: CohortCommand::Report(args),
        } => run_cohort_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
