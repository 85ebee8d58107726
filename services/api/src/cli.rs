use crate::demo::{
    run_advisor_ask, run_demo, run_prospect_report, AdvisorAskArgs, DemoArgs, ProspectReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use prospect_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Sales Activation Copilot",
    about = "Demonstrate and run the sales activation copilot from the command line",
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
    /// Score and filter the prospect portfolio
    Prospects {
        #[command(subcommand)]
        command: ProspectsCommand,
    },
    /// Ask the hospitality advisor a question
    Advisor {
        #[command(subcommand)]
        command: AdvisorCommand,
    },
    /// Run an end-to-end CLI demo covering prospecting and advisory workflows
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProspectsCommand {
    /// Generate a qualified-prospect report with dashboard totals
    Report(ProspectReportArgs),
}

#[derive(Subcommand, Debug)]
enum AdvisorCommand {
    /// Route a question, generate a recommendation, and print it
    Ask(AdvisorAskArgs),
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
        Command::Prospects {
            command: ProspectsCommand::Report(args),
        } => run_prospect_report(args),
        Command::Advisor {
            command: AdvisorCommand::Ask(args),
        } => run_advisor_ask(args),
        Command::Demo(args) => run_demo(args),
    }
}
