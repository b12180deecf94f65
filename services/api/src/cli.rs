use crate::demo::{run_demo, run_roadmap_report, DemoArgs, RoadmapReportArgs};
use crate::server;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Run and demo the Career Compass guidance service from the command line",
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
    /// Inspect the seeded roadmap from the command line
    Roadmap {
        #[command(subcommand)]
        command: RoadmapCommand,
    },
    /// Run an end-to-end CLI demo covering the quiz and roadmap flows
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RoadmapCommand {
    /// Print the roadmap progress report and optional node listing
    Report(RoadmapReportArgs),
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
        Command::Roadmap {
            command: RoadmapCommand::Report(args),
        } => run_roadmap_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
