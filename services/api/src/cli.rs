use crate::demo::{run_demo, run_quiz_score, DemoArgs, QuizScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use kink_test::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Kink Profile Quiz Service",
    about = "Serve the quiz API or run it from the command line",
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
    /// Work with the quiz offline
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Run an end-to-end demo: score, classify, persist, and reload a session
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Score an answers file and print the classified result
    Score(QuizScoreArgs),
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
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_quiz_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
