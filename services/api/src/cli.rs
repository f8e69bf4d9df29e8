use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use carshare_screening::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Carshare Guest Screening",
    about = "Score guests and check booking eligibility from the command line or over HTTP",
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
    /// Score a single profile JSON file and print the booking decision
    Score(ScoreArgs),
    /// Score a fixed set of sample guests and hosts
    Demo(DemoArgs),
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
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["carshare-screening-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "carshare-screening-api",
            "score",
            "--profile",
            "guest.json",
            "--vehicle-instant-book",
            "--today",
            "2026-10-14",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert!(args.vehicle_instant_book);
                assert_eq!(args.vehicle_id, "cli-vehicle");
                assert_eq!(args.today.map(|date| date.to_string()).as_deref(), Some("2026-10-14"));
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }
}
