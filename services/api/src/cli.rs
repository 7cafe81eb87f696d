use crate::score::{run_questions, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use tizhi::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "tizhi",
    about = "Score TCM constitution questionnaires and serve the scoring API",
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
    /// Classify a set of 30 questionnaire answers
    Score(ScoreArgs),
    /// Print the questionnaire grouped by constitution
    Questions,
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
        Command::Questions => {
            run_questions();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["tizhi"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_answers() {
        let answers = vec!["3"; 30].join(",");
        let cli = Cli::try_parse_from(["tizhi", "score", "--answers", answers.as_str(), "--json"])
            .expect("parses");
        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.answers.0.len(), 30);
                assert!(args.json);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_answers() {
        let result = Cli::try_parse_from(["tizhi", "score", "--answers", "3,three"]);
        assert!(result.is_err());
    }
}
