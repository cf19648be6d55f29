use anyhow::Result;

use espnff::cli::Command;
use espnff::{handle_rankings, handle_schedule, handle_scoreboard, handle_teams, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Rankings { league, week } => handle_rankings(league, *week),
        Command::Teams { league } => handle_teams(league),
        Command::Scoreboard { league, week } => handle_scoreboard(league, *week),
        Command::Schedule { league } => handle_schedule(league),
    }
}
