use chrono::Datelike;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "ESPN fantasy football league tools")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct LeagueArgs {
    /// ESPN league id
    #[arg(short, long)]
    pub league: i64,

    /// Season year (defaults to the current year)
    #[arg(short, long, default_value_t = current_year())]
    pub year: i32,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print power rankings through a given week
    Rankings {
        #[command(flatten)]
        league: LeagueArgs,

        /// Last week to include
        #[arg(short, long)]
        week: usize,
    },
    /// Print teams with their records
    Teams {
        #[command(flatten)]
        league: LeagueArgs,
    },
    /// Print the matchups of a week (current week when omitted)
    Scoreboard {
        #[command(flatten)]
        league: LeagueArgs,

        #[arg(short, long)]
        week: Option<u32>,
    },
    /// Print the regular-season schedule as JSON for a season simulator
    Schedule {
        #[command(flatten)]
        league: LeagueArgs,
    },
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}
