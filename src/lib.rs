pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod output;
pub mod rate_limiter;
pub mod ranking;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::{Command, LeagueArgs};
use crate::config::settings::AppConfig;
use crate::domain::League;
use crate::services::LeagueService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rankings(args: &LeagueArgs, week: usize) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let (service, league) = load(args).await?;
        let rankings = service.power_rankings(&league, week)?;
        println!("{}", output::format_rankings(&rankings, output::should_use_colors()));
        Ok(())
    })
}

pub fn handle_teams(args: &LeagueArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let (_, league) = load(args).await?;
        println!("{}", output::format_teams(league.teams(), output::should_use_colors()));
        Ok(())
    })
}

pub fn handle_scoreboard(args: &LeagueArgs, week: Option<u32>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let (mut service, league) = load(args).await?;
        let matchups = service.scoreboard(&league, week).await?;
        println!("{}", output::format_matchups(&league, &matchups));
        Ok(())
    })
}

pub fn handle_schedule(args: &LeagueArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let (mut service, league) = load(args).await?;
        let schedule = service.schedule_for_sim(&league).await?;
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        Ok(())
    })
}

async fn load(args: &LeagueArgs) -> Result<(LeagueService, League)> {
    let config = AppConfig::new();
    let mut service = LeagueService::new(config)?;
    let league = service.load_league(args.league, args.year).await?;
    Ok((service, league))
}
