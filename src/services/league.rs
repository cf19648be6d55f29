use anyhow::{Context, Result};
use log::info;

use crate::api::EspnClient;
use crate::config::settings::AppConfig;
use crate::domain::{League, Matchup, SimGame};
use crate::ranking::PowerRanking;

/// Loads leagues from the API and derives rankings and schedules from them
pub struct LeagueService {
    config: AppConfig,
    api_client: EspnClient,
}

impl LeagueService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let api_client = EspnClient::new(&config.client)?;
        Ok(Self { config, api_client })
    }

    pub async fn load_league(&mut self, league_id: i64, year: i32) -> Result<League> {
        let data = self
            .api_client
            .fetch_league_settings(league_id, year)
            .await?;

        let league = League::from_settings(league_id, year, &data)
            .with_context(|| format!("Failed to build league {} ({})", league_id, year))?;
        info!("  → {} ready with {} teams", league, league.teams().len());
        Ok(league)
    }

    pub fn power_rankings(&self, league: &League, week: usize) -> Result<Vec<PowerRanking>> {
        let rankings = league.power_rankings_with(week, &self.config.ranking)?;
        Ok(rankings)
    }

    pub async fn scoreboard(&mut self, league: &League, week: Option<u32>) -> Result<Vec<Matchup>> {
        let data = self
            .api_client
            .fetch_scoreboard(league.league_id, league.year, week)
            .await?;
        let matchups = league.resolve_scoreboard(&data)?;
        Ok(matchups)
    }

    /// Every regular-season game, one scoreboard request per week
    pub async fn schedule_for_sim(&mut self, league: &League) -> Result<Vec<SimGame>> {
        let last_week = league.final_regular_season_week;
        info!("Collecting schedule for weeks 1..={}", last_week);

        let mut weeks = Vec::new();
        for week in 1..=last_week {
            let matchups = self.scoreboard(league, Some(week)).await?;
            weeks.push((week, matchups));
        }

        let schedule = league.schedule_for_sim(&weeks)?;
        info!("  → {} games collected", schedule.len());
        Ok(schedule)
    }
}
