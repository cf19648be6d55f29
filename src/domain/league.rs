use std::collections::{BTreeMap, HashMap};
use log::{debug, info};

use super::matchup::{Matchup, SimGame};
use super::models::{LeagueSettingsResponse, ScoreboardResponse};
use super::team::Team;
use crate::config::settings::RankingSettings;
use crate::errors::RankingError;
use crate::ranking::{self, PowerRanking, Score, TeamId, TeamResults};

/// A fully linked league: every opponent id refers to a team of this league
/// and every margin of victory has been computed.
#[derive(Debug, Clone)]
pub struct League {
    pub league_id: i64,
    pub year: i32,
    pub name: Option<String>,
    pub final_regular_season_week: u32,
    teams: Vec<Team>,
    team_to_idx: HashMap<TeamId, usize>,
}

impl League {
    /// Builds the league in two passes: load every team keyed by id, then
    /// resolve opponents and compute margins of victory.
    pub fn from_settings(
        league_id: i64,
        year: i32,
        data: &LeagueSettingsResponse,
    ) -> Result<Self, RankingError> {
        let settings = &data.league_settings;

        let mut by_id: BTreeMap<TeamId, Team> = BTreeMap::new();
        for response in settings.teams.values() {
            let team = Team::from_response(response)?;
            if by_id.insert(team.team_id, team).is_some() {
                return Err(RankingError::DuplicateTeam(response.team_id));
            }
        }
        info!("Loaded {} teams for league {} ({})", by_id.len(), league_id, year);

        let margins = compute_margins(&by_id)?;
        for (team_id, mov) in margins {
            if let Some(team) = by_id.get_mut(&team_id) {
                team.mov = mov;
            }
        }

        let teams: Vec<Team> = by_id.into_values().collect();
        let team_to_idx = teams
            .iter()
            .enumerate()
            .map(|(idx, team)| (team.team_id, idx))
            .collect();

        Ok(Self {
            league_id,
            year,
            name: settings.name.clone(),
            final_regular_season_week: settings.final_regular_season_week,
            teams,
            team_to_idx,
        })
    }

    /// Teams ordered by team id
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.team_to_idx.get(&team_id).map(|&idx| &self.teams[idx])
    }

    /// Opponent in `week` (1-based). `None` on a bye or past the schedule.
    pub fn opponent(&self, team_id: TeamId, week: usize) -> Option<&Team> {
        let team = self.team(team_id)?;
        let opponent_id = (*team.schedule.get(week.checked_sub(1)?)?)?;
        self.team(opponent_id)
    }

    pub fn power_rankings(&self, week: usize) -> Result<Vec<PowerRanking>, RankingError> {
        self.power_rankings_with(week, &RankingSettings::default())
    }

    /// Power rankings using the results of the first `week` weeks
    pub fn power_rankings_with(
        &self,
        week: usize,
        config: &RankingSettings,
    ) -> Result<Vec<PowerRanking>, RankingError> {
        let mut sorted: Vec<&Team> = self.teams.iter().collect();
        sorted.sort_by_key(|team| team.team_id);

        let results: Vec<TeamResults> = sorted
            .iter()
            .map(|team| team.results_through(week))
            .collect();

        let matrix = ranking::build_win_matrix(&results)?;
        if matrix.is_empty() {
            return Ok(Vec::new());
        }
        let dominance = ranking::two_step_dominance(&matrix);
        let points = ranking::power_points(&dominance, &results, week, config)?;
        debug!(
            "Ranked {} teams through week {} from a {}-team win matrix",
            points.len(),
            week,
            matrix.len()
        );

        points
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| -> Result<PowerRanking, RankingError> {
                let team = self
                    .team(entry.team_id)
                    .ok_or(RankingError::UnknownTeam(entry.team_id))?;
                Ok(PowerRanking {
                    rank: idx + 1,
                    team_id: entry.team_id,
                    team_name: team.team_name.clone(),
                    owner: team.owner.clone(),
                    power_score: entry.power_score,
                    dominance: entry.dominance,
                    points_per_game: entry.points_per_game,
                })
            })
            .collect()
    }

    /// Links raw scoreboard matchups to this league's teams
    pub fn resolve_scoreboard(
        &self,
        data: &ScoreboardResponse,
    ) -> Result<Vec<Matchup>, RankingError> {
        let matchups: Vec<Matchup> = data
            .scoreboard
            .matchups
            .iter()
            .filter_map(Matchup::from_response)
            .collect();

        for matchup in &matchups {
            for team_id in matchup.team_ids() {
                self.require_team(team_id)?;
            }
        }
        debug!(
            "Resolved {} matchups for week {:?}",
            matchups.len(),
            data.scoreboard.matchup_period_id
        );

        Ok(matchups)
    }

    /// Flattens per-week matchups into simulator games. Byes are skipped.
    pub fn schedule_for_sim(
        &self,
        weeks: &[(u32, Vec<Matchup>)],
    ) -> Result<Vec<SimGame>, RankingError> {
        let mut schedule = Vec::new();

        for (week, matchups) in weeks {
            for matchup in matchups {
                let (Some(away_team), Some(away_score)) = (matchup.away_team, matchup.away_score)
                else {
                    continue;
                };
                schedule.push(SimGame {
                    home_owner: self.require_team(matchup.home_team)?.owner.clone(),
                    away_owner: self.require_team(away_team)?.owner.clone(),
                    home_score: matchup.home_score,
                    away_score,
                    week: *week,
                });
            }
        }

        Ok(schedule)
    }

    fn require_team(&self, team_id: TeamId) -> Result<&Team, RankingError> {
        self.team(team_id).ok_or(RankingError::UnknownTeam(team_id))
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "League({}, {})", self.league_id, self.year)
    }
}

/// Second pass: every opponent must exist, and its score for the same week
/// must be known.
fn compute_margins(
    teams: &BTreeMap<TeamId, Team>,
) -> Result<Vec<(TeamId, Vec<Score>)>, RankingError> {
    let mut margins = Vec::with_capacity(teams.len());

    for team in teams.values() {
        if team.scores.len() != team.schedule.len() {
            return Err(RankingError::LengthMismatch {
                team_id: team.team_id,
                scores: team.scores.len(),
                opponents: team.schedule.len(),
            });
        }

        let mut mov = Vec::with_capacity(team.scores.len());
        for (week, (&score, opponent_id)) in team.scores.iter().zip(&team.schedule).enumerate() {
            let Some(opponent_id) = *opponent_id else {
                mov.push(0.0);
                continue;
            };
            if opponent_id == team.team_id {
                return Err(RankingError::SelfMatchup {
                    team_id: team.team_id,
                    week: week + 1,
                });
            }
            let opponent = teams
                .get(&opponent_id)
                .ok_or(RankingError::UnknownTeam(opponent_id))?;
            let opponent_score = opponent
                .scores
                .get(week)
                .copied()
                .ok_or(RankingError::MissingScore {
                    team_id: opponent_id,
                    week: week + 1,
                })?;
            mov.push(score - opponent_score);
        }

        margins.push((team.team_id, mov));
    }

    Ok(margins)
}
