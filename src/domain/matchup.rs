use serde::Serialize;

use super::models::ScoreboardMatchupResponse;
use crate::ranking::{Score, TeamId};

/// One scoreboard pairing. `away` is `None` on a bye.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub home_team: TeamId,
    pub home_score: Score,
    pub away_team: Option<TeamId>,
    pub away_score: Option<Score>,
}

impl Matchup {
    /// Picks the home side regardless of its position in `teams`.
    /// Returns `None` for a matchup without any team.
    pub(crate) fn from_response(data: &ScoreboardMatchupResponse) -> Option<Self> {
        let first = data.teams.first()?;

        if data.bye {
            return Some(Self {
                home_team: first.team_id,
                home_score: first.score,
                away_team: None,
                away_score: None,
            });
        }

        let home = data.teams.iter().find(|t| t.home).unwrap_or(first);
        let away = data.teams.iter().find(|t| t.team_id != home.team_id);

        Some(Self {
            home_team: home.team_id,
            home_score: home.score,
            away_team: away.map(|t| t.team_id),
            away_score: away.map(|t| t.score),
        })
    }

    pub fn is_bye(&self) -> bool {
        self.away_team.is_none()
    }

    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> + '_ {
        std::iter::once(self.home_team).chain(self.away_team)
    }
}

/// A played game flattened for an external season simulator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimGame {
    pub home_owner: String,
    pub away_owner: String,
    pub home_score: Score,
    pub away_score: Score,
    pub week: u32,
}
