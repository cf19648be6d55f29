use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::ranking::{Score, TeamId};

// --- API Response Structures ---

/// Raw `leagueSettings` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueSettingsResponse {
    #[serde(rename = "leaguesettings")]
    pub league_settings: LeagueSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub name: Option<String>,
    /// Keyed by the team id as a string
    pub teams: HashMap<String, TeamResponse>,
    #[serde(rename = "finalRegularSeasonMatchupPeriodId", default)]
    pub final_regular_season_week: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamResponse {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "teamAbbrev", default)]
    pub team_abbrev: String,
    #[serde(rename = "teamLocation", default)]
    pub team_location: String,
    #[serde(rename = "teamNickname", default)]
    pub team_nickname: String,
    #[serde(default)]
    pub division: Option<DivisionResponse>,
    pub record: RecordResponse,
    #[serde(default)]
    pub owners: Vec<OwnerResponse>,
    #[serde(rename = "scheduleItems", default)]
    pub schedule_items: Vec<ScheduleItemResponse>,
}

impl TeamResponse {
    pub fn team_name(&self) -> String {
        format!("{} {}", self.team_location, self.team_nickname)
            .trim()
            .to_string()
    }

    pub fn owner_name(&self) -> String {
        self.owners
            .first()
            .map(|o| format!("{} {}", o.first_name, o.last_name).trim().to_string())
            .unwrap_or_else(|| "Unknown Owner".to_string())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DivisionResponse {
    #[serde(rename = "divisionId")]
    pub division_id: i64,
    #[serde(rename = "divisionName", default)]
    pub division_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordResponse {
    #[serde(rename = "overallWins", default)]
    pub wins: u32,
    #[serde(rename = "overallLosses", default)]
    pub losses: u32,
    #[serde(rename = "pointsFor", default)]
    pub points_for: Score,
    #[serde(rename = "pointsAgainst", default)]
    pub points_against: Score,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnerResponse {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleItemResponse {
    pub matchups: Vec<ScheduledMatchupResponse>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduledMatchupResponse {
    #[serde(rename = "isBye", default)]
    pub is_bye: bool,
    #[serde(rename = "homeTeamId")]
    pub home_team_id: TeamId,
    #[serde(rename = "awayTeamId", default)]
    pub away_team_id: Option<TeamId>,
    #[serde(rename = "homeTeamScores", default)]
    pub home_team_scores: Vec<Score>,
    #[serde(rename = "awayTeamScores", default)]
    pub away_team_scores: Vec<Score>,
}

impl ScheduledMatchupResponse {
    /// This team's score and opponent id for the week. `None` opponent on a bye.
    /// Returns `None` when the team's score is absent.
    pub fn side_of(&self, team_id: TeamId) -> Option<(Score, Option<TeamId>)> {
        if self.is_bye {
            return Some((*self.home_team_scores.first()?, None));
        }
        if self.away_team_id == Some(team_id) {
            Some((*self.away_team_scores.first()?, Some(self.home_team_id)))
        } else {
            Some((*self.home_team_scores.first()?, self.away_team_id))
        }
    }
}

/// Raw `scoreboard` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreboardResponse {
    pub scoreboard: Scoreboard,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scoreboard {
    #[serde(rename = "matchupPeriodId", default)]
    pub matchup_period_id: Option<u32>,
    pub matchups: Vec<ScoreboardMatchupResponse>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreboardMatchupResponse {
    #[serde(default)]
    pub bye: bool,
    pub teams: Vec<ScoreboardTeamResponse>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreboardTeamResponse {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub home: bool,
}
