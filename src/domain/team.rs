use serde::Serialize;

use super::models::TeamResponse;
use crate::errors::RankingError;
use crate::ranking::{Score, TeamId, TeamResults};

/// A league member with its per-week results.
///
/// `schedule`, `scores` and `mov` are index-aligned by week (week 1 is index 0).
/// A `None` opponent is a bye.
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub team_id: TeamId,
    pub team_abbrev: String,
    pub team_name: String,
    pub division_id: Option<i64>,
    pub division_name: Option<String>,
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: Score,
    pub points_against: Score,
    pub schedule: Vec<Option<TeamId>>,
    pub scores: Vec<Score>,
    pub mov: Vec<Score>,
}

impl Team {
    /// First pass of league construction: opponents are still raw ids and
    /// margins are empty until every team is loaded.
    ///
    /// Every schedule item must carry a matchup with this team's score, so
    /// that index `w` always holds week `w + 1`.
    pub(crate) fn from_response(data: &TeamResponse) -> Result<Self, RankingError> {
        let team_id = data.team_id;
        let mut scores = Vec::with_capacity(data.schedule_items.len());
        let mut schedule = Vec::with_capacity(data.schedule_items.len());

        for (idx, item) in data.schedule_items.iter().enumerate() {
            let week = idx + 1;
            let matchup = item
                .matchups
                .first()
                .ok_or(RankingError::MissingMatchup { team_id, week })?;
            let (score, opponent) = matchup
                .side_of(team_id)
                .ok_or(RankingError::MissingScore { team_id, week })?;
            scores.push(score);
            schedule.push(opponent);
        }

        Ok(Self {
            team_id: data.team_id,
            team_abbrev: data.team_abbrev.clone(),
            team_name: data.team_name(),
            division_id: data.division.as_ref().map(|d| d.division_id),
            division_name: data.division.as_ref().map(|d| d.division_name.clone()),
            owner: data.owner_name(),
            wins: data.record.wins,
            losses: data.record.losses,
            points_for: data.record.points_for,
            points_against: data.record.points_against,
            schedule,
            scores,
            mov: Vec::new(),
        })
    }

    pub fn weeks_played(&self) -> usize {
        self.scores.len()
    }

    /// Results through `week`, truncated to what has been played
    pub fn results_through(&self, week: usize) -> TeamResults<'_> {
        let mov_end = week.min(self.mov.len());
        let schedule_end = week.min(self.schedule.len());
        let scores_end = week.min(self.scores.len());
        TeamResults {
            team_id: self.team_id,
            mov: &self.mov[..mov_end],
            opponents: &self.schedule[..schedule_end],
            scores: &self.scores[..scores_end],
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team({})", self.team_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn response(schedule_items: Value) -> TeamResponse {
        serde_json::from_value(json!({
            "teamId": 1,
            "teamLocation": "North",
            "teamNickname": "Stars",
            "record": { "overallWins": 1, "overallLosses": 0 },
            "owners": [{ "firstName": "Jo", "lastName": "Park" }],
            "scheduleItems": schedule_items
        }))
        .unwrap()
    }

    #[test]
    fn test_weeks_stay_aligned_with_byes() {
        let data = response(json!([
            { "matchups": [{ "isBye": true, "homeTeamId": 1, "homeTeamScores": [0.0] }] },
            { "matchups": [{
                "isBye": false, "homeTeamId": 2, "awayTeamId": 1,
                "homeTeamScores": [50.0], "awayTeamScores": [100.0]
            }]}
        ]));

        let team = Team::from_response(&data).unwrap();

        assert_eq!(team.schedule, vec![None, Some(2)]);
        assert_eq!(team.scores, vec![0.0, 100.0]);
        assert_eq!(team.weeks_played(), 2);
    }

    #[test]
    fn test_empty_schedule_item_names_its_week() {
        let data = response(json!([
            { "matchups": [] },
            { "matchups": [{
                "isBye": false, "homeTeamId": 1, "awayTeamId": 2,
                "homeTeamScores": [100.0], "awayTeamScores": [50.0]
            }]}
        ]));

        let err = Team::from_response(&data).unwrap_err();

        assert_eq!(err, RankingError::MissingMatchup { team_id: 1, week: 1 });
    }

    #[test]
    fn test_absent_score_is_an_error() {
        let data = response(json!([
            { "matchups": [{
                "isBye": false, "homeTeamId": 2, "awayTeamId": 1,
                "homeTeamScores": [80.0], "awayTeamScores": []
            }]}
        ]));

        let err = Team::from_response(&data).unwrap_err();

        assert_eq!(err, RankingError::MissingScore { team_id: 1, week: 1 });
    }
}
