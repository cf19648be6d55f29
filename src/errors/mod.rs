use serde_json::Value;
use thiserror::Error;

use crate::ranking::TeamId;

/// Classified failure of an ESPN API call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Private league: {0}")]
    PrivateLeague(String),

    #[error("Invalid league: {0}")]
    InvalidLeague(String),

    #[error("Unknown {0} Error")]
    UnknownLeague(u16),
}

/// Malformed league data handed to the ranking code
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    #[error("Team {team_id} has {scores} margins but {opponents} opponents")]
    LengthMismatch {
        team_id: TeamId,
        scores: usize,
        opponents: usize,
    },

    #[error("Team {0} is not part of this league")]
    UnknownTeam(TeamId),

    #[error("Team {team_id} is scheduled against itself in week {week}")]
    SelfMatchup { team_id: TeamId, week: usize },

    #[error("Team {team_id} has no score for week {week}")]
    MissingScore { team_id: TeamId, week: usize },

    #[error("Team {team_id} has no matchup in its schedule for week {week}")]
    MissingMatchup { team_id: TeamId, week: usize },

    #[error("Team id {0} appears more than once in the league")]
    DuplicateTeam(TeamId),

    #[error("Got {dominance} dominance scores for {teams} teams")]
    DominanceCountMismatch { dominance: usize, teams: usize },
}

/// Map a response status and body onto one of the three fetch error kinds.
/// Returns `Ok(())` for a 200.
pub fn classify_response(status: u16, body: &Value) -> Result<(), FetchError> {
    match status {
        200 => Ok(()),
        401 => Err(FetchError::PrivateLeague(error_message(body))),
        404 => Err(FetchError::InvalidLeague(error_message(body))),
        other => Err(FetchError::UnknownLeague(other)),
    }
}

fn error_message(body: &Value) -> String {
    extract_error_message(body)
        .unwrap_or("no message")
        .to_string()
}

fn extract_error_message(body: &Value) -> Option<&str> {
    body.get("error")?.get(0)?.get("message")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_body(message: &str) -> Value {
        json!({ "error": [{ "message": message, "code": "x" }] })
    }

    #[test]
    fn test_ok_status_passes() {
        assert_eq!(classify_response(200, &json!({})), Ok(()));
    }

    #[test]
    fn test_unauthorized_is_private_league() {
        let result = classify_response(401, &error_body("You are not authorized"));
        assert_eq!(
            result,
            Err(FetchError::PrivateLeague("You are not authorized".to_string()))
        );
    }

    #[test]
    fn test_not_found_is_invalid_league() {
        let result = classify_response(404, &error_body("League not found"));
        assert_eq!(
            result,
            Err(FetchError::InvalidLeague("League not found".to_string()))
        );
    }

    #[test]
    fn test_other_status_is_unknown() {
        let result = classify_response(503, &json!("gateway says no"));
        assert_eq!(result, Err(FetchError::UnknownLeague(503)));
        assert_eq!(result.unwrap_err().to_string(), "Unknown 503 Error");
    }

    #[test]
    fn test_missing_message_falls_back() {
        let result = classify_response(401, &json!({}));
        assert_eq!(
            result,
            Err(FetchError::PrivateLeague("no message".to_string()))
        );
    }
}
