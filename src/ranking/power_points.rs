use std::cmp::Ordering;
use ndarray::Array1;

use super::types::{TeamId, TeamResults};
use crate::config::settings::RankingSettings;
use crate::errors::RankingError;

// Keeps the points component strictly below one dominance point
const MAX_TIEBREAK_WEIGHT: f64 = 0.99;

#[derive(Debug, Clone, PartialEq)]
pub struct PowerPoints {
    pub team_id: TeamId,
    pub power_score: f64,
    pub dominance: f64,
    pub points_per_game: f64,
}

/// Blends dominance with points per game through `week` and sorts the result.
///
/// Dominance values are whole numbers, and the points component is bounded by
/// `tiebreak_weight < 1`, so it only ever separates teams of equal dominance.
/// Remaining ties go to the lower team id.
pub fn power_points(
    dominance: &Array1<f64>,
    teams: &[TeamResults],
    week: usize,
    config: &RankingSettings,
) -> Result<Vec<PowerPoints>, RankingError> {
    if dominance.len() != teams.len() {
        return Err(RankingError::DominanceCountMismatch {
            dominance: dominance.len(),
            teams: teams.len(),
        });
    }

    let averages: Vec<f64> = teams
        .iter()
        .map(|team| points_per_game(team.scores, week))
        .collect();
    let best_average = averages.iter().copied().fold(0.0_f64, f64::max);
    let weight = config.points_tiebreak_weight.clamp(0.0, MAX_TIEBREAK_WEIGHT);

    let mut ranked: Vec<PowerPoints> = teams
        .iter()
        .zip(dominance.iter())
        .zip(averages)
        .map(|((team, &dominance), points_per_game)| PowerPoints {
            team_id: team.team_id,
            power_score: dominance + weight * normalize(points_per_game, best_average),
            dominance,
            points_per_game,
        })
        .collect();

    ranked.sort_by(compare_power);
    Ok(ranked)
}

/// Average score over the first `week` games. Zero when nothing has been played.
pub fn points_per_game(scores: &[f64], week: usize) -> f64 {
    let played = &scores[..week.min(scores.len())];
    if played.is_empty() {
        return 0.0;
    }
    played.iter().sum::<f64>() / played.len() as f64
}

fn normalize(value: f64, best: f64) -> f64 {
    if best <= 0.0 {
        return 0.0;
    }
    (value / best).clamp(0.0, 1.0)
}

fn compare_power(a: &PowerPoints, b: &PowerPoints) -> Ordering {
    b.power_score
        .total_cmp(&a.power_score)
        .then_with(|| a.team_id.cmp(&b.team_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn team(team_id: TeamId, scores: &[f64]) -> TeamResults<'_> {
        TeamResults {
            team_id,
            mov: &[],
            opponents: &[],
            scores,
        }
    }

    fn order(ranked: &[PowerPoints]) -> Vec<TeamId> {
        ranked.iter().map(|p| p.team_id).collect()
    }

    #[test]
    fn test_dominance_is_primary_key() {
        let teams = vec![team(1, &[200.0, 200.0]), team(2, &[50.0, 60.0])];
        let dominance = array![1.0, 2.0];

        let ranked = power_points(&dominance, &teams, 2, &RankingSettings::default()).unwrap();

        assert_eq!(order(&ranked), vec![2, 1]);
    }

    #[test]
    fn test_points_per_game_breaks_dominance_ties() {
        let teams = vec![
            team(1, &[90.0, 95.0]),
            team(2, &[120.0, 110.0]),
            team(3, &[100.0, 100.0]),
        ];
        let dominance = array![3.0, 3.0, 3.0];

        let ranked = power_points(&dominance, &teams, 2, &RankingSettings::default()).unwrap();

        assert_eq!(order(&ranked), vec![2, 3, 1]);
        assert!(ranked.iter().all(|p| p.power_score < 4.0));
    }

    #[test]
    fn test_full_ties_ordered_by_team_id() {
        let teams = vec![
            team(7, &[100.0]),
            team(2, &[100.0]),
            team(5, &[100.0]),
        ];
        let dominance = array![1.0, 1.0, 1.0];

        let ranked = power_points(&dominance, &teams, 1, &RankingSettings::default()).unwrap();

        assert_eq!(order(&ranked), vec![2, 5, 7]);
    }

    #[test]
    fn test_week_zero_ties_everyone() {
        let teams = vec![team(3, &[80.0]), team(1, &[140.0]), team(2, &[95.0])];
        let dominance = array![0.0, 0.0, 0.0];

        let ranked = power_points(&dominance, &teams, 0, &RankingSettings::default()).unwrap();

        assert_eq!(order(&ranked), vec![1, 2, 3]);
        assert!(ranked.iter().all(|p| p.power_score == 0.0));
        assert!(ranked.iter().all(|p| p.points_per_game == 0.0));
    }

    #[test]
    fn test_points_per_game_respects_week() {
        assert_eq!(points_per_game(&[100.0, 50.0, 0.0], 2), 75.0);
        assert_eq!(points_per_game(&[100.0, 50.0], 10), 75.0);
        assert_eq!(points_per_game(&[], 3), 0.0);
    }

    #[test]
    fn test_oversized_weight_is_clamped() {
        let teams = vec![team(1, &[100.0]), team(2, &[1.0])];
        let dominance = array![0.0, 1.0];
        let config = RankingSettings {
            points_tiebreak_weight: 5.0,
        };

        let ranked = power_points(&dominance, &teams, 1, &config).unwrap();

        assert_eq!(order(&ranked), vec![2, 1]);
    }

    #[test]
    fn test_dominance_count_must_match_teams() {
        let teams = vec![team(1, &[100.0]), team(2, &[90.0]), team(3, &[80.0])];
        let dominance = array![2.0, 1.0];

        let err = power_points(&dominance, &teams, 1, &RankingSettings::default()).unwrap_err();

        assert_eq!(
            err,
            RankingError::DominanceCountMismatch {
                dominance: 2,
                teams: 3,
            }
        );
    }
}
