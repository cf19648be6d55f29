use std::collections::HashMap;
use log::debug;
use ndarray::{Array2, ArrayView1};

use super::types::{TeamId, TeamResults};
use crate::errors::RankingError;

/// Head-to-head win counts. Cell `[i, j]` is how many times team `i` beat team `j`.
#[derive(Debug, Clone)]
pub struct WinMatrix {
    team_ids: Vec<TeamId>,
    team_to_idx: HashMap<TeamId, usize>,
    wins: Array2<f64>,
}

impl WinMatrix {
    /// Team ids in row order
    pub fn team_ids(&self) -> &[TeamId] {
        &self.team_ids
    }

    pub fn wins(&self) -> &Array2<f64> {
        &self.wins
    }

    pub fn len(&self) -> usize {
        self.team_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_ids.is_empty()
    }

    pub fn row(&self, team_id: TeamId) -> Option<ArrayView1<'_, f64>> {
        let idx = *self.team_to_idx.get(&team_id)?;
        Some(self.wins.row(idx))
    }

    pub fn wins_against(&self, winner: TeamId, loser: TeamId) -> f64 {
        match (self.team_to_idx.get(&winner), self.team_to_idx.get(&loser)) {
            (Some(&i), Some(&j)) => self.wins[[i, j]],
            _ => 0.0,
        }
    }
}

/// Builds the win matrix from already-truncated per-team results.
///
/// Rows follow the order of `results`. Only strictly positive margins count as
/// wins; byes and opponents outside `results` add nothing.
pub fn build_win_matrix(results: &[TeamResults]) -> Result<WinMatrix, RankingError> {
    check_lengths(results)?;

    let team_ids: Vec<TeamId> = results.iter().map(|r| r.team_id).collect();
    let team_to_idx: HashMap<TeamId, usize> = team_ids
        .iter()
        .enumerate()
        .map(|(idx, &id)| (id, idx))
        .collect();

    let n_teams = team_ids.len();
    let mut wins = Array2::<f64>::zeros((n_teams, n_teams));

    for (i, team) in results.iter().enumerate() {
        for (&mov, opponent) in team.mov.iter().zip(team.opponents) {
            if mov <= 0.0 {
                continue;
            }
            let Some(j) = opponent.and_then(|id| team_to_idx.get(&id).copied()) else {
                continue;
            };
            wins[[i, j]] += 1.0;
        }
    }

    debug!("Built {}x{} win matrix", n_teams, n_teams);

    Ok(WinMatrix {
        team_ids,
        team_to_idx,
        wins,
    })
}

fn check_lengths(results: &[TeamResults]) -> Result<(), RankingError> {
    for team in results {
        if team.mov.len() != team.opponents.len() {
            return Err(RankingError::LengthMismatch {
                team_id: team.team_id,
                scores: team.mov.len(),
                opponents: team.opponents.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results<'a>(
        team_id: TeamId,
        mov: &'a [f64],
        opponents: &'a [Option<TeamId>],
    ) -> TeamResults<'a> {
        TeamResults {
            team_id,
            mov,
            opponents,
            scores: &[],
        }
    }

    #[test]
    fn test_counts_only_positive_margins() {
        let teams = vec![
            results(1, &[10.0, 0.0, -3.0], &[Some(2), Some(2), Some(2)]),
            results(2, &[-10.0, 0.0, 3.0], &[Some(1), Some(1), Some(1)]),
        ];

        let matrix = build_win_matrix(&teams).unwrap();

        assert_eq!(matrix.wins_against(1, 2), 1.0);
        assert_eq!(matrix.wins_against(2, 1), 1.0);
        assert_eq!(matrix.wins_against(1, 1), 0.0);
    }

    #[test]
    fn test_repeated_wins_accumulate() {
        let teams = vec![
            results(4, &[5.0, 7.5], &[Some(9), Some(9)]),
            results(9, &[-5.0, -7.5], &[Some(4), Some(4)]),
        ];

        let matrix = build_win_matrix(&teams).unwrap();

        assert_eq!(matrix.row(4).unwrap().to_vec(), vec![0.0, 2.0]);
        assert_eq!(matrix.row(9).unwrap().to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_matrix_sized_to_actual_teams() {
        let teams = vec![
            results(3, &[], &[]),
            results(17, &[], &[]),
            results(30, &[], &[]),
        ];

        let matrix = build_win_matrix(&teams).unwrap();

        assert_eq!(matrix.wins().dim(), (3, 3));
        assert_eq!(matrix.team_ids(), &[3, 17, 30]);
    }

    #[test]
    fn test_byes_and_unknown_opponents_contribute_nothing() {
        let teams = vec![
            results(1, &[12.0, 8.0], &[None, Some(99)]),
            results(2, &[0.0, 0.0], &[None, None]),
        ];

        let matrix = build_win_matrix(&teams).unwrap();

        assert!(matrix.wins().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let teams = vec![results(1, &[1.0, 2.0], &[Some(2)])];

        let err = build_win_matrix(&teams).unwrap_err();

        assert_eq!(
            err,
            RankingError::LengthMismatch {
                team_id: 1,
                scores: 2,
                opponents: 1,
            }
        );
    }
}
