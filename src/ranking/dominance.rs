use ndarray::{Array1, Array2, Axis};

use super::win_matrix::WinMatrix;

/// Direct wins plus the direct wins of every beaten team, weighted by how many
/// times it was beaten. Parallel to `matrix.team_ids()`.
pub fn two_step_dominance(matrix: &WinMatrix) -> Array1<f64> {
    dominance_from_wins(matrix.wins())
}

pub fn dominance_from_wins(wins: &Array2<f64>) -> Array1<f64> {
    let direct = direct_scores(wins);
    let indirect = wins.dot(&direct);
    direct + indirect
}

/// Row sums: total wins per team
pub fn direct_scores(wins: &Array2<f64>) -> Array1<f64> {
    wins.sum_axis(Axis(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_empty_matrix_has_no_dominance() {
        let wins = Array2::<f64>::zeros((5, 5));

        let dominance = dominance_from_wins(&wins);

        assert_eq!(dominance.len(), 5);
        assert!(dominance.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_two_teams_one_sided() {
        // A beat B in each of three weeks
        let wins = array![[0.0, 3.0], [0.0, 0.0]];

        let direct = direct_scores(&wins);

        assert!(direct[0] > 0.0);
        assert_eq!(direct[1], 0.0);
    }

    #[test]
    fn test_chain_counts_victims_wins() {
        // A beats B, B beats C
        let wins = array![
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
        ];

        let dominance = dominance_from_wins(&wins);

        assert_eq!(dominance.to_vec(), vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_indirect_wins_weighted_by_meetings() {
        // A beat B twice; B beat C three times
        let wins = array![
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 3.0],
            [0.0, 0.0, 0.0],
        ];

        let dominance = dominance_from_wins(&wins);

        assert_eq!(dominance[0], 2.0 + 2.0 * 3.0);
        assert_eq!(dominance[1], 3.0);
    }
}
