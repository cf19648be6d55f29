pub mod dominance;
pub mod power_points;
pub mod types;
pub mod win_matrix;

pub use dominance::two_step_dominance;
pub use power_points::{power_points, PowerPoints};
pub use types::{PowerRanking, Score, TeamId, TeamResults};
pub use win_matrix::{build_win_matrix, WinMatrix};
