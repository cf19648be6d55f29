pub mod league;
mod matchup;
pub mod models;
mod team;

pub use league::League;
pub use matchup::{Matchup, SimGame};
pub use models::*;
pub use team::Team;
