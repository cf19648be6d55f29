use serde::Serialize;

pub type TeamId = u32;
pub type Score = f64;

/// One team's results through the evaluated week, index-aligned by week.
///
/// `opponents[w]` is `None` on a bye week.
#[derive(Debug, Clone, Copy)]
pub struct TeamResults<'a> {
    pub team_id: TeamId,
    pub mov: &'a [Score],
    pub opponents: &'a [Option<TeamId>],
    pub scores: &'a [Score],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerRanking {
    pub rank: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub owner: String,
    pub power_score: f64,
    pub dominance: f64,
    pub points_per_game: f64,
}

impl PowerRanking {
    pub fn label(&self) -> String {
        format!("{}. {} ({})", self.rank, self.team_name, self.owner)
    }

    pub fn score_display(&self) -> String {
        format!("{:.2}", self.power_score)
    }
}
