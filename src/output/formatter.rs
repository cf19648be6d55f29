use std::io::IsTerminal;
use colored::Colorize;

use crate::domain::{League, Matchup, Team};
use crate::ranking::PowerRanking;

/// One line per team: "{rank}. {team} ({owner})  {score}"
pub fn format_rankings(rankings: &[PowerRanking], use_colors: bool) -> String {
    if rankings.is_empty() {
        return "No teams in league.".to_string();
    }

    let width = rankings.iter().map(|r| r.label().len()).max().unwrap_or(0);

    rankings
        .iter()
        .map(|r| {
            let label = format!("{:<width$}", r.label());
            let score = format!("{:>8}", r.score_display());
            if use_colors {
                format!("{}  {}", label.bold(), score.green())
            } else {
                format!("{}  {}", label, score)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per team with record, weeks on the schedule and points
pub fn format_teams(teams: &[Team], use_colors: bool) -> String {
    teams
        .iter()
        .map(|t| {
            let record = format!("{}-{} in {} wk", t.wins, t.losses, t.weeks_played());
            let points = format!("PF {:.2} / PA {:.2}", t.points_for, t.points_against);
            if use_colors {
                format!(
                    "{:>3} {} | {} | {} | {}",
                    t.team_id,
                    t.team_name.bold(),
                    t.owner.cyan(),
                    record.yellow(),
                    points
                )
            } else {
                format!(
                    "{:>3} {} | {} | {} | {}",
                    t.team_id, t.team_name, t.owner, record, points
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "{home} {score} - {score} {away}", or "{home} (bye)"
pub fn format_matchups(league: &League, matchups: &[Matchup]) -> String {
    let name = |id| {
        league
            .team(id)
            .map(|t| t.team_name.clone())
            .unwrap_or_else(|| format!("Team {}", id))
    };

    matchups
        .iter()
        .map(|m| match (m.away_team, m.away_score) {
            (Some(away), Some(away_score)) => format!(
                "{} {:.2} - {:.2} {}",
                name(m.home_team),
                m.home_score,
                away_score,
                name(away)
            ),
            _ => format!("{} (bye)", name(m.home_team)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check if stdout is a TTY
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
