pub mod formatter;

pub use formatter::{format_matchups, format_rankings, format_teams, should_use_colors};
