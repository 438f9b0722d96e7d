//! Prompt builders for an external summary-text generator.
//!
//! The engine's only involvement with text generation is producing these
//! prompt strings from the flattened key→value view of a result; calling
//! whatever model sits behind them (and consuming its output) is entirely
//! the caller's business.

use std::collections::HashMap;

use crate::stats::batting::BattingSummary;
use crate::stats::bowling::EconomyLeader;
use crate::stats::team::{OpponentRecord, SeasonTeamRow, TeamHeadToHead};
use crate::table::{Tabular, Value};

/// Prompt describing one player's batting summary, field for field.
/// Sentinel values render as "NA", never as a number.
pub fn player_batting_prompt(summary: &BattingSummary) -> String {
    let fields: HashMap<String, Value> = summary.fields().into_iter().collect();
    let get = |key: &str| fields.get(key).map(Value::to_string).unwrap_or_default();
    format!(
        "Summarize the batting performance of {} from {} to {}:\n\
         - Matches: {}\n\
         - Runs: {}\n\
         - Average: {}\n\
         - Strike Rate: {}\n\
         - 50s: {}\n\
         - 100s: {}\n\
         - 4s: {}\n\
         - 6s: {}\n\
         Write a short 3-4 line paragraph summarizing the player's performance.",
        get("Player"),
        get("From"),
        get("To"),
        get("Matches"),
        get("Runs"),
        get("Average"),
        get("Strike Rate"),
        get("50s"),
        get("100s"),
        get("4s"),
        get("6s"),
    )
}

pub fn top_batters_prompt(season: &str, n: usize) -> String {
    format!(
        "Summarize the top {n} run scorers of season {season}. \
         Highlight their performance and key stats."
    )
}

pub fn batter_growth_prompt(player: &str) -> String {
    format!(
        "Summarize the performance growth of {player} across seasons \
         based on runs scored."
    )
}

pub fn bowler_prompt(bowler: &str, from: u16, to: u16) -> String {
    format!(
        "Summarize the bowling performance of {bowler} from {from} to {to}. \
         Include wickets, economy, strike rate, and match count."
    )
}

pub fn bowler_comparison_prompt(bowler1: &str, bowler2: &str, from: u16, to: u16) -> String {
    format!(
        "Compare the bowling performance of {bowler1} and {bowler2} from \
         {from} to {to}. Mention who performed better in wickets, economy, matches."
    )
}

pub fn best_economy_prompt(leader: &EconomyLeader, team: &str) -> String {
    format!(
        "{} has the best economy rate ({:.2}) for {team}. Summarize their \
         performance and effectiveness in limiting runs.",
        leader.bowler, leader.economy
    )
}

pub fn team_head_to_head_prompt(h2h: &TeamHeadToHead) -> String {
    format!(
        "Summarize the head-to-head record between {} and {}. \
         Total matches: {}. Highlight which team dominated overall and in recent years.",
        h2h.team1, h2h.team2, h2h.total_matches
    )
}

pub fn team_seasons_prompt(team: &str, rows: &[SeasonTeamRow]) -> String {
    let wins: u32 = rows.iter().map(|r| r.won).sum();
    let seasons: Vec<String> = rows.iter().map(|r| r.season.to_string()).collect();
    format!(
        "Summarize the season-wise performance of {team} across years [{}]. \
         Total wins: {wins}. Highlight performance trends.",
        seasons.join(", ")
    )
}

pub fn team_record_prompt(team: &str, opponents: &[OpponentRecord]) -> String {
    let names: Vec<&str> = opponents
        .iter()
        .take(5)
        .map(|o| o.opponent.as_str())
        .collect();
    format!(
        "Summarize the record of {team} against opponents like {}. \
         Highlight major wins, struggles, and any trends.",
        names.join(", ")
    )
}
