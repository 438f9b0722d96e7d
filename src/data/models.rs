use serde::{Deserialize, Serialize};

/// One delivery: one bowler bowling one ball to one batter, with its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryEvent {
    /// Match this delivery belongs to
    pub match_id: u32,
    /// Season year (split seasons resolve to the later year, e.g. 2007/08 → 2008)
    pub season: u16,
    pub venue: String,
    pub batting_team: String,
    pub bowling_team: String,
    /// Batter name, case-sensitive as stored
    pub batter: String,
    pub bowler: String,
    /// Runs off the bat (0/1/2/3/4/6)
    pub batsman_runs: u32,
    /// Runs off the bat plus extras
    pub total_runs: u32,
    /// Name of the dismissed player, if any
    pub player_dismissed: Option<String>,
}

impl DeliveryEvent {
    /// A wicket fell on this delivery (any dismissal type).
    pub fn is_wicket(&self) -> bool {
        self.player_dismissed.is_some()
    }
}

/// One match: the two competing teams and the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u32,
    pub season: u16,
    pub team1: String,
    pub team2: String,
    /// Winning team; `None` means a tie or no result.
    /// When present it names `team1` or `team2` (case-insensitively).
    pub winner: Option<String>,
    pub toss_winner: String,
    /// e.g. "League" | "Qualifier" | "Final"; `None` when the source data
    /// has no match-type column.
    pub match_type: Option<String>,
}
