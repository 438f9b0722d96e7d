//! Read-only input tables.
//!
//! Both tables are built once per analysis session (by [`loader`] or directly
//! from rows) and are never mutated by the engine; every query borrows them
//! and produces fresh derived records.

pub mod loader;
pub mod models;

use crate::error::StatsError;
pub use models::{DeliveryEvent, MatchRecord};

/// Case/whitespace-normalized form of a name, for team-name comparisons.
pub(crate) fn canon(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The delivery-level event table: one row per ball bowled.
#[derive(Debug, Clone, Default)]
pub struct DeliveryTable {
    rows: Vec<DeliveryEvent>,
}

impl DeliveryTable {
    pub fn new(rows: Vec<DeliveryEvent>) -> Self {
        DeliveryTable { rows }
    }

    pub fn rows(&self) -> &[DeliveryEvent] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Observed (min, max) season across all rows.
    pub fn season_bounds(&self) -> Result<(u16, u16), StatsError> {
        season_bounds(self.rows.iter().map(|r| r.season), "delivery")
    }

    /// Distinct seasons, ascending.
    pub fn seasons(&self) -> Vec<u16> {
        distinct_sorted(self.rows.iter().map(|r| r.season))
    }

    pub fn has_season(&self, season: u16) -> bool {
        self.rows.iter().any(|r| r.season == season)
    }

    /// Exact-match lookup against the `batter` column.
    pub fn has_batter(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.batter == name)
    }

    /// Exact-match lookup against the `bowler` column.
    pub fn has_bowler(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.bowler == name)
    }

    /// Exact-match lookup against the `bowling_team` column.
    pub fn has_bowling_team(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.bowling_team == name)
    }

    /// Exact-match lookup against the `batting_team` column.
    pub fn has_batting_team(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.batting_team == name)
    }
}

/// The match-level table: one row per match.
#[derive(Debug, Clone, Default)]
pub struct MatchTable {
    rows: Vec<MatchRecord>,
}

impl MatchTable {
    pub fn new(rows: Vec<MatchRecord>) -> Self {
        MatchTable { rows }
    }

    pub fn rows(&self) -> &[MatchRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Observed (min, max) season across all rows.
    pub fn season_bounds(&self) -> Result<(u16, u16), StatsError> {
        season_bounds(self.rows.iter().map(|r| r.season), "match")
    }

    /// Distinct seasons, ascending.
    pub fn seasons(&self) -> Vec<u16> {
        distinct_sorted(self.rows.iter().map(|r| r.season))
    }

    /// Whether the (normalized) team name appears as either side of any match.
    pub fn has_team(&self, name: &str) -> bool {
        let name = canon(name);
        self.rows
            .iter()
            .any(|m| canon(&m.team1) == name || canon(&m.team2) == name)
    }

    /// Whether any record carries a match-type value (i.e. finals can be
    /// distinguished from league games).
    pub fn has_match_type(&self) -> bool {
        self.rows.iter().any(|m| m.match_type.is_some())
    }
}

fn season_bounds(
    seasons: impl Iterator<Item = u16>,
    table: &'static str,
) -> Result<(u16, u16), StatsError> {
    let mut bounds: Option<(u16, u16)> = None;
    for s in seasons {
        bounds = Some(match bounds {
            None => (s, s),
            Some((min, max)) => (min.min(s), max.max(s)),
        });
    }
    bounds.ok_or(StatsError::NoData { table })
}

fn distinct_sorted(seasons: impl Iterator<Item = u16>) -> Vec<u16> {
    let mut out: Vec<u16> = seasons.collect();
    out.sort_unstable();
    out.dedup();
    out
}
