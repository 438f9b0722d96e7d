//! Team statistics: head-to-head, season form, overall records, win pivots
//! and innings-total leaderboards.
//!
//! Match-table queries normalize team names (case and surrounding
//! whitespace); the innings-total queries on the delivery table are
//! exact-match. The asymmetry is deliberate — unifying it would silently
//! change result sets.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::data::{canon, DeliveryEvent, DeliveryTable, MatchRecord, MatchTable};
use crate::error::{Entity, StatsError};
use crate::table::{Table, Tabular, Value};

use super::{round2, title_case, SeasonRange};

/// Marker for a titles count the source data cannot provide.
pub const TITLES_UNAVAILABLE: &str = "Data Not Available";

/// Head-to-head record between two teams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamHeadToHead {
    /// Title-cased display name of the first team.
    pub team1: String,
    pub team2: String,
    pub total_matches: u32,
    pub team1_wins: u32,
    pub team2_wins: u32,
    /// Matches with no winner recorded.
    pub ties: u32,
    pub team1_toss_wins: u32,
    pub team2_toss_wins: u32,
}

impl Tabular for TeamHeadToHead {
    fn columns(&self) -> Vec<String> {
        vec![
            "Total Matches".into(),
            format!("{} Wins", self.team1),
            format!("{} Wins", self.team2),
            "Ties/No Results".into(),
            format!("{} Toss Wins", self.team1),
            format!("{} Toss Wins", self.team2),
        ]
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.total_matches.into(),
            self.team1_wins.into(),
            self.team2_wins.into(),
            self.ties.into(),
            self.team1_toss_wins.into(),
            self.team2_toss_wins.into(),
        ]
    }
}

/// One season of a team's results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonTeamRow {
    pub season: u16,
    pub played: u32,
    pub won: u32,
    pub win_pct: f64,
}

impl Tabular for SeasonTeamRow {
    fn columns(&self) -> Vec<String> {
        ["Season", "Matches Played", "Matches Won", "win %"]
            .map(String::from)
            .to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.season.into(),
            self.played.into(),
            self.won.into(),
            self.win_pct.into(),
        ]
    }
}

/// A team's overall record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRecord {
    pub team: String,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_pct: f64,
    /// Finals won; `None` when the data has no match-type column, rendered
    /// as the explicit [`TITLES_UNAVAILABLE`] marker (never zero).
    pub titles: Option<u32>,
}

impl Tabular for TeamRecord {
    fn columns(&self) -> Vec<String> {
        ["Team", "Matches Played", "Wins", "Losses", "Draws", "Win %", "Titles Won"]
            .map(String::from)
            .to_vec()
    }

    fn row(&self) -> Vec<Value> {
        let titles = match self.titles {
            Some(n) => n.into(),
            None => TITLES_UNAVAILABLE.into(),
        };
        vec![
            self.team.as_str().into(),
            self.matches.into(),
            self.wins.into(),
            self.losses.into(),
            self.draws.into(),
            self.win_pct.into(),
            titles,
        ]
    }
}

/// A team's record against one opponent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpponentRecord {
    pub team: String,
    pub opponent: String,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_pct: f64,
}

impl Tabular for OpponentRecord {
    fn columns(&self) -> Vec<String> {
        ["Team", "opponent", "Matches", "Wins", "Losses", "Draws", "Win %"]
            .map(String::from)
            .to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.team.as_str().into(),
            self.opponent.as_str().into(),
            self.matches.into(),
            self.wins.into(),
            self.losses.into(),
            self.draws.into(),
            self.win_pct.into(),
        ]
    }
}

/// Season × team grid of win counts; cells without wins hold 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinPivot {
    /// Ascending.
    pub seasons: Vec<u16>,
    /// Alphabetical.
    pub teams: Vec<String>,
    /// `wins[team_index][season_index]`
    pub wins: Vec<Vec<u32>>,
}

impl WinPivot {
    /// Render as a table with one row per team and one column per season.
    pub fn to_table(&self) -> Table {
        let mut columns = vec!["winner".to_string()];
        columns.extend(self.seasons.iter().map(|s| s.to_string()));
        let mut table = Table::new(columns);
        for (team, row) in self.teams.iter().zip(&self.wins) {
            let mut cells: Vec<Value> = vec![team.as_str().into()];
            cells.extend(row.iter().map(|w| Value::from(*w)));
            table.push_row(cells);
        }
        table
    }
}

/// One innings total, as ranked by [`highest_scores`] / [`highest_chases`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InningsTotal {
    pub match_id: u32,
    pub season: u16,
    pub venue: String,
    pub against: String,
    pub score: u32,
}

impl Tabular for InningsTotal {
    fn columns(&self) -> Vec<String> {
        ["match_id", "season", "venue", "Against", "score"]
            .map(String::from)
            .to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.match_id.into(),
            self.season.into(),
            self.venue.as_str().into(),
            self.against.as_str().into(),
            self.score.into(),
        ]
    }
}

/// Head-to-head between two teams over an optional season window.
///
/// Team order does not matter; names are matched normalized. Fails when the
/// pair has no matches inside the window.
pub fn head_to_head(
    table: &MatchTable,
    team1: &str,
    team2: &str,
    start: Option<u16>,
    end: Option<u16>,
) -> Result<TeamHeadToHead, StatsError> {
    let range = SeasonRange::resolve(table.season_bounds()?, start, end)?;
    let t1 = canon(team1);
    let t2 = canon(team2);

    let rows: Vec<&MatchRecord> = table
        .rows()
        .iter()
        .filter(|m| {
            range.contains(m.season) && {
                let a = canon(&m.team1);
                let b = canon(&m.team2);
                (a == t1 && b == t2) || (a == t2 && b == t1)
            }
        })
        .collect();
    if rows.is_empty() {
        return Err(StatsError::NoMatchesBetween {
            team1: t1,
            team2: t2,
        });
    }

    let wins = |team: &str| {
        rows.iter()
            .filter(|m| m.winner.as_deref().map(canon).as_deref() == Some(team))
            .count() as u32
    };
    let tosses = |team: &str| {
        rows.iter()
            .filter(|m| canon(&m.toss_winner) == team)
            .count() as u32
    };

    let total = rows.len() as u32;
    let team1_wins = wins(&t1);
    let team2_wins = wins(&t2);
    Ok(TeamHeadToHead {
        team1: title_case(&t1),
        team2: title_case(&t2),
        total_matches: total,
        team1_wins,
        team2_wins,
        ties: total - (team1_wins + team2_wins),
        team1_toss_wins: tosses(&t1),
        team2_toss_wins: tosses(&t2),
    })
}

/// Matches played, won and win percentage per season for one team.
/// Seasons the team sat out are absent from the result.
pub fn season_performance(
    table: &MatchTable,
    team: &str,
) -> Result<Vec<SeasonTeamRow>, StatsError> {
    if !table.has_team(team) {
        return Err(StatsError::not_found(Entity::Team, team));
    }
    let c = canon(team);

    let mut by_season: BTreeMap<u16, (u32, u32)> = BTreeMap::new();
    for m in table
        .rows()
        .iter()
        .filter(|m| canon(&m.team1) == c || canon(&m.team2) == c)
    {
        let entry = by_season.entry(m.season).or_insert((0, 0));
        entry.0 += 1;
        if m.winner.as_deref().map(canon).as_deref() == Some(c.as_str()) {
            entry.1 += 1;
        }
    }

    Ok(by_season
        .into_iter()
        .map(|(season, (played, won))| SeasonTeamRow {
            season,
            played,
            won,
            win_pct: round2(won as f64 / played as f64 * 100.0),
        })
        .collect())
}

/// Overall record plus the per-opponent breakdown for one team.
pub fn team_record(
    table: &MatchTable,
    team: &str,
) -> Result<(TeamRecord, Vec<OpponentRecord>), StatsError> {
    if !table.has_team(team) {
        return Err(StatsError::not_found(Entity::Team, team));
    }
    let c = canon(team);

    let participated: Vec<&MatchRecord> = table
        .rows()
        .iter()
        .filter(|m| canon(&m.team1) == c || canon(&m.team2) == c)
        .collect();

    let total = participated.len() as u32;
    let wins = count_winner(&participated, &c);
    let draws = participated.iter().filter(|m| m.winner.is_none()).count() as u32;
    let losses = total - wins - draws;

    let titles = table.has_match_type().then(|| {
        participated
            .iter()
            .filter(|m| {
                m.winner.as_deref().map(canon).as_deref() == Some(c.as_str())
                    && m.match_type.as_deref().map(canon).as_deref() == Some("final")
            })
            .count() as u32
    });

    let overall = TeamRecord {
        team: title_case(&c),
        matches: total,
        wins,
        losses,
        draws,
        win_pct: round2(wins as f64 / total as f64 * 100.0),
        titles,
    };

    // Opponents in first-appearance order across the team1 column, then team2
    let mut opponents: Vec<String> = Vec::new();
    for name in participated
        .iter()
        .map(|m| canon(&m.team1))
        .chain(participated.iter().map(|m| canon(&m.team2)))
    {
        if name != c && !opponents.contains(&name) {
            opponents.push(name);
        }
    }

    let breakdown = opponents
        .into_iter()
        .map(|opp| {
            let versus: Vec<&MatchRecord> = participated
                .iter()
                .filter(|m| canon(&m.team1) == opp || canon(&m.team2) == opp)
                .copied()
                .collect();
            let matches = versus.len() as u32;
            let wins = count_winner(&versus, &c);
            let losses = count_winner(&versus, &opp);
            let draws = versus.iter().filter(|m| m.winner.is_none()).count() as u32;
            OpponentRecord {
                team: title_case(&c),
                opponent: title_case(&opp),
                matches,
                wins,
                losses,
                draws,
                win_pct: round2(wins as f64 / matches as f64 * 100.0),
            }
        })
        .collect();

    Ok((overall, breakdown))
}

/// Win counts pivoted into a (season × team) grid; matches without a
/// recorded winner are excluded.
pub fn wins_by_season(table: &MatchTable) -> WinPivot {
    let mut counts: HashMap<(u16, String), u32> = HashMap::new();
    for m in table.rows() {
        if let Some(winner) = &m.winner {
            *counts.entry((m.season, winner.clone())).or_insert(0) += 1;
        }
    }

    let seasons = {
        let mut s: Vec<u16> = counts.keys().map(|(season, _)| *season).collect();
        s.sort_unstable();
        s.dedup();
        s
    };
    let teams = {
        let mut t: Vec<String> = counts.keys().map(|(_, team)| team.clone()).collect();
        t.sort();
        t.dedup();
        t
    };

    let wins = teams
        .iter()
        .map(|team| {
            seasons
                .iter()
                .map(|season| {
                    counts
                        .get(&(*season, team.clone()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    WinPivot {
        seasons,
        teams,
        wins,
    }
}

/// Highest innings totals scored by one team (exact name), descending.
pub fn highest_scores(
    table: &DeliveryTable,
    team: &str,
    n: usize,
) -> Result<Vec<InningsTotal>, StatsError> {
    if !table.has_batting_team(team) {
        return Err(StatsError::not_found(Entity::Team, team));
    }
    let rows = table.rows().iter().filter(|d| d.batting_team == team);
    Ok(top_innings(rows, |d| &d.bowling_team, n))
}

/// Highest totals of the opposing side while this team (exact name) was
/// bowling. This is the stand-in for "highest chases": batting order and
/// whether the chase succeeded are not checked.
pub fn highest_chases(
    table: &DeliveryTable,
    team: &str,
    n: usize,
) -> Result<Vec<InningsTotal>, StatsError> {
    if !table.has_bowling_team(team) {
        return Err(StatsError::not_found(Entity::Team, team));
    }
    let rows = table.rows().iter().filter(|d| d.bowling_team == team);
    Ok(top_innings(rows, |d| &d.batting_team, n))
}

fn count_winner(rows: &[&MatchRecord], team: &str) -> u32 {
    rows.iter()
        .filter(|m| m.winner.as_deref().map(canon).as_deref() == Some(team))
        .count() as u32
}

/// Sum `total_runs` per (match, opposing team) innings and rank descending.
fn top_innings<'a>(
    rows: impl Iterator<Item = &'a DeliveryEvent>,
    opponent: impl Fn(&DeliveryEvent) -> &String,
    n: usize,
) -> Vec<InningsTotal> {
    let mut index: HashMap<(u32, String), usize> = HashMap::new();
    let mut innings: Vec<InningsTotal> = Vec::new();
    for d in rows {
        let key = (d.match_id, opponent(d).clone());
        let i = *index.entry(key).or_insert_with(|| {
            innings.push(InningsTotal {
                match_id: d.match_id,
                season: d.season,
                venue: d.venue.clone(),
                against: opponent(d).clone(),
                score: 0,
            });
            innings.len() - 1
        });
        innings[i].score += d.total_runs;
    }
    innings.sort_by(|a, b| b.score.cmp(&a.score));
    innings.truncate(n);
    innings
}

// ── Tests ────────────────────────────────────────────────────────────────────
