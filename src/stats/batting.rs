//! Batting statistics: per-player summaries, growth curves, leaderboards.
//!
//! Batter names are exact-match against the `batter` column (team-name
//! queries elsewhere normalize case/whitespace; batter queries deliberately
//! do not — see the team module).

use std::collections::HashMap;

use serde::Serialize;

use crate::data::{DeliveryEvent, DeliveryTable};
use crate::error::{Entity, StatsError};
use crate::table::{Tabular, Value};

use super::{round2, SeasonRange};

/// Minimum balls faced to qualify for the strike-rate leaderboard.
pub const DEFAULT_MIN_BALLS: u32 = 100;

/// Career (or windowed) batting summary for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingSummary {
    pub player: String,
    pub matches: u32,
    pub runs: u32,
    pub balls: u32,
    pub outs: u32,
    /// Runs per dismissal; `None` is the NA sentinel (never dismissed).
    pub average: Option<f64>,
    /// Runs per 100 balls; 0 when no balls were faced.
    pub strike_rate: f64,
    pub fifties: u32,
    pub hundreds: u32,
    pub fours: u32,
    pub sixes: u32,
    pub from: u16,
    pub to: u16,
}

impl Tabular for BattingSummary {
    fn columns(&self) -> Vec<String> {
        ["Player", "Matches", "Runs", "Average", "Strike Rate", "50s", "100s", "From", "To", "6s", "4s"]
            .map(String::from)
            .to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.player.as_str().into(),
            self.matches.into(),
            self.runs.into(),
            self.average.into(),
            self.strike_rate.into(),
            self.fifties.into(),
            self.hundreds.into(),
            self.from.into(),
            self.to.into(),
            self.sixes.into(),
            self.fours.into(),
        ]
    }
}

/// One season of a player's career, as emitted by [`season_growth`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonBattingRow {
    pub player: String,
    pub season: u16,
    pub runs: u32,
    pub matches: u32,
    pub average: Option<f64>,
    pub strike_rate: f64,
    pub fifties: u32,
    pub hundreds: u32,
    /// Career-wide, not season-scoped — a long-standing quirk of this
    /// report, kept for output compatibility.
    pub fours: u32,
    /// Career-wide, see `fours`.
    pub sixes: u32,
}

impl Tabular for SeasonBattingRow {
    fn columns(&self) -> Vec<String> {
        ["player", "Season", "Runs", "Matches", "Average", "Strike Rate", "50s", "100s", "4s", "6s"]
            .map(String::from)
            .to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.player.as_str().into(),
            self.season.into(),
            self.runs.into(),
            self.matches.into(),
            self.average.into(),
            self.strike_rate.into(),
            self.fifties.into(),
            self.hundreds.into(),
            self.fours.into(),
            self.sixes.into(),
        ]
    }
}

/// One leaderboard entry of [`top_batters`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatterRuns {
    pub batter: String,
    pub runs: u32,
}

impl Tabular for BatterRuns {
    fn columns(&self) -> Vec<String> {
        ["batter", "batsman_runs"].map(String::from).to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![self.batter.as_str().into(), self.runs.into()]
    }
}

/// A [`top_batters_all_seasons`] entry, tagged with its season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonTopBatter {
    pub batter: String,
    pub runs: u32,
    pub season: u16,
}

impl Tabular for SeasonTopBatter {
    fn columns(&self) -> Vec<String> {
        ["batter", "batsman_runs", "season"].map(String::from).to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![self.batter.as_str().into(), self.runs.into(), self.season.into()]
    }
}

/// League-wide run-scorer entry, with the renamed output fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunScorer {
    pub player: String,
    pub player_runs: u32,
}

impl Tabular for RunScorer {
    fn columns(&self) -> Vec<String> {
        ["player", "player_runs"].map(String::from).to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![self.player.as_str().into(), self.player_runs.into()]
    }
}

/// A player's record against one bowling side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerVsTeam {
    pub player: String,
    pub team: String,
    /// `None` means all seasons.
    pub season: Option<u16>,
    pub runs: u32,
    pub balls: u32,
    pub dismissals: u32,
    pub strike_rate: f64,
    pub fours: u32,
    pub sixes: u32,
}

impl Tabular for PlayerVsTeam {
    fn columns(&self) -> Vec<String> {
        ["Player", "Against Team", "Season", "Total Runs", "Balls Faced", "Dismissals", "Strike Rate", "Fours", "Sixes"]
            .map(String::from)
            .to_vec()
    }

    fn row(&self) -> Vec<Value> {
        let season = match self.season {
            Some(s) => s.into(),
            None => "all".into(),
        };
        vec![
            self.player.as_str().into(),
            self.team.as_str().into(),
            season,
            self.runs.into(),
            self.balls.into(),
            self.dismissals.into(),
            self.strike_rate.into(),
            self.fours.into(),
            self.sixes.into(),
        ]
    }
}

/// Strike-rate leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrikeRateRow {
    pub batter: String,
    pub runs: u32,
    pub balls: u32,
    pub strike_rate: f64,
}

impl Tabular for StrikeRateRow {
    fn columns(&self) -> Vec<String> {
        ["batter", "Runs", "Balls Faced", "Strike Rate"].map(String::from).to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.batter.as_str().into(),
            self.runs.into(),
            self.balls.into(),
            self.strike_rate.into(),
        ]
    }
}

/// Boundary-count leaderboard entry ([`most_sixes`] / [`most_fours`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryCount {
    pub batter: String,
    pub count: u32,
    label: &'static str,
}

impl Tabular for BoundaryCount {
    fn columns(&self) -> Vec<String> {
        vec!["batter".into(), self.label.into()]
    }

    fn row(&self) -> Vec<Value> {
        vec![self.batter.as_str().into(), self.count.into()]
    }
}

/// Batting summary for one player over an optional season window.
///
/// Fails with `NotFound` only when the batter has zero rows in the *full*
/// table; a batter who simply has no rows inside the window yields
/// `Ok(None)`.
pub fn player_summary(
    table: &DeliveryTable,
    player: &str,
    start: Option<u16>,
    end: Option<u16>,
) -> Result<Option<BattingSummary>, StatsError> {
    let range = SeasonRange::resolve(table.season_bounds()?, start, end)?;
    if !table.has_batter(player) {
        return Err(StatsError::not_found(Entity::Player, player));
    }

    let rows: Vec<&DeliveryEvent> = table
        .rows()
        .iter()
        .filter(|d| range.contains(d.season) && d.batter == player)
        .collect();
    if rows.is_empty() {
        return Ok(None);
    }

    let agg = aggregate(&rows, player);
    Ok(Some(BattingSummary {
        player: player.to_string(),
        matches: agg.matches,
        runs: agg.runs,
        balls: agg.balls,
        outs: agg.outs,
        average: average(agg.runs, agg.outs),
        strike_rate: strike_rate(agg.runs, agg.balls),
        fifties: agg.fifties,
        hundreds: agg.hundreds,
        fours: agg.fours,
        sixes: agg.sixes,
        from: range.start,
        to: range.end,
    }))
}

/// Top `n` run scorers of one season, descending, ties in stable original
/// order. Fails with `NotFound` when the season has no rows at all.
pub fn top_batters(
    table: &DeliveryTable,
    season: u16,
    n: usize,
) -> Result<Vec<BatterRuns>, StatsError> {
    if !table.has_season(season) {
        return Err(StatsError::not_found(Entity::Season, season.to_string()));
    }
    let mut totals: Vec<(String, u32)> = fold_batters(
        table.rows().iter().filter(|d| d.season == season),
        |sum: &mut u32, d| *sum += d.batsman_runs,
    );
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(totals
        .into_iter()
        .take(n)
        .map(|(batter, runs)| BatterRuns { batter, runs })
        .collect())
}

/// Top `n` run scorers of every season, concatenated in season order.
pub fn top_batters_all_seasons(table: &DeliveryTable, n: usize) -> Vec<SeasonTopBatter> {
    let mut out = Vec::new();
    for season in table.seasons() {
        // The season came from the table, so the per-season query cannot fail
        if let Ok(rows) = top_batters(table, season, n) {
            out.extend(rows.into_iter().map(|r| SeasonTopBatter {
                batter: r.batter,
                runs: r.runs,
                season,
            }));
        }
    }
    out
}

/// Season-by-season career curve for one player.
///
/// Emits one row for every season in the table, including seasons the player
/// sat out entirely (runs 0, average NA, strike rate 0).
pub fn season_growth(
    table: &DeliveryTable,
    player: &str,
) -> Result<Vec<SeasonBattingRow>, StatsError> {
    if !table.has_batter(player) {
        return Err(StatsError::not_found(Entity::Player, player));
    }

    let player_rows: Vec<&DeliveryEvent> =
        table.rows().iter().filter(|d| d.batter == player).collect();
    // Boundary counts stay career-wide in every row
    let career_fours = player_rows.iter().filter(|d| d.batsman_runs == 4).count() as u32;
    let career_sixes = player_rows.iter().filter(|d| d.batsman_runs == 6).count() as u32;

    let mut out = Vec::new();
    for season in table.seasons() {
        let rows: Vec<&DeliveryEvent> = player_rows
            .iter()
            .copied()
            .filter(|d| d.season == season)
            .collect();
        let agg = aggregate(&rows, player);
        out.push(SeasonBattingRow {
            player: player.to_string(),
            season,
            runs: agg.runs,
            matches: agg.matches,
            average: average(agg.runs, agg.outs),
            strike_rate: strike_rate(agg.runs, agg.balls),
            fifties: agg.fifties,
            hundreds: agg.hundreds,
            fours: career_fours,
            sixes: career_sixes,
        });
    }
    Ok(out)
}

/// League-wide top run scorers across all seasons.
pub fn most_runs(table: &DeliveryTable, n: usize) -> Vec<RunScorer> {
    let mut totals: Vec<(String, u32)> =
        fold_batters(table.rows().iter(), |sum: &mut u32, d| {
            *sum += d.batsman_runs
        });
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
        .into_iter()
        .take(n)
        .map(|(player, player_runs)| RunScorer {
            player,
            player_runs,
        })
        .collect()
}

/// A player's record against one bowling side, optionally in one season.
///
/// Player, team and (explicit) season must all exist somewhere in the table;
/// an empty narrowed filter is a no-data result, not an error.
pub fn player_vs_team(
    table: &DeliveryTable,
    player: &str,
    team: &str,
    season: Option<u16>,
) -> Result<Option<PlayerVsTeam>, StatsError> {
    if !table.has_batter(player) {
        return Err(StatsError::not_found(Entity::Player, player));
    }
    if !table.has_bowling_team(team) {
        return Err(StatsError::not_found(Entity::Team, team));
    }
    if let Some(s) = season {
        if !table.has_season(s) {
            return Err(StatsError::not_found(Entity::Season, s.to_string()));
        }
    }

    let rows: Vec<&DeliveryEvent> = table
        .rows()
        .iter()
        .filter(|d| {
            d.batter == player
                && d.bowling_team == team
                && season.map_or(true, |s| d.season == s)
        })
        .collect();
    if rows.is_empty() {
        return Ok(None);
    }

    let agg = aggregate(&rows, player);
    Ok(Some(PlayerVsTeam {
        player: player.to_string(),
        team: team.to_string(),
        season,
        runs: agg.runs,
        balls: agg.balls,
        dismissals: agg.outs,
        strike_rate: strike_rate(agg.runs, agg.balls),
        fours: agg.fours,
        sixes: agg.sixes,
    }))
}

/// Independent summaries for two players over the same optional window.
/// Ranges are not intersected: both default to the full table bounds.
pub fn player_head_to_head(
    table: &DeliveryTable,
    player1: &str,
    player2: &str,
    start: Option<u16>,
    end: Option<u16>,
) -> Result<(Option<BattingSummary>, Option<BattingSummary>), StatsError> {
    let first = player_summary(table, player1, start, end)?;
    let second = player_summary(table, player2, start, end)?;
    Ok((first, second))
}

/// Strike-rate leaderboard over batters with at least `min_balls` balls
/// faced, descending.
pub fn strike_rate_leaders(table: &DeliveryTable, n: usize, min_balls: u32) -> Vec<StrikeRateRow> {
    let totals: Vec<(String, (u32, u32))> =
        fold_batters(table.rows().iter(), |(runs, balls): &mut (u32, u32), d| {
            *runs += d.batsman_runs;
            *balls += 1;
        });
    let mut rows: Vec<StrikeRateRow> = totals
        .into_iter()
        .filter(|(_, (_, balls))| *balls >= min_balls)
        .map(|(batter, (runs, balls))| StrikeRateRow {
            batter,
            runs,
            balls,
            strike_rate: strike_rate(runs, balls),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.strike_rate
            .partial_cmp(&a.strike_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows.truncate(n);
    rows
}

/// Most sixes hit, descending.
pub fn most_sixes(table: &DeliveryTable, n: usize) -> Vec<BoundaryCount> {
    most_boundaries(table, 6, "sixes", n)
}

/// Most fours hit, descending.
pub fn most_fours(table: &DeliveryTable, n: usize) -> Vec<BoundaryCount> {
    most_boundaries(table, 4, "fours", n)
}

fn most_boundaries(
    table: &DeliveryTable,
    boundary: u32,
    label: &'static str,
    n: usize,
) -> Vec<BoundaryCount> {
    let mut counts: Vec<(String, u32)> = fold_batters(
        table.rows().iter().filter(|d| d.batsman_runs == boundary),
        |count: &mut u32, _| *count += 1,
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(n)
        .map(|(batter, count)| BoundaryCount {
            batter,
            count,
            label,
        })
        .collect()
}

// ── Aggregation internals ────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct BattingAgg {
    runs: u32,
    balls: u32,
    outs: u32,
    matches: u32,
    fours: u32,
    sixes: u32,
    fifties: u32,
    hundreds: u32,
}

/// Reduce one player's delivery rows. Dismissals count only when the batter
/// themself was the player given out on their own delivery; milestones come
/// from per-match run totals, never from single deliveries.
fn aggregate(rows: &[&DeliveryEvent], player: &str) -> BattingAgg {
    let mut agg = BattingAgg::default();
    let mut per_match: HashMap<u32, u32> = HashMap::new();
    for d in rows {
        agg.runs += d.batsman_runs;
        agg.balls += 1;
        if d.player_dismissed.as_deref() == Some(player) {
            agg.outs += 1;
        }
        match d.batsman_runs {
            4 => agg.fours += 1,
            6 => agg.sixes += 1,
            _ => {}
        }
        *per_match.entry(d.match_id).or_insert(0) += d.batsman_runs;
    }
    agg.matches = per_match.len() as u32;
    for total in per_match.values() {
        if (50..100).contains(total) {
            agg.fifties += 1;
        } else if *total >= 100 {
            agg.hundreds += 1;
        }
    }
    agg
}

fn average(runs: u32, outs: u32) -> Option<f64> {
    (outs > 0).then(|| round2(runs as f64 / outs as f64))
}

fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls > 0 {
        round2(runs as f64 / balls as f64 * 100.0)
    } else {
        0.0
    }
}

/// Group rows by batter in first-appearance order and fold each group.
/// First-appearance order is what makes descending sorts break ties stably.
fn fold_batters<'a, A: Default>(
    rows: impl Iterator<Item = &'a DeliveryEvent>,
    mut fold: impl FnMut(&mut A, &DeliveryEvent),
) -> Vec<(String, A)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<(String, A)> = Vec::new();
    for d in rows {
        let i = *index.entry(d.batter.clone()).or_insert_with(|| {
            out.push((d.batter.clone(), A::default()));
            out.len() - 1
        });
        fold(&mut out[i].1, d);
    }
    out
}

// ── Tests ────────────────────────────────────────────────────────────────────
