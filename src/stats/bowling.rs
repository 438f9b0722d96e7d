//! Bowling statistics: per-bowler records and the team economy leader.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::data::{DeliveryEvent, DeliveryTable};
use crate::error::{Entity, StatsError};
use crate::table::{Tabular, Value};

use super::{round2, SeasonRange};

/// Minimum deliveries bowled to qualify for the team economy leaderboard.
pub const MIN_BALLS_FOR_ECONOMY: u32 = 50;

/// Career (or windowed) bowling record for one bowler.
///
/// Wickets count every dismissal that fell on the bowler's deliveries,
/// including types a bowler is not conventionally credited for (run-outs).
/// That over-credits bowlers slightly; the attribution is kept as-is for
/// output compatibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingSummary {
    pub bowler: String,
    pub matches: u32,
    pub balls: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    /// Runs conceded per wicket; `None` is the NA sentinel (no wickets).
    pub average: Option<f64>,
    /// Runs conceded per six balls; 0 when no balls were bowled.
    pub economy: f64,
    /// Balls per wicket; `None` is the NA sentinel (no wickets).
    pub strike_rate: Option<f64>,
    pub dot_balls: u32,
    pub fours_conceded: u32,
    pub sixes_conceded: u32,
    pub from: u16,
    pub to: u16,
}

impl Tabular for BowlingSummary {
    fn columns(&self) -> Vec<String> {
        ["Bowler", "Matches", "Balls Bowled", "Runs", "Wickets", "Average", "Economy", "Strike Rate", "Dots", "Fours", "Sixes", "From", "To"]
            .map(String::from)
            .to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.bowler.as_str().into(),
            self.matches.into(),
            self.balls.into(),
            self.runs_conceded.into(),
            self.wickets.into(),
            self.average.into(),
            self.economy.into(),
            self.strike_rate.into(),
            self.dot_balls.into(),
            self.fours_conceded.into(),
            self.sixes_conceded.into(),
            self.from.into(),
            self.to.into(),
        ]
    }
}

/// The lowest-economy qualifying bowler of one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomyLeader {
    pub bowler: String,
    pub economy: f64,
    pub balls: u32,
    pub runs_conceded: u32,
}

impl Tabular for EconomyLeader {
    fn columns(&self) -> Vec<String> {
        ["Bowler", "Economy", "Balls Bowled", "Runs"].map(String::from).to_vec()
    }

    fn row(&self) -> Vec<Value> {
        vec![
            self.bowler.as_str().into(),
            self.economy.into(),
            self.balls.into(),
            self.runs_conceded.into(),
        ]
    }
}

/// Bowling record for one bowler over an optional season window.
///
/// Fails with `NotFound` when the bowler has zero rows in the full table.
/// A window the bowler sat out entirely yields a zeroed record (average and
/// strike rate NA), not an error.
pub fn bowler_record(
    table: &DeliveryTable,
    bowler: &str,
    start: Option<u16>,
    end: Option<u16>,
) -> Result<BowlingSummary, StatsError> {
    let range = SeasonRange::resolve(table.season_bounds()?, start, end)?;
    if !table.has_bowler(bowler) {
        return Err(StatsError::not_found(Entity::Bowler, bowler));
    }

    let mut balls = 0u32;
    let mut runs = 0u32;
    let mut wickets = 0u32;
    let mut dots = 0u32;
    let mut fours = 0u32;
    let mut sixes = 0u32;
    let mut matches: HashSet<u32> = HashSet::new();
    for d in table
        .rows()
        .iter()
        .filter(|d| d.bowler == bowler && range.contains(d.season))
    {
        balls += 1;
        runs += d.total_runs;
        if d.is_wicket() {
            wickets += 1;
        }
        if d.total_runs == 0 {
            dots += 1;
        }
        match d.batsman_runs {
            4 => fours += 1,
            6 => sixes += 1,
            _ => {}
        }
        matches.insert(d.match_id);
    }

    let average = (wickets > 0).then(|| round2(runs as f64 / wickets as f64));
    let economy = if balls > 0 {
        round2(runs as f64 / balls as f64 * 6.0)
    } else {
        0.0
    };
    let strike_rate = (wickets > 0).then(|| round2(balls as f64 / wickets as f64));

    Ok(BowlingSummary {
        bowler: bowler.to_string(),
        matches: matches.len() as u32,
        balls,
        runs_conceded: runs,
        wickets,
        average,
        economy,
        strike_rate,
        dot_balls: dots,
        fours_conceded: fours,
        sixes_conceded: sixes,
        from: range.start,
        to: range.end,
    })
}

/// Independent records for two bowlers over the same window.
pub fn bowler_head_to_head(
    table: &DeliveryTable,
    bowler1: &str,
    bowler2: &str,
    start: Option<u16>,
    end: Option<u16>,
) -> Result<(BowlingSummary, BowlingSummary), StatsError> {
    let first = bowler_record(table, bowler1, start, end)?;
    let second = bowler_record(table, bowler2, start, end)?;
    Ok((first, second))
}

/// The lowest-economy bowler of one bowling side, among bowlers with at
/// least `min_balls` deliveries. `None` when nobody qualifies.
///
/// Balls are a true delivery count, never a proxy column.
pub fn best_economy(
    table: &DeliveryTable,
    team: &str,
    min_balls: u32,
) -> Option<EconomyLeader> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<(String, u32, u32)> = Vec::new(); // (bowler, runs, balls)
    for d in table.rows().iter().filter(|d| d.bowling_team == team) {
        let i = *index.entry(d.bowler.clone()).or_insert_with(|| {
            totals.push((d.bowler.clone(), 0, 0));
            totals.len() - 1
        });
        totals[i].1 += d.total_runs;
        totals[i].2 += 1;
    }

    let mut best: Option<EconomyLeader> = None;
    for (bowler, runs, balls) in totals {
        if balls < min_balls {
            continue;
        }
        let economy = runs as f64 / (balls as f64 / 6.0);
        let better = match &best {
            None => true,
            Some(b) => economy < b.economy,
        };
        if better {
            best = Some(EconomyLeader {
                bowler,
                economy,
                balls,
                runs_conceded: runs,
            });
        }
    }
    best
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn delivery(match_id: u32, season: u16, bowler: &str, total: u32) -> DeliveryEvent {
        DeliveryEvent {
            match_id,
            season,
            venue: "Chepauk".into(),
            batting_team: "Mumbai Indians".into(),
            bowling_team: "Chennai Super Kings".into(),
            batter: "RG Sharma".into(),
            bowler: bowler.into(),
            batsman_runs: total,
            total_runs: total,
            player_dismissed: None,
        }
    }

    fn wicket(match_id: u32, season: u16, bowler: &str, dismissed: &str) -> DeliveryEvent {
        DeliveryEvent {
            player_dismissed: Some(dismissed.into()),
            batsman_runs: 0,
            total_runs: 0,
            ..delivery(match_id, season, bowler, 0)
        }
    }

    fn table(rows: Vec<DeliveryEvent>) -> DeliveryTable {
        DeliveryTable::new(rows)
    }

    #[test]
    fn record_counts_balls_runs_wickets_and_dots() {
        let mut extras = delivery(1, 2008, "DL Chahar", 1);
        extras.batsman_runs = 0; // a wide: total ticks up, bat runs do not
        let t = table(vec![
            delivery(1, 2008, "DL Chahar", 4),
            delivery(1, 2008, "DL Chahar", 0),
            wicket(1, 2008, "DL Chahar", "RG Sharma"),
            extras,
            delivery(2, 2010, "DL Chahar", 6),
        ]);
        let r = bowler_record(&t, "DL Chahar", None, None).unwrap();
        assert_eq!(r.matches, 2);
        assert_eq!(r.balls, 5);
        assert_eq!(r.runs_conceded, 11);
        assert_eq!(r.wickets, 1);
        assert_eq!(r.dot_balls, 2);
        assert_eq!(r.fours_conceded, 1);
        assert_eq!(r.sixes_conceded, 1);
        assert_eq!(r.average, Some(11.0));
        assert_relative_eq!(r.economy, 13.2); // 11 runs over 5 balls
        assert_eq!(r.strike_rate, Some(5.0));
    }

    #[test]
    fn run_out_on_own_delivery_still_counts_as_wicket() {
        // Attribution policy: any dismissal on the bowler's ball counts
        let t = table(vec![wicket(1, 2008, "RA Jadeja", "Non Striker")]);
        let r = bowler_record(&t, "RA Jadeja", None, None).unwrap();
        assert_eq!(r.wickets, 1);
    }

    #[test]
    fn sentinels_apply_at_zero_wickets_and_zero_balls() {
        let t = table(vec![
            delivery(1, 2008, "JJ Bumrah", 2),
            delivery(2, 2012, "DL Chahar", 1),
        ]);
        let r = bowler_record(&t, "JJ Bumrah", None, None).unwrap();
        assert_eq!(r.average, None);
        assert_eq!(r.strike_rate, None);

        // Bowler exists but sat the 2012 window out: zeroed record, no error
        let r = bowler_record(&t, "JJ Bumrah", Some(2012), Some(2012)).unwrap();
        assert_eq!(r.balls, 0);
        assert_eq!(r.economy, 0.0);
        assert_eq!(r.average, None);
    }

    #[test]
    fn unknown_bowler_is_not_found() {
        let t = table(vec![delivery(1, 2008, "DL Chahar", 1)]);
        assert_eq!(
            bowler_record(&t, "Nobody", None, None),
            Err(StatsError::not_found(Entity::Bowler, "Nobody"))
        );
    }

    #[test]
    fn record_window_is_validated_against_data_bounds() {
        let t = table(vec![delivery(1, 2008, "DL Chahar", 1)]);
        assert_eq!(
            bowler_record(&t, "DL Chahar", Some(2007), None),
            Err(StatsError::RangeOutOfBounds { min: 2008, max: 2008 })
        );
    }

    #[test]
    fn head_to_head_evaluates_both_over_the_same_window() {
        let t = table(vec![
            delivery(1, 2008, "A", 6),
            delivery(1, 2008, "B", 0),
            delivery(2, 2010, "A", 1),
        ]);
        let (a, b) = bowler_head_to_head(&t, "A", "B", Some(2008), Some(2008)).unwrap();
        assert_eq!(a.runs_conceded, 6);
        assert_eq!(b.dot_balls, 1);
        assert_eq!((a.from, a.to), (2008, 2008));
    }

    #[test]
    fn best_economy_requires_the_ball_floor_and_takes_the_lowest() {
        let mut rows = Vec::new();
        // "Miser": 50 balls, 25 runs → economy 3.0
        for i in 0..50 {
            rows.push(delivery(1, 2008, "Miser", (i % 2 == 0) as u32));
        }
        // "Spender": 60 balls, 120 runs → economy 12.0
        for _ in 0..60 {
            rows.push(delivery(1, 2008, "Spender", 2));
        }
        // "Cameo": one maiden over, spectacular but under the floor
        for _ in 0..6 {
            rows.push(delivery(1, 2008, "Cameo", 0));
        }
        let best = best_economy(&table(rows), "Chennai Super Kings", MIN_BALLS_FOR_ECONOMY)
            .expect("two bowlers qualify");
        assert_eq!(best.bowler, "Miser");
        assert_relative_eq!(best.economy, 3.0);
        assert_eq!(best.balls, 50);
    }

    #[test]
    fn best_economy_is_none_when_nobody_qualifies() {
        let t = table(vec![delivery(1, 2008, "DL Chahar", 0)]);
        assert_eq!(best_economy(&t, "Chennai Super Kings", 50), None);
        // Exact team match: different spelling finds nothing
        assert_eq!(best_economy(&t, "chennai super kings", 0), None);
    }
}
