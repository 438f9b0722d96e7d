//! CSV loader for the two input tables.
//!
//! The match file carries `season` and `venue`; delivery rows only reference
//! a `match_id`, so loading joins every delivery against the match index to
//! stamp those two columns on.
//! Delivery rows referencing an unknown match are skipped with a warning
//! count rather than failing the whole load.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use super::{DeliveryEvent, DeliveryTable, MatchRecord, MatchTable};

/// Raw match row as it appears in the CSV; extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawMatch {
    id: u32,
    season: String,
    #[serde(default)]
    venue: String,
    team1: String,
    team2: String,
    toss_winner: String,
    #[serde(default)]
    winner: Option<String>,
    #[serde(default)]
    match_type: Option<String>,
}

/// Raw delivery row; `season`/`venue` come from the match join.
#[derive(Debug, Deserialize)]
struct RawDelivery {
    match_id: u32,
    batting_team: String,
    bowling_team: String,
    batter: String,
    bowler: String,
    batsman_runs: u32,
    total_runs: u32,
    #[serde(default)]
    player_dismissed: Option<String>,
}

/// Load both tables from CSV files.
pub fn load_tables(
    deliveries_path: impl AsRef<Path>,
    matches_path: impl AsRef<Path>,
) -> Result<(DeliveryTable, MatchTable)> {
    let matches_path = matches_path.as_ref();
    let deliveries_path = deliveries_path.as_ref();

    let reader = csv::Reader::from_path(matches_path)
        .with_context(|| format!("failed to open match file: {}", matches_path.display()))?;
    let (matches, index) = read_matches(reader)?;
    info!("Loaded {} matches from {}", matches.len(), matches_path.display());

    let reader = csv::Reader::from_path(deliveries_path)
        .with_context(|| format!("failed to open delivery file: {}", deliveries_path.display()))?;
    let (deliveries, skipped) = read_deliveries(reader, &index)?;
    info!(
        "Loaded {} deliveries from {}",
        deliveries.len(),
        deliveries_path.display()
    );
    if skipped > 0 {
        warn!("Skipped {} deliveries referencing unknown match ids", skipped);
    }

    Ok((DeliveryTable::new(deliveries), MatchTable::new(matches)))
}

/// (season, venue) of each match, keyed by match id.
type MatchIndex = HashMap<u32, (u16, String)>;

fn read_matches<R: Read>(mut reader: csv::Reader<R>) -> Result<(Vec<MatchRecord>, MatchIndex)> {
    let mut matches = Vec::new();
    let mut index = MatchIndex::new();
    for (line, row) in reader.deserialize::<RawMatch>().enumerate() {
        let raw = row.with_context(|| format!("bad match row at line {}", line + 2))?;
        let season = parse_season(&raw.season)
            .with_context(|| format!("bad season '{}' for match {}", raw.season, raw.id))?;
        index.insert(raw.id, (season, raw.venue));
        matches.push(MatchRecord {
            id: raw.id,
            season,
            team1: raw.team1,
            team2: raw.team2,
            winner: raw.winner.and_then(non_empty),
            toss_winner: raw.toss_winner,
            match_type: raw.match_type.and_then(non_empty),
        });
    }
    Ok((matches, index))
}

fn read_deliveries<R: Read>(
    mut reader: csv::Reader<R>,
    index: &MatchIndex,
) -> Result<(Vec<DeliveryEvent>, usize)> {
    let mut deliveries = Vec::new();
    let mut skipped = 0usize;
    for (line, row) in reader.deserialize::<RawDelivery>().enumerate() {
        let raw = row.with_context(|| format!("bad delivery row at line {}", line + 2))?;
        let Some((season, venue)) = index.get(&raw.match_id) else {
            skipped += 1;
            continue;
        };
        deliveries.push(DeliveryEvent {
            match_id: raw.match_id,
            season: *season,
            venue: venue.clone(),
            batting_team: raw.batting_team,
            bowling_team: raw.bowling_team,
            batter: raw.batter,
            bowler: raw.bowler,
            batsman_runs: raw.batsman_runs,
            total_runs: raw.total_runs,
            player_dismissed: raw.player_dismissed.and_then(non_empty),
        });
    }
    Ok((deliveries, skipped))
}

/// Parse a season label. Plain years ("2015") parse directly; split-year
/// labels ("2007/08") resolve to the later year, which is when that
/// tournament was actually played.
fn parse_season(raw: &str) -> Result<u16> {
    let raw = raw.trim();
    if let Some((head, tail)) = raw.split_once('/') {
        let start: u16 = head
            .trim()
            .parse()
            .with_context(|| format!("unparseable season '{raw}'"))?;
        let tail: u16 = tail
            .trim()
            .parse()
            .with_context(|| format!("unparseable season '{raw}'"))?;
        // "2007/08" stores only the final two digits of the second year
        let second = if tail < 100 {
            start - start % 100 + tail
        } else {
            tail
        };
        Ok(second)
    } else {
        raw.parse()
            .with_context(|| format!("unparseable season '{raw}'"))
    }
}

/// Empty and "NA" cells mean "no value" in the source data.
fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "NA" {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCHES_CSV: &str = "\
id,season,city,venue,team1,team2,toss_winner,winner,match_type
1,2007/08,Mumbai,Wankhede Stadium,Mumbai Indians,Chennai Super Kings,Mumbai Indians,Chennai Super Kings,League
2,2015,Kolkata,Eden Gardens,Kolkata Knight Riders,Mumbai Indians,Mumbai Indians,,Final
";

    const DELIVERIES_CSV: &str = "\
match_id,inning,batting_team,bowling_team,batter,bowler,batsman_runs,extra_runs,total_runs,player_dismissed
1,1,Mumbai Indians,Chennai Super Kings,RG Sharma,DL Chahar,4,0,4,
1,1,Mumbai Indians,Chennai Super Kings,RG Sharma,DL Chahar,0,1,1,RG Sharma
9,1,Gujarat Titans,Mumbai Indians,Shubman Gill,JJ Bumrah,6,0,6,
";

    #[test]
    fn split_season_resolves_to_later_year() {
        assert_eq!(parse_season("2007/08").unwrap(), 2008);
        assert_eq!(parse_season("2009/10").unwrap(), 2010);
        assert_eq!(parse_season("2015").unwrap(), 2015);
        assert_eq!(parse_season(" 2023 ").unwrap(), 2023);
        assert!(parse_season("finals").is_err());
    }

    #[test]
    fn empty_winner_loads_as_none() {
        let reader = csv::Reader::from_reader(MATCHES_CSV.as_bytes());
        let (matches, _) = read_matches(reader).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].season, 2008);
        assert_eq!(matches[0].winner.as_deref(), Some("Chennai Super Kings"));
        assert_eq!(matches[1].winner, None);
        assert_eq!(matches[1].match_type.as_deref(), Some("Final"));
    }

    #[test]
    fn deliveries_join_season_and_venue_from_matches() {
        let reader = csv::Reader::from_reader(MATCHES_CSV.as_bytes());
        let (_, index) = read_matches(reader).unwrap();

        let reader = csv::Reader::from_reader(DELIVERIES_CSV.as_bytes());
        let (deliveries, skipped) = read_deliveries(reader, &index).unwrap();

        // The row for unknown match 9 is dropped, not fatal
        assert_eq!(deliveries.len(), 2);
        assert_eq!(skipped, 1);
        assert_eq!(deliveries[0].season, 2008);
        assert_eq!(deliveries[0].venue, "Wankhede Stadium");
        assert_eq!(deliveries[0].player_dismissed, None);
        assert_eq!(deliveries[1].player_dismissed.as_deref(), Some("RG Sharma"));
    }
}
