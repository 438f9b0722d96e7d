//! Side-by-side comparison utilities.
//!
//! Thin combinators: they run two single-entity queries and stack the rows.
//! The only numeric work here is the radar-style min–max normalization,
//! which lives on [`Table`].

use crate::data::DeliveryTable;
use crate::error::StatsError;
use crate::table::{Table, Tabular};

use super::batting::{season_growth, SeasonBattingRow};

/// Season-by-season growth of two players, concatenated.
pub fn compare_growth(
    table: &DeliveryTable,
    player1: &str,
    player2: &str,
) -> Result<Vec<SeasonBattingRow>, StatsError> {
    let mut rows = season_growth(table, player1)?;
    rows.extend(season_growth(table, player2)?);
    Ok(rows)
}

/// Stack two single-row results into one two-row table.
pub fn side_by_side<T: Tabular>(first: &T, second: &T) -> Table {
    let mut table = Table::new(first.columns());
    table.push_row(first.row());
    table.push_row(second.row());
    table
}

/// Two-row comparison with every numeric column min–max normalized onto
/// [0, 1], ready for a radar-style chart. Text and NA columns pass through.
pub fn radar<T: Tabular>(first: &T, second: &T) -> Table {
    side_by_side(first, second).min_max_normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DeliveryEvent;
    use crate::stats::batting::{player_summary, BattingSummary};
    use crate::table::Value;
    use approx::assert_relative_eq;

    fn ball(match_id: u32, season: u16, batter: &str, runs: u32) -> DeliveryEvent {
        DeliveryEvent {
            match_id,
            season,
            venue: "Chinnaswamy".into(),
            batting_team: "Royal Challengers Bangalore".into(),
            bowling_team: "Chennai Super Kings".into(),
            batter: batter.into(),
            bowler: "DL Chahar".into(),
            batsman_runs: runs,
            total_runs: runs,
            player_dismissed: None,
        }
    }

    fn fixture() -> DeliveryTable {
        DeliveryTable::new(vec![
            ball(1, 2008, "V Kohli", 6),
            ball(1, 2008, "V Kohli", 4),
            ball(2, 2010, "RG Sharma", 2),
            ball(2, 2010, "V Kohli", 1),
        ])
    }

    fn summaries() -> (BattingSummary, BattingSummary) {
        let t = fixture();
        let a = player_summary(&t, "V Kohli", None, None).unwrap().unwrap();
        let b = player_summary(&t, "RG Sharma", None, None).unwrap().unwrap();
        (a, b)
    }

    #[test]
    fn compare_growth_concatenates_both_players() {
        let rows = compare_growth(&fixture(), "V Kohli", "RG Sharma").unwrap();
        // Two seasons in the table, one block per player
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].player, "V Kohli");
        assert_eq!(rows[2].player, "RG Sharma");
        assert_eq!(rows[0].season, rows[2].season);
    }

    #[test]
    fn side_by_side_keeps_column_order_and_both_rows() {
        let (a, b) = summaries();
        let table = side_by_side(&a, &b);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.columns()[0], "Player");
        assert_eq!(table.rows()[0][0], Value::Text("V Kohli".into()));
        assert_eq!(table.rows()[1][0], Value::Text("RG Sharma".into()));
    }

    #[test]
    fn radar_normalizes_numeric_columns_only() {
        let (a, b) = summaries();
        let table = radar(&a, &b);
        let runs_col = table.columns().iter().position(|c| c == "Runs").unwrap();
        // Kohli leads on runs: 1.0; Sharma trails: 0.0
        assert_relative_eq!(table.rows()[0][runs_col].as_f64().unwrap(), 1.0);
        assert_relative_eq!(table.rows()[1][runs_col].as_f64().unwrap(), 0.0);
        // Names survive untouched
        assert_eq!(table.rows()[0][0], Value::Text("V Kohli".into()));
    }

    #[test]
    fn radar_passes_na_columns_through() {
        let (a, b) = summaries();
        // Neither player was ever dismissed in the fixture
        assert_eq!(a.average, None);
        let table = radar(&a, &b);
        let avg_col = table.columns().iter().position(|c| c == "Average").unwrap();
        assert_eq!(table.rows()[0][avg_col], Value::Na);
        assert_eq!(table.rows()[1][avg_col], Value::Na);
    }
}
