use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;

use cli::{Cli, Command};
use cricstats::data::loader;
use cricstats::data::{DeliveryTable, MatchTable};
use cricstats::stats::{batting, bowling, compare, team};
use cricstats::summary;
use cricstats::table::Table;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let (deliveries, matches) = loader::load_tables(&cli.deliveries, &cli.matches)?;
    info!(
        "Tables ready: {} deliveries, {} matches",
        deliveries.len(),
        matches.len()
    );

    run(&cli, &deliveries, &matches)
}

fn run(cli: &Cli, deliveries: &DeliveryTable, matches: &MatchTable) -> Result<()> {
    match &cli.command {
        Command::Batter {
            player,
            from,
            to,
            prompt,
        } => match batting::player_summary(deliveries, player, *from, *to)? {
            Some(s) if *prompt => println!("{}", summary::player_batting_prompt(&s)),
            Some(s) => emit(cli.json, &Table::from_tabular(&[s]))?,
            None => println!("No deliveries for {player} in the selected seasons"),
        },

        Command::TopBatters { season, n } => match season {
            Some(season) => {
                let rows = batting::top_batters(deliveries, *season, *n)?;
                emit(cli.json, &Table::from_tabular(&rows))?;
            }
            None => {
                let rows = batting::top_batters_all_seasons(deliveries, *n);
                emit(cli.json, &Table::from_tabular(&rows))?;
            }
        },

        Command::Growth { player } => {
            let rows = batting::season_growth(deliveries, player)?;
            emit(cli.json, &Table::from_tabular(&rows))?;
        }

        Command::CompareGrowth { player1, player2 } => {
            let rows = compare::compare_growth(deliveries, player1, player2)?;
            emit(cli.json, &Table::from_tabular(&rows))?;
        }

        Command::MostRuns { n } => {
            let rows = batting::most_runs(deliveries, *n);
            emit(cli.json, &Table::from_tabular(&rows))?;
        }

        Command::VsTeam {
            player,
            team,
            season,
        } => match batting::player_vs_team(deliveries, player, team, *season)? {
            Some(r) => emit(cli.json, &Table::from_tabular(&[r]))?,
            None => {
                let season = season.map_or_else(|| "all".to_string(), |s| s.to_string());
                println!("No data found for {player} vs {team} in season {season}");
            }
        },

        Command::BatterH2h {
            player1,
            player2,
            from,
            to,
            radar,
        } => {
            let (first, second) =
                batting::player_head_to_head(deliveries, player1, player2, *from, *to)?;
            match (first, second) {
                (Some(a), Some(b)) => {
                    let table = if *radar {
                        compare::radar(&a, &b)
                    } else {
                        compare::side_by_side(&a, &b)
                    };
                    emit(cli.json, &table)?;
                }
                (a, b) => {
                    for (name, s) in [(player1, a), (player2, b)] {
                        match s {
                            Some(s) => emit(cli.json, &Table::from_tabular(&[s]))?,
                            None => println!("No deliveries for {name} in the selected seasons"),
                        }
                    }
                }
            }
        }

        Command::StrikeRates { n, min_balls } => {
            let rows = batting::strike_rate_leaders(deliveries, *n, *min_balls);
            emit(cli.json, &Table::from_tabular(&rows))?;
        }

        Command::MostSixes { n } => {
            let rows = batting::most_sixes(deliveries, *n);
            emit(cli.json, &Table::from_tabular(&rows))?;
        }

        Command::MostFours { n } => {
            let rows = batting::most_fours(deliveries, *n);
            emit(cli.json, &Table::from_tabular(&rows))?;
        }

        Command::Bowler {
            bowler,
            from,
            to,
            prompt,
        } => {
            let record = bowling::bowler_record(deliveries, bowler, *from, *to)?;
            if *prompt {
                println!("{}", summary::bowler_prompt(bowler, record.from, record.to));
            } else {
                emit(cli.json, &Table::from_tabular(&[record]))?;
            }
        }

        Command::BowlerH2h {
            bowler1,
            bowler2,
            from,
            to,
        } => {
            let (a, b) = bowling::bowler_head_to_head(deliveries, bowler1, bowler2, *from, *to)?;
            emit(cli.json, &compare::side_by_side(&a, &b))?;
        }

        Command::BestEconomy {
            team,
            min_balls,
            prompt,
        } => match bowling::best_economy(deliveries, team, *min_balls) {
            Some(leader) if *prompt => {
                println!("{}", summary::best_economy_prompt(&leader, team));
            }
            Some(leader) => emit(cli.json, &Table::from_tabular(&[leader]))?,
            None => println!("No bowler of {team} has bowled {min_balls} deliveries"),
        },

        Command::TeamH2h {
            team1,
            team2,
            from,
            to,
            prompt,
        } => {
            let h2h = team::head_to_head(matches, team1, team2, *from, *to)?;
            if *prompt {
                println!("{}", summary::team_head_to_head_prompt(&h2h));
            } else {
                emit(cli.json, &Table::from_tabular(&[h2h]))?;
            }
        }

        Command::TeamSeasons { team } => {
            let rows = team::season_performance(matches, team)?;
            emit(cli.json, &Table::from_tabular(&rows))?;
        }

        Command::TeamRecord { team } => {
            let (overall, opponents) = team::team_record(matches, team)?;
            if cli.json {
                let json = serde_json::json!({
                    "overall": Table::from_tabular(&[overall]).to_json_records(),
                    "against_opponents": Table::from_tabular(&opponents).to_json_records(),
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                print_table(&Table::from_tabular(&[overall]));
                println!();
                print_table(&Table::from_tabular(&opponents));
            }
        }

        Command::WinsPivot => {
            let pivot = team::wins_by_season(matches);
            emit(cli.json, &pivot.to_table())?;
        }

        Command::HighestScores { team, n } => {
            let rows = team::highest_scores(deliveries, team, *n)?;
            emit(cli.json, &Table::from_tabular(&rows))?;
        }

        Command::HighestChases { team, n } => {
            let rows = team::highest_chases(deliveries, team, *n)?;
            emit(cli.json, &Table::from_tabular(&rows))?;
        }
    }

    Ok(())
}

fn emit(json: bool, table: &Table) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&table.to_json_records())?);
    } else {
        print_table(table);
    }
    Ok(())
}

/// Plain-text rendering with padded columns.
fn print_table(table: &Table) {
    if table.columns().is_empty() {
        println!("(no rows)");
        return;
    }

    let mut widths: Vec<usize> = table.columns().iter().map(|c| c.len()).collect();
    let rendered: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();
    for row in &rendered {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(widths.iter().copied())
        .map(|(c, w)| format!("{c:<w$}"))
        .collect();
    println!("{}", header.join("  "));
    println!("{}", "-".repeat(header.join("  ").len()));
    for row in &rendered {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        println!("{}", line.join("  "));
    }
}
