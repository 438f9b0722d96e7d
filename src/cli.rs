use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cricstats::stats::{batting, bowling};

/// Cricket statistics over delivery-level CSV data
#[derive(Parser, Debug)]
#[command(name = "cricstats", version, about)]
pub struct Cli {
    /// Delivery-level CSV file
    #[arg(long, env = "CRICSTATS_DELIVERIES", default_value = "deliveries.csv")]
    pub deliveries: PathBuf,

    /// Match-level CSV file
    #[arg(long, env = "CRICSTATS_MATCHES", default_value = "matches.csv")]
    pub matches: PathBuf,

    /// Emit JSON records instead of a text table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Batting summary for one player
    Batter {
        player: String,
        /// First season of the window (defaults to the data's first)
        #[arg(long)]
        from: Option<u16>,
        /// Last season of the window (defaults to the data's last)
        #[arg(long)]
        to: Option<u16>,
        /// Print the summary-generator prompt instead of the stats
        #[arg(long)]
        prompt: bool,
    },

    /// Top run scorers, for one season or season by season
    TopBatters {
        /// Restrict to one season; omit for every season
        #[arg(long)]
        season: Option<u16>,
        #[arg(short, long, default_value_t = 10)]
        n: usize,
    },

    /// Season-by-season career curve for one player
    Growth { player: String },

    /// Growth curves of two players, stacked
    CompareGrowth { player1: String, player2: String },

    /// League-wide top run scorers
    MostRuns {
        #[arg(short, long, default_value_t = 10)]
        n: usize,
    },

    /// A player's record against one bowling side
    VsTeam {
        player: String,
        team: String,
        #[arg(long)]
        season: Option<u16>,
    },

    /// Side-by-side batting summaries of two players
    BatterH2h {
        player1: String,
        player2: String,
        #[arg(long)]
        from: Option<u16>,
        #[arg(long)]
        to: Option<u16>,
        /// Min–max normalize numeric columns onto [0, 1]
        #[arg(long)]
        radar: bool,
    },

    /// Strike-rate leaderboard over a minimum sample of balls
    StrikeRates {
        #[arg(short, long, default_value_t = 10)]
        n: usize,
        #[arg(long, default_value_t = batting::DEFAULT_MIN_BALLS)]
        min_balls: u32,
    },

    /// Most sixes hit
    MostSixes {
        #[arg(short, long, default_value_t = 10)]
        n: usize,
    },

    /// Most fours hit
    MostFours {
        #[arg(short, long, default_value_t = 10)]
        n: usize,
    },

    /// Bowling record for one bowler
    Bowler {
        bowler: String,
        #[arg(long)]
        from: Option<u16>,
        #[arg(long)]
        to: Option<u16>,
        /// Print the summary-generator prompt instead of the stats
        #[arg(long)]
        prompt: bool,
    },

    /// Side-by-side bowling records over the same window
    BowlerH2h {
        bowler1: String,
        bowler2: String,
        #[arg(long)]
        from: Option<u16>,
        #[arg(long)]
        to: Option<u16>,
    },

    /// Lowest-economy bowler of one bowling side
    BestEconomy {
        team: String,
        #[arg(long, default_value_t = bowling::MIN_BALLS_FOR_ECONOMY)]
        min_balls: u32,
        /// Print the summary-generator prompt instead of the stats
        #[arg(long)]
        prompt: bool,
    },

    /// Head-to-head between two teams
    TeamH2h {
        team1: String,
        team2: String,
        #[arg(long)]
        from: Option<u16>,
        #[arg(long)]
        to: Option<u16>,
        /// Print the summary-generator prompt instead of the stats
        #[arg(long)]
        prompt: bool,
    },

    /// Per-season record for one team
    TeamSeasons { team: String },

    /// Overall record and per-opponent breakdown for one team
    TeamRecord { team: String },

    /// Win counts per team per season
    WinsPivot,

    /// Highest innings totals batting first or second
    HighestScores {
        team: String,
        #[arg(short, long, default_value_t = 5)]
        n: usize,
    },

    /// Highest opposing totals while this team bowled
    HighestChases {
        team: String,
        #[arg(short, long, default_value_t = 5)]
        n: usize,
    },
}
