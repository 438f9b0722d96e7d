//! Delivery-level cricket statistics engine.
//!
//! Two read-only tables go in — one delivery event per row, one match per
//! row — and pure query functions come out: per-player batting and bowling
//! summaries, team records, leaderboards, and side-by-side comparisons, all
//! scoped by an inclusive season window.
//!
//! The engine holds no state and never mutates its inputs; callers may share
//! the tables across threads freely. Undefined ratios (a batting average
//! with zero dismissals, a bowling strike rate with zero wickets) surface as
//! the non-numeric `NA` sentinel, never as zero and never as a panic.

pub mod data;
pub mod error;
pub mod stats;
pub mod summary;
pub mod table;

pub use data::{DeliveryEvent, DeliveryTable, MatchRecord, MatchTable};
pub use error::{Entity, StatsError};
pub use stats::SeasonRange;
pub use table::{Table, Tabular, Value};
