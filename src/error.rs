use thiserror::Error;

/// What kind of entity a lookup failed for. Used only for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Player,
    Bowler,
    Team,
    Season,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Entity::Player => "player",
            Entity::Bowler => "bowler",
            Entity::Team => "team",
            Entity::Season => "season",
        };
        f.write_str(s)
    }
}

/// Engine error taxonomy.
///
/// An entity that exists overall but has no rows after filtering is NOT an
/// error — those queries return `Ok(None)` or an empty `Vec` instead.
/// Undefined ratios (zero denominator) are likewise not errors; they surface
/// as the `NA` sentinel in result types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Requested season window exceeds the data's observed min/max.
    #[error("invalid season window: data available from {min} to {max}")]
    RangeOutOfBounds { min: u16, max: u16 },

    /// Requested entity has zero rows anywhere in the unfiltered table.
    #[error("{entity} '{name}' not found in the data")]
    NotFound { entity: Entity, name: String },

    /// The two teams have never met within the requested window.
    #[error("no matches found between '{team1}' and '{team2}'")]
    NoMatchesBetween { team1: String, team2: String },

    /// An input table has no rows at all.
    #[error("no rows loaded in the {table} table")]
    NoData { table: &'static str },
}

impl StatsError {
    pub(crate) fn not_found(entity: Entity, name: impl Into<String>) -> Self {
        StatsError::NotFound {
            entity,
            name: name.into(),
        }
    }
}
