//! Inclusive season window, shared by every season-scoped query.

use crate::error::StatsError;

/// A validated inclusive `[start, end]` season window.
///
/// Missing bounds default to the data's observed extremes; explicit bounds
/// must stay inside them. The window may be empty of rows — that is a valid
/// (empty) query result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    pub start: u16,
    pub end: u16,
}

impl SeasonRange {
    /// Resolve an optional `(start, end)` request against the table's
    /// observed `(min, max)` bounds.
    pub fn resolve(
        bounds: (u16, u16),
        start: Option<u16>,
        end: Option<u16>,
    ) -> Result<Self, StatsError> {
        let (min, max) = bounds;
        let start = start.unwrap_or(min);
        let end = end.unwrap_or(max);
        if start < min || end > max {
            return Err(StatsError::RangeOutOfBounds { min, max });
        }
        Ok(SeasonRange { start, end })
    }

    pub fn contains(&self, season: u16) -> bool {
        self.start <= season && season <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: (u16, u16) = (2008, 2023);

    #[test]
    fn missing_bounds_default_to_observed_extremes() {
        let range = SeasonRange::resolve(BOUNDS, None, None).unwrap();
        assert_eq!(range, SeasonRange { start: 2008, end: 2023 });

        let range = SeasonRange::resolve(BOUNDS, Some(2015), None).unwrap();
        assert_eq!(range, SeasonRange { start: 2015, end: 2023 });
    }

    #[test]
    fn window_exceeding_data_bounds_is_rejected() {
        // Data spans 2008–2023: (2007, 2023) fails, (2008, 2023) succeeds.
        assert_eq!(
            SeasonRange::resolve(BOUNDS, Some(2007), Some(2023)),
            Err(StatsError::RangeOutOfBounds { min: 2008, max: 2023 })
        );
        assert_eq!(
            SeasonRange::resolve(BOUNDS, None, Some(2024)),
            Err(StatsError::RangeOutOfBounds { min: 2008, max: 2023 })
        );
        assert!(SeasonRange::resolve(BOUNDS, Some(2008), Some(2023)).is_ok());
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = SeasonRange::resolve(BOUNDS, Some(2010), Some(2012)).unwrap();
        assert!(range.contains(2010));
        assert!(range.contains(2011));
        assert!(range.contains(2012));
        assert!(!range.contains(2009));
        assert!(!range.contains(2013));
    }

    #[test]
    fn widening_the_window_never_shrinks_the_subset() {
        let seasons = [2008u16, 2009, 2009, 2011, 2015, 2015, 2015, 2023];
        let mut prev = 0;
        for end in 2008..=2023 {
            let range = SeasonRange::resolve(BOUNDS, Some(2008), Some(end)).unwrap();
            let n = seasons.iter().filter(|s| range.contains(**s)).count();
            assert!(n >= prev, "subset shrank when widening to {end}");
            prev = n;
        }
        assert_eq!(prev, seasons.len());
    }
}
