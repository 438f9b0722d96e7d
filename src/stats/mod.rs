//! The statistics aggregation engine.
//!
//! Pure query functions over the two read-only tables. Nothing here holds
//! state, mutates an input, or touches I/O; every operation recomputes from
//! the full table it is handed.

pub mod batting;
pub mod bowling;
pub mod compare;
pub mod range;
pub mod team;

pub use range::SeasonRange;

/// Round to two decimals, the precision every derived rate is reported at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Title-case a (normalized) name for display in team reports:
/// the first letter after every non-letter is uppercased, the rest lowered.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round2_is_two_decimal_places() {
        assert_relative_eq!(round2(100.0 / 3.0), 33.33);
        assert_relative_eq!(round2(91.666_666), 91.67);
        assert_relative_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn title_case_handles_multi_word_names() {
        assert_eq!(title_case("mumbai indians"), "Mumbai Indians");
        assert_eq!(title_case("royal challengers bangalore"), "Royal Challengers Bangalore");
        assert_eq!(title_case("MUMBAI INDIANS"), "Mumbai Indians");
    }
}
