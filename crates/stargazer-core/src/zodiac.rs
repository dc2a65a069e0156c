//! Zodiac sign lookup.
//!
//! Signs are resolved from the calendar date alone through a fixed cutoff
//! table. Boundaries follow the table literally rather than any
//! astronomical definition.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// One of the twelve zodiac signs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Ordered `(month * 100 + day, sign)` cutoffs, ascending.
///
/// The first entry whose cutoff is greater than or equal to the key wins.
pub const ZODIAC_CUTOFFS: [(u32, ZodiacSign); 13] = [
    (120, ZodiacSign::Capricorn),
    (219, ZodiacSign::Aquarius),
    (320, ZodiacSign::Pisces),
    (420, ZodiacSign::Aries),
    (521, ZodiacSign::Taurus),
    (621, ZodiacSign::Gemini),
    (722, ZodiacSign::Cancer),
    (822, ZodiacSign::Leo),
    (922, ZodiacSign::Virgo),
    (1022, ZodiacSign::Libra),
    (1121, ZodiacSign::Scorpio),
    (1221, ZodiacSign::Sagittarius),
    (1231, ZodiacSign::Capricorn),
];

/// Sign returned when the key falls past the last cutoff.
pub const FALLBACK_SIGN: ZodiacSign = ZodiacSign::Capricorn;

/// Resolves the zodiac sign for a day and month.
///
/// Inputs are not validated: out-of-range values simply fall through the
/// table, ending at [`FALLBACK_SIGN`].
pub fn resolve(day: u32, month: u32) -> ZodiacSign {
    let key = month.saturating_mul(100).saturating_add(day);
    ZODIAC_CUTOFFS
        .iter()
        .find(|(cutoff, _)| key <= *cutoff)
        .map(|(_, sign)| *sign)
        .unwrap_or(FALLBACK_SIGN)
}

/// Resolves the zodiac sign for a calendar date.
pub fn resolve_date(date: NaiveDate) -> ZodiacSign {
    resolve(date.day(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_literal_table_examples() {
        assert_eq!(resolve(15, 1), ZodiacSign::Capricorn);
        assert_eq!(resolve(20, 4), ZodiacSign::Aries);
        assert_eq!(resolve(31, 12), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_exact_cutoffs_belong_to_earlier_sign() {
        assert_eq!(resolve(20, 1), ZodiacSign::Capricorn);
        assert_eq!(resolve(21, 1), ZodiacSign::Aquarius);
        assert_eq!(resolve(19, 2), ZodiacSign::Aquarius);
        assert_eq!(resolve(20, 2), ZodiacSign::Pisces);
        assert_eq!(resolve(21, 12), ZodiacSign::Sagittarius);
        assert_eq!(resolve(22, 12), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_every_cutoff_maps_to_its_own_sign() {
        for (cutoff, sign) in ZODIAC_CUTOFFS {
            assert_eq!(resolve(cutoff % 100, cutoff / 100), sign, "cutoff {cutoff}");
        }
    }

    #[test]
    fn test_malformed_input_falls_back() {
        assert_eq!(resolve(40, 12), FALLBACK_SIGN);
        assert_eq!(resolve(1, 13), FALLBACK_SIGN);
        assert_eq!(resolve(u32::MAX, u32::MAX), FALLBACK_SIGN);
        assert_eq!(resolve(0, 1), ZodiacSign::Capricorn);
        assert_eq!(resolve(0, 0), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_every_day_of_leap_year_resolves() {
        let mut seen = HashSet::new();
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while date.year() == 2024 {
            seen.insert(resolve_date(date));
            date = date.succ_opt().unwrap();
        }
        let all: HashSet<ZodiacSign> = ZodiacSign::iter().collect();
        assert_eq!(seen, all);
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(ZodiacSign::Sagittarius.to_string(), "Sagittarius");
        assert_eq!("Leo".parse::<ZodiacSign>().unwrap(), ZodiacSign::Leo);
    }
}
