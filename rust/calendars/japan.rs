//! National holiday computation under the Japanese holiday law.
//!
//! The statutory rules are encoded directly: fixed dates, nth-Monday
//! holidays, the empirical equinox approximations and the one-off dates of
//! 2019-2021, followed by an iterative resolution of the citizen's holiday
//! and substitute holiday rules. Results are legally accurate for years
//! 2000-2099; other years run the same formulas unvalidated.

use chrono::prelude::*;
use indexmap::map::IndexMap;
use itertools::Itertools;

use crate::calendars::calendar::{days_in_month, ymd, HolidayMap};

/// Generic display name for derived rest days without a proper noun.
const PLAIN_HOLIDAY: &str = "holiday";
const SUBSTITUTE_HOLIDAY: &str = "substitute holiday";

/// Passes of the derived-holiday rules before resolution stops regardless of
/// convergence. Real calendars settle in two.
const MAX_RESOLUTION_PASSES: usize = 5;

/// Day of month of the nth Monday of a month.
fn nth_monday(year: i32, month: u32, nth: u32) -> u32 {
    let first_dow = ymd(year, month, 1).weekday().num_days_from_sunday(); // 0 = Sunday
    let offset_to_monday = (1 + 7 - first_dow) % 7;
    1 + offset_to_monday + (nth - 1) * 7
}

/// March day of the vernal equinox, 2000-2099 approximation.
fn vernal_equinox_day(year: i32) -> u32 {
    let y = f64::from(year - 2000);
    (20.8431 + 0.242194 * y - (y / 4.0).floor()).floor() as u32
}

/// September day of the autumnal equinox, 2000-2099 approximation.
fn autumnal_equinox_day(year: i32) -> u32 {
    let y = f64::from(year - 2000);
    (23.2488 + 0.242194 * y - (y / 4.0).floor()).floor() as u32
}

/// Statutory holidays of a year before derived-holiday resolution.
fn base_holidays(year: i32) -> IndexMap<NaiveDate, String> {
    let mut map: IndexMap<NaiveDate, String> = IndexMap::new();
    let mut add = |month: u32, day: u32, name: &str| {
        map.insert(ymd(year, month, day), name.to_string());
    };

    add(1, 1, "New Year's Day");
    add(1, nth_monday(year, 1, 2), "Coming of Age Day");
    add(2, 11, "National Foundation Day");
    // moved to 23rd February with the 2019 accession
    if year >= 2020 {
        add(2, 23, "Emperor's Birthday");
    }
    add(3, vernal_equinox_day(year), "Vernal Equinox Day");
    add(4, 29, "Showa Day");
    add(5, 3, "Constitution Memorial Day");
    add(5, 4, "Greenery Day");
    add(5, 5, "Children's Day");

    // Marine Day: 3rd Monday of July, with Olympic one-offs
    match year {
        2020 => add(7, 23, "Marine Day"),
        2021 => add(7, 22, "Marine Day"),
        _ => add(7, nth_monday(year, 7, 3), "Marine Day"),
    }

    // Mountain Day exists from 2016, with Olympic one-offs
    if year >= 2016 {
        match year {
            2020 => add(8, 10, "Mountain Day"),
            2021 => add(8, 8, "Mountain Day"),
            _ => add(8, 11, "Mountain Day"),
        }
    }

    add(9, nth_monday(year, 9, 3), "Respect for the Aged Day");
    add(9, autumnal_equinox_day(year), "Autumnal Equinox Day");

    // Sports Day: 2nd Monday of October, with Olympic one-offs
    match year {
        2020 => add(7, 24, "Sports Day"),
        2021 => add(7, 23, "Sports Day"),
        _ => add(10, nth_monday(year, 10, 2), "Sports Day"),
    }

    add(11, 3, "Culture Day");
    add(11, 23, "Labour Thanksgiving Day");

    if year == 2019 {
        add(5, 1, "Accession Day");
        add(10, 22, "Ceremony of Accession");
        // the accession transition rest days; inserted directly rather than
        // left to the citizen's-holiday rule, which postdates them
        add(4, 30, PLAIN_HOLIDAY);
        add(5, 2, PLAIN_HOLIDAY);
    }

    map
}

/// Apply the citizen's-holiday and substitute-holiday rules until a pass
/// makes no change, bounded by [`MAX_RESOLUTION_PASSES`].
pub(crate) fn resolve_derived(
    year: i32,
    base: IndexMap<NaiveDate, String>,
) -> IndexMap<NaiveDate, String> {
    let mut map = base;

    for _ in 0..MAX_RESOLUTION_PASSES {
        let mut changed = false;

        // citizen's holiday: a weekday sandwiched between two holidays
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month) {
                let date = ymd(year, month, day);
                if map.contains_key(&date) {
                    continue;
                }
                if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                    continue;
                }
                let (Some(prev), Some(next)) = (date.pred_opt(), date.succ_opt()) else {
                    continue;
                };
                if prev.year() != year || next.year() != year {
                    continue;
                }
                if map.contains_key(&prev) && map.contains_key(&next) {
                    map.insert(date, PLAIN_HOLIDAY.to_string());
                    changed = true;
                }
            }
        }

        // substitute holiday: a holiday on a Sunday moves onto the first
        // following weekday that is not already a holiday, within the year
        let sundays = map
            .keys()
            .filter(|date| date.weekday() == Weekday::Sun)
            .copied()
            .collect_vec();
        for sunday in sundays {
            let mut cursor = sunday.succ_opt();
            while let Some(date) = cursor {
                if date.year() != year {
                    break;
                }
                if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                    cursor = date.succ_opt();
                    continue;
                }
                if !map.contains_key(&date) {
                    map.insert(date, SUBSTITUTE_HOLIDAY.to_string());
                    changed = true;
                }
                break;
            }
        }

        if !changed {
            break;
        }
    }

    map
}

/// Compute the holiday map for a calendar year.
///
/// Total for any year; names are legally accurate for 2000-2099. The result
/// is a value object and must not be reused across years.
pub fn compute_holidays(year: i32) -> HolidayMap {
    HolidayMap {
        year,
        names: resolve_derived(year, base_holidays(year)),
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_monday() {
        assert_eq!(nth_monday(2024, 1, 2), 8); // 1st Jan 2024 is a Monday
        assert_eq!(nth_monday(2024, 10, 2), 14); // 1st Oct 2024 is a Tuesday
        assert_eq!(nth_monday(2026, 9, 3), 21);
        assert_eq!(nth_monday(2019, 9, 3), 16);
    }

    #[test]
    fn test_equinox_days() {
        assert_eq!(vernal_equinox_day(2024), 20);
        assert_eq!(vernal_equinox_day(2019), 21);
        assert_eq!(autumnal_equinox_day(2024), 23);
        assert_eq!(autumnal_equinox_day(2015), 23);
        assert_eq!(autumnal_equinox_day(2026), 23);
    }

    #[test]
    fn test_fixed_holidays() {
        let holidays = compute_holidays(2024);
        assert_eq!(holidays.name(&ymd(2024, 1, 1)), Some("New Year's Day"));
        assert_eq!(holidays.name(&ymd(2024, 1, 8)), Some("Coming of Age Day"));
        assert_eq!(
            holidays.name(&ymd(2024, 2, 11)),
            Some("National Foundation Day")
        );
        assert_eq!(holidays.name(&ymd(2024, 2, 23)), Some("Emperor's Birthday"));
        assert_eq!(holidays.name(&ymd(2024, 3, 20)), Some("Vernal Equinox Day"));
        assert_eq!(holidays.name(&ymd(2024, 11, 3)), Some("Culture Day"));
        assert_eq!(
            holidays.name(&ymd(2024, 11, 23)),
            Some("Labour Thanksgiving Day")
        );
    }

    #[test]
    fn test_emperors_birthday_only_from_2020() {
        assert!(compute_holidays(2019).name(&ymd(2019, 2, 23)).is_none());
        assert!(compute_holidays(2020).name(&ymd(2020, 2, 23)).is_some());
    }

    #[test]
    fn test_mountain_day_only_from_2016() {
        assert!(compute_holidays(2015).name(&ymd(2015, 8, 11)).is_none());
        assert_eq!(
            compute_holidays(2016).name(&ymd(2016, 8, 11)),
            Some("Mountain Day")
        );
    }

    #[test]
    fn test_olympic_year_2020() {
        let holidays = compute_holidays(2020);
        assert_eq!(holidays.name(&ymd(2020, 7, 23)), Some("Marine Day"));
        assert_eq!(holidays.name(&ymd(2020, 7, 24)), Some("Sports Day"));
        assert_eq!(holidays.name(&ymd(2020, 8, 10)), Some("Mountain Day"));
        // the regular 3rd-Monday / 2nd-Monday dates are not holidays
        assert!(holidays.name(&ymd(2020, 7, 20)).is_none());
        assert!(holidays.name(&ymd(2020, 10, 12)).is_none());
    }

    #[test]
    fn test_olympic_year_2021() {
        let holidays = compute_holidays(2021);
        assert_eq!(holidays.name(&ymd(2021, 7, 22)), Some("Marine Day"));
        assert_eq!(holidays.name(&ymd(2021, 7, 23)), Some("Sports Day"));
        assert_eq!(holidays.name(&ymd(2021, 8, 8)), Some("Mountain Day"));
        // 8th August 2021 is a Sunday; the Monday is the substitute
        assert_eq!(
            holidays.name(&ymd(2021, 8, 9)),
            Some("substitute holiday")
        );
    }

    #[test]
    fn test_accession_year_2019() {
        let holidays = compute_holidays(2019);
        assert_eq!(holidays.name(&ymd(2019, 5, 1)), Some("Accession Day"));
        assert_eq!(
            holidays.name(&ymd(2019, 10, 22)),
            Some("Ceremony of Accession")
        );
        assert_eq!(holidays.name(&ymd(2019, 4, 30)), Some("holiday"));
        assert_eq!(holidays.name(&ymd(2019, 5, 2)), Some("holiday"));
        // 5th May 2019 is a Sunday; the 6th is free after the golden week
        assert_eq!(holidays.name(&ymd(2019, 5, 6)), Some("substitute holiday"));
    }

    #[test]
    fn test_substitute_holiday_simple() {
        // 11th February 2024 is a Sunday
        let holidays = compute_holidays(2024);
        assert_eq!(
            holidays.name(&ymd(2024, 2, 12)),
            Some("substitute holiday")
        );
    }

    #[test]
    fn test_substitute_holiday_chains_past_existing_holidays() {
        // 3rd May 2020 (Constitution Memorial Day) is a Sunday; the 4th and
        // 5th are already holidays, so the substitute lands on the 6th.
        let holidays = compute_holidays(2020);
        assert_eq!(
            holidays.name(&ymd(2020, 5, 4)),
            Some("Greenery Day")
        );
        assert_eq!(holidays.name(&ymd(2020, 5, 5)), Some("Children's Day"));
        assert_eq!(holidays.name(&ymd(2020, 5, 6)), Some("substitute holiday"));
    }

    #[test]
    fn test_citizens_holiday_silver_week() {
        // 21st September 2026 is Respect for the Aged Day and the 23rd the
        // autumnal equinox; the Tuesday between them becomes a rest day.
        let holidays = compute_holidays(2026);
        assert_eq!(
            holidays.name(&ymd(2026, 9, 21)),
            Some("Respect for the Aged Day")
        );
        assert_eq!(holidays.name(&ymd(2026, 9, 22)), Some("holiday"));
        assert_eq!(
            holidays.name(&ymd(2026, 9, 23)),
            Some("Autumnal Equinox Day")
        );
    }

    #[test]
    fn test_new_year_sunday_substitute() {
        // 1st January 2023 is a Sunday
        let holidays = compute_holidays(2023);
        assert_eq!(holidays.name(&ymd(2023, 1, 2)), Some("substitute holiday"));
    }
}
