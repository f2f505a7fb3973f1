use chrono::prelude::*;
use indexmap::map::IndexMap;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};

use crate::calendars::japan::compute_holidays;

/// Company-designated non-working days for one year, managed by the caller.
pub type CompanyHolidaySet = IndexSet<NaiveDate>;

/// Create a `NaiveDate` from calendar components.
///
/// Panics if date values are invalid.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Number of days in the given calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let mut day = 31;
    while NaiveDate::from_ymd_opt(year, month, day).is_none() {
        day -= 1;
    }
    day
}

/// Parse a canonical zero-padded `YYYY-MM-DD` key.
///
/// Anything that is not ten characters of digits and hyphens forming a real
/// calendar date returns `None`.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let bytes = key.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Holiday names for a single calendar year.
///
/// Presence in the map is the sole holiday signal used by the rest of the
/// engine; the name is for display. A map computed for one year must be
/// recomputed when the year changes.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct HolidayMap {
    pub(crate) year: i32,
    pub(crate) names: IndexMap<NaiveDate, String>,
}

impl HolidayMap {
    /// Create an empty map for a year.
    pub fn new(year: i32) -> Self {
        HolidayMap {
            year,
            names: IndexMap::new(),
        }
    }

    /// The year this map was computed for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Display name of the holiday on `date`, if any.
    pub fn name(&self, date: &NaiveDate) -> Option<&str> {
        self.names.get(date).map(String::as_str)
    }

    /// Returns whether the date is a holiday.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.names.contains_key(date)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &str)> {
        self.names.iter().map(|(date, name)| (date, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Day classification against national holidays, company holidays and the
/// Saturday/Sunday weekend.
pub trait DayClass {
    /// Returns whether the date is a national holiday.
    fn is_national_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is an organization-specific non-working day.
    fn is_company_holiday(&self, date: &NaiveDate) -> bool;

    fn is_saturday(&self, date: &NaiveDate) -> bool {
        date.weekday() == Weekday::Sat
    }

    fn is_sunday(&self, date: &NaiveDate) -> bool {
        date.weekday() == Weekday::Sun
    }

    fn is_weekend(&self, date: &NaiveDate) -> bool {
        self.is_saturday(date) || self.is_sunday(date)
    }

    /// Returns whether the date is an off-day: a weekend, a national holiday
    /// or a company holiday.
    fn is_off_day(&self, date: &NaiveDate) -> bool {
        self.is_national_holiday(date) || self.is_company_holiday(date) || self.is_weekend(date)
    }

    /// Returns whether the date is a Sunday or any holiday. Saturday alone
    /// does not qualify.
    fn is_sun_or_holiday(&self, date: &NaiveDate) -> bool {
        self.is_sunday(date) || self.is_national_holiday(date) || self.is_company_holiday(date)
    }

    /// Returns whether the date is a planned working day.
    fn is_working_day(&self, date: &NaiveDate) -> bool {
        !self.is_off_day(date)
    }
}

/// A year's working calendar: the national holiday map combined with
/// company-designated holidays.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkCalendar {
    pub(crate) holidays: HolidayMap,
    pub(crate) company_holidays: CompanyHolidaySet,
}

impl WorkCalendar {
    /// Create a calendar from a computed holiday map and a company set.
    pub fn new(holidays: HolidayMap, company_holidays: CompanyHolidaySet) -> Self {
        WorkCalendar {
            holidays,
            company_holidays,
        }
    }

    /// Compute the national calendar for `year` with no company holidays.
    pub fn for_year(year: i32) -> Self {
        WorkCalendar::new(compute_holidays(year), CompanyHolidaySet::new())
    }

    /// The year this calendar covers.
    pub fn year(&self) -> i32 {
        self.holidays.year
    }

    pub fn holidays(&self) -> &HolidayMap {
        &self.holidays
    }

    pub fn company_holidays(&self) -> &CompanyHolidaySet {
        &self.company_holidays
    }

    /// Display name of the national holiday on `date`, if any.
    pub fn holiday_name(&self, date: &NaiveDate) -> Option<&str> {
        self.holidays.name(date)
    }
}

impl DayClass for WorkCalendar {
    fn is_national_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    fn is_company_holiday(&self, date: &NaiveDate) -> bool {
        self.company_holidays.contains(date)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_cal() -> WorkCalendar {
        let mut holidays = HolidayMap::new(2024);
        holidays
            .names
            .insert(ymd(2024, 4, 29), "Showa Day".to_string());
        let company = CompanyHolidaySet::from_iter([ymd(2024, 4, 30)]);
        WorkCalendar::new(holidays, company)
    }

    #[test]
    fn test_is_national_holiday() {
        let cal = fixture_cal();
        assert!(cal.is_national_holiday(&ymd(2024, 4, 29))); // in map
        assert!(!cal.is_national_holiday(&ymd(2024, 4, 30))); // company only
        assert!(!cal.is_national_holiday(&ymd(2024, 4, 10)));
    }

    #[test]
    fn test_is_off_day() {
        let cal = fixture_cal();
        assert!(cal.is_off_day(&ymd(2024, 4, 29))); // national holiday
        assert!(cal.is_off_day(&ymd(2024, 4, 30))); // company holiday
        assert!(cal.is_off_day(&ymd(2024, 4, 6))); // Saturday
        assert!(cal.is_off_day(&ymd(2024, 4, 7))); // Sunday
        assert!(!cal.is_off_day(&ymd(2024, 4, 10))); // Wednesday
    }

    #[test]
    fn test_sun_or_holiday_excludes_saturday() {
        let cal = fixture_cal();
        assert!(cal.is_sun_or_holiday(&ymd(2024, 4, 7))); // Sunday
        assert!(cal.is_sun_or_holiday(&ymd(2024, 4, 29))); // national holiday
        assert!(cal.is_sun_or_holiday(&ymd(2024, 4, 30))); // company holiday
        assert!(!cal.is_sun_or_holiday(&ymd(2024, 4, 6))); // Saturday
    }

    #[test]
    fn test_is_working_day() {
        let cal = fixture_cal();
        assert!(cal.is_working_day(&ymd(2024, 4, 10)));
        assert!(!cal.is_working_day(&ymd(2024, 4, 29)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2022, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_parse_date_key() {
        assert_eq!(parse_date_key("2024-04-29"), Some(ymd(2024, 4, 29)));
        assert_eq!(parse_date_key("2024-4-29"), None); // not zero padded
        assert_eq!(parse_date_key("2024-02-30"), None); // not a real date
        assert_eq!(parse_date_key("2024/04/29"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn test_holiday_map_lookup() {
        let cal = fixture_cal();
        assert_eq!(cal.holiday_name(&ymd(2024, 4, 29)), Some("Showa Day"));
        assert_eq!(cal.holiday_name(&ymd(2024, 4, 30)), None);
        assert_eq!(cal.holidays().len(), 1);
        assert_eq!(cal.year(), 2024);
    }
}
