//! Build the yearly holiday calendar and classify days against it.
//!
//! ### Basic usage
//!
//! [`compute_holidays`] encodes the national holiday rules for a calendar
//! year, including the derived citizen's and substitute holidays.
//!
//! ```rust
//! use kintai::calendars::{compute_holidays, ymd};
//! let holidays = compute_holidays(2024);
//! assert_eq!(holidays.name(&ymd(2024, 1, 1)), Some("New Year's Day"));
//! // 11th February 2024 falls on a Sunday; the Monday after is observed.
//! assert_eq!(holidays.name(&ymd(2024, 2, 12)), Some("substitute holiday"));
//! ```
//!
//! ### Classification
//!
//! A [`WorkCalendar`] combines the national map with company-designated
//! holidays and implements [`DayClass`], which distinguishes the broad
//! off-day notion (weekends included) from the Sunday-or-holiday notion
//! (Saturday excluded).
//!
//! ```rust
//! use kintai::calendars::{ymd, DayClass, WorkCalendar};
//! let cal = WorkCalendar::for_year(2024);
//! let saturday = ymd(2024, 4, 6);
//! assert!(cal.is_off_day(&saturday));
//! assert!(!cal.is_sun_or_holiday(&saturday));
//! ```

mod calendar;
pub use crate::calendars::calendar::{
    days_in_month, parse_date_key, ymd, CompanyHolidaySet, DayClass, HolidayMap, WorkCalendar,
};

mod japan;
pub use crate::calendars::japan::compute_holidays;
#[cfg(test)]
pub(crate) use crate::calendars::japan::resolve_derived;
