//! Caller-owned persistence model: year-keyed day records, company-designated
//! holidays, the wage setting, and the versioned backup format.
//!
//! The engine itself never holds a reference into this state; callers read
//! value copies out, derive metrics, and write patches back. How the state is
//! stored (file, browser storage, database) is the caller's concern; this
//! module only defines the shape and its JSON form.

use chrono::{Datelike, NaiveDate};
use indexmap::map::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calendars::{parse_date_key, CompanyHolidaySet};
use crate::timesheet::DayRecord;

/// Hourly wage of a fresh state.
pub const DEFAULT_HOURLY_WAGE: f64 = 1500.0;
/// First year the calendar rules are specified for.
pub const MIN_YEAR: i32 = 2000;
/// Last year the calendar rules are specified for.
pub const MAX_YEAR: i32 = 2099;

/// Version tag of the backup envelope this build reads and writes.
pub const BACKUP_VERSION: u32 = 1;

/// Errors raised at the store boundary. The calendar and metric computations
/// themselves never fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A date key was not canonical `YYYY-MM-DD` text.
    #[error("'{0}' is not a valid `YYYY-MM-DD` date key")]
    InvalidDateKey(String),
    /// A company holiday was added to a different year than it belongs to.
    #[error("date {date} does not belong to year {year}")]
    YearMismatch { date: NaiveDate, year: i32 },
    /// The wage value was negative or not finite.
    #[error("hourly wage must be a non-negative finite number, got {0}")]
    InvalidWage(f64),
    /// The backup envelope carried an unsupported version.
    #[error("unsupported backup version {0}")]
    BackupVersion(u32),
    /// The backup payload was not valid JSON of the expected shape.
    #[error("malformed backup payload: {0}")]
    BackupFormat(#[from] serde_json::Error),
}

/// Handles the `to` and `from` JSON conversion.
pub trait Json: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Company holidays and day records for a single year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearData {
    #[serde(default)]
    pub company_holidays: CompanyHolidaySet,
    #[serde(default)]
    pub days: IndexMap<NaiveDate, DayRecord>,
}

impl YearData {
    /// The record for `date`, created as a default normal day if absent.
    pub fn day_record(&mut self, date: NaiveDate) -> &mut DayRecord {
        self.days.entry(date).or_default()
    }

    /// Value copy of the record for `date`, defaulting when absent.
    pub fn day(&self, date: &NaiveDate) -> DayRecord {
        self.days.get(date).cloned().unwrap_or_default()
    }
}

/// Full persisted application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub hourly_wage: f64,
    /// The year currently in focus.
    pub year: i32,
    #[serde(default)]
    pub year_data: IndexMap<i32, YearData>,
}

impl Json for YearData {}
impl Json for State {}

/// Restore-string envelope wrapped around [`State`].
#[derive(Debug, Serialize, Deserialize)]
struct Backup {
    version: u32,
    data: State,
}

fn clamp_year(year: i32) -> i32 {
    year.clamp(MIN_YEAR, MAX_YEAR)
}

impl State {
    /// Fresh default state focused on `year`, clamped to the supported
    /// range.
    pub fn new(year: i32) -> Self {
        let mut state = State {
            hourly_wage: DEFAULT_HOURLY_WAGE,
            year: clamp_year(year),
            year_data: IndexMap::new(),
        };
        state.year_data.entry(state.year).or_default();
        state
    }

    /// Load persisted state, falling back to a fresh default on any parse
    /// failure. `fallback_year` seeds the default.
    pub fn load_or_default(raw: Option<&str>, fallback_year: i32) -> State {
        let Some(raw) = raw else {
            return State::new(fallback_year);
        };
        match State::from_json(raw) {
            Ok(mut state) => {
                state.year = clamp_year(state.year);
                state.year_data.entry(state.year).or_default();
                state
            }
            Err(error) => {
                warn!(%error, "discarding unreadable state, starting fresh");
                State::new(fallback_year)
            }
        }
    }

    /// Mutable year bucket, created on first access.
    pub fn year_data(&mut self, year: i32) -> &mut YearData {
        self.year_data.entry(year).or_default()
    }

    /// The record for a day, created as a default normal day if absent.
    pub fn day_record(&mut self, year: i32, date: NaiveDate) -> &mut DayRecord {
        self.year_data(year).day_record(date)
    }

    /// Switch the focused year, clamped to [`MIN_YEAR`]..=[`MAX_YEAR`].
    /// Returns the effective year.
    pub fn set_year(&mut self, year: i32) -> i32 {
        self.year = clamp_year(year);
        self.year_data.entry(self.year).or_default();
        self.year
    }

    /// Set the hourly wage, rounded to a whole unit.
    pub fn set_hourly_wage(&mut self, wage: f64) -> Result<(), StoreError> {
        if !wage.is_finite() || wage < 0.0 {
            return Err(StoreError::InvalidWage(wage));
        }
        self.hourly_wage = wage.round();
        Ok(())
    }

    /// Add a company holiday from its canonical key. The date must belong to
    /// `year`; the set is kept sorted.
    pub fn add_company_holiday(&mut self, year: i32, key: &str) -> Result<NaiveDate, StoreError> {
        let date = parse_date_key(key).ok_or_else(|| StoreError::InvalidDateKey(key.to_string()))?;
        if date.year() != year {
            return Err(StoreError::YearMismatch { date, year });
        }
        let holidays = &mut self.year_data(year).company_holidays;
        holidays.insert(date);
        holidays.sort_unstable();
        Ok(date)
    }

    /// Remove a company holiday. Returns whether it was present.
    pub fn remove_company_holiday(&mut self, year: i32, date: &NaiveDate) -> bool {
        self.year_data(year).company_holidays.shift_remove(date)
    }

    /// Company holidays of `year` in chronological order. Backup payloads
    /// are not required to carry the set sorted.
    pub fn company_holidays_sorted(&self, year: i32) -> Vec<NaiveDate> {
        self.year_data
            .get(&year)
            .map(|data| data.company_holidays.iter().copied().sorted().collect())
            .unwrap_or_default()
    }

    /// Serialize the whole state as a versioned restore string.
    pub fn export_backup(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Backup {
            version: BACKUP_VERSION,
            data: self.clone(),
        })
    }

    /// Parse a restore string. A new state is returned only on success, so a
    /// failed import leaves the caller's existing state untouched.
    pub fn import_backup(raw: &str) -> Result<State, StoreError> {
        let backup: Backup = serde_json::from_str(raw)?;
        if backup.version != BACKUP_VERSION {
            warn!(version = backup.version, "rejecting backup");
            return Err(StoreError::BackupVersion(backup.version));
        }
        let mut state = backup.data;
        state.year = clamp_year(state.year);
        state.year_data.entry(state.year).or_default();
        Ok(state)
    }
}
