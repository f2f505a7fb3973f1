//! This is the documentation for kintai-rs: the attendance and wage rule
//! engine behind a personal timesheet. It computes Japanese national holiday
//! calendars, derives per-day work/judgment/pay metrics from punch records,
//! and folds those into monthly summaries.

#[cfg(test)]
mod tests;

pub mod calendars;
pub use crate::calendars::{compute_holidays, ymd, DayClass, HolidayMap, WorkCalendar};

pub mod timesheet;
pub use crate::timesheet::{
    compute_day_metrics, summarize_month, Category, DayMetrics, DayRecord, Judgement,
    JudgementTone, MonthlySummary,
};

pub mod store;
pub use crate::store::{Json, State, StoreError, YearData};
