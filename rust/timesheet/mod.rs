//! Derive per-day work, judgment and pay metrics from punch records, and
//! fold a month of them into a summary.
//!
//! ### Per-day metrics
//!
//! [`compute_day_metrics`] is a pure transform of a [`DayRecord`] plus the
//! day's calendar facts. Malformed punch text is treated as an absent punch,
//! never as an error.
//!
//! ```rust
//! use kintai::calendars::ymd;
//! use kintai::timesheet::{compute_day_metrics, DayRecord};
//!
//! let mut record = DayRecord::new();
//! record.in_time = Some("09:30".into());
//! record.out_time = Some("20:30".into());
//! // Tuesday 2nd April 2024, no holiday, 1500/h
//! let metrics = compute_day_metrics(&record, None, false, ymd(2024, 4, 2), 1500.0);
//! assert_eq!(metrics.worked_minutes, 600); // one hour of break deducted
//! assert_eq!(metrics.overtime_hours, 2.0);
//! assert_eq!(metrics.total_pay, 15750);
//! ```
//!
//! ### Monthly summary
//!
//! [`summarize_month`] folds the same metrics over every day of a month;
//! there is no cross-day rule, so the summary equals the per-day sums.

mod record;
pub use crate::timesheet::record::{
    hhmm_from_minutes, minutes_from_hhmm, Category, DayRecord, BASELINE_IN_MINUTES,
    BASELINE_OUT_MINUTES, BREAK_MINUTES, PAID_LEAVE_MINUTES,
};

mod metrics;
pub use crate::timesheet::metrics::{compute_day_metrics, DayMetrics, Judgement, JudgementTone};

mod summary;
pub use crate::timesheet::summary::{summarize_month, MonthlySummary};

mod serde;
