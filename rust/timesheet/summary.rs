use chrono::NaiveDate;
use indexmap::map::IndexMap;
use serde::Serialize;

use crate::calendars::{days_in_month, ymd, CompanyHolidaySet, DayClass, HolidayMap, WorkCalendar};
use crate::timesheet::metrics::{compute_day_metrics, fmt_hours, DayMetrics};
use crate::timesheet::record::DayRecord;

/// Aggregated work and pay figures for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Days planned as working days: weekends and holidays excluded.
    pub planned_days: u32,
    /// Days actually worked: paid leave or a complete punch pair.
    pub worked_days: u32,
    pub worked_minutes: u32,
    pub regular_hours: f64,
    /// Hours paid at the 25% premium.
    pub overtime_hours: f64,
    pub regular_pay: i64,
    /// The premium-only portion of pay.
    pub overtime_pay: i64,
    pub total_pay: i64,
}

impl MonthlySummary {
    pub fn total_hours(&self) -> f64 {
        f64::from(self.worked_minutes) / 60.0
    }

    /// Accumulate one day's metrics. Every field is an independent sum;
    /// there is no cross-day rule.
    pub fn add_day(&mut self, metrics: &DayMetrics) {
        if !metrics.is_off_day {
            self.planned_days += 1;
        }
        if metrics.has_work_record {
            self.worked_days += 1;
        }
        self.worked_minutes += metrics.worked_minutes;
        self.regular_hours += metrics.regular_hours;
        self.overtime_hours += metrics.overtime_hours;
        self.regular_pay += metrics.regular_pay;
        self.overtime_pay += metrics.overtime_pay;
        self.total_pay += metrics.total_pay;
    }

    /// `worked/planned` display, e.g. `18/21`.
    pub fn worked_days_text(&self) -> String {
        format!("{}/{}", self.worked_days, self.planned_days)
    }

    pub fn total_hours_text(&self) -> String {
        fmt_hours(self.total_hours())
    }

    pub fn regular_hours_text(&self) -> String {
        fmt_hours(self.regular_hours)
    }

    pub fn overtime_hours_text(&self) -> String {
        fmt_hours(self.overtime_hours)
    }

    pub fn regular_pay_text(&self) -> String {
        fmt_yen(self.regular_pay)
    }

    pub fn overtime_pay_text(&self) -> String {
        fmt_yen(self.overtime_pay)
    }

    pub fn total_pay_text(&self) -> String {
        fmt_yen(self.total_pay)
    }
}

/// Thousands-grouped currency display, e.g. `15,750 yen`.
fn fmt_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped} yen")
}

/// Fold per-day metrics over every day of `month`.
///
/// Days without a record are treated as empty normal days, so a month can be
/// summarized before anything was entered.
pub fn summarize_month(
    year: i32,
    month: u32,
    records: &IndexMap<NaiveDate, DayRecord>,
    holidays: &HolidayMap,
    company_holidays: &CompanyHolidaySet,
    hourly_wage: f64,
) -> MonthlySummary {
    let default_record = DayRecord::default();
    let mut summary = MonthlySummary::default();
    for day in 1..=days_in_month(year, month) {
        let date = ymd(year, month, day);
        let record = records.get(&date).unwrap_or(&default_record);
        let metrics = compute_day_metrics(
            record,
            holidays.name(&date),
            company_holidays.contains(&date),
            date,
            hourly_wage,
        );
        summary.add_day(&metrics);
    }
    summary
}

impl WorkCalendar {
    /// Metrics for one day under this calendar.
    pub fn day_metrics(&self, record: &DayRecord, date: NaiveDate, hourly_wage: f64) -> DayMetrics {
        compute_day_metrics(
            record,
            self.holiday_name(&date),
            self.is_company_holiday(&date),
            date,
            hourly_wage,
        )
    }

    /// Summary of one month of `records` under this calendar.
    pub fn summarize_month(
        &self,
        month: u32,
        records: &IndexMap<NaiveDate, DayRecord>,
        hourly_wage: f64,
    ) -> MonthlySummary {
        summarize_month(
            self.year(),
            month,
            records,
            self.holidays(),
            self.company_holidays(),
            hourly_wage,
        )
    }
}
