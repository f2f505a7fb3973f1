use chrono::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::timesheet::record::{
    Category, DayRecord, BASELINE_IN_MINUTES, BASELINE_OUT_MINUTES, BREAK_MINUTES,
    PAID_LEAVE_MINUTES,
};

/// Attendance judgment label relative to the standard shift.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgement {
    /// Punched in after the shift start.
    Late,
    /// Punched in before the shift start.
    EarlyArrival,
    /// Punched out before the shift end.
    EarlyLeave,
    /// Punched out after the shift end.
    Overtime,
    /// No punch deviates from the shift.
    OnTime,
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Judgement::Late => "late",
            Judgement::EarlyArrival => "early arrival",
            Judgement::EarlyLeave => "early leave",
            Judgement::Overtime => "overtime",
            Judgement::OnTime => "on-time",
        };
        f.write_str(label)
    }
}

/// Overall tone of a day's judgment labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgementTone {
    /// On time, or early arrival only.
    Positive,
    /// At least one of late, early leave or overtime.
    Warning,
}

/// Derived metrics for a single day. Recomputed on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMetrics {
    pub is_saturday: bool,
    /// Weekend, national holiday or company holiday.
    pub is_off_day: bool,
    /// Sunday or any holiday; Saturday alone is excluded.
    pub is_sun_or_holiday: bool,
    pub is_national_holiday: bool,
    pub is_company_holiday: bool,
    /// Display name of the national holiday, if any.
    pub holiday_name: Option<String>,
    pub category: Category,
    /// Whether punch editing is offered for this day.
    pub time_entry_enabled: bool,
    /// Judgment labels; empty when no punch exists or the category hides
    /// them.
    pub judgement: Vec<Judgement>,
    pub judgement_tone: Option<JudgementTone>,
    pub worked_minutes: u32,
    /// True for paid leave, or when both punches are present.
    pub has_work_record: bool,
    /// Hours display, including the `8.0h` / `off` / `-` placeholders.
    pub worked_text: String,
    pub regular_hours: f64,
    /// Hours paid at the 25% premium.
    pub overtime_hours: f64,
    pub regular_pay: i64,
    /// The premium-only portion of pay.
    pub overtime_pay: i64,
    pub total_pay: i64,
}

/// One-decimal hour display, e.g. `7.5h`.
pub(crate) fn fmt_hours(hours: f64) -> String {
    format!("{:.1}h", (hours * 10.0).round() / 10.0)
}

/// Derive the full metrics for one day.
///
/// Pure and total: malformed punch text counts as an absent punch and no
/// input combination fails. `holiday_name` is the national-holiday lookup
/// for `date` and doubles as the holiday flag; weekday facts come from
/// `date` itself.
pub fn compute_day_metrics(
    record: &DayRecord,
    holiday_name: Option<&str>,
    is_company_holiday: bool,
    date: NaiveDate,
    hourly_wage: f64,
) -> DayMetrics {
    let weekday = date.weekday();
    let is_saturday = weekday == Weekday::Sat;
    let is_sunday = weekday == Weekday::Sun;
    let is_national_holiday = holiday_name.is_some();
    let is_off_day = is_national_holiday || is_company_holiday || is_saturday || is_sunday;
    let is_sun_or_holiday = is_sunday || is_national_holiday || is_company_holiday;

    let category = record.category;

    // paid leave never edits punches; an off-day only does for holiday work
    let time_entry_enabled =
        category != Category::PaidLeave && (!is_off_day || category == Category::HolidayWork);

    let in_minutes = record.in_minutes();
    let out_minutes = record.out_minutes();

    let (worked_minutes, has_work_record) = match category {
        Category::PaidLeave => (PAID_LEAVE_MINUTES, true),
        _ => match (in_minutes, out_minutes) {
            (Some(punch_in), Some(punch_out)) => {
                let raw = i64::from(punch_out) - i64::from(punch_in) - i64::from(BREAK_MINUTES);
                (raw.max(0) as u32, true)
            }
            _ => (0, false),
        },
    };

    // judgment is shown for normal days only, and only once a punch exists
    let mut judgement = Vec::new();
    let mut judgement_tone = None;
    if category == Category::Normal && (in_minutes.is_some() || out_minutes.is_some()) {
        if let Some(minutes) = in_minutes {
            if minutes > BASELINE_IN_MINUTES {
                judgement.push(Judgement::Late);
            }
            if minutes < BASELINE_IN_MINUTES {
                judgement.push(Judgement::EarlyArrival);
            }
        }
        if let Some(minutes) = out_minutes {
            if minutes < BASELINE_OUT_MINUTES {
                judgement.push(Judgement::EarlyLeave);
            }
            if minutes > BASELINE_OUT_MINUTES {
                judgement.push(Judgement::Overtime);
            }
        }
        if judgement.is_empty() {
            judgement.push(Judgement::OnTime);
        }
        let warning = judgement.iter().any(|label| {
            matches!(
                label,
                Judgement::Late | Judgement::EarlyLeave | Judgement::Overtime
            )
        });
        judgement_tone = Some(if warning {
            JudgementTone::Warning
        } else {
            JudgementTone::Positive
        });
    }

    // each reported figure rounds its own raw product; totals are never
    // derived from already-rounded parts
    let hours = f64::from(worked_minutes) / 60.0;
    let (regular_hours, overtime_hours, regular_pay, overtime_pay, total_pay) = match category {
        Category::PaidLeave => {
            let regular_pay = (8.0 * hourly_wage).round() as i64;
            (8.0, 0.0, regular_pay, 0, regular_pay)
        }
        Category::HolidayWork => {
            // all worked time is premium; regular_pay carries the
            // non-premium component for breakdown displays
            let base = hours * hourly_wage;
            (
                0.0,
                hours,
                base.round() as i64,
                (base * 0.25).round() as i64,
                (base + base * 0.25).round() as i64,
            )
        }
        Category::Normal => {
            let regular_hours = hours.min(8.0);
            let overtime_hours = (hours - 8.0).max(0.0);
            (
                regular_hours,
                overtime_hours,
                (regular_hours * hourly_wage).round() as i64,
                (overtime_hours * hourly_wage * 0.25).round() as i64,
                (hours * hourly_wage + overtime_hours * hourly_wage * 0.25).round() as i64,
            )
        }
    };

    let worked_text = match category {
        Category::PaidLeave => "8.0h".to_string(),
        _ if has_work_record => fmt_hours(hours),
        _ if is_off_day && category != Category::HolidayWork => "off".to_string(),
        _ => "-".to_string(),
    };

    DayMetrics {
        is_saturday,
        is_off_day,
        is_sun_or_holiday,
        is_national_holiday,
        is_company_holiday,
        holiday_name: holiday_name.map(str::to_string),
        category,
        time_entry_enabled,
        judgement,
        judgement_tone,
        worked_minutes,
        has_work_record,
        worked_text,
        regular_hours,
        overtime_hours,
        regular_pay,
        overtime_pay,
        total_pay,
    }
}
