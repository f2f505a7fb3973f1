use serde::{Deserialize, Serialize};

/// Minutes since midnight of the standard shift start, used for one-tap
/// punch entry and as the attendance judgment baseline.
pub const BASELINE_IN_MINUTES: u32 = 9 * 60 + 30;
/// Minutes since midnight of the standard shift end.
pub const BASELINE_OUT_MINUTES: u32 = 18 * 60 + 30;
/// Fixed break deducted from every complete punch pair.
pub const BREAK_MINUTES: u32 = 60;
/// Minutes credited for a paid-leave day.
pub const PAID_LEAVE_MINUTES: u32 = 8 * 60;

/// Attendance category assigned to a single day.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A regular working day, judged against the standard shift.
    #[default]
    Normal,
    /// Paid leave: credited a full shift regardless of punches.
    PaidLeave,
    /// Work on an off-day: all worked time earns the 25% premium.
    HolidayWork,
}

/// A persisted attendance record for one day.
///
/// Punches are kept as the raw `HH:MM` text that was entered; text that does
/// not parse counts as an absent punch when metrics are derived. No ordering
/// between `in` and `out` is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Punch-in time as `HH:MM`, if entered.
    #[serde(rename = "in", default)]
    pub in_time: Option<String>,
    /// Punch-out time as `HH:MM`, if entered.
    #[serde(rename = "out", default)]
    pub out_time: Option<String>,
    #[serde(default)]
    pub category: Category,
    /// Free-form note attached to the day.
    #[serde(default)]
    pub note: String,
    /// Whether the note editor is expanded. Display state only.
    #[serde(default)]
    pub note_open: bool,
}

impl DayRecord {
    /// Record for a day with no entries yet.
    pub fn new() -> Self {
        DayRecord::default()
    }

    /// Change the category. Moving to paid leave clears both punches.
    pub fn set_category(&mut self, category: Category) {
        if category == Category::PaidLeave {
            self.in_time = None;
            self.out_time = None;
        }
        self.category = category;
    }

    /// Parsed punch-in minutes, if present and well-formed.
    pub fn in_minutes(&self) -> Option<u32> {
        self.in_time.as_deref().and_then(minutes_from_hhmm)
    }

    /// Parsed punch-out minutes, if present and well-formed.
    pub fn out_minutes(&self) -> Option<u32> {
        self.out_time.as_deref().and_then(minutes_from_hhmm)
    }
}

/// Minutes since midnight for a zero-padded `HH:MM` string.
///
/// Anything other than exactly two digits, a colon and two digits within
/// 00:00-23:59 returns `None`.
pub fn minutes_from_hhmm(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if ![bytes[0], bytes[1], bytes[3], bytes[4]]
        .iter()
        .all(u8::is_ascii_digit)
    {
        return None;
    }
    let hours: u32 = value[..2].parse().ok()?;
    let minutes: u32 = value[3..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// `HH:MM` text for minutes since midnight.
pub fn hhmm_from_minutes(total: u32) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}
