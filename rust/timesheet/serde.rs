use crate::calendars::{HolidayMap, WorkCalendar};
use crate::store::Json;
use crate::timesheet::{Category, DayRecord};

impl Json for HolidayMap {}
impl Json for WorkCalendar {}
impl Json for Category {}
impl Json for DayRecord {}
