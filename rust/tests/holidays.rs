use crate::calendars::{compute_holidays, resolve_derived, ymd, DayClass, WorkCalendar};
use chrono::Datelike;

#[test]
fn every_supported_year_computes() {
    for year in 2000..=2099 {
        let holidays = compute_holidays(year);
        assert!(holidays.len() >= 14, "year {year} lost holidays");
        for (date, name) in holidays.iter() {
            assert_eq!(date.year(), year, "{date} leaked out of {year}");
            assert!(!name.is_empty(), "{date} has an empty name");
        }
    }
}

#[test]
fn resolution_is_a_fixed_point() {
    for year in [2015, 2019, 2020, 2021, 2024, 2026, 2033] {
        let resolved = compute_holidays(year);
        let again = resolve_derived(year, resolved.names.clone());
        assert_eq!(resolved.names, again, "extra pass changed year {year}");
    }
}

#[test]
fn recomputation_is_deterministic() {
    for year in [2019, 2021, 2026] {
        assert_eq!(compute_holidays(year), compute_holidays(year));
    }
}

#[test]
fn olympic_and_accession_years() {
    let y2020 = compute_holidays(2020);
    assert_eq!(y2020.name(&ymd(2020, 7, 23)), Some("Marine Day"));
    assert_eq!(y2020.name(&ymd(2020, 7, 24)), Some("Sports Day"));
    assert_eq!(y2020.name(&ymd(2020, 8, 10)), Some("Mountain Day"));

    let y2021 = compute_holidays(2021);
    assert_eq!(y2021.name(&ymd(2021, 7, 22)), Some("Marine Day"));
    assert_eq!(y2021.name(&ymd(2021, 7, 23)), Some("Sports Day"));
    assert_eq!(y2021.name(&ymd(2021, 8, 8)), Some("Mountain Day"));

    let y2019 = compute_holidays(2019);
    assert_eq!(y2019.name(&ymd(2019, 5, 1)), Some("Accession Day"));
    assert_eq!(y2019.name(&ymd(2019, 4, 30)), Some("holiday"));
    assert_eq!(y2019.name(&ymd(2019, 5, 2)), Some("holiday"));
}

#[test]
fn substitute_skips_weekends_and_existing_holidays() {
    // Constitution Memorial Day 2020 falls on a Sunday; Monday and Tuesday
    // are already holidays, so the substitute lands on Wednesday the 6th.
    let holidays = compute_holidays(2020);
    assert_eq!(holidays.name(&ymd(2020, 5, 6)), Some("substitute holiday"));
    // and the derived day never overwrites an existing entry
    assert_eq!(holidays.name(&ymd(2020, 5, 4)), Some("Greenery Day"));
    assert_eq!(holidays.name(&ymd(2020, 5, 5)), Some("Children's Day"));
}

#[test]
fn saturday_is_off_but_not_sun_or_holiday() {
    let cal = WorkCalendar::for_year(2024);
    let saturday = ymd(2024, 4, 6);
    assert!(cal.is_saturday(&saturday));
    assert!(cal.is_off_day(&saturday));
    assert!(!cal.is_sun_or_holiday(&saturday));
    assert!(!cal.is_working_day(&saturday));
}
