//! Calendar and clock calculators.
//!
//! The year/month/day breakdowns borrow from the previous calendar
//! month's actual length when the day component goes negative, matching
//! how people state ages, rather than assuming 30-day months.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};

use crate::clock::Clock;
use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("month in 1..=12");
    (next - first).num_days()
}

/// Calendar difference `from -> to` (requires `from <= to`) as whole
/// years, months, and leftover days.
fn ymd_between(from: NaiveDate, to: NaiveDate) -> (i32, i32, i64) {
    let mut years = to.year() - from.year();
    let mut months = to.month() as i32 - from.month() as i32;
    let mut days = to.day() as i64 - from.day() as i64;

    // Borrow from the actual length of the month(s) before `to`. One
    // borrow can fall short when the deficit crosses February, so keep
    // walking back; the loop runs at most twice.
    let (mut cursor_year, mut cursor_month) = (to.year(), to.month());
    while days < 0 {
        months -= 1;
        if cursor_month == 1 {
            cursor_year -= 1;
            cursor_month = 12;
        } else {
            cursor_month -= 1;
        }
        days += days_in_month(cursor_year, cursor_month);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }
    (years, months, days)
}

pub struct Age {
    clock: Arc<dyn Clock>,
}

impl Age {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Formula for Age {
    fn id(&self) -> &'static str {
        "age"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let dob = inputs.get_date("dob")?;
        let today = self.clock.today();
        if dob > today {
            return Err(EvalError::domain("date of birth must not be in the future"));
        }
        let (years, months, days) = ymd_between(dob, today);
        Ok(format!("Your Age: {years} Years, {months} Months, {days} Days"))
    }
}

pub struct AgeDifference;

impl Formula for AgeDifference {
    fn id(&self) -> &'static str {
        "age_difference"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let date1 = inputs.get_date("date1")?;
        let date2 = inputs.get_date("date2")?;
        let (earlier, later) = if date1 <= date2 { (date1, date2) } else { (date2, date1) };
        let (years, months, days) = ymd_between(earlier, later);
        Ok(format!("Age Difference: {years} Years, {months} Months, {days} Days"))
    }
}

pub struct DaysBetween;

impl Formula for DaysBetween {
    fn id(&self) -> &'static str {
        "days_between"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let date1 = inputs.get_date("date1")?;
        let date2 = inputs.get_date("date2")?;
        let days = (date2 - date1).num_days().abs();
        Ok(format!("Days Between: {days} days"))
    }
}

pub struct DateAdd;

impl Formula for DateAdd {
    fn id(&self) -> &'static str {
        "date_add"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let date = inputs.get_date("date")?;
        let days = inputs.get_i64("days")?;
        let shifted = date
            .checked_add_signed(chrono::Duration::days(days))
            .ok_or_else(|| EvalError::domain("resulting date is out of range"))?;
        Ok(format!("New Date: {}", shifted.format("%Y-%m-%d")))
    }
}

pub struct DayOfWeek;

impl Formula for DayOfWeek {
    fn id(&self) -> &'static str {
        "weekday"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let date = inputs.get_date("date")?;
        Ok(format!("{} falls on a {}", date.format("%Y-%m-%d"), date.format("%A")))
    }
}

pub struct LeapYear;

impl Formula for LeapYear {
    fn id(&self) -> &'static str {
        "leap_year"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let year = inputs.get_i64("year")?;
        let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        if leap {
            Ok(format!("{year} is a leap year"))
        } else {
            Ok(format!("{year} is not a leap year"))
        }
    }
}

pub struct Countdown {
    clock: Arc<dyn Clock>,
}

impl Countdown {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Formula for Countdown {
    fn id(&self) -> &'static str {
        "countdown"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let target = inputs.get_date("date")?;
        let today = self.clock.today();
        if target < today {
            return Err(EvalError::domain("the target date has already passed"));
        }
        let days = (target - today).num_days();
        Ok(format!("Days Until {}: {days} days", target.format("%Y-%m-%d")))
    }
}

pub struct NextBirthday {
    clock: Arc<dyn Clock>,
}

impl NextBirthday {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Formula for NextBirthday {
    fn id(&self) -> &'static str {
        "next_birthday"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let dob = inputs.get_date("dob")?;
        let today = self.clock.today();
        if dob > today {
            return Err(EvalError::domain("date of birth must not be in the future"));
        }
        // Feb 29 birthdays land on Mar 1 in common years
        let occurrence = |year: i32| {
            NaiveDate::from_ymd_opt(year, dob.month(), dob.day())
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists"))
        };
        let this_year = occurrence(today.year());
        if this_year == today {
            return Ok("Your birthday is today!".to_string());
        }
        let next = if this_year > today { this_year } else { occurrence(today.year() + 1) };
        let days = (next - today).num_days();
        Ok(format!("Days Until Next Birthday: {days} days"))
    }
}

pub struct WorkDays;

impl Formula for WorkDays {
    fn id(&self) -> &'static str {
        "work_days"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let date1 = inputs.get_date("date1")?;
        let date2 = inputs.get_date("date2")?;
        let (start, end) = if date1 <= date2 { (date1, date2) } else { (date2, date1) };

        // closed interval, Monday through Friday
        let mut count: i64 = 0;
        let mut day = start;
        loop {
            if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                count += 1;
            }
            if day == end {
                break;
            }
            day = day
                .succ_opt()
                .ok_or_else(|| EvalError::domain("date range is out of bounds"))?;
        }
        Ok(format!("Work Days: {count} days"))
    }
}

pub struct TimeZone;

impl Formula for TimeZone {
    fn id(&self) -> &'static str {
        "time_zone"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let time = inputs.get_time("time")?;
        let from_offset = inputs.get_f64("from_offset")?;
        let to_offset = inputs.get_f64("to_offset")?;
        for (name, offset) in [("from_offset", from_offset), ("to_offset", to_offset)] {
            if !(-12.0..=14.0).contains(&offset) {
                return Err(EvalError::domain(format!("{name} must be between -12 and +14")));
            }
        }

        let shift_minutes = ((to_offset - from_offset) * 60.0).round() as i64;
        let total = time.hour() as i64 * 60 + time.minute() as i64 + shift_minutes;
        let wrapped = total.rem_euclid(24 * 60);
        let day_shift = (total - wrapped) / (24 * 60);

        let suffix = match day_shift {
            0 => String::new(),
            1 => " (next day)".to_string(),
            -1 => " (previous day)".to_string(),
            n if n > 0 => format!(" (+{n} days)"),
            n => format!(" ({n} days)"),
        };
        Ok(format!("Converted Time: {:02}:{:02}{suffix}", wrapped / 60, wrapped % 60))
    }
}

pub struct SleepHours;

impl Formula for SleepHours {
    fn id(&self) -> &'static str {
        "sleep_hours"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let bedtime = inputs.get_time("bedtime")?;
        let waketime = inputs.get_time("waketime")?;
        let bed_minutes = bedtime.hour() as i64 * 60 + bedtime.minute() as i64;
        let wake_minutes = waketime.hour() as i64 * 60 + waketime.minute() as i64;
        // waking at or before bedtime means the next morning
        let duration = (wake_minutes - bed_minutes).rem_euclid(24 * 60);
        Ok(format!("Sleep Duration: {} hours {} minutes", duration / 60, duration % 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ymd_borrows_from_the_previous_month_length() {
        // 2025-01-31 -> 2025-03-01: day borrow crosses February (28 days)
        let from = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(ymd_between(from, to), (0, 0, 29));

        // borrow over a 31-day month
        let from = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(ymd_between(from, to), (0, 1, 1));
    }

    #[test]
    fn ymd_handles_whole_years() {
        let from = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let to = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
        assert_eq!(ymd_between(from, to), (30, 0, 0));
    }
}
