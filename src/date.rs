//! Date/time wheel surface.
//!
//! Keyboard-driven counterpart of a spinning date wheel: the dialed value is
//! shown as discrete fields, one of which has focus. Stepping a field wraps
//! within the field's own range (months 1-12, hours 0-23, ...) and the
//! resulting value is clamped into the configured minimum/maximum bounds.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::mode::{CalendarParams, DateMode};

/// One dialable field of the date wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

const DATE_FIELDS: &[DateField] = &[DateField::Year, DateField::Month, DateField::Day];
const TIME_FIELDS: &[DateField] = &[DateField::Hour, DateField::Minute];
const DATE_TIME_FIELDS: &[DateField] = &[
    DateField::Year,
    DateField::Month,
    DateField::Day,
    DateField::Hour,
    DateField::Minute,
];

/// State of the calendar surface.
#[derive(Debug, Clone)]
pub struct DateWheel {
    value: NaiveDateTime,
    minimum: Option<NaiveDateTime>,
    maximum: Option<NaiveDateTime>,
    mode: DateMode,
    time_zone: Option<chrono::FixedOffset>,
    focused: usize,
}

impl DateWheel {
    pub fn new(params: CalendarParams) -> Self {
        let mut wheel = Self {
            value: params.selected,
            minimum: params.minimum,
            maximum: params.maximum,
            mode: params.mode,
            time_zone: params.time_zone,
            focused: 0,
        };
        wheel.value = wheel.clamp(wheel.value);
        wheel
    }

    /// The currently dialed value.
    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    pub fn mode(&self) -> DateMode {
        self.mode
    }

    /// Display-only UTC offset suffix, if configured.
    pub fn time_zone(&self) -> Option<chrono::FixedOffset> {
        self.time_zone
    }

    /// The fields this wheel exposes, in display order.
    pub fn fields(&self) -> &'static [DateField] {
        match self.mode {
            DateMode::Date => DATE_FIELDS,
            DateMode::Time => TIME_FIELDS,
            DateMode::DateTime => DATE_TIME_FIELDS,
        }
    }

    pub fn focused_field(&self) -> DateField {
        self.fields()[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focused = self.focused.checked_sub(1).unwrap_or(len - 1);
    }

    /// Step the focused field by `delta`, wrapping within the field and
    /// clamping the result into the configured bounds.
    pub fn step(&mut self, delta: i32) {
        let stepped = step_field(self.value, self.focused_field(), delta);
        self.value = self.clamp(stepped);
    }

    fn clamp(&self, value: NaiveDateTime) -> NaiveDateTime {
        let mut value = value;
        if let Some(min) = self.minimum {
            if value < min {
                value = min;
            }
        }
        if let Some(max) = self.maximum {
            if value > max {
                value = max;
            }
        }
        value
    }
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Rebuild `value` with the given calendar date, clamping the day to the
/// month's length (stepping from Jan 31 to February lands on Feb 28/29).
fn with_ymd(value: NaiveDateTime, year: i32, month: u32, day: u32) -> NaiveDateTime {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| NaiveDateTime::new(date, value.time()))
        .unwrap_or(value)
}

fn with_hm(value: NaiveDateTime, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveTime::from_hms_opt(hour, minute, value.second())
        .map(|time| NaiveDateTime::new(value.date(), time))
        .unwrap_or(value)
}

fn step_field(value: NaiveDateTime, field: DateField, delta: i32) -> NaiveDateTime {
    match field {
        DateField::Year => {
            let year = (value.year() + delta).clamp(1, 9999);
            with_ymd(value, year, value.month(), value.day())
        }
        DateField::Month => {
            let month0 = (value.month0() as i32 + delta).rem_euclid(12) as u32;
            with_ymd(value, value.year(), month0 + 1, value.day())
        }
        DateField::Day => {
            let len = days_in_month(value.year(), value.month()) as i32;
            let day0 = (value.day0() as i32 + delta).rem_euclid(len) as u32;
            with_ymd(value, value.year(), value.month(), day0 + 1)
        }
        DateField::Hour => {
            let hour = (value.hour() as i32 + delta).rem_euclid(24) as u32;
            with_hm(value, hour, value.minute())
        }
        DateField::Minute => {
            let minute = (value.minute() as i32 + delta).rem_euclid(60) as u32;
            with_hm(value, value.hour(), minute)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn wheel(selected: NaiveDateTime, mode: DateMode) -> DateWheel {
        DateWheel::new(CalendarParams::new().with_selected(selected).with_mode(mode))
    }

    #[test]
    fn test_month_step_clamps_day() {
        let mut w = wheel(at(2026, 1, 31, 0, 0), DateMode::Date);
        w.focus_next(); // month
        w.step(1);
        assert_eq!(w.value(), at(2026, 2, 28, 0, 0));
    }

    #[test]
    fn test_month_wraps_without_changing_year() {
        let mut w = wheel(at(2026, 12, 10, 0, 0), DateMode::Date);
        w.focus_next(); // month
        w.step(1);
        assert_eq!(w.value(), at(2026, 1, 10, 0, 0));
    }

    #[test]
    fn test_day_wraps_within_month() {
        let mut w = wheel(at(2026, 4, 30, 0, 0), DateMode::Date);
        w.focus_next();
        w.focus_next(); // day
        w.step(1);
        assert_eq!(w.value(), at(2026, 4, 1, 0, 0));
    }

    #[test]
    fn test_time_mode_exposes_time_fields() {
        let mut w = wheel(at(2026, 8, 23, 23, 59), DateMode::Time);
        assert_eq!(w.fields(), &[DateField::Hour, DateField::Minute][..]);
        w.step(1);
        assert_eq!(w.value(), at(2026, 8, 23, 0, 59));
        w.focus_next();
        w.step(1);
        assert_eq!(w.value(), at(2026, 8, 23, 0, 0));
    }

    #[test]
    fn test_bounds_clamp_stepping() {
        let params = CalendarParams::new()
            .with_selected(at(2026, 8, 23, 0, 0))
            .with_minimum(at(2026, 8, 20, 0, 0))
            .with_maximum(at(2026, 8, 25, 0, 0));
        let mut w = DateWheel::new(params);
        // year +1 overshoots the maximum
        w.step(1);
        assert_eq!(w.value(), at(2026, 8, 25, 0, 0));
        w.step(-1);
        assert_eq!(w.value(), at(2026, 8, 20, 0, 0));
    }

    #[test]
    fn test_initial_value_clamped_into_bounds() {
        let params = CalendarParams::new()
            .with_selected(at(2020, 1, 1, 0, 0))
            .with_minimum(at(2026, 1, 1, 0, 0));
        let w = DateWheel::new(params);
        assert_eq!(w.value(), at(2026, 1, 1, 0, 0));
    }

    #[test]
    fn test_field_focus_wraps() {
        let mut w = wheel(at(2026, 8, 23, 0, 0), DateMode::Date);
        assert_eq!(w.focused_field(), DateField::Year);
        w.focus_prev();
        assert_eq!(w.focused_field(), DateField::Day);
        w.focus_next();
        assert_eq!(w.focused_field(), DateField::Year);
    }
}
