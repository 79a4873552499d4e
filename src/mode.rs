//! Picker mode configuration.
//!
//! A `PickerMode` fully describes the input surface a `ModalPicker` presents.
//! It is consumed at construction time; the mode of a picker cannot change
//! afterwards.

use chrono::{FixedOffset, Local, NaiveDateTime};

/// Which input surface the picker presents.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerMode {
    /// A date/time wheel.
    Calendar(CalendarParams),

    /// A single scrollable list of string values.
    ///
    /// `selected_index` pre-highlights a row; an out-of-bounds index is
    /// silently ignored and the highlight stays on row 0.
    SingleList {
        items: Vec<String>,
        selected_index: Option<usize>,
    },

    /// Several independently scrollable columns of string values.
    ///
    /// Pre-selection applies only when `selected_indexes` has exactly one
    /// entry per column; otherwise the whole pre-selection step is skipped.
    /// Individual out-of-bounds entries are silently ignored.
    MultiColumnList {
        columns: Vec<Vec<String>>,
        selected_indexes: Vec<Option<usize>>,
    },
}

/// What the date wheel lets the user dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    /// Year, month, day
    Date,
    /// Hour, minute
    Time,
    /// Year, month, day, hour, minute
    DateTime,
}

/// Configuration for `PickerMode::Calendar`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarParams {
    /// Value the wheel starts on (clamped into `minimum`..=`maximum`)
    pub selected: NaiveDateTime,

    /// Earliest dialable value, if any
    pub minimum: Option<NaiveDateTime>,

    /// Latest dialable value, if any
    pub maximum: Option<NaiveDateTime>,

    /// Which fields the wheel exposes
    pub mode: DateMode,

    /// Display-only UTC offset suffix shown next to the dialed value
    pub time_zone: Option<FixedOffset>,
}

impl CalendarParams {
    /// Parameters starting on the current local date/time, date-only fields,
    /// no bounds.
    pub fn new() -> Self {
        Self {
            selected: Local::now().naive_local(),
            minimum: None,
            maximum: None,
            mode: DateMode::Date,
            time_zone: None,
        }
    }

    pub fn with_selected(mut self, selected: NaiveDateTime) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_minimum(mut self, minimum: NaiveDateTime) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_maximum(mut self, maximum: NaiveDateTime) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn with_mode(mut self, mode: DateMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_time_zone(mut self, time_zone: FixedOffset) -> Self {
        self.time_zone = Some(time_zone);
        self
    }
}

impl Default for CalendarParams {
    fn default() -> Self {
        Self::new()
    }
}
