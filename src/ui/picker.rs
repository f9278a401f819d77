use chrono::NaiveDate;

use crate::{types::DateInputs, utils};

/// Length of the default trailing window in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 9;

/// Initializes and constrains the two date inputs.
///
/// Allowed values run from the first day of the APOD archive to `today`.
#[derive(Debug, Clone, Copy)]
pub struct DateRangePicker {
    today: NaiveDate,
}

impl DateRangePicker {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// A picker anchored on the current UTC date.
    pub fn for_today() -> Self {
        Self::new(utils::today())
    }

    pub fn min(&self) -> NaiveDate {
        utils::archive_epoch()
    }

    pub fn max(&self) -> NaiveDate {
        self.today
    }

    pub fn default_range(&self) -> (NaiveDate, NaiveDate) {
        let (start, end) = utils::trailing_window(self.today, DEFAULT_WINDOW_DAYS);
        (start.max(self.min()), end)
    }

    /// Resets both inputs to the default window and sets their bounds.
    /// Running it again leaves the inputs exactly as one run does.
    pub fn setup(&self, inputs: &mut DateInputs) {
        let (start, end) = self.default_range();
        inputs.min = Some(self.min());
        inputs.max = Some(self.max());
        inputs.start = utils::format_date(start);
        inputs.end = utils::format_date(end);
    }

    pub fn select_start(&self, inputs: &mut DateInputs, value: &str) {
        inputs.start = self.constrain(value);
    }

    pub fn select_end(&self, inputs: &mut DateInputs, value: &str) {
        inputs.end = self.constrain(value);
    }

    /// Clamps a parseable date into the allowed bounds. Anything else is kept
    /// verbatim so validation can reject it.
    pub fn constrain(&self, value: &str) -> String {
        match utils::parse_date(value) {
            Some(date) => utils::format_date(utils::clamp_date(date, self.min(), self.max())),
            None => value.to_string(),
        }
    }
}
