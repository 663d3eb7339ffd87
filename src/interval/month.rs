use std::fmt;
use std::fmt::Formatter;

use jiff::civil::{date, Date};
use jiff::ToSpan;

/// A calendar month, the publication granularity of the PIX open-data
/// endpoints.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Month(Date);

impl Month {
    pub fn new(year: i16, month: i8) -> Month {
        Month(date(year, month, 1))
    }

    /// Return the month that contains this date.
    pub fn containing(day: Date) -> Month {
        Month(day.first_of_month())
    }

    pub fn year(&self) -> i16 {
        self.0.year()
    }

    pub fn month(&self) -> i8 {
        self.0.month()
    }

    /// First day of the month, e.g. 2023-04-01.
    pub fn start_date(&self) -> Date {
        self.0
    }

    pub fn next(&self) -> Month {
        Month(self.0.saturating_add(1.month()))
    }

    /// The 6-digit period token, e.g. "202304".
    pub fn yyyymm(&self) -> String {
        format!("{}{:02}", self.0.year(), self.0.month())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.strftime("%Y-%m").to_string())
    }
}
