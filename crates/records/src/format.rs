//! Display formatting for dates, names and patient ages.
//!
//! All functions here are pure. Anything relative to "now" takes an explicit
//! `as_of` date so callers (and tests) control the clock.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

/// Format a timestamp for display, `DD/MM/YYYY h:mm AM/PM`.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %-I:%M %p").to_string()
}

/// Join name parts with single spaces, collapsing stray whitespace.
pub fn format_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A patient age broken down for display.
///
/// `months` and `days` are the remainder past whole years and whole months
/// respectively, not totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatientAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl PatientAge {
    /// Short form for badges and summaries: `34y`, `3mo 12d`, `6d`.
    ///
    /// Ages under a year show months with a day remainder; under a month,
    /// days only.
    pub fn abbreviated(&self) -> String {
        if self.years >= 1 {
            format!("{}y", self.years)
        } else if self.months >= 1 {
            if self.days > 0 {
                format!("{}mo {}d", self.months, self.days)
            } else {
                format!("{}mo", self.months)
            }
        } else {
            format!("{}d", self.days)
        }
    }

    /// Long form for record pages: `34 years`, `3 months 12 days`, `6 days`.
    pub fn long(&self) -> String {
        fn unit(value: u32, singular: &str) -> String {
            if value == 1 {
                format!("1 {singular}")
            } else {
                format!("{value} {singular}s")
            }
        }

        if self.years >= 1 {
            unit(self.years, "year")
        } else if self.months >= 1 {
            if self.days > 0 {
                format!("{} {}", unit(self.months, "month"), unit(self.days, "day"))
            } else {
                unit(self.months, "month")
            }
        } else {
            unit(self.days, "day")
        }
    }
}

/// Calendar age of a patient born on `date_of_birth`, as of `as_of`.
///
/// Month arithmetic clamps to the end of shorter months, so a patient born
/// on the 31st turns one month old on the 28th/29th/30th where needed.
/// Returns a zero age if `as_of` precedes the date of birth.
pub fn patient_age(date_of_birth: NaiveDate, as_of: NaiveDate) -> PatientAge {
    if as_of <= date_of_birth {
        return PatientAge {
            years: 0,
            months: 0,
            days: 0,
        };
    }

    let mut total_months =
        (as_of.year() - date_of_birth.year()) * 12 + as_of.month() as i32
            - date_of_birth.month() as i32;
    if as_of.day() < date_of_birth.day() {
        total_months -= 1;
    }
    let total_months = total_months.max(0) as u32;

    let anchor = date_of_birth
        .checked_add_months(Months::new(total_months))
        .unwrap_or(date_of_birth);
    let days = (as_of - anchor).num_days().max(0) as u32;

    PatientAge {
        years: total_months / 12,
        months: total_months % 12,
        days,
    }
}
