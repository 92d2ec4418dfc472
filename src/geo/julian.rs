//! Calendar date to Julian Day conversion.
//!
//! Julian Days are a continuous count of days whose integer boundaries fall at
//! noon UTC. Dates before 1582-10-15 are read as proleptic Julian calendar
//! dates, later ones as Gregorian, matching the historical civil switch.

use chrono::{Datelike, NaiveDate};

use crate::constants::{
    GREGORIAN_SWITCH_DAY, GREGORIAN_SWITCH_MONTH, GREGORIAN_SWITCH_YEAR,
    JULIAN_DAY_CALENDAR_OFFSET,
};

/// A proleptic civil calendar date with an optional fractional day.
///
/// Year 0 is 1 B.C., year -9 is 10 B.C. The day may carry a fraction for
/// sub-day precision (`4.81` is 19:26:24 on the 4th). Field order makes the
/// derived `PartialOrd` lexicographic, which is the civil ordering.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CivilDate {
    pub year: i32,
    /// Month number, January = 1. Not validated.
    pub month: u32,
    pub day: f64,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Whether this date falls on or after the Gregorian switch (1582-10-15).
    pub fn is_gregorian(&self) -> bool {
        !(self.year < GREGORIAN_SWITCH_YEAR
            || (self.year == GREGORIAN_SWITCH_YEAR && self.month < GREGORIAN_SWITCH_MONTH)
            || (self.year == GREGORIAN_SWITCH_YEAR
                && self.month == GREGORIAN_SWITCH_MONTH
                && self.day < GREGORIAN_SWITCH_DAY))
    }

    /// Julian Day of this date. See [`to_julian_day`].
    pub fn julian_day(&self) -> f64 {
        to_julian_day(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day() as f64)
    }
}

/// Convert a civil date into its Julian Day.
///
/// January and February are counted as months 13 and 14 of the previous
/// year so that the leap day sits at the end of the counting year. The
/// Gregorian correction applies from 1582-10-15 onward.
///
/// No validation is performed: a month outside 1-12 yields a meaningless
/// but finite number.
///
/// # Arguments
/// * `year` - Astronomical year (0 = 1 B.C.)
/// * `month` - Month, January = 1
/// * `day` - Day of month, may contain a fractional part
///
/// # Examples
/// ```
/// use sunclock::to_julian_day;
/// assert_eq!(to_julian_day(2000, 1, 1.5), 2451545.0);
/// assert_eq!(to_julian_day(1582, 10, 15.0) - to_julian_day(1582, 10, 4.0), 1.0);
/// ```
pub fn to_julian_day(year: i32, month: u32, day: f64) -> f64 {
    let (yearp, monthp) = if month == 1 || month == 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let b = if CivilDate::new(year, month, day).is_gregorian() {
        let a = (yearp / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    } else {
        0.0
    };

    // Truncation toward zero; the 0.75 shift keeps negative years on the right day
    let c = if yearp < 0.0 {
        (365.25 * yearp - 0.75).trunc()
    } else {
        (365.25 * yearp).trunc()
    };

    let d = (30.6001 * (monthp + 1.0)).trunc();

    b + c + d + day + JULIAN_DAY_CALENDAR_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_epoch() {
        assert_eq!(to_julian_day(2000, 1, 1.5), 2451545.0);
    }

    #[test]
    fn test_fractional_day() {
        // Sputnik launch, 1957-10-04.81
        let jd = to_julian_day(1957, 10, 4.81);
        assert!((jd - 2436116.31).abs() < 1e-6, "got {}", jd);
    }

    #[test]
    fn test_gregorian_switch_is_continuous() {
        let last_julian = to_julian_day(1582, 10, 4.0);
        let first_gregorian = to_julian_day(1582, 10, 15.0);

        assert_eq!(last_julian, 2299159.5);
        assert_eq!(first_gregorian, 2299160.5);
        assert_eq!(first_gregorian - last_julian, 1.0);
    }

    #[test]
    fn test_switch_boundary_classification() {
        assert!(!CivilDate::new(1582, 10, 14.99).is_gregorian());
        assert!(CivilDate::new(1582, 10, 15.0).is_gregorian());
        assert!(!CivilDate::new(1582, 9, 30.0).is_gregorian());
        assert!(CivilDate::new(1582, 11, 1.0).is_gregorian());
        assert!(!CivilDate::new(1000, 12, 31.0).is_gregorian());
    }

    #[test]
    fn test_negative_and_zero_years() {
        assert_eq!(to_julian_day(0, 1, 1.0), 1721057.5);
        assert_eq!(to_julian_day(-100, 3, 1.0), 1684592.5);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(to_julian_day(2024, 2, 29.0), 2460369.5);
        assert_eq!(to_julian_day(2024, 3, 1.0) - to_julian_day(2024, 2, 29.0), 1.0);
    }

    #[test]
    fn test_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 20).unwrap();
        let civil = CivilDate::from(date);

        assert_eq!(civil, CivilDate::new(2020, 6, 20.0));
        assert_eq!(civil.julian_day(), to_julian_day(2020, 6, 20.0));
    }

    #[test]
    fn test_malformed_month_does_not_panic() {
        assert!(to_julian_day(2024, 0, 1.0).is_finite());
        assert!(to_julian_day(2024, 13, 1.0).is_finite());
    }
}
