//! Sunrise and sunset from the closed-form sunrise equation.
//!
//! The calculation approximates the Sun's position with a mean anomaly, a
//! three-term equation of center and a fixed axial tilt, then solves the
//! hour angle at which the upper solar limb touches the horizon (a fixed
//! -0.83° elevation covering refraction and the disc radius). Everything is
//! a pure function of its inputs, so results are reproducible bit for bit and
//! safe to compute from any thread.
//!
//! Polar conditions are reported as errors instead of fallback times: when
//! the Sun stays below the horizon all day there is no sunrise, and when it
//! stays above there is no sunset.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::julian::CivilDate;
use crate::constants::{
    CENTER_COEFFICIENTS, EARTH_TILT_DEG, EPOCH_YEAR, J2000_JULIAN_DAY,
    MEAN_ANOMALY_AT_EPOCH_DEG, MEAN_ANOMALY_RATE_DEG_PER_DAY, MEAN_SOLAR_NOON_CORRECTION,
    PERIHELION_ARGUMENT_DEG, SUN_DISC_ELEVATION_DEG, TRANSIT_ANOMALY_COEFFICIENT,
    TRANSIT_LONGITUDE_COEFFICIENT,
};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Reasons a sunrise/sunset pair cannot be produced.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SunEventError {
    /// The Sun stays below the horizon for the whole day (polar night).
    #[error("The sun never rises on this location (on this date)")]
    NoSunrise,

    /// The Sun stays above the horizon for the whole day (midnight sun).
    #[error("The sun never sets on this location (on this date)")]
    NoSunset,

    /// The event time is not a finite instant within the calendar range.
    ///
    /// Only reachable through degenerate input such as NaN coordinates.
    #[error("Julian Day {julian_day} cannot be represented as a calendar timestamp")]
    TimestampOutOfRange { julian_day: f64 },
}

/// Sunrise and sunset for one location and date.
///
/// Both timestamps are naive: they carry the offset that was requested
/// (UTC when the offset is zero) without recording it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarEventResult {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

impl SolarEventResult {
    /// Time between sunrise and sunset.
    pub fn day_length(&self) -> Duration {
        self.sunset.signed_duration_since(self.sunrise)
    }
}

/// Intermediate quantities of one sunrise equation evaluation.
///
/// Angles are in degrees, instants are Julian Days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Julian Day of the requested calendar date (midnight, noon-referenced count)
    pub julian_day: f64,
    pub mean_anomaly_deg: f64,
    pub equation_of_center_deg: f64,
    pub ecliptic_longitude_deg: f64,
    /// Julian Day of local solar noon
    pub transit_julian_day: f64,
    pub declination_deg: f64,
    /// Cosine of the sunrise hour angle; outside [-1, 1] in polar conditions
    pub cos_hour_angle: f64,
}

impl SolarPosition {
    /// Sunrise hour angle in degrees, or the polar condition that prevents it.
    ///
    /// A cosine above 1 means no sunrise, below -1 means no sunset; the
    /// checks run in that order.
    pub fn hour_angle_deg(&self) -> Result<f64, SunEventError> {
        if self.cos_hour_angle > 1.0 {
            Err(SunEventError::NoSunrise)
        } else if self.cos_hour_angle < -1.0 {
            Err(SunEventError::NoSunset)
        } else {
            Ok(self.cos_hour_angle.acos().to_degrees())
        }
    }
}

/// Evaluate the solar position chain for a location and date.
///
/// This is the shared front half of [`solar_events`]: days since J2000,
/// longitude-corrected transit, mean anomaly, equation of center, ecliptic
/// longitude, declination and the hour angle cosine. No validation is done;
/// out-of-range coordinates simply produce degenerate values.
///
/// # Arguments
/// * `lat_deg` - Latitude in decimal degrees, north positive
/// * `lon_deg` - Longitude in decimal degrees, east positive
/// * `date` - Reference calendar date
pub fn solar_position(lat_deg: f64, lon_deg: f64, date: impl Into<CivilDate>) -> SolarPosition {
    let julian_day = date.into().julian_day();

    let n = julian_day - J2000_JULIAN_DAY + MEAN_SOLAR_NOON_CORRECTION;
    let jstar = n - lon_deg / 360.0;

    // `%` on f64 keeps the sign of the dividend, so pre-2000 dates stay negative
    let mean_anomaly_deg =
        (MEAN_ANOMALY_AT_EPOCH_DEG + MEAN_ANOMALY_RATE_DEG_PER_DAY * jstar) % 360.0;
    let m = mean_anomaly_deg.to_radians();

    let [c1, c2, c3] = CENTER_COEFFICIENTS;
    let equation_of_center_deg = c1 * m.sin() + c2 * (2.0 * m).sin() + c3 * (3.0 * m).sin();

    let ecliptic_longitude_deg =
        (mean_anomaly_deg + equation_of_center_deg + 180.0 + PERIHELION_ARGUMENT_DEG) % 360.0;
    let lambda = ecliptic_longitude_deg.to_radians();

    let transit_julian_day = J2000_JULIAN_DAY + 0.5 + jstar
        + TRANSIT_ANOMALY_COEFFICIENT * m.sin()
        - TRANSIT_LONGITUDE_COEFFICIENT * (2.0 * lambda).sin();

    let sin_delta = lambda.sin() * EARTH_TILT_DEG.to_radians().sin();
    let delta = sin_delta.asin();

    let lat = lat_deg.to_radians();
    let cos_hour_angle = (SUN_DISC_ELEVATION_DEG.to_radians().sin() - lat.sin() * delta.sin())
        / (lat.cos() * delta.cos());

    SolarPosition {
        julian_day,
        mean_anomaly_deg,
        equation_of_center_deg,
        ecliptic_longitude_deg,
        transit_julian_day,
        declination_deg: delta.to_degrees(),
        cos_hour_angle,
    }
}

/// Calculate sunrise and sunset for a location, date and UTC offset.
///
/// # Arguments
/// * `lat_deg` - Latitude in decimal degrees, north positive
/// * `lon_deg` - Longitude in decimal degrees, east positive
/// * `date` - Reference calendar date (a [`CivilDate`] or `chrono::NaiveDate`)
/// * `tz_offset_hours` - Offset added to the UTC instants, e.g. `-4.0` for EDT
///
/// # Returns
/// * `Ok(SolarEventResult)` - Both events as naive timestamps shifted by the offset
/// * `Err(SunEventError::NoSunrise)` - The Sun never rises there on that date
/// * `Err(SunEventError::NoSunset)` - The Sun never sets there on that date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use sunclock::{solar_events, SunEventError};
///
/// let date = NaiveDate::from_ymd_opt(2020, 6, 20).unwrap();
/// let times = solar_events(40.7128, -74.0060, date, -4.0).unwrap();
/// assert!(times.sunrise < times.sunset);
///
/// let polar_night = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
/// assert_eq!(solar_events(80.0, 0.0, polar_night, 0.0), Err(SunEventError::NoSunrise));
/// ```
pub fn solar_events(
    lat_deg: f64,
    lon_deg: f64,
    date: impl Into<CivilDate>,
    tz_offset_hours: f64,
) -> Result<SolarEventResult, SunEventError> {
    let position = solar_position(lat_deg, lon_deg, date);
    let omega_deg = position.hour_angle_deg()?;

    let rise = position.transit_julian_day - omega_deg / 360.0;
    let set = position.transit_julian_day + omega_deg / 360.0;

    Ok(SolarEventResult {
        sunrise: julian_day_to_naive(rise, tz_offset_hours)?,
        sunset: julian_day_to_naive(set, tz_offset_hours)?,
    })
}

/// Convert a Julian Day into a naive timestamp shifted by a UTC offset.
///
/// Julian Days start at noon, so half a day is added before counting from
/// 2000-01-01 00:00. The result is rounded to the microsecond.
pub fn julian_day_to_naive(
    julian_day: f64,
    tz_offset_hours: f64,
) -> Result<NaiveDateTime, SunEventError> {
    let out_of_range = SunEventError::TimestampOutOfRange { julian_day };

    let days = julian_day - J2000_JULIAN_DAY + 0.5 + tz_offset_hours / 24.0;
    let micros = (days * MICROS_PER_DAY).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(out_of_range);
    }

    let epoch = NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(out_of_range)?;

    epoch
        .checked_add_signed(Duration::microseconds(micros as i64))
        .ok_or(out_of_range)
}
