//! Geographic location-based sunrise/sunset calculations.
//!
//! This module provides:
//! - Calendar date to Julian Day conversion
//! - Solar position and sunrise/sunset calculations
//! - A coordinate value type tying the two together

pub mod julian;
pub mod solar;

pub use julian::{CivilDate, to_julian_day};
pub use solar::{
    SolarEventResult, SolarPosition, SunEventError, julian_day_to_naive, solar_events,
    solar_position,
};

use crate::constants::{MAXIMUM_LATITUDE, MAXIMUM_LONGITUDE, MINIMUM_LATITUDE, MINIMUM_LONGITUDE};

/// A point on the Earth's surface in decimal degrees.
///
/// Construction does not validate; the solar functions accept any value and
/// let degenerate input surface through the trigonometry. Call
/// [`GeoCoordinate::validate`] when the values come from a user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude, north positive (-90 to +90)
    pub latitude_deg: f64,
    /// Longitude, east positive (-180 to +180)
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check that both components are finite and within their ranges.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&self.latitude_deg) {
            anyhow::bail!(
                "Invalid latitude: {}. Must be between {} and {} degrees",
                self.latitude_deg,
                MINIMUM_LATITUDE,
                MAXIMUM_LATITUDE
            );
        }
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&self.longitude_deg) {
            anyhow::bail!(
                "Invalid longitude: {}. Must be between {} and {} degrees",
                self.longitude_deg,
                MINIMUM_LONGITUDE,
                MAXIMUM_LONGITUDE
            );
        }
        Ok(())
    }

    /// Sunrise and sunset at this location. See [`solar_events`].
    pub fn solar_events(
        &self,
        date: impl Into<CivilDate>,
        tz_offset_hours: f64,
    ) -> Result<SolarEventResult, SunEventError> {
        solar_events(self.latitude_deg, self.longitude_deg, date, tz_offset_hours)
    }

    /// Intermediate solar quantities at this location. See [`solar_position`].
    pub fn solar_position(&self, date: impl Into<CivilDate>) -> SolarPosition {
        solar_position(self.latitude_deg, self.longitude_deg, date)
    }
}
