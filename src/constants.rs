//! Astronomical constants and application defaults for sunclock.
//!
//! This module contains the fixed coefficients of the sunrise equation,
//! the configuration defaults, and the validation limits used throughout
//! the application.

// ═══ Epochs ═══
// Reference instants used by the Julian Day arithmetic

pub const J2000_JULIAN_DAY: f64 = 2451545.0; // 2000-01-01 12:00 UTC
pub const JULIAN_DAY_CALENDAR_OFFSET: f64 = 1720994.5; // Julian Day of the algorithm's day zero
pub const MEAN_SOLAR_NOON_CORRECTION: f64 = 0.0008; // days, leap seconds and terrestrial time drift
pub const EPOCH_YEAR: i32 = 2000; // Calendar origin for returned timestamps (2000-01-01 00:00)

// ═══ Julian → Gregorian Switch ═══
// First day of the Gregorian calendar; earlier dates are Julian

pub const GREGORIAN_SWITCH_YEAR: i32 = 1582;
pub const GREGORIAN_SWITCH_MONTH: u32 = 10;
pub const GREGORIAN_SWITCH_DAY: f64 = 15.0;

// ═══ Solar Orbit Coefficients ═══
// Mean anomaly, equation of center and ecliptic longitude terms

pub const MEAN_ANOMALY_AT_EPOCH_DEG: f64 = 357.5291;
pub const MEAN_ANOMALY_RATE_DEG_PER_DAY: f64 = 0.98560028;
pub const CENTER_COEFFICIENTS: [f64; 3] = [1.9148, 0.0200, 0.0003]; // sin(M), sin(2M), sin(3M)
pub const PERIHELION_ARGUMENT_DEG: f64 = 102.9372;
pub const TRANSIT_ANOMALY_COEFFICIENT: f64 = 0.0053; // days per sin(M)
pub const TRANSIT_LONGITUDE_COEFFICIENT: f64 = 0.0069; // days per sin(2λ)
pub const EARTH_TILT_DEG: f64 = 23.44;

// Apparent elevation of the solar disc centre at rise/set: refraction plus semidiameter.
pub const SUN_DISC_ELEVATION_DEG: f64 = -0.83;

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_UTC_OFFSET: f64 = 0.0; // hours
pub const CONFIG_DIR_NAME: &str = "sunclock";
pub const CONFIG_FILE_NAME: &str = "sunclock.toml";
pub const GEO_FILE_NAME: &str = "geo.toml";

// ═══ Validation Limits ═══
// These limits ensure user inputs are within meaningful ranges

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;
pub const MINIMUM_UTC_OFFSET: f64 = -12.0; // hours (Baker Island)
pub const MAXIMUM_UTC_OFFSET: f64 = 14.0; // hours (Line Islands)

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
