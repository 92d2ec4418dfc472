//! # Sunclock
//!
//! Sunrise and sunset times from the closed-form sunrise equation.
//!
//! Given a latitude, longitude, calendar date and UTC offset, sunclock
//! converts the date to a Julian Day, approximates the Sun's position and
//! solves for the hour angle at which the solar disc meets the horizon.
//! Polar day and polar night are reported as distinct errors.
//!
//! ## Architecture
//!
//! - **geo**: Julian Day conversion and the solar event calculation
//! - **timer**: Stopwatch with pause/resume
//! - **config**: Configuration loading, validation, and default generation
//! - **constants**: Astronomical constants, defaults and limits
//! - **logger**: Structured logging with visual formatting
//! - **args** / **commands**: Command-line parsing and handlers for the binary
//! - **utils**: Display formatting helpers

pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod geo;
pub mod logger;
pub mod timer;
pub mod utils;

// Re-export important types for easier access
pub use config::Config;
pub use geo::{
    CivilDate, GeoCoordinate, SolarEventResult, SolarPosition, SunEventError,
    julian_day_to_naive, solar_events, solar_position, to_julian_day,
};
pub use logger::{Log, LogLevel};
pub use timer::PausableTimer;
