//! Implementation of the default command: print sunrise and sunset.
//!
//! Inputs are resolved from command-line flags first, then the configuration
//! file. Polar day and polar night are reported as results, not failures;
//! only invalid input or an unrepresentable timestamp ends in an error.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::args::RunOptions;
use crate::config::{Config, validate_config};
use crate::geo::{GeoCoordinate, SolarPosition, SunEventError};
use crate::logger::Log;
use crate::timer::PausableTimer;
use crate::utils::{format_coordinates, format_hours_minutes, format_utc_offset};

/// Fully resolved inputs for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimesRequest {
    pub coordinate: GeoCoordinate,
    pub date: NaiveDate,
    pub utc_offset: f64,
    pub time_format: String,
}

/// Merge command-line options over the configuration and validate the result.
///
/// # Arguments
/// * `options` - Parsed command-line options
/// * `config` - Loaded configuration (may be empty)
/// * `today` - Date used when neither source names one
pub fn resolve_request(
    options: &RunOptions,
    config: &Config,
    today: NaiveDate,
) -> Result<SunTimesRequest> {
    let effective = Config {
        latitude: options.latitude.or(config.latitude),
        longitude: options.longitude.or(config.longitude),
        utc_offset: options.utc_offset.or(config.utc_offset),
        time_format: config.time_format.clone(),
    };

    validate_config(&effective)?;

    let coordinate = effective.coordinate().context(
        "No location configured. Pass --lat and --lon, or set latitude and longitude in sunclock.toml",
    )?;

    Ok(SunTimesRequest {
        coordinate,
        date: options.date.unwrap_or(today),
        utc_offset: effective.utc_offset_or_default(),
        time_format: effective.time_format_or_default().to_string(),
    })
}

/// Handle a calculation run: load config, compute and print.
pub fn handle_sun_times(options: RunOptions) -> Result<()> {
    let mut timer = PausableTimer::new();

    Log::log_version();

    let config_path = Config::get_config_path()?;
    let config = Config::load()?;

    // Console output is excluded from the reported calculation time
    timer.pause();
    if options.debug_enabled {
        config.log_config(&config_path);
    }
    timer.resume();

    let request = resolve_request(&options, &config, Local::now().date_naive())?;

    if options.julian_only {
        let julian_day = crate::geo::CivilDate::from(request.date).julian_day();
        timer.pause();
        Log::log_block_start(&format!("Julian Day for {}: {:.1}", request.date, julian_day));
        Log::log_end();
        return Ok(());
    }

    let position = request.coordinate.solar_position(request.date);
    let outcome = request.coordinate.solar_events(request.date, request.utc_offset);
    timer.pause();

    Log::log_block_start(&format!(
        "Sun times for {} on {} ({})",
        format_coordinates(
            request.coordinate.latitude_deg,
            request.coordinate.longitude_deg
        ),
        request.date,
        format_utc_offset(request.utc_offset)
    ));

    match outcome {
        Ok(times) => {
            Log::log_field("Sunrise", &times.sunrise.format(&request.time_format).to_string());
            Log::log_field("Sunset", &times.sunset.format(&request.time_format).to_string());
            Log::log_field("Day length", &format_hours_minutes(times.day_length()));
        }
        Err(SunEventError::NoSunrise) => {
            Log::log_indented("Polar night: the sun does not rise on this date");
        }
        Err(SunEventError::NoSunset) => {
            Log::log_indented("Midnight sun: the sun does not set on this date");
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to calculate sun times for {}", request.date)));
        }
    }

    if options.debug_enabled {
        log_solar_debug_info(&position);
        Log::log_pipe();
        Log::log_debug(&format!(
            "Calculated in {:.3} ms",
            timer.elapsed() * 1000.0
        ));
    }

    Log::log_end();
    Ok(())
}

/// Log the intermediate quantities of the sunrise equation.
fn log_solar_debug_info(position: &SolarPosition) {
    Log::log_pipe();
    Log::log_debug("Solar calculation details:");
    Log::log_field("Julian Day", &format!("{:.4}", position.julian_day));
    Log::log_field("Mean anomaly", &format!("{:.4}°", position.mean_anomaly_deg));
    Log::log_field("Equation of center", &format!("{:.4}°", position.equation_of_center_deg));
    Log::log_field(
        "Ecliptic longitude",
        &format!("{:.4}°", position.ecliptic_longitude_deg),
    );
    Log::log_field("Declination", &format!("{:.4}°", position.declination_deg));
    Log::log_field("Solar transit (JD)", &format!("{:.5}", position.transit_julian_day));
    Log::log_field("cos(hour angle)", &format!("{:.5}", position.cos_hour_angle));
}
