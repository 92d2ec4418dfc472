//! Formatting helpers shared by the configuration loader and the binary.

use chrono::Duration;
use std::path::Path;

/// Show a path with the home directory abbreviated to `~`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use sunclock::utils::path_for_display;
/// assert_eq!(path_for_display(Path::new("/etc/sunclock.toml")), "/etc/sunclock.toml");
/// ```
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Format coordinates with hemisphere letters, e.g. `40.7128°N, 74.0060°W`.
///
/// # Examples
/// ```
/// use sunclock::utils::format_coordinates;
/// assert_eq!(format_coordinates(40.7128, -74.0060), "40.7128°N, 74.0060°W");
/// assert_eq!(format_coordinates(-33.8688, 151.2093), "33.8688°S, 151.2093°E");
/// ```
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!(
        "{:.4}°{}, {:.4}°{}",
        latitude.abs(),
        if latitude >= 0.0 { "N" } else { "S" },
        longitude.abs(),
        if longitude >= 0.0 { "E" } else { "W" }
    )
}

/// Format a fractional hour offset as `UTC±HH:MM`.
///
/// # Examples
/// ```
/// use sunclock::utils::format_utc_offset;
/// assert_eq!(format_utc_offset(-4.0), "UTC-04:00");
/// assert_eq!(format_utc_offset(5.75), "UTC+05:45");
/// ```
pub fn format_utc_offset(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { '-' } else { '+' };
    let minutes = total_minutes.abs();
    format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Format a duration as hours and minutes, e.g. `15 hours 5 minutes`.
pub fn format_hours_minutes(duration: Duration) -> String {
    format!(
        "{} hours {} minutes",
        duration.num_hours(),
        duration.num_minutes() % 60
    )
}
