//! Configuration loading and validation for sunclock.
//!
//! Settings live in `sunclock.toml` under the user's config directory
//! (`$XDG_CONFIG_HOME/sunclock/` on Linux):
//!
//! ```toml
//! latitude = 40.7128      # Decimal degrees, north positive
//! longitude = -74.0060    # Decimal degrees, east positive
//! utc_offset = -4.0       # Hours added to the UTC event times
//! time_format = "%H:%M"   # strftime pattern for printed times
//! ```
//!
//! Every field is optional; command-line flags override whatever is set
//! here. An optional `geo.toml` in the same directory overrides `latitude`
//! and `longitude`, so the main file can be shared or version controlled
//! without publishing a location. A malformed `geo.toml` is reported and
//! ignored.
//!
//! When no configuration exists, [`Config::load`] writes a commented default.

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::geo::GeoCoordinate;
use crate::logger::Log;

/// Default strftime pattern for printed event times.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Contents of the optional geo.toml file.
#[derive(Debug, Deserialize, Clone)]
struct GeoConfig {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// User settings loaded from `sunclock.toml`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Hours east of UTC applied to the printed times
    pub utc_offset: Option<f64>,
    pub time_format: Option<String>,
}

impl Config {
    /// Path of the main configuration file.
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Path of geo.toml for a given main configuration file.
    pub fn geo_path_for(config_path: &Path) -> Result<PathBuf> {
        match config_path.parent() {
            Some(parent) => Ok(parent.join(GEO_FILE_NAME)),
            None => anyhow::bail!(
                "Could not determine {} path from config path {}",
                GEO_FILE_NAME,
                config_path.display()
            ),
        }
    }

    /// Write a commented default configuration to `path`.
    ///
    /// When `coords` is given they are stored as well; if a geo.toml already
    /// sits next to `path` the coordinates go there instead of the main file.
    pub fn create_default_config(path: &Path, coords: Option<(f64, f64)>) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let geo_path = Self::geo_path_for(path)?;
        let coords_in_main = match coords {
            Some((lat, lon)) if geo_path.exists() => {
                let geo_content = format!(
                    "#[Private geo coordinates]\nlatitude = {:.6}\nlongitude = {:.6}\n",
                    lat, lon
                );
                fs::write(&geo_path, geo_content).with_context(|| {
                    format!("Failed to write coordinates to {}", geo_path.display())
                })?;
                Log::log_indented(&format!(
                    "Saved coordinates to separate geo file: {}",
                    crate::utils::path_for_display(&geo_path)
                ));
                None
            }
            other => other,
        };

        let mut builder = ConfigBuilder::new().add_section("Location");
        builder = match coords_in_main {
            Some((lat, lon)) => builder
                .add_setting("latitude", &format!("{:.6}", lat), "Decimal degrees, north positive")
                .add_setting("longitude", &format!("{:.6}", lon), "Decimal degrees, east positive"),
            None => builder
                .add_commented_setting("latitude", "40.712800", "Decimal degrees, north positive")
                .add_commented_setting("longitude", "-74.006000", "Decimal degrees, east positive"),
        };

        let content = builder
            .add_section("Output")
            .add_setting(
                "utc_offset",
                &format!("{:.1}", DEFAULT_UTC_OFFSET),
                "Hours added to UTC event times (-12.0 to 14.0)",
            )
            .add_setting(
                "time_format",
                &format!("\"{}\"", DEFAULT_TIME_FORMAT),
                "strftime pattern for printed times",
            )
            .build();

        fs::write(path, content + "\n")
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;

        Ok(())
    }

    /// Load, merge geo.toml and validate a specific configuration file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Self::load_geo_override_from_path(&mut config, path);

        validate_config(&config)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    fn load_geo_override_from_path(config: &mut Config, config_path: &Path) {
        let Ok(geo_path) = Self::geo_path_for(config_path) else {
            return;
        };
        if !geo_path.exists() {
            return;
        }

        let parsed = fs::read_to_string(&geo_path)
            .map_err(anyhow::Error::from)
            .and_then(|content| toml::from_str::<GeoConfig>(&content).map_err(Into::into));

        match parsed {
            Ok(geo_config) => {
                if let Some(lat) = geo_config.latitude {
                    config.latitude = Some(lat);
                }
                if let Some(lon) = geo_config.longitude {
                    config.longitude = Some(lon);
                }
            }
            Err(e) => {
                Log::log_warning(&format!(
                    "Failed to load {}: {}. Using coordinates from main config.",
                    GEO_FILE_NAME, e
                ));
            }
        }
    }

    /// Load the configuration from the default location, creating it if missing.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path, None)
                .context("Failed to create default config during load")?;
            Log::log_decorated(&format!(
                "Created default config file: {}",
                crate::utils::path_for_display(&config_path)
            ));
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    /// Configured location, when both coordinates are present.
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoCoordinate::new(lat, lon)),
            _ => None,
        }
    }

    pub fn utc_offset_or_default(&self) -> f64 {
        self.utc_offset.unwrap_or(DEFAULT_UTC_OFFSET)
    }

    pub fn time_format_or_default(&self) -> &str {
        self.time_format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT)
    }

    /// Print the active settings under a "Loaded configuration" block.
    pub fn log_config(&self, config_path: &Path) {
        Log::log_block_start(&format!(
            "Loaded configuration from {}",
            crate::utils::path_for_display(config_path)
        ));

        if let Ok(geo_path) = Self::geo_path_for(config_path) {
            if geo_path.exists() {
                Log::log_indented(&format!(
                    "Loaded geo coordinates from {}",
                    crate::utils::path_for_display(&geo_path)
                ));
            }
        }

        match self.coordinate() {
            Some(coord) => Log::log_indented(&format!(
                "Location: {}",
                crate::utils::format_coordinates(coord.latitude_deg, coord.longitude_deg)
            )),
            None => Log::log_indented("Location: not configured"),
        }
        Log::log_indented(&format!(
            "UTC offset: {}",
            crate::utils::format_utc_offset(self.utc_offset_or_default())
        ));
        Log::log_indented(&format!("Time format: {}", self.time_format_or_default()));
    }
}

/// Check ranges and consistency of a loaded configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    match (config.latitude, config.longitude) {
        (Some(lat), Some(lon)) => GeoCoordinate::new(lat, lon).validate()?,
        (None, None) => {}
        (Some(_), None) => anyhow::bail!("latitude is set but longitude is missing"),
        (None, Some(_)) => anyhow::bail!("longitude is set but latitude is missing"),
    }

    if let Some(offset) = config.utc_offset {
        if !(MINIMUM_UTC_OFFSET..=MAXIMUM_UTC_OFFSET).contains(&offset) {
            anyhow::bail!(
                "Invalid utc_offset: {}. Must be between {} and {} hours",
                offset,
                MINIMUM_UTC_OFFSET,
                MAXIMUM_UTC_OFFSET
            );
        }
    }

    if let Some(format) = &config.time_format {
        if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        {
            anyhow::bail!("Invalid time_format: {:?} is not a valid strftime pattern", format);
        }
    }

    Ok(())
}

/// Builds a default config file with aligned trailing comments.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{}]", title)));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{} = {}", key, value),
            comment: format!("# {}", comment),
        });
        self
    }

    /// Setting written as a comment so the key is documented but unset.
    fn add_commented_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("# {} = {}", key, value),
            comment: format!("# {}", comment),
        });
        self
    }

    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        for (index, entry) in self.entries.into_iter().enumerate() {
            match entry {
                ConfigEntry::Section(title) => {
                    if index > 0 {
                        result.push(String::new());
                    }
                    result.push(title);
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{}{}{}", line, padding, comment));
                }
            }
        }

        result.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn create_test_config(
        latitude: Option<f64>,
        longitude: Option<f64>,
        utc_offset: Option<f64>,
    ) -> Config {
        Config {
            latitude,
            longitude,
            utc_offset,
            time_format: None,
        }
    }

    #[test]
    fn test_config_validation_basic() {
        let config = create_test_config(Some(40.7128), Some(-74.0060), Some(-4.0));
        assert!(validate_config(&config).is_ok());
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_config_validation_coordinate_ranges() {
        assert!(validate_config(&create_test_config(Some(91.0), Some(0.0), None)).is_err());
        assert!(validate_config(&create_test_config(Some(-90.5), Some(0.0), None)).is_err());
        assert!(validate_config(&create_test_config(Some(0.0), Some(180.5), None)).is_err());
        assert!(validate_config(&create_test_config(Some(90.0), Some(-180.0), None)).is_ok());
    }

    #[test]
    fn test_config_validation_requires_coordinate_pair() {
        let lat_only = create_test_config(Some(40.0), None, None);
        let err = validate_config(&lat_only).unwrap_err();
        assert!(err.to_string().contains("longitude is missing"));

        let lon_only = create_test_config(None, Some(-74.0), None);
        assert!(validate_config(&lon_only).is_err());
    }

    #[test]
    fn test_config_validation_utc_offset() {
        assert!(validate_config(&create_test_config(None, None, Some(14.0))).is_ok());
        assert!(validate_config(&create_test_config(None, None, Some(-12.0))).is_ok());
        assert!(validate_config(&create_test_config(None, None, Some(5.75))).is_ok());
        assert!(validate_config(&create_test_config(None, None, Some(14.5))).is_err());
        assert!(validate_config(&create_test_config(None, None, Some(-13.0))).is_err());
        assert!(validate_config(&create_test_config(None, None, Some(f64::NAN))).is_err());
    }

    #[test]
    fn test_config_validation_time_format() {
        let mut config = Config::default();

        config.time_format = Some("%H:%M".to_string());
        assert!(validate_config(&config).is_ok());

        config.time_format = Some("%Q".to_string());
        assert!(validate_config(&config).is_err());

        config.time_format = Some(String::new());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_toml_parsing() {
        let config: Config = toml::from_str(
            r#"
latitude = 51.5074
longitude = -0.1278
utc_offset = 1.0
time_format = "%H:%M"
"#,
        )
        .unwrap();

        assert_eq!(config.latitude, Some(51.5074));
        assert_eq!(config.longitude, Some(-0.1278));
        assert_eq!(config.utc_offset, Some(1.0));
        assert_eq!(config.time_format_or_default(), "%H:%M");
        assert_eq!(config.coordinate(), Some(GeoCoordinate::new(51.5074, -0.1278)));
    }

    #[test]
    fn test_config_malformed_toml() {
        let result: Result<Config, _> = toml::from_str("latitude = \"north\"");
        assert!(result.is_err());

        let unknown: Result<Config, _> = toml::from_str("lattitude = 40.0");
        assert!(unknown.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.utc_offset_or_default(), DEFAULT_UTC_OFFSET);
        assert_eq!(config.time_format_or_default(), DEFAULT_TIME_FORMAT);
        assert!(config.coordinate().is_none());
    }

    #[test]
    fn test_default_config_file_creation() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("sunclock").join("sunclock.toml");

        Config::create_default_config(&config_path, None).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("# latitude = 40.712800"));
        assert!(content.contains("utc_offset = 0.0"));
        assert!(content.contains("time_format = \"%H:%M:%S\""));

        // The generated file must load back cleanly
        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.coordinate().is_none());
        assert_eq!(config.utc_offset, Some(0.0));
    }

    #[test]
    fn test_default_config_with_coordinates() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("sunclock.toml");

        Config::create_default_config(&config_path, Some((64.8378, -147.7164))).unwrap();
        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.latitude, Some(64.8378));
        assert_eq!(config.longitude, Some(-147.7164));
    }

    #[test]
    #[serial]
    fn test_default_config_writes_coordinates_to_existing_geo_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("sunclock.toml");
        let geo_path = temp_dir.path().join("geo.toml");
        fs::write(&geo_path, "").unwrap();

        Log::set_enabled(false);
        Config::create_default_config(&config_path, Some((35.6762, 139.6503))).unwrap();
        Log::set_enabled(true);

        let main_content = fs::read_to_string(&config_path).unwrap();
        assert!(main_content.contains("# latitude"));
        let geo_content = fs::read_to_string(&geo_path).unwrap();
        assert!(geo_content.contains("latitude = 35.676200"));

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.coordinate(), Some(GeoCoordinate::new(35.6762, 139.6503)));
    }

    #[test]
    fn test_geo_toml_overrides_main_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("sunclock.toml");
        fs::write(&config_path, "latitude = 10.0\nlongitude = 20.0\nutc_offset = 2.0\n").unwrap();
        fs::write(
            temp_dir.path().join("geo.toml"),
            "latitude = 51.5074\nlongitude = -0.1278\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.latitude, Some(51.5074));
        assert_eq!(config.longitude, Some(-0.1278));
        assert_eq!(config.utc_offset, Some(2.0));
    }

    #[test]
    #[serial]
    fn test_malformed_geo_toml_fallback() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("sunclock.toml");
        fs::write(&config_path, "latitude = 10.0\nlongitude = 20.0\n").unwrap();
        fs::write(temp_dir.path().join("geo.toml"), "latitude = [").unwrap();

        Log::set_enabled(false);
        let config = Config::load_from_path(&config_path).unwrap();
        Log::set_enabled(true);

        assert_eq!(config.coordinate(), Some(GeoCoordinate::new(10.0, 20.0)));
    }

    #[test]
    fn test_load_from_missing_path() {
        let temp_dir = tempdir().unwrap();
        let result = Config::load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("sunclock.toml");
        fs::write(&config_path, "latitude = 95.0\nlongitude = 0.0\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid latitude"));
    }

    #[test]
    #[serial]
    fn test_config_load_default_creation() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("sunclock").join("sunclock.toml");

        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        Log::set_enabled(false);
        let result = Config::load();
        Log::set_enabled(true);

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert!(result.is_ok());
        assert!(config_path.exists());
    }

    #[test]
    fn test_config_builder_alignment() {
        let content = ConfigBuilder::new()
            .add_section("Location")
            .add_setting("a", "1", "first")
            .add_setting("longer_key", "2", "second")
            .add_section("Output")
            .build();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "#[Location]");
        assert_eq!(lines[1], "a = 1          # first");
        assert_eq!(lines[2], "longer_key = 2 # second");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "#[Output]");
    }
}
