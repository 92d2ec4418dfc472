//! Command-line argument parsing and processing.
//!
//! Flags that take a value consume the following argument, so negative
//! numbers such as `--lon -74.0060` are read as values rather than options.
//! Unknown options and malformed values are reported and turn the action
//! into [`CliAction::ShowHelpDueToError`].

use chrono::NaiveDate;
use std::str::FromStr;

use crate::logger::Log;

/// Options for a sunrise/sunset (or Julian Day) calculation run.
///
/// Every `None` falls back to the configuration file, then to the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub debug_enabled: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: Option<NaiveDate>,
    pub utc_offset: Option<f64>,
    /// Print only the Julian Day of the date
    pub julian_only: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Calculate and print with these settings
    Run(RunOptions),
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown or malformed arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. Version takes
    /// precedence over help, and help over running.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = RunOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut error_found = false;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = args_vec[i].as_str();
            match arg_str {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--julian" | "-j" => options.julian_only = true,
                "--lat" | "-a" => {
                    options.latitude = take_value(&args_vec, &mut i, arg_str, "degrees");
                    error_found |= options.latitude.is_none();
                }
                "--lon" | "-o" => {
                    options.longitude = take_value(&args_vec, &mut i, arg_str, "degrees");
                    error_found |= options.longitude.is_none();
                }
                "--offset" | "-z" => {
                    options.utc_offset = take_value(&args_vec, &mut i, arg_str, "hours");
                    error_found |= options.utc_offset.is_none();
                }
                "--date" | "-D" => {
                    options.date = take_value(&args_vec, &mut i, arg_str, "YYYY-MM-DD");
                    error_found |= options.date.is_none();
                }
                _ => {
                    if arg_str.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", arg_str));
                        error_found = true;
                    }
                    // Non-option arguments are currently ignored
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if error_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else {
            CliAction::Run(options)
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Parse the argument after `flag`, advancing the cursor past it.
fn take_value<T: FromStr>(args: &[String], i: &mut usize, flag: &str, expected: &str) -> Option<T> {
    let Some(raw) = args.get(*i + 1) else {
        Log::log_warning(&format!("Missing value for {}. Expected {}", flag, expected));
        return None;
    };
    *i += 1;

    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            Log::log_warning(&format!(
                "Invalid value for {}: {} (expected {})",
                flag, raw, expected
            ));
            None
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: sunclock [OPTIONS]");
    Log::log_block_start("Options:");
    Log::log_indented("-a, --lat <degrees>     Latitude, north positive");
    Log::log_indented("-o, --lon <degrees>     Longitude, east positive");
    Log::log_indented("-D, --date <YYYY-MM-DD> Date to calculate (default: today)");
    Log::log_indented("-z, --offset <hours>    Offset added to UTC times, e.g. -4");
    Log::log_indented("-j, --julian            Print the Julian Day of the date only");
    Log::log_indented("-d, --debug             Show intermediate solar quantities");
    Log::log_indented("-h, --help              Print help information");
    Log::log_indented("-V, --version           Print version information");
    Log::log_end();
}
