use anyhow::Result;

use sunclock::args::{CliAction, ParsedArgs, display_help, display_version_info};
use sunclock::commands::handle_sun_times;
use sunclock::constants::EXIT_FAILURE;
use sunclock::logger::Log;

fn main() -> Result<()> {
    let parsed = ParsedArgs::from_env();

    match parsed.action {
        CliAction::ShowVersion => display_version_info(),
        CliAction::ShowHelp => display_help(),
        CliAction::ShowHelpDueToError => {
            display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run(options) => {
            if let Err(e) = handle_sun_times(options) {
                Log::log_pipe();
                Log::log_error(&format!("{:#}", e));
                Log::log_end();
                std::process::exit(EXIT_FAILURE);
            }
        }
    }

    Ok(())
}
