use bracelet::args::{CliAction, ParsedArgs, display_help, display_version_info};
use bracelet::cities::log_available_cities;
use bracelet::commands::generate::handle_generate_command;
use bracelet::constants::EXIT_FAILURE;
use bracelet::Log;

fn main() {
    let action = ParsedArgs::from_env().action;

    let exit_code = match action {
        CliAction::ShowVersion => {
            display_version_info();
            0
        }
        CliAction::ShowHelp => {
            display_help();
            0
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            EXIT_FAILURE
        }
        CliAction::ListCities => {
            Log::log_version();
            log_available_cities();
            Log::log_end();
            0
        }
        CliAction::Generate {
            debug_enabled,
            cities,
            output,
        } => match handle_generate_command(debug_enabled, cities, output) {
            Ok(code) => code,
            Err(e) => {
                Log::log_pipe();
                Log::log_error(&format!("{:#}", e));
                Log::log_end();
                EXIT_FAILURE
            }
        },
    };

    std::process::exit(exit_code);
}
