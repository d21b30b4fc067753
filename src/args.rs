//! Command-line argument parsing and processing.
//!
//! This module turns the raw argument list into a [`CliAction`] for the main
//! application logic. Unknown options and malformed values are reported as
//! warnings and lead to the help screen instead of a run.

use std::path::PathBuf;

use crate::logger::Log;

/// How the two cities are obtained for a generate run.
#[derive(Debug, PartialEq)]
pub enum CityInput {
    /// Both names were given on the command line
    Named { home: String, friend: String },
    /// Ask for both names on stdin
    Prompt,
    /// Pick both cities with the interactive search list
    Select,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Generate a bracelet diagram
    Generate {
        debug_enabled: bool,
        cities: CityInput,
        output: Option<PathBuf>,
    },
    /// Print the grouped city list and exit
    ListCities,
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut list_cities = false;
        let mut select = false;
        let mut output: Option<PathBuf> = None;
        let mut positional: Vec<String> = Vec::new();
        let mut invalid_args = false;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--list" | "-l" => list_cities = true,
                "--select" | "-s" => select = true,
                "--output" | "-o" => {
                    if let Some(path) = args_vec.get(i + 1) {
                        output = Some(PathBuf::from(path));
                        i += 1;
                    } else {
                        Log::log_warning("Missing path for --output. Usage: --output <PATH>");
                        invalid_args = true;
                    }
                }
                _ => {
                    if arg_str.starts_with('-') && arg_str.len() > 1 {
                        Log::log_warning(&format!("Unknown option: {}", arg_str));
                        invalid_args = true;
                    } else {
                        positional.push(arg_str.clone());
                    }
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if invalid_args {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else if list_cities {
            CliAction::ListCities
        } else {
            match city_input(positional, select) {
                Some(cities) => CliAction::Generate {
                    debug_enabled,
                    cities,
                    output,
                },
                None => CliAction::ShowHelpDueToError,
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Decide how the cities are obtained from the positional arguments.
fn city_input(mut positional: Vec<String>, select: bool) -> Option<CityInput> {
    match (positional.len(), select) {
        (0, false) => Some(CityInput::Prompt),
        (0, true) => Some(CityInput::Select),
        (2, false) => {
            let friend = positional.pop().unwrap_or_default();
            let home = positional.pop().unwrap_or_default();
            Some(CityInput::Named { home, friend })
        }
        (2, true) => {
            Log::log_warning("--select cannot be combined with city names");
            None
        }
        (count, _) => {
            Log::log_warning(&format!(
                "Expected two city names, got {}. Usage: bracelet [OPTIONS] [HOME_CITY FRIEND_CITY]",
                count
            ));
            None
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    Log::log_decorated(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_end();
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    Log::log_version();
    Log::log_decorated(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: bracelet [OPTIONS] [HOME_CITY FRIEND_CITY]");
    Log::log_block_start("Options:");
    Log::log_indented("-d, --debug               Enable detailed debug output");
    Log::log_indented("-h, --help                Print help information");
    Log::log_indented("-l, --list                List the supported cities by region");
    Log::log_indented("-o, --output <PATH>       Write the diagram to PATH (default: bracelet.svg)");
    Log::log_indented("-s, --select              Pick both cities from an interactive list");
    Log::log_indented("-V, --version             Print version information");
    Log::log_block_start("Without city names, bracelet asks for both cities.");
    Log::log_end();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args_prompts() {
        let parsed = ParsedArgs::parse(vec!["bracelet"]);
        assert_eq!(
            parsed.action,
            CliAction::Generate {
                debug_enabled: false,
                cities: CityInput::Prompt,
                output: None,
            }
        );
    }

    #[test]
    fn test_parse_two_city_names() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "Shanghai", "New York"]);
        assert_eq!(
            parsed.action,
            CliAction::Generate {
                debug_enabled: false,
                cities: CityInput::Named {
                    home: "Shanghai".to_string(),
                    friend: "New York".to_string(),
                },
                output: None,
            }
        );
    }

    #[test]
    fn test_parse_output_and_debug() {
        let parsed = ParsedArgs::parse(vec![
            "bracelet", "-d", "tokyo", "--output", "out.svg", "paris",
        ]);
        assert_eq!(
            parsed.action,
            CliAction::Generate {
                debug_enabled: true,
                cities: CityInput::Named {
                    home: "tokyo".to_string(),
                    friend: "paris".to_string(),
                },
                output: Some(PathBuf::from("out.svg")),
            }
        );
    }

    #[test]
    fn test_parse_select_flag() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "-s"]);
        assert_eq!(
            parsed.action,
            CliAction::Generate {
                debug_enabled: false,
                cities: CityInput::Select,
                output: None,
            }
        );
    }

    #[test]
    fn test_parse_select_with_names_is_an_error() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "--select", "tokyo", "paris"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_single_city_is_an_error() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "tokyo"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_missing_output_path() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "--output"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_list_flag() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "--list"]);
        assert_eq!(parsed.action, CliAction::ListCities);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(ParsedArgs::parse(vec!["bracelet", "-h"]).action, CliAction::ShowHelp);
        assert_eq!(ParsedArgs::parse(vec!["bracelet", "--help"]).action, CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_unknown_flag() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "--unknown"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_version_takes_precedence() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "--version", "--help", "--debug"]);
        assert_eq!(parsed.action, CliAction::ShowVersion);
    }

    #[test]
    fn test_help_takes_precedence_over_list() {
        let parsed = ParsedArgs::parse(vec!["bracelet", "--list", "--help"]);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }
}
