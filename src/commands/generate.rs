//! Generate command: resolve the two cities and write the bracelet diagram.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::args::CityInput;
use crate::cities::{self, log_available_cities, prompt_city, select_city_interactive};
use crate::config::Config;
use crate::constants::EXIT_FAILURE;
use crate::diagram::{offset_hours, render_at, ring_hour_offset};
use crate::logger::Log;
use crate::utils::path_for_display;

/// Outcome of asking for the two cities.
#[derive(Debug, PartialEq)]
pub enum CityChoice {
    Resolved { home: Tz, friend: Tz },
    /// Names that matched no registered city, in the order they were given
    Unresolved(Vec<String>),
    Cancelled,
}

/// Entry point used by the binary: loads the configuration and reads
/// prompts from stdin.
pub fn handle_generate_command(
    debug_enabled: bool,
    input: CityInput,
    output: Option<PathBuf>,
) -> Result<i32> {
    Log::log_version();

    let config = Config::load().context("Failed to load configuration")?;
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    run_generate(debug_enabled, input, output, &config, &mut reader, Utc::now())
}

/// Resolve both cities and write the diagram for the instant `now`.
///
/// Returns the exit code for expected outcomes (success, unknown city,
/// cancelled selection). Write failures are errors.
pub fn run_generate<R: BufRead>(
    debug_enabled: bool,
    input: CityInput,
    output: Option<PathBuf>,
    config: &Config,
    reader: &mut R,
    now: DateTime<Utc>,
) -> Result<i32> {
    if debug_enabled {
        Log::log_pipe();
        Log::log_debug("Debug mode enabled");
        config.log_config();
    }

    let (home, friend) = match choose_cities(input, config, reader)? {
        CityChoice::Resolved { home, friend } => (home, friend),
        CityChoice::Unresolved(names) => {
            Log::log_pipe();
            for name in &names {
                Log::log_error(&format!("Unknown city: \"{}\"", name));
            }
            Log::log_indented("Run 'bracelet --list' to see the supported cities");
            Log::log_end();
            return Ok(EXIT_FAILURE);
        }
        CityChoice::Cancelled => {
            Log::log_block_start("City selection cancelled, nothing written");
            Log::log_end();
            return Ok(EXIT_FAILURE);
        }
    };

    if debug_enabled {
        let offset = offset_hours(&home, &friend, now);
        Log::log_pipe();
        Log::log_debug(&format!("Home zone: {}", home.name()));
        Log::log_debug(&format!("Friend zone: {}", friend.name()));
        Log::log_debug(&format!(
            "Offset: {:+} hours (outer ring shifted by {})",
            offset,
            ring_hour_offset(offset)
        ));
    }

    let output = output.unwrap_or_else(|| config.output_path());
    render_at(&home, &friend, now, &output, &config.diagram_style())?;

    Log::log_block_start(&format!("Generated file: {}", path_for_display(&output)));
    Log::log_end();
    Ok(0)
}

/// Obtain both cities from the command line, the prompts, or the picker.
pub fn choose_cities<R: BufRead>(
    input: CityInput,
    config: &Config,
    reader: &mut R,
) -> Result<CityChoice> {
    let (home_name, friend_name) = match input {
        CityInput::Named { home, friend } => (home, friend),
        CityInput::Prompt => {
            log_available_cities();
            Log::log_block_start("Choose from the cities above");
            let home = prompt_city(&mut *reader, "Your city", config.home_city.as_deref())?;
            let friend = prompt_city(&mut *reader, "Friend's city", config.friend_city.as_deref())?;
            (home, friend)
        }
        CityInput::Select => {
            let Some(home) = select_city_interactive("Select your city")? else {
                return Ok(CityChoice::Cancelled);
            };
            let Some(friend) = select_city_interactive("Select your friend's city")? else {
                return Ok(CityChoice::Cancelled);
            };
            return Ok(CityChoice::Resolved {
                home: home.tz,
                friend: friend.tz,
            });
        }
    };

    match (cities::resolve(&home_name), cities::resolve(&friend_name)) {
        (Some(home), Some(friend)) => Ok(CityChoice::Resolved { home, friend }),
        (home, friend) => {
            let mut unresolved = Vec::new();
            if home.is_none() {
                unresolved.push(home_name);
            }
            if friend.is_none() {
                unresolved.push(friend_name);
            }
            Ok(CityChoice::Unresolved(unresolved))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn instant(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    fn named(home: &str, friend: &str) -> CityInput {
        CityInput::Named {
            home: home.to_string(),
            friend: friend.to_string(),
        }
    }

    #[test]
    fn test_choose_named_cities() {
        let config = Config::default();
        let choice = choose_cities(named("Shanghai", "london"), &config, &mut Cursor::new("")).unwrap();
        assert_eq!(
            choice,
            CityChoice::Resolved {
                home: chrono_tz::Asia::Shanghai,
                friend: chrono_tz::Europe::London,
            }
        );
    }

    #[test]
    fn test_choose_reports_every_unknown_name() {
        let config = Config::default();
        let input = named("Atlantis", "El Dorado");
        let choice = choose_cities(input, &config, &mut Cursor::new("")).unwrap();
        assert_eq!(
            choice,
            CityChoice::Unresolved(vec!["Atlantis".to_string(), "El Dorado".to_string()])
        );
    }

    #[test]
    fn test_prompt_falls_back_to_configured_cities() {
        let config = Config {
            home_city: Some("tokyo".to_string()),
            friend_city: Some("paris".to_string()),
            ..Config::default()
        };
        let choice = choose_cities(CityInput::Prompt, &config, &mut Cursor::new("\n\n")).unwrap();
        assert_eq!(
            choice,
            CityChoice::Resolved {
                home: chrono_tz::Asia::Tokyo,
                friend: chrono_tz::Europe::Paris,
            }
        );
    }

    #[test]
    fn test_unknown_city_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("bracelet.svg");
        let now = instant("2026-01-15T12:00:00Z");

        let code = run_generate(
            false,
            named("atlantis", "tokyo"),
            Some(output.clone()),
            &Config::default(),
            &mut Cursor::new(""),
            now,
        )
        .unwrap();

        assert_eq!(code, EXIT_FAILURE);
        assert!(!output.exists());
    }

    #[test]
    fn test_unknown_prompted_city_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("bracelet.svg");
        let now = instant("2026-01-15T12:00:00Z");

        let code = run_generate(
            false,
            CityInput::Prompt,
            Some(output.clone()),
            &Config::default(),
            &mut Cursor::new("tokyo\nnarnia\n"),
            now,
        )
        .unwrap();

        assert_eq!(code, EXIT_FAILURE);
        assert!(!output.exists());
    }

    #[test]
    fn test_write_failure_is_an_error() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("missing").join("bracelet.svg");
        let now = instant("2026-01-15T12:00:00Z");

        let err = run_generate(
            false,
            named("tokyo", "paris"),
            Some(output.clone()),
            &Config::default(),
            &mut Cursor::new(""),
            now,
        )
        .unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to write diagram"));
        assert!(!output.exists());
    }

    #[test]
    fn test_generates_for_the_given_instant() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("bracelet.svg");
        let now = instant("2026-01-15T12:00:00Z");

        let code = run_generate(
            true,
            named("shanghai", "london"),
            Some(output.clone()),
            &Config::default(),
            &mut Cursor::new(""),
            now,
        )
        .unwrap();

        assert_eq!(code, 0);
        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains(">Time difference: 8 hours</text>"));
    }

    #[test]
    fn test_configured_output_is_used() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("from-config.svg");
        let config = Config {
            output: Some(output.clone()),
            ..Config::default()
        };

        let code = run_generate(
            false,
            named("tokyo", "tokyo"),
            None,
            &config,
            &mut Cursor::new(""),
            instant("2026-06-01T00:00:00Z"),
        )
        .unwrap();

        assert_eq!(code, 0);
        assert!(output.exists());
    }
}
