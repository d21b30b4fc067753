//! City registry: human-readable city names mapped to IANA time zones.
//!
//! This module provides functionality for:
//! - Resolving a free-text city name to a `chrono_tz::Tz`
//! - Grouping the registered cities by region for display
//! - Interactive selection of a city from the registry (see [`selector`])
//!
//! The registry is a static table compiled into the binary. Lookups normalize
//! the input by lowercasing it and replacing spaces with underscores; nothing
//! else is done, so surrounding whitespace is significant and "Hong Kong " does
//! not resolve. There is no partial or fuzzy matching.

pub mod selector;

pub use selector::{prompt_city, select_city_interactive};

use chrono_tz::Tz;

use crate::utils::title_case;

/// One registered city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityEntry {
    /// Normalized key: lowercase, words joined with underscores
    pub key: &'static str,
    pub tz: Tz,
}

const fn city(key: &'static str, tz: Tz) -> CityEntry {
    CityEntry { key, tz }
}

/// Every city bracelet knows about, in display order.
pub static CITY_TIMEZONES: &[CityEntry] = &[
    // Asia
    city("shanghai", chrono_tz::Asia::Shanghai),
    city("beijing", chrono_tz::Asia::Shanghai),
    city("tokyo", chrono_tz::Asia::Tokyo),
    city("singapore", chrono_tz::Asia::Singapore),
    city("hong_kong", chrono_tz::Asia::Hong_Kong),
    city("seoul", chrono_tz::Asia::Seoul),
    city("dubai", chrono_tz::Asia::Dubai),
    city("bangkok", chrono_tz::Asia::Bangkok),
    // Europe
    city("london", chrono_tz::Europe::London),
    city("paris", chrono_tz::Europe::Paris),
    city("berlin", chrono_tz::Europe::Berlin),
    city("rome", chrono_tz::Europe::Rome),
    city("madrid", chrono_tz::Europe::Madrid),
    city("amsterdam", chrono_tz::Europe::Amsterdam),
    city("moscow", chrono_tz::Europe::Moscow),
    // Americas
    city("new_york", chrono_tz::America::New_York),
    city("los_angeles", chrono_tz::America::Los_Angeles),
    city("chicago", chrono_tz::America::Chicago),
    city("toronto", chrono_tz::America::Toronto),
    city("vancouver", chrono_tz::America::Vancouver),
    city("sao_paulo", chrono_tz::America::Sao_Paulo),
    // Oceania
    city("sydney", chrono_tz::Australia::Sydney),
    city("melbourne", chrono_tz::Australia::Melbourne),
    city("auckland", chrono_tz::Pacific::Auckland),
    // Africa
    city("cairo", chrono_tz::Africa::Cairo),
    city("johannesburg", chrono_tz::Africa::Johannesburg),
    city("lagos", chrono_tz::Africa::Lagos),
];

/// Display regions used by [`list_groups`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Asia,
    Europe,
    Americas,
    Oceania,
    Africa,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Region; 5] = [
        Region::Asia,
        Region::Europe,
        Region::Americas,
        Region::Oceania,
        Region::Africa,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Americas => "Americas",
            Region::Oceania => "Oceania",
            Region::Africa => "Africa",
        }
    }

    /// Substrings of a zone identifier that place a city in this region.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Region::Asia => &["Asia"],
            Region::Europe => &["Europe"],
            Region::Americas => &["America"],
            Region::Oceania => &["Australia", "Pacific"],
            Region::Africa => &["Africa"],
        }
    }

    /// First region whose keyword occurs in `zone_name`.
    pub fn classify(zone_name: &str) -> Option<Region> {
        Self::ALL.into_iter().find(|region| {
            region
                .keywords()
                .iter()
                .any(|keyword| zone_name.contains(keyword))
        })
    }
}

/// A region and the display names of its cities.
#[derive(Debug, Clone, PartialEq)]
pub struct CityGroup {
    pub region: Region,
    pub cities: Vec<String>,
}

/// Normalize a city name into registry key form.
///
/// Lowercases and replaces every space with an underscore. Leading and
/// trailing whitespace is kept as-is.
pub fn normalize_city_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Look up the time zone of a city.
///
/// Returns `None` when the normalized name is not registered. An unknown city
/// is an expected user-input case, not an error.
pub fn resolve(name: &str) -> Option<Tz> {
    let key = normalize_city_name(name);
    CITY_TIMEZONES
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.tz)
}

/// All registered keys in display order.
pub fn registered_cities() -> impl Iterator<Item = &'static str> {
    CITY_TIMEZONES.iter().map(|entry| entry.key)
}

/// Human-readable name of a registry key, e.g. "Hong Kong".
pub fn display_name(key: &str) -> String {
    title_case(key)
}

/// Short name of a zone: the last segment of its identifier.
///
/// "Asia/Shanghai" becomes "Shanghai", "America/Argentina/Buenos_Aires"
/// becomes "Buenos_Aires".
pub fn zone_short_name(tz: &Tz) -> &'static str {
    let name = tz.name();
    name.rsplit('/').next().unwrap_or(name)
}

/// Group the registered cities by region.
pub fn list_groups() -> Vec<CityGroup> {
    group_cities(CITY_TIMEZONES)
}

/// Group arbitrary entries by region.
///
/// Each entry lands in the first region whose keyword occurs in its zone
/// identifier. Entries matching no keyword (e.g. "Etc/UTC") are left out of
/// every group. Empty regions are still returned.
pub fn group_cities(entries: &[CityEntry]) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Region::ALL
        .into_iter()
        .map(|region| CityGroup {
            region,
            cities: Vec::new(),
        })
        .collect();

    for entry in entries {
        if let Some(region) = Region::classify(entry.tz.name()) {
            if let Some(group) = groups.iter_mut().find(|g| g.region == region) {
                group.cities.push(display_name(entry.key));
            }
        }
    }

    groups
}

/// Print the grouped city list in the logger frame.
pub fn log_available_cities() {
    use crate::logger::Log;

    Log::log_block_start("Available cities:");
    for group in list_groups() {
        if group.cities.is_empty() {
            continue;
        }
        Log::log_indented(&format!("{}: {}", group.region.label(), group.cities.join(", ")));
    }
}
