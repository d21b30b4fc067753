//! Interactive city input.
//!
//! Two ways of asking the operator for a city:
//! - [`prompt_city`]: a plain line prompt on stdin, used by default
//! - [`select_city_interactive`]: a crossterm search list over the registry,
//!   enabled with `--select`

use crate::cities::{CITY_TIMEZONES, CityEntry, display_name, zone_short_name};
use crate::logger::Log;
use anyhow::{Context, Result};
use crossterm::{
    ExecutableCommand,
    cursor::{Hide, MoveDown, MoveUp, Show},
    event::{self, Event, KeyCode},
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{BufRead, Write, stdout};

const VISIBLE_ITEMS: usize = 5;
const MAX_DISPLAY_WIDTH: usize = 60;

/// Ask for a city name on stdin.
///
/// Only the line terminator is stripped from the answer; the rest is returned
/// verbatim so that normalization stays the registry's job. An empty answer
/// falls back to `default` when one is given.
pub fn prompt_city<R: BufRead>(input: &mut R, label: &str, default: Option<&str>) -> Result<String> {
    let prompt = match default {
        Some(default) => format!("┣ {} [{}]: ", label, default),
        None => format!("┣ {}: ", label),
    };

    let mut out = stdout();
    out.execute(Print(prompt))?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {}", label.to_lowercase()))?;

    Ok(answer_or_default(&line, default))
}

fn answer_or_default(line: &str, default: Option<&str>) -> String {
    let answer = line.trim_end_matches(['\r', '\n']);
    match default {
        Some(default) if answer.is_empty() => default.to_string(),
        _ => answer.to_string(),
    }
}

/// Registry entries whose display name or zone matches `query`.
///
/// Matching is a case-insensitive substring test; an empty query matches
/// everything.
pub fn filter_cities(query: &str) -> Vec<&'static CityEntry> {
    let needle = query.to_lowercase();
    CITY_TIMEZONES
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || display_name(entry.key).to_lowercase().contains(&needle)
                || entry.tz.name().to_lowercase().contains(&needle)
        })
        .collect()
}

fn entry_label(entry: &CityEntry) -> String {
    let label = format!("{} ({})", display_name(entry.key), entry.tz.name());
    if label.chars().count() > MAX_DISPLAY_WIDTH {
        let cut: String = label.chars().take(MAX_DISPLAY_WIDTH - 1).collect();
        format!("{}…", cut)
    } else {
        label
    }
}

/// Run the interactive search list and return the chosen entry.
///
/// # Returns
/// * `Ok(Some(entry))` - The operator pressed Enter on a city
/// * `Ok(None)` - The operator pressed Esc
/// * `Err(_)` - The terminal could not be driven
pub fn select_city_interactive(title: &str) -> Result<Option<&'static CityEntry>> {
    Log::log_block_start(title);
    Log::log_indented("Type to search, use ↑/↓ to navigate, Enter to select, Esc to cancel");

    let mut stdout = stdout();
    stdout.flush()?;
    terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
    stdout.execute(Hide)?;

    let result = run_search_loop(&mut stdout);

    // Restore the terminal even when the loop failed
    let _ = terminal::disable_raw_mode();
    let _ = stdout.execute(Show);
    let lines_drawn = 1 + 1 + VISIBLE_ITEMS + 1; // pipe gap + search + cities + status
    let _ = stdout.execute(MoveDown(lines_drawn as u16));
    let _ = stdout.flush();

    let selected = result?;
    if let Some(entry) = selected {
        Log::log_block_start(&format!(
            "Selected: {} ({})",
            display_name(entry.key),
            zone_short_name(&entry.tz)
        ));
    }
    Ok(selected)
}

fn run_search_loop(stdout: &mut std::io::Stdout) -> Result<Option<&'static CityEntry>> {
    let mut search_query = String::new();
    let mut selected_index = 0;
    let mut scroll_offset = 0;

    loop {
        let filtered = filter_cities(&search_query);

        if selected_index >= filtered.len() && !filtered.is_empty() {
            selected_index = filtered.len() - 1;
        }
        if selected_index < scroll_offset {
            scroll_offset = selected_index;
        } else if selected_index >= scroll_offset + VISIBLE_ITEMS {
            scroll_offset = selected_index - VISIBLE_ITEMS + 1;
        }

        stdout.execute(Clear(ClearType::FromCursorDown))?;
        stdout.execute(Print("┃\r\n"))?;

        stdout.execute(Print("┃ Search: "))?;
        stdout.execute(Print(&search_query))?;
        if search_query.is_empty() {
            stdout.execute(Print("_"))?;
        }
        stdout.execute(Print("\r\n"))?;

        for i in 0..VISIBLE_ITEMS {
            match filtered.get(scroll_offset + i) {
                Some(entry) => {
                    let marker = if scroll_offset + i == selected_index {
                        "┃ ▶ "
                    } else {
                        "┃   "
                    };
                    stdout.execute(Print(marker))?;
                    stdout.execute(Print(entry_label(entry)))?;
                }
                None => {
                    stdout.execute(Print("┃"))?;
                }
            }
            stdout.execute(Print("\r\n"))?;
        }

        stdout.execute(Print("┃ "))?;
        if filtered.is_empty() {
            stdout.execute(Print("No cities found"))?;
        } else {
            stdout.execute(Print(format!(
                "{} of {} cities",
                filtered.len(),
                CITY_TIMEZONES.len()
            )))?;
        }
        stdout.execute(Print("\r\n"))?;
        stdout.flush()?;

        let lines_drawn = 1 + 1 + VISIBLE_ITEMS + 1;
        stdout.execute(MoveUp(lines_drawn as u16))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => return Ok(None),
                KeyCode::Enter => {
                    if let Some(entry) = filtered.get(selected_index) {
                        return Ok(Some(*entry));
                    }
                }
                KeyCode::Up => {
                    selected_index = selected_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    if selected_index + 1 < filtered.len() {
                        selected_index += 1;
                    }
                }
                KeyCode::Backspace => {
                    search_query.pop();
                    selected_index = 0;
                    scroll_offset = 0;
                }
                KeyCode::Char(c) => {
                    search_query.push(c);
                    selected_index = 0;
                    scroll_offset = 0;
                }
                _ => {}
            }
        }
    }
}
