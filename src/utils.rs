//! Utility functions shared across the codebase.
//!
//! Number formatting for SVG attributes, title casing for city names, and
//! path display helpers.

use std::path::Path;

/// Format a coordinate or length for an SVG attribute.
///
/// Values are rounded to three decimals and trailing zeros are dropped, so the
/// output stays compact and stable across platforms. Negative zero prints as `0`.
///
/// # Examples
/// ```
/// use bracelet::utils::format_number;
/// assert_eq!(format_number(150.0), "150");
/// assert_eq!(format_number(0.8), "0.8");
/// assert_eq!(format_number(12.34567), "12.346");
/// assert_eq!(format_number(-0.0001), "0");
/// ```
pub fn format_number(value: f64) -> String {
    let rounded = format!("{:.3}", value);
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Turn a registry key into a human-readable name.
///
/// Underscores become spaces and every word starts with an uppercase letter.
///
/// # Examples
/// ```
/// use bracelet::utils::title_case;
/// assert_eq!(title_case("hong_kong"), "Hong Kong");
/// assert_eq!(title_case("sao_paulo"), "Sao Paulo");
/// ```
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display a path with the home directory replaced by `~`.
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_number_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(300.0), "300");
        assert_eq!(format_number(-90.0), "-90");
    }

    #[test]
    fn test_format_number_fractions() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(60.62177826), "60.622");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.0004), "0");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("shanghai"), "Shanghai");
        assert_eq!(title_case("los_angeles"), "Los Angeles");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_path_for_display_outside_home() {
        let path = PathBuf::from("/definitely/not/home/bracelet.svg");
        assert_eq!(path_for_display(&path), "/definitely/not/home/bracelet.svg");
    }
}
