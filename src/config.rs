use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

use crate::game::DEFAULT_HALF_LENGTH_SECS;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Length of one half in seconds. The clock auto-stops a half at every
    /// non-zero multiple of this.
    pub half_length_secs: u32,
    /// Score box labels.
    pub team_us: String,
    pub team_them: String,
    /// strftime format for the status bar wall clock.
    pub time_format: String,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    /// Our score box and goal flashes.
    #[serde(deserialize_with = "deserialize_color")]
    pub us_fg: Color,
    /// Their score box.
    #[serde(deserialize_with = "deserialize_color")]
    pub them_fg: Color,
    /// Clock digits while a half is running.
    #[serde(deserialize_with = "deserialize_color")]
    pub clock_running_fg: Color,
    /// Highlight for selections and pending prompts.
    #[serde(deserialize_with = "deserialize_color")]
    pub accent_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            half_length_secs: DEFAULT_HALF_LENGTH_SECS,
            team_us: "Us".to_string(),
            team_them: "Them".to_string(),
            time_format: "%H:%M:%S".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            us_fg: Color::Green,
            them_fg: Color::Red,
            clock_running_fg: Color::White,
            accent_fg: Color::Rgb(255, 165, 0), // Orange
        }
    }
}

/// Deserialize a color from a string (named color or RGB hex)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    // Hex colors (#FF6600 or #f60)
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("white"), Some(Color::White));
    }

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("Green"), Some(Color::Green));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.half_length_secs, 1500);
        assert_eq!(config.team_us, "Us");
        assert_eq!(config.theme.accent_fg, Color::Rgb(255, 165, 0));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
half_length_secs = 600
team_us = "Red Dragons"
team_them = "Visitors"

[theme]
us_fg = "cyan"
them_fg = "#ff6600"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.half_length_secs, 600);
        assert_eq!(config.team_us, "Red Dragons");
        assert_eq!(config.theme.us_fg, Color::Cyan);
        assert_eq!(config.theme.them_fg, Color::Rgb(255, 102, 0));
        // Unset fields keep their defaults.
        assert_eq!(config.log_level, "info");
        assert_eq!(config.theme.clock_running_fg, Color::White);
    }

    #[test]
    fn test_bad_color_string_is_a_parse_failure() {
        let toml_str = r#"
[theme]
us_fg = "not-a-color"
        "#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
