use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub margin: MarginConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub format: PaperFormat,
    pub background: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            format: PaperFormat::A4,
            background: true,
        }
    }
}

/// Margins in CSS pixels on all four sides.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarginConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperFormat {
    #[default]
    A4,
    Letter,
}

impl PaperFormat {
    /// Paper size as (width, height) in inches, the unit Chromium expects.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PaperFormat::A4 => (8.27, 11.69),
            PaperFormat::Letter => (8.5, 11.0),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_page_setup() {
        let config = Config::default();
        assert_eq!(config.page.format, PaperFormat::A4);
        assert!(config.page.background);
        assert_eq!(config.margin.top, 20.0);
        assert_eq!(config.margin.left, 20.0);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config: Config = toml::from_str("[page]\nformat = \"letter\"\n").unwrap();
        assert_eq!(config.page.format, PaperFormat::Letter);
        assert!(config.page.background);
        assert_eq!(config.margin.bottom, 20.0);
    }

    #[test]
    fn margin_override() {
        let config: Config = toml::from_str("[margin]\ntop = 0.0\nbottom = 36.5\n").unwrap();
        assert_eq!(config.margin.top, 0.0);
        assert_eq!(config.margin.bottom, 36.5);
        assert_eq!(config.margin.right, 20.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/readme2pdf.toml"));
        assert_eq!(config.page.format, PaperFormat::A4);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme2pdf.toml");
        fs::write(&path, "[page\nformat =").unwrap();

        let config = Config::load(&path);
        assert_eq!(config.page.format, PaperFormat::A4);
        assert!(config.page.background);
        assert_eq!(config.margin.top, 20.0);
    }

    #[test]
    fn paper_dimensions() {
        assert_eq!(PaperFormat::A4.dimensions(), (8.27, 11.69));
        assert_eq!(PaperFormat::Letter.dimensions(), (8.5, 11.0));
    }
}
