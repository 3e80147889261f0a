//! # Config Loader
//!
//! Loads the optional `timings.toml` at a project root and merges it over the
//! built-in defaults, producing a fully resolved `Settings`.
use crate::{
    constants::{
        DEFAULT_ASSETS_DIR, DEFAULT_BASE_NAME, DEFAULT_METADATA_COLOR, DEFAULT_ORDER,
        DEFAULT_TITLE, DEFAULT_TOOLCHAIN, DEFAULT_TOTAL_COLOR, SETTINGS_FILENAME,
    },
    core::color::{self, ColorError},
    models::{PlotStyle, PresentationOrder, Settings, TomlSettings},
};
use std::{fs, io::ErrorKind, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid color for '{key}': {source}")]
    Color {
        key: &'static str,
        #[source]
        source: ColorError,
    },
    #[error("Presentation order tier {0} is empty.")]
    EmptyTier(usize),
    #[error("Setting '{0}' must not be empty.")]
    EmptyValue(&'static str),
}

/// Loads the settings for the project at `project_root`.
///
/// A missing `timings.toml` is not an error: every default applies.
pub fn load_settings(project_root: &Path) -> Result<Settings, ConfigError> {
    let path = project_root.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No {} at {}, using defaults.", SETTINGS_FILENAME, project_root.display());
            return resolve_settings(TomlSettings::default());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    log::debug!("Loading settings from {}", path.display());
    let raw: TomlSettings = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.display().to_string(),
        source: e,
    })?;
    resolve_settings(raw)
}

/// Applies defaults to the raw TOML settings and validates the result.
pub fn resolve_settings(raw: TomlSettings) -> Result<Settings, ConfigError> {
    let toolchain = non_empty("toolchain", raw.toolchain, DEFAULT_TOOLCHAIN)?;
    let base_name = non_empty("base_name", raw.base_name, DEFAULT_BASE_NAME)?;
    let assets_dir = non_empty("assets_dir", raw.assets_dir, DEFAULT_ASSETS_DIR)?;
    let title = raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let tiers = match raw.order {
        Some(tiers) => tiers,
        None => DEFAULT_ORDER
            .iter()
            .map(|tier| tier.iter().map(|name| (*name).to_string()).collect())
            .collect(),
    };
    if let Some(position) = tiers.iter().position(Vec::is_empty) {
        return Err(ConfigError::EmptyTier(position + 1));
    }

    let total_color = color::parse_color(
        raw.colors.total.as_deref().unwrap_or(DEFAULT_TOTAL_COLOR),
    )
    .map_err(|e| ConfigError::Color {
        key: "colors.total",
        source: e,
    })?;
    let metadata_color = color::parse_color(
        raw.colors.metadata.as_deref().unwrap_or(DEFAULT_METADATA_COLOR),
    )
    .map_err(|e| ConfigError::Color {
        key: "colors.metadata",
        source: e,
    })?;

    Ok(Settings {
        toolchain,
        base_name,
        assets_dir,
        order: PresentationOrder { tiers },
        style: PlotStyle {
            title,
            total_color,
            metadata_color,
        },
    })
}

fn non_empty(
    key: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyValue(key)),
        Some(v) => Ok(v.trim().to_string()),
        None => Ok(default.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        // --- Setup ---
        let dir = TempDir::new().unwrap();

        // --- Execute ---
        let settings = load_settings(dir.path()).unwrap();

        // --- Assert ---
        assert_eq!(settings.toolchain, "nightly");
        assert_eq!(settings.base_name, "timings");
        assert_eq!(settings.assets_dir, "assets");
        assert_eq!(settings.style.title, "Build Timings");
        assert_eq!(settings.order.tiers, vec![vec!["minimal-lexical".to_string()]]);
        assert_eq!(settings.style.total_color, Rgb(135, 206, 250));
        assert_eq!(settings.style.metadata_color, Rgb(153, 50, 204));
    }

    #[test]
    fn test_file_overrides_defaults() {
        // --- Setup ---
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILENAME),
            r##"
toolchain = "nightly-2024-01-01"
title = "Lexical"
order = [["core"], ["parse", "write"]]

[colors]
metadata = "#102030"
"##,
        )
        .unwrap();

        // --- Execute ---
        let settings = load_settings(dir.path()).unwrap();

        // --- Assert ---
        assert_eq!(settings.toolchain, "nightly-2024-01-01");
        assert_eq!(settings.base_name, "timings");
        assert_eq!(settings.style.title, "Lexical");
        assert_eq!(settings.order.tiers.len(), 2);
        assert_eq!(settings.order.tiers[1], vec!["parse", "write"]);
        assert_eq!(settings.style.total_color, Rgb(135, 206, 250));
        assert_eq!(settings.style.metadata_color, Rgb(16, 32, 48));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "toolchain = [").unwrap();

        let result = load_settings(dir.path());
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "colour = \"red\"").unwrap();

        let result = load_settings(dir.path());
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }

    #[test]
    fn test_unknown_color_is_an_error() {
        let raw = TomlSettings {
            colors: crate::models::TomlColors {
                total: Some("not-a-color".to_string()),
                metadata: None,
            },
            ..Default::default()
        };
        let result = resolve_settings(raw);
        assert!(matches!(
            result,
            Err(ConfigError::Color {
                key: "colors.total",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_tier_is_an_error() {
        let raw = TomlSettings {
            order: Some(vec![vec!["a".to_string()], vec![]]),
            ..Default::default()
        };
        assert!(matches!(resolve_settings(raw), Err(ConfigError::EmptyTier(2))));
    }

    #[test]
    fn test_blank_toolchain_is_an_error() {
        let raw = TomlSettings {
            toolchain: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_settings(raw),
            Err(ConfigError::EmptyValue("toolchain"))
        ));
    }
}
