use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "COLORSIFT_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum number of colors in an extracted palette
    pub max_palette_size: usize,

    /// Text exporter settings
    pub export: ExportConfig,

    /// PNG preview layout
    pub preview: PreviewConfig,
}

/// Settings shared by the CSS and SASS exporters
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Comment block written at the top of CSS/SASS output
    pub comment: Option<String>,

    /// Strip comments and whitespace from CSS output
    pub minify: bool,
}

/// Layout of the PNG palette preview, in pixels
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    pub title: String,
    /// Swatches per row
    pub columns: u32,
    pub swatch_width: u32,
    pub swatch_height: u32,
    pub padding: u32,
    pub title_size: u32,
    pub label_size: u32,
    /// Font family for title and labels (falls back to any system font)
    pub font_family: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_palette_size: palette_extract::DEFAULT_MAX_PALETTE_SIZE,
            export: ExportConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            title: "Palette colors:".to_string(),
            columns: 3,
            swatch_width: 60,
            swatch_height: 40,
            padding: 20,
            title_size: 14,
            label_size: 11,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML config text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, falling back to defaults on any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    max_palette_size = config.max_palette_size,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Config file to use: the CLI value, else `$COLORSIFT_CONFIG`.
    pub fn resolve_path(cli: Option<PathBuf>) -> Option<PathBuf> {
        cli.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_palette_size == 0 {
            return Err(ConfigError::Invalid(
                "max_palette_size must be at least 1".to_string(),
            ));
        }
        if self.preview.columns == 0 {
            return Err(ConfigError::Invalid(
                "preview.columns must be at least 1".to_string(),
            ));
        }
        if self.preview.swatch_width == 0 || self.preview.swatch_height == 0 {
            return Err(ConfigError::Invalid(
                "preview swatches must have a non-zero size".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.max_palette_size, 8);
        assert_eq!(config.export.comment, None);
        assert!(!config.export.minify);
        assert_eq!(config.preview.columns, 3);
        assert_eq!(config.preview.swatch_width, 60);
        assert_eq!(config.preview.swatch_height, 40);
        assert_eq!(config.preview.padding, 20);
        assert_eq!(config.preview.title_size, 14);
        assert_eq!(config.preview.label_size, 11);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
max_palette_size: 5
export:
  comment: "Brand colors"
  minify: true
preview:
  title: "Logo colors:"
  columns: 4
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.max_palette_size, 5);
        assert_eq!(config.export.comment.as_deref(), Some("Brand colors"));
        assert!(config.export.minify);
        assert_eq!(config.preview.title, "Logo colors:");
        assert_eq!(config.preview.columns, 4);
        // Unset fields keep their defaults
        assert_eq!(config.preview.swatch_width, 60);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_zero_palette_size_rejected() {
        let err = AppConfig::from_yaml("max_palette_size: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = AppConfig::from_yaml("preview:\n  columns: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = AppConfig::from_yaml("max_palette_size: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/colorsift.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = AppConfig::load_or_default(Some(Path::new("/nonexistent/colorsift.yaml")));
        assert_eq!(config, AppConfig::default());
        assert_eq!(AppConfig::load_or_default(None), AppConfig::default());
    }

    #[test]
    fn test_resolve_path_prefers_cli() {
        let cli = PathBuf::from("cli.yaml");
        assert_eq!(AppConfig::resolve_path(Some(cli.clone())), Some(cli));
    }
}
