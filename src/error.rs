use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: palette is empty")]
    EmptyPalette,

    #[error("Invalid preview layout: {0}")]
    InvalidLayout(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_error_unsupported() {
        let error = ImageError::UnsupportedFormat("tiff".to_string());
        assert_eq!(error.to_string(), "Unsupported image format: tiff");
    }

    #[test]
    fn test_image_error_io_keeps_source() {
        use std::error::Error as _;

        let error = ImageError::Io {
            path: PathBuf::from("missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.to_string(), "Failed to read missing.png: no such file");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_export_error_empty() {
        assert_eq!(
            ExportError::EmptyPalette.to_string(),
            "Nothing to export: palette is empty"
        );
    }

    #[test]
    fn test_export_error_pixmap_allocation() {
        assert_eq!(
            ExportError::PixmapAllocation.to_string(),
            "Failed to allocate pixmap"
        );
    }

    #[test]
    fn test_export_error_png_encode() {
        let error = ExportError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_config_error_invalid() {
        let error = ConfigError::Invalid("max_palette_size must be at least 1".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid config: max_palette_size must be at least 1"
        );
    }

    #[test]
    fn test_config_error_from_yaml() {
        let yaml_error = serde_yaml::from_str::<u32>("[not, a, number]").unwrap_err();
        let error: ConfigError = yaml_error.into();
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
