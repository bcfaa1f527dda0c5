use std::path::Path;
use std::time::Instant;

use palette_extract::{ExtractError, Extractor, Palette, PixelSource};

use crate::error::{ExportError, ImageError};
use crate::exporters::{self, ExportFormat, ExportOptions};
use crate::models::AppConfig;
use crate::services::image_source;

/// Error from the palette pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Result of exporting an image's palette
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub palette: Palette,
    pub bytes: Vec<u8>,
    pub format: ExportFormat,
}

/// Pipeline that orchestrates decode → extract → export
pub struct PalettePipeline {
    config: AppConfig,
}

impl PalettePipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Palette size to use when the caller does not override it
    fn palette_size(&self, max: Option<usize>) -> usize {
        max.unwrap_or(self.config.max_palette_size)
    }

    /// Extract the palette of an image file
    pub fn extract_file(&self, path: &Path, max: Option<usize>) -> Result<Palette, PipelineError> {
        let started = Instant::now();
        let image = image_source::load_image(path)?;
        let palette = self.extract_source(&image, max)?;

        tracing::info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            colors = palette.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Extracted palette"
        );
        Ok(palette)
    }

    /// Extract the palette of any pixel source
    pub fn extract_source<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        max: Option<usize>,
    ) -> Result<Palette, PipelineError> {
        let palette = Extractor::new()
            .max_palette_size(self.palette_size(max))
            .extract(source)?;
        Ok(palette)
    }

    /// Extract and export the palette of an image file
    pub fn export_file(
        &self,
        path: &Path,
        format: ExportFormat,
        max: Option<usize>,
        options: &ExportOptions,
    ) -> Result<ExportResult, PipelineError> {
        let palette = self.extract_file(path, max)?;
        let bytes = exporters::export(&palette, format, options)?;

        tracing::info!(
            format = %format,
            colors = palette.len(),
            bytes = bytes.len(),
            "Exported palette"
        );

        Ok(ExportResult {
            palette,
            bytes,
            format,
        })
    }

    /// Export options built from the loaded configuration
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::from_config(&self.config)
    }

    /// Get the config
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
