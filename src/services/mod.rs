pub mod image_source;
pub mod palette_pipeline;

pub use image_source::{decode_image, load_image, DecodedImage};
pub use palette_pipeline::{ExportResult, PalettePipeline, PipelineError};
