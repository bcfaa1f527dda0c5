pub mod config;

pub use config::{AppConfig, ExportConfig, PreviewConfig, CONFIG_ENV};
