use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorsift::exporters::ExportFormat;
use colorsift::models::{AppConfig, CONFIG_ENV};
use colorsift::services::PalettePipeline;
use palette_extract::Palette;

#[derive(Parser)]
#[command(name = "colorsift")]
#[command(about = "Extract the dominant colors of an image and export them as swatches")]
#[command(version)]
struct Cli {
    /// YAML config file (defaults to $COLORSIFT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the palette of an image
    Extract {
        /// Image file (PNG, JPEG, GIF or BMP)
        image: PathBuf,

        /// Maximum number of colors
        #[arg(short = 'n', long)]
        max_colors: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write the palette of an image in a swatch/stylesheet/preview format
    Export {
        /// Image file (PNG, JPEG, GIF or BMP)
        image: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: ExportFormat,

        /// Output file (defaults to the format's standard name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum number of colors
        #[arg(short = 'n', long)]
        max_colors: Option<usize>,

        /// Comment written at the top of CSS/SASS output
        #[arg(long)]
        comment: Option<String>,

        /// Minify CSS output
        #[arg(long)]
        minify: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorsift=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = AppConfig::resolve_path(cli.config);

    match cli.command {
        Some(Commands::Extract {
            image,
            max_colors,
            json,
        }) => run_extract_command(config_path.as_deref(), &image, max_colors, json),
        Some(Commands::Export {
            image,
            format,
            output,
            max_colors,
            comment,
            minify,
        }) => run_export_command(
            config_path.as_deref(),
            &image,
            format,
            output,
            max_colors,
            comment,
            minify,
        ),
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Print the palette of an image as a table or JSON
fn run_extract_command(
    config_path: Option<&Path>,
    image: &Path,
    max_colors: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let pipeline = PalettePipeline::new(AppConfig::load_or_default(config_path));
    let palette = pipeline.extract_file(image, max_colors)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&palette)?);
    } else {
        print_table(&palette);
    }
    Ok(())
}

/// Extract and write the palette in the requested format
fn run_export_command(
    config_path: Option<&Path>,
    image: &Path,
    format: ExportFormat,
    output: Option<PathBuf>,
    max_colors: Option<usize>,
    comment: Option<String>,
    minify: bool,
) -> anyhow::Result<()> {
    let pipeline = PalettePipeline::new(AppConfig::load_or_default(config_path));

    // CLI flags override config values
    let mut options = pipeline.export_options();
    if comment.is_some() {
        options.comment = comment;
    }
    options.minify |= minify;

    let output = output.unwrap_or_else(|| PathBuf::from(format.default_filename()));

    let result = pipeline.export_file(image, format, max_colors, &options)?;
    std::fs::write(&output, &result.bytes)?;
    println!(
        "Exported {} colors as {} to {} ({} bytes)",
        result.palette.len(),
        format,
        output.display(),
        result.bytes.len()
    );
    Ok(())
}

fn print_table(palette: &Palette) {
    if palette.is_empty() {
        println!("No opaque pixels found.");
        return;
    }

    println!("{:<9} {:<15} {:>8}", "HEX", "RGB", "SHARE");
    for color in palette.iter() {
        let [r, g, b] = color.rgb;
        println!(
            "{:<9} {:<15} {:>7.2}%",
            color.hex,
            format!("{r}, {g}, {b}"),
            color.percentage
        );
    }
}

/// Display version and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Colorsift v{VERSION} - perceptual palette extraction\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
    );

    let config = AppConfig::load_or_default(config_path);
    let source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };

    println!("\nConfiguration:");
    println!("  Source:           {source}");
    println!("  Max palette size: {}", config.max_palette_size);
    println!(
        "  Export formats:   {}",
        ExportFormat::ALL
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("\nRun 'colorsift --help' for usage.");
}
