//! PNG palette preview.
//!
//! The preview is laid out as an SVG document from a Tera template, then
//! rasterized with resvg and written as an optimized PNG:
//!
//! ```text
//! +--------------------------------------+
//! | Title                                |
//! |                                      |
//! | #FF0000     #00FF00     #0000FF      |
//! | [swatch]    [swatch]    [swatch]     |
//! |                                      |
//! | #123456                              |
//! | [swatch]                             |
//! +--------------------------------------+
//! ```

use std::io::Cursor;
use std::sync::Arc;

use palette_extract::Color;
use resvg::usvg::{self, Transform};
use serde::Serialize;
use tera::{Context, Tera};
use tiny_skia::Pixmap;

use super::PaletteExporter;
use crate::error::ExportError;
use crate::models::PreviewConfig;

const TEMPLATE_NAME: &str = "preview.svg";

const PREVIEW_TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{{ width }}" height="{{ height }}" viewBox="0 0 {{ width }} {{ height }}">
  <rect width="{{ width }}" height="{{ height }}" fill="#FFFFFF"/>
  <text x="{{ padding }}" y="{{ title_y }}" font-family="{{ font_family | escape_xml }}" font-size="{{ title_size }}" fill="#000000">{{ title | escape_xml }}</text>
{%- for swatch in swatches %}
  <text x="{{ swatch.x + 3 }}" y="{{ swatch.label_y }}" font-family="{{ font_family | escape_xml }}" font-size="{{ label_size }}" fill="#000000">{{ swatch.hex }}</text>
  <rect x="{{ swatch.x }}" y="{{ swatch.y }}" width="{{ swatch_width }}" height="{{ swatch_height }}" fill="{{ swatch.hex }}"/>
{%- endfor %}
</svg>
"##;

/// Position of one swatch box and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchCell {
    pub hex: String,
    pub x: u32,
    pub y: u32,
    /// Baseline of the hex label, just above the box.
    pub label_y: u32,
}

/// Canvas size and swatch placement for a number of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLayout {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<SwatchCell>,
}

impl PreviewLayout {
    pub fn compute(config: &PreviewConfig, colors: &[Color]) -> Result<Self, ExportError> {
        if config.columns == 0 {
            return Err(ExportError::InvalidLayout("columns must be at least 1".into()));
        }
        if config.swatch_width == 0 || config.swatch_height == 0 {
            return Err(ExportError::InvalidLayout("swatch size must be non-zero".into()));
        }

        let pad = config.padding;
        let cell_w = config.swatch_width + pad;
        let cell_h = config.swatch_height + pad;
        let top = 2 * pad + config.title_size;
        let rows = (colors.len() as u32).div_ceil(config.columns);

        let cells = colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let (col, row) = (i as u32 % config.columns, i as u32 / config.columns);
                let y = top + row * cell_h;
                SwatchCell {
                    hex: color.hex.clone(),
                    x: pad + col * cell_w,
                    y,
                    label_y: y.saturating_sub(4),
                }
            })
            .collect();

        Ok(Self {
            width: config.columns * cell_w + pad,
            height: rows * cell_h + pad + top,
            cells,
        })
    }
}

/// Renders a swatch sheet as PNG.
pub struct PngExporter {
    config: PreviewConfig,
    fontdb: Arc<fontdb::Database>,
}

impl PngExporter {
    /// Create an exporter using the system fonts.
    pub fn new(config: PreviewConfig) -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(font_count = fontdb.len(), "Loaded fonts for preview rendering");
        Self::with_fontdb(config, Arc::new(fontdb))
    }

    /// Create an exporter sharing an already loaded font database.
    pub fn with_fontdb(config: PreviewConfig, fontdb: Arc<fontdb::Database>) -> Self {
        Self { config, fontdb }
    }

    /// The SVG document for `colors`.
    pub fn render_svg(&self, colors: &[Color]) -> Result<(PreviewLayout, String), ExportError> {
        let layout = PreviewLayout::compute(&self.config, colors)?;

        let mut context = Context::new();
        context.insert("width", &layout.width);
        context.insert("height", &layout.height);
        context.insert("padding", &self.config.padding);
        context.insert("title", &self.config.title);
        context.insert("title_y", &(self.config.padding + self.config.title_size));
        context.insert("title_size", &self.config.title_size);
        context.insert("label_size", &self.config.label_size);
        context.insert("font_family", &self.config.font_family);
        context.insert("swatch_width", &self.config.swatch_width);
        context.insert("swatch_height", &self.config.swatch_height);
        context.insert("swatches", &layout.cells);

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, PREVIEW_TEMPLATE)?;
        let svg = tera.render(TEMPLATE_NAME, &context)?;
        Ok((layout, svg))
    }

    fn rasterize(&self, svg: &str, layout: &PreviewLayout) -> Result<Pixmap, ExportError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree =
            usvg::Tree::from_str(svg, &options).map_err(|e| ExportError::SvgParse(e.to_string()))?;

        let mut pixmap =
            Pixmap::new(layout.width, layout.height).ok_or(ExportError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
        Ok(pixmap)
    }
}

impl PaletteExporter for PngExporter {
    fn export(&self, colors: &[Color]) -> Result<Vec<u8>, ExportError> {
        let (layout, svg) = self.render_svg(colors)?;
        let pixmap = self.rasterize(&svg, &layout)?;

        // Background is opaque white, so premultiplied RGBA is plain RGB
        let rgb: Vec<u8> = pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        let png_bytes = encode_png(layout.width, layout.height, &rgb)?;

        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        )
        .unwrap_or(png_bytes);

        tracing::debug!(
            width = layout.width,
            height = layout.height,
            bytes = optimized.len(),
            "Rendered palette preview"
        );
        Ok(optimized)
    }

    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn default_filename(&self) -> &'static str {
        "color_export.png"
    }
}

/// Encode 8-bit RGB rows as PNG (fast settings; oxipng recompresses).
fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
