//! CSS class export.

use std::sync::OnceLock;

use palette_extract::Color;
use regex::Regex;

use super::PaletteExporter;
use crate::error::ExportError;

fn block_comment() -> &'static Regex {
    static BLOCK_COMMENT: OnceLock<Regex> = OnceLock::new();
    BLOCK_COMMENT.get_or_init(|| {
        Regex::new(r"/\*[^*]*\*+([^/][^*]*\*+)*/").expect("comment pattern is valid")
    })
}

/// `.color_RRGGBB` and `.background_RRGGBB` rules per color.
#[derive(Debug, Clone, Default)]
pub struct CssExporter {
    comment: Option<String>,
    minify: bool,
}

impl CssExporter {
    pub fn new(comment: Option<String>, minify: bool) -> Self {
        Self { comment, minify }
    }

    pub fn render(&self, colors: &[Color]) -> String {
        let mut css = String::new();
        if let Some(comment) = &self.comment {
            css.push_str(&comment_block(comment));
        }

        for color in colors {
            let code = color.hex.trim_start_matches('#');
            css.push_str(&format!(
                ".color_{code} {{\n\tcolor: {hex};\n}}\n\
                 .background_{code} {{\n\tbackground-color: {hex};\n}}\n",
                hex = color.hex
            ));
        }

        if self.minify {
            minify(&css)
        } else {
            css
        }
    }
}

impl PaletteExporter for CssExporter {
    fn export(&self, colors: &[Color]) -> Result<Vec<u8>, ExportError> {
        Ok(self.render(colors).into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "text/css"
    }

    fn default_filename(&self) -> &'static str {
        "css_file.css"
    }
}

/// `/* ... */` block with one ` * ` line per comment line.
pub(crate) fn comment_block(comment: &str) -> String {
    let mut block = String::from("/*\n");
    for line in comment.lines() {
        block.push_str(" * ");
        block.push_str(line.trim_end());
        block.push('\n');
    }
    block.push_str(" */\n");
    block
}

/// Drop comments, spaces after colons and all line breaks and tabs.
fn minify(css: &str) -> String {
    block_comment()
        .replace_all(css, "")
        .replace(": ", ":")
        .replace(['\r', '\n', '\t'], "")
        .replace("  ", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::test_support::sample_colors;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rules() {
        let css = CssExporter::default().render(&sample_colors()[..1]);
        assert_eq!(
            css,
            ".color_FF0000 {\n\tcolor: #FF0000;\n}\n\
             .background_FF0000 {\n\tbackground-color: #FF0000;\n}\n"
        );
    }

    #[test]
    fn test_comment_header() {
        let css = CssExporter::new(Some("Brand\nv2".to_string()), false).render(&sample_colors());
        assert!(css.starts_with("/*\n * Brand\n * v2\n */\n.color_FF0000"));
        assert_eq!(css.matches(".background_").count(), 3);
    }

    #[test]
    fn test_minify_strips_comment_and_whitespace() {
        let css = CssExporter::new(Some("Brand".to_string()), true).render(&sample_colors()[..2]);
        assert_eq!(
            css,
            ".color_FF0000 {color:#FF0000;}.background_FF0000 {background-color:#FF0000;}\
             .color_0080FF {color:#0080FF;}.background_0080FF {background-color:#0080FF;}"
        );
    }

    #[test]
    fn test_export_bytes() {
        let exporter = CssExporter::default();
        let bytes = exporter.export(&sample_colors()).unwrap();
        assert_eq!(bytes, exporter.render(&sample_colors()).into_bytes());
        assert_eq!(exporter.content_type(), "text/css");
    }
}
