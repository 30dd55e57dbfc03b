use std::io::Write;

use crate::error::Result;
use crate::geometry::{Rect, Size};

use super::blocks::Block;

/// Renderer styling parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    pub block_fill: String,
    pub text_fill: String,
    pub font_family: String,
    pub font_size: f64,
    /// Emit a `<title>` per block carrying the unit name.
    pub titles: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            block_fill: "rgba(255,0,0,0.5)".to_string(),
            text_fill: "black".to_string(),
            font_family: "Arial".to_string(),
            font_size: 16.0,
            titles: true,
        }
    }
}

/// Writes laid-out blocks as a standalone SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    settings: RendererSettings,
}

impl SvgRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn render(&self, writer: &mut impl Write, size: Size, blocks: &[Block]) -> Result<()> {
        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = px(size.width),
            h = px(size.height),
        )?;
        for block in blocks {
            self.render_block(writer, block)?;
        }
        writeln!(writer, "</svg>")?;
        writer.flush()?;
        Ok(())
    }

    /// Render into an owned string.
    pub fn render_to_string(&self, size: Size, blocks: &[Block]) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(&mut buffer, size, blocks)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn render_block(&self, writer: &mut impl Write, block: &Block) -> Result<()> {
        // Units shorter than the vertical gap come out with a negative
        // height; draw them flat so the label still shows.
        let rect = Rect::new(
            block.rect.x,
            block.rect.y,
            block.rect.width.max(0.0),
            block.rect.height.max(0.0),
        );

        let settings = &self.settings;
        write!(
            writer,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}">"#,
            px(rect.x),
            px(rect.y),
            px(rect.width),
            px(rect.height),
            escape(&settings.block_fill),
        )?;
        if settings.titles {
            write!(writer, "<title>{}</title>", escape(&block.name))?;
        }
        writeln!(writer, "</rect>")?;

        let anchor = rect.center();
        writeln!(
            writer,
            r#"  <text x="{}" y="{}" fill="{}" font-family="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            px(anchor.x),
            px(anchor.y),
            escape(&settings.text_fill),
            escape(&settings.font_family),
            px(settings.font_size),
            escape(&block.label),
        )?;
        Ok(())
    }
}

/// Two decimals at most, trailing zeros dropped.
fn px(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
