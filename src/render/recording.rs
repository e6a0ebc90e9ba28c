use anyhow::Result;
use image::RgbaImage;
use kurbo::{BezPath, Point, Rect};

use crate::render::{Canvas, Font, Paint, TextStyle};

/// Approximate advance of one character, as a fraction of the font size.
const CHAR_ADVANCE: f64 = 0.5;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, paint: Paint },
    FillPath { path: BezPath, paint: Paint },
    StrokePath { path: BezPath, line_width: f64, paint: Paint },
    FillText { text: String, position: Point, style: TextStyle, paint: Paint },
    DrawImage { position: Point, width: u32, height: u32, alpha: f64 },
}

/// Canvas that records every call instead of rasterizing, with font-free text metrics.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self { Self { width, height, commands: Vec::new() } }

    #[inline] pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Text of every `FillText` call, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Index of the first `FillText` call drawing exactly `text`.
    pub fn position_of_text(&self, text: &str) -> Option<usize> {
        self.commands.iter().position(|command| {
            matches!(command, DrawCommand::FillText { text: t, .. } if t == text)
        })
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) { (self.width, self.height) }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.commands.push(DrawCommand::FillRect { rect, paint });
    }

    fn fill_path(&mut self, path: &BezPath, paint: Paint) {
        self.commands.push(DrawCommand::FillPath { path: path.clone(), paint });
    }

    fn stroke_path(&mut self, path: &BezPath, line_width: f64, paint: Paint) {
        self.commands.push(DrawCommand::StrokePath { path: path.clone(), line_width, paint });
    }

    fn measure_text(&mut self, text: &str, font: Font) -> Result<f64> {
        Ok(text.chars().count() as f64 * font.size * CHAR_ADVANCE)
    }

    fn fill_text(&mut self, text: &str, position: Point, style: TextStyle, paint: Paint) -> Result<()> {
        self.commands.push(DrawCommand::FillText { text: text.to_string(), position, style, paint });
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbaImage, position: Point, alpha: f64) -> Result<()> {
        self.commands.push(DrawCommand::DrawImage {
            position,
            width: image.width(),
            height: image.height(),
            alpha,
        });
        Ok(())
    }
}
