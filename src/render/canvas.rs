use anyhow::Result;
use image::RgbaImage;
use kurbo::{BezPath, Point, Rect};

use crate::render::Rgb;

/// Font face and size used for a run of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: f64) -> Self { Self { size, bold: false } }

    pub const fn bold(size: f64) -> Self { Self { size, bold: true } }
}

/// Solid color with its own opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f64,
}

impl Paint {
    pub const fn solid(color: Rgb) -> Self { Self { color, alpha: 1.0 } }

    pub const fn with_alpha(self, alpha: f64) -> Self { Self { alpha, ..self } }

    /// Alpha as an 8-bit channel value.
    pub fn alpha_u8(&self) -> u8 { (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8 }
}

/// Horizontal anchoring of text relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical anchoring of text relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    /// Position marks the top of the glyphs.
    Hanging,
}

/// Text placement options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub const fn new(font: Font) -> Self {
        Self { font, align: TextAlign::Start, baseline: TextBaseline::Alphabetic }
    }

    pub const fn aligned(self, align: TextAlign) -> Self { Self { align, ..self } }

    pub const fn hanging(self) -> Self { Self { baseline: TextBaseline::Hanging, ..self } }

    /// Left edge of text of `width` anchored at `x`.
    pub fn start_x(&self, x: f64, width: f64) -> f64 {
        match self.align {
            TextAlign::Start => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::End => x - width,
        }
    }
}

/// A 2D drawing surface in pixel coordinates with y pointing down.
pub trait Canvas {
    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    fn fill_path(&mut self, path: &BezPath, paint: Paint);

    fn stroke_path(&mut self, path: &BezPath, line_width: f64, paint: Paint);

    /// Advance width of `text` set in `font`.
    fn measure_text(&mut self, text: &str, font: Font) -> Result<f64>;

    fn fill_text(&mut self, text: &str, position: Point, style: TextStyle, paint: Paint) -> Result<()>;

    /// Draw `image` with its top-left corner at `position`.
    fn draw_image(&mut self, image: &RgbaImage, position: Point, alpha: f64) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_moves_left_edge() {
        let style = TextStyle::new(Font::bold(20.0));
        assert_eq!(style.start_x(600.0, 100.0), 600.0);
        assert_eq!(style.aligned(TextAlign::End).start_x(600.0, 100.0), 500.0);
        assert_eq!(style.aligned(TextAlign::Center).start_x(600.0, 100.0), 550.0);
    }

    #[test]
    fn paint_alpha_is_clamped() {
        assert_eq!(Paint::solid(Rgb::BLACK).alpha_u8(), 255);
        assert_eq!(Paint::solid(Rgb::BLACK).with_alpha(0.35).alpha_u8(), 89);
        assert_eq!(Paint::solid(Rgb::BLACK).with_alpha(1.5).alpha_u8(), 255);
    }
}
