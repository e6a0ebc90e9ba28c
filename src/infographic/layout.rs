use kurbo::{Point, Rect};

use crate::{election::metrics::round_half_up, render::{Font, Rgb}};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

pub(crate) const BACKGROUND: Rgb = Rgb::new(0x29, 0x2d, 0x39);
pub(crate) const DISTRICT_STROKE: Rgb = Rgb::WHITE;
pub(crate) const SENTENCE_FILL: Rgb = Rgb::WHITE;
pub(crate) const ANNOTATION_COLOR: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

pub(crate) const TITLE_FONT: Font = Font::bold(42.0);
pub(crate) const SUBTITLE_FONT: Font = Font::regular(34.0);
pub(crate) const SENTENCE_SIZE: f64 = 34.0;
pub(crate) const ANNOTATION_FONT: Font = Font::bold(20.0);
pub(crate) const DISCLAIMER_SIZE: f64 = 15.0;

pub(crate) const ANNOTATION_MARGIN: f64 = 10.0;

/// Opacity of the title bar and the subtitle.
pub(crate) const TITLE_ALPHA: f64 = 0.35;
pub(crate) const UNCONTESTED_ALPHA: f64 = 0.5;
pub(crate) const WATERMARK_ALPHA: f64 = 0.6;

/// Share of the map region the fitted boundaries fill.
pub(crate) const MAP_FILL: f64 = 0.9;
/// Pixel offset between the map shadow and the map itself.
pub(crate) const MAP_SHADOW_OFFSET: f64 = 6.0;

/// Positions of every infographic element, derived from the canvas size.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Layout {
    pub width: f64,
    pub height: f64,
    pub left_margin: f64,
    pub grid: f64,
    pub title_bar_height: f64,
    pub graph_width: f64,
    pub graph_height: f64,
    pub graph_origin: Point,
    pub rect_height: f64,
    pub map_region: Rect,
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (f64::from(width), f64::from(height));
        let left_margin = 60.0;
        let grid = (height / 10.0).floor();
        let title_bar_height = round_half_up(grid * 1.5);

        let graph_height = 260.0;
        let map_width = width * 0.44;
        let map_height = height - title_bar_height;

        Self {
            width,
            height,
            left_margin,
            grid,
            title_bar_height,
            graph_width: width / 2.0 - left_margin,
            graph_height,
            graph_origin: Point::new(left_margin, (grid * 4.0).floor()),
            rect_height: round_half_up(graph_height * 0.15),
            map_region: Rect::new(width - map_width, grid * 1.5, width, grid * 1.5 + map_height),
        }
    }

    /// Top edge of the vote bar.
    pub fn vote_baseline(&self) -> f64 { (self.graph_origin.y + self.graph_height / 3.0).floor() }

    /// Top edge of the seat bar.
    pub fn seat_baseline(&self) -> f64 { (self.graph_origin.y + self.graph_height * 2.0 / 3.0).ceil() }

    /// Baseline of the first line of the main sentence.
    pub fn sentence_origin(&self) -> Point { Point::new(self.left_margin, (self.grid * 2.375).ceil()) }

    /// Baseline of the lowest footnote block.
    pub fn footnote_origin(&self) -> Point { Point::new(self.left_margin * 4.0, self.height - self.left_margin * 0.8) }

    /// Baseline of the footnote block sitting above the lowest one.
    pub fn upper_footnote_origin(&self) -> Point { Point::new(self.left_margin * 4.0, (self.grid * 8.5).ceil()) }

    pub fn watermark_origin(&self) -> Point { Point::new(self.left_margin, self.height - self.left_margin * 1.1) }
}

impl Default for Layout {
    fn default() -> Self { Self::new(WIDTH, HEIGHT) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_positions() {
        let layout = Layout::default();
        assert_eq!(layout.grid, 63.0);
        assert_eq!(layout.title_bar_height, 95.0);
        assert_eq!(layout.graph_width, 540.0);
        assert_eq!(layout.graph_origin, Point::new(60.0, 252.0));
        assert_eq!(layout.rect_height, 39.0);
        assert_eq!(layout.vote_baseline(), 338.0);
        assert_eq!(layout.seat_baseline(), 426.0);
        assert_eq!(layout.sentence_origin(), Point::new(60.0, 150.0));
        assert_eq!(layout.upper_footnote_origin(), Point::new(240.0, 536.0));
        assert_eq!(layout.footnote_origin(), Point::new(240.0, 582.0));
        assert_eq!(layout.map_region, Rect::new(672.0, 94.5, 1200.0, 629.5));
    }
}
