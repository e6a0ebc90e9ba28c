use std::{borrow::Cow, sync::Arc};

use anyhow::{anyhow, ensure, Context, Result};
use image::RgbaImage;
use kurbo::{BezPath, Cap, Join, PathEl, Point, Rect, Stroke, StrokeOpts};
use parley::{
    layout::PositionedLayoutItem,
    style::{FontStack, FontWeight, StyleProperty},
    FontContext, Layout, LayoutContext,
};
use vello_cpu::{peniko, Pixmap, RenderContext};

use crate::render::{Canvas, Font, Paint, TextBaseline, TextStyle};

/// Flattening tolerance for stroke outlines, in pixels.
const STROKE_TOLERANCE: f64 = 0.05;

/// Font files for the regular and bold text faces.
#[derive(Clone, Debug)]
pub struct FontSet {
    pub regular: Arc<Vec<u8>>,
    pub bold: Arc<Vec<u8>>,
}

/// A registered face: the family name used for shaping and the data used for glyph drawing.
struct Face {
    family: String,
    data: peniko::FontData,
}

impl Face {
    fn register(font_ctx: &mut FontContext, bytes: &[u8]) -> Result<Self> {
        let families = font_ctx.collection.register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
        let family_id = families.first()
            .map(|(id, _)| *id)
            .ok_or_else(|| anyhow!("[Face::register] no font families registered from font bytes"))?;

        let family = font_ctx.collection.family_name(family_id)
            .ok_or_else(|| anyhow!("[Face::register] registered font family has no name"))?
            .to_string();

        let data = peniko::FontData::new(peniko::Blob::from(bytes.to_vec()), 0);
        Ok(Self { family, data })
    }
}

/// CPU raster surface backed by `vello_cpu`, with text shaped by `parley`.
pub struct RasterCanvas {
    ctx: RenderContext,
    width: u16,
    height: u16,
    font_ctx: FontContext,
    layout_ctx: LayoutContext<()>,
    regular: Face,
    bold: Face,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, fonts: &FontSet) -> Result<Self> {
        let width: u16 = width.try_into().context("[RasterCanvas::new] width exceeds u16")?;
        let height: u16 = height.try_into().context("[RasterCanvas::new] height exceeds u16")?;
        ensure!(width > 0 && height > 0, "[RasterCanvas::new] surface must not be empty");

        let mut font_ctx = FontContext::default();
        let regular = Face::register(&mut font_ctx, &fonts.regular)
            .context("[RasterCanvas::new] failed to load regular font")?;
        let bold = Face::register(&mut font_ctx, &fonts.bold)
            .context("[RasterCanvas::new] failed to load bold font")?;

        Ok(Self {
            ctx: RenderContext::new(width, height),
            width,
            height,
            font_ctx,
            layout_ctx: LayoutContext::new(),
            regular,
            bold,
        })
    }

    /// Rasterize everything drawn so far into a straight-alpha RGBA image.
    pub fn into_image(mut self) -> Result<RgbaImage> {
        self.ctx.flush();
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut bytes = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut bytes);
        RgbaImage::from_raw(u32::from(self.width), u32::from(self.height), bytes)
            .ok_or_else(|| anyhow!("[RasterCanvas::into_image] pixel buffer does not match surface size"))
    }

    /// Shape `text` on a single line.
    fn layout(&mut self, text: &str, font: Font) -> Layout<()> {
        let family = if font.bold { self.bold.family.clone() } else { self.regular.family.clone() };

        let mut builder = self.layout_ctx.ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(StyleProperty::FontStack(FontStack::Source(Cow::Owned(family))));
        builder.push_default(StyleProperty::FontSize(font.size as f32));
        if font.bold {
            builder.push_default(StyleProperty::FontWeight(FontWeight::BOLD));
        }

        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    fn set_solid_paint(&mut self, paint: Paint) {
        let c = paint.color;
        self.ctx.set_paint(peniko::Color::from_rgba8(c.r, c.g, c.b, paint.alpha_u8()));
    }
}

impl Canvas for RasterCanvas {
    fn size(&self) -> (u32, u32) { (u32::from(self.width), u32::from(self.height)) }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_solid_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
    }

    fn fill_path(&mut self, path: &BezPath, paint: Paint) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_solid_paint(paint);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, line_width: f64, paint: Paint) {
        let style = Stroke::new(line_width).with_join(Join::Miter).with_caps(Cap::Butt);
        let outline = kurbo::stroke(path.iter(), &style, &StrokeOpts::default(), STROKE_TOLERANCE);
        self.fill_path(&outline, paint);
    }

    fn measure_text(&mut self, text: &str, font: Font) -> Result<f64> {
        if text.is_empty() { return Ok(0.0) }
        Ok(f64::from(self.layout(text, font).full_width()))
    }

    fn fill_text(&mut self, text: &str, position: Point, style: TextStyle, paint: Paint) -> Result<()> {
        if text.is_empty() { return Ok(()) }

        let layout = self.layout(text, style.font);
        let line = layout.lines().next()
            .ok_or_else(|| anyhow!("[RasterCanvas::fill_text] no line laid out for {text:?}"))?;
        let metrics = line.metrics();
        let top = match style.baseline {
            TextBaseline::Alphabetic => position.y - f64::from(metrics.baseline),
            TextBaseline::Hanging => position.y - f64::from(metrics.baseline) + f64::from(metrics.ascent),
        };
        let left = style.start_x(position.x, f64::from(layout.full_width()));

        let font_data = if style.font.bold { self.bold.data.clone() } else { self.regular.data.clone() };
        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((left, top)));
        self.set_solid_paint(paint);
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(run) = item else { continue };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph { id: g.id, x: g.x, y: g.y });
                self.ctx.glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbaImage, position: Point, alpha: f64) -> Result<()> {
        let (width, height) = image.dimensions();
        let w: u16 = width.try_into().context("[RasterCanvas::draw_image] image width exceeds u16")?;
        let h: u16 = height.try_into().context("[RasterCanvas::draw_image] image height exceeds u16")?;

        let pixels = image.as_raw()
            .chunks_exact(4)
            .map(|px| peniko::color::PremulRgba8::from_u8_array(premul_rgba8([px[0], px[1], px[2], px[3]])))
            .collect();
        let pixmap = Pixmap::from_parts_with_opacity(pixels, w, h, true);
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: peniko::ImageSampler::default(),
        };

        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((position.x, position.y)));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        let faded = alpha < 1.0;
        if faded {
            self.ctx.push_opacity_layer(alpha.clamp(0.0, 1.0) as f32);
        }
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));
        if faded {
            self.ctx.pop_layer();
        }
        Ok(())
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let point = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(point(p)),
            PathEl::LineTo(p) => out.line_to(point(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point(p1), point(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(point(p1), point(p2), point(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_rgba8([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    let a16 = u16::from(a);
    let premul = |c: u8| (((u16::from(c) * a16) + 127) / 255) as u8;
    [premul(r), premul(g), premul(b), a]
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 { continue }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiply_round_trips_opaque_and_clear_pixels() {
        assert_eq!(premul_rgba8([200, 100, 50, 255]), [200, 100, 50, 255]);
        assert_eq!(premul_rgba8([200, 100, 50, 0]), [0, 0, 0, 0]);

        let mut px = premul_rgba8([200, 100, 50, 128]).to_vec();
        unpremultiply_rgba8_in_place(&mut px);
        for (got, want) in px.iter().zip([200u8, 100, 50, 128]) {
            assert!(got.abs_diff(want) <= 1, "{px:?}");
        }
    }

    #[test]
    fn cpu_path_keeps_every_element() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.quad_to((10.0, 5.0), (5.0, 10.0));
        path.close_path();
        assert_eq!(bezpath_to_cpu(&path).elements().len(), 4);
    }

    #[test]
    fn missing_fonts_are_reported() {
        let fonts = FontSet { regular: Arc::new(vec![0; 16]), bold: Arc::new(vec![0; 16]) };
        assert!(RasterCanvas::new(1200, 630, &fonts).is_err());
    }
}
