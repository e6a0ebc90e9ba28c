mod bars;
mod layout;
mod map;
mod narrative;

use anyhow::Result;
use image::RgbaImage;
use kurbo::Rect;

use crate::{
    election::Delegation,
    error::{ReportError, ReportResult},
    render::{Canvas, Paint, RasterCanvas},
    report::ReportContext,
};

pub use layout::{HEIGHT, WIDTH};

use layout::{Layout, BACKGROUND, WATERMARK_ALPHA};

/// Draw the full infographic for `delegation` onto `canvas`.
/// The delegation must already have passed [`Delegation::validate`].
pub fn compose(delegation: &Delegation, context: &ReportContext, canvas: &mut impl Canvas) -> Result<()> {
    let (width, height) = canvas.size();
    let layout = Layout::new(width, height);
    let parties = context.parties();

    canvas.fill_rect(Rect::new(0.0, 0.0, layout.width, layout.height), Paint::solid(BACKGROUND));

    map::draw_map(canvas, &layout, delegation)?;

    let title = format!("{}{}", delegation.name(), context.title_suffix());
    narrative::draw_title_bar(canvas, &layout, &title, context.subtitle())?;
    narrative::draw_narrative(canvas, &layout, delegation, parties)?;

    bars::draw_vote_bar(canvas, &layout, delegation, parties)?;
    bars::draw_seat_bar(canvas, &layout, delegation, parties)?;
    bars::draw_uncontested(canvas, &layout, delegation)?;

    if let Some(watermark) = context.watermark()? {
        canvas.draw_image(watermark, layout.watermark_origin(), WATERMARK_ALPHA)?;
    }
    Ok(())
}

/// Validate `delegation` and rasterize its infographic.
pub fn render_infographic(delegation: &Delegation, context: &ReportContext) -> ReportResult<RgbaImage> {
    delegation.validate()?;
    context.watermark().map_err(|e| ReportError::render(delegation.name(), e))?;

    let mut canvas = context.fonts()
        .and_then(|fonts| RasterCanvas::new(WIDTH, HEIGHT, fonts))
        .map_err(|e| ReportError::render(delegation.name(), e))?;
    compose(delegation, context, &mut canvas)
        .map_err(|e| ReportError::render(delegation.name(), e))?;
    canvas.into_image()
        .map_err(|e| ReportError::render(delegation.name(), e))
}
