use anyhow::{Context, Result};
use kurbo::Vec2;

use crate::{
    election::Delegation,
    geom::FittedMap,
    infographic::layout::{Layout, BACKGROUND, DISTRICT_STROKE, MAP_FILL, MAP_SHADOW_OFFSET},
    render::{Canvas, Paint},
};

/// Draw the delegation's districts in the map region: a darker shadow, then the outlined map
/// shifted up and left of it.
pub(crate) fn draw_map(canvas: &mut impl Canvas, layout: &Layout, delegation: &Delegation) -> Result<()> {
    let map = FittedMap::fit(&delegation.district_boundaries(), layout.map_region, MAP_FILL)
        .with_context(|| format!("[infographic::draw_map] cannot fit boundaries of {}", delegation.name()))?;

    canvas.fill_path(&map.path(Vec2::ZERO), Paint::solid(BACKGROUND.darker(1.0)));

    let districts = map.path(Vec2::new(-MAP_SHADOW_OFFSET, -MAP_SHADOW_OFFSET));
    canvas.fill_path(&districts, Paint::solid(BACKGROUND));
    canvas.stroke_path(&districts, 1.0, Paint::solid(DISTRICT_STROKE));
    Ok(())
}
