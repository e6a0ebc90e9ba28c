use anyhow::{anyhow, ensure, Result};
use geo::{CoordsIter, LineString, MultiPolygon};
use kurbo::{BezPath, Rect, Vec2};

use crate::geom::{boundaries::union_bounds, AlbersProjection, DistrictBoundaries};

/// Boundaries projected and scaled to fill a pixel region.
#[derive(Debug, Clone)]
pub struct FittedMap {
    shapes: Vec<MultiPolygon<f64>>, // projected at unit scale, no translation
    scale: f64,
    translate: Vec2,
}

impl FittedMap {
    /// Project `boundaries` around their centroid meridian and scale them uniformly so they fill
    /// `fill` (e.g. 0.9) of `region` along the tighter axis, centred in the region.
    pub fn fit(boundaries: &DistrictBoundaries, region: Rect, fill: f64) -> Result<Self> {
        let centroid = boundaries.centroid()
            .ok_or_else(|| anyhow!("[FittedMap::fit] boundaries have no area; nothing to draw"))?;

        let projection = AlbersProjection::centered_on(centroid.x())?;
        let shapes = projection.project_shapes(boundaries.shapes())?;

        let bounds = union_bounds(&shapes)
            .ok_or_else(|| anyhow!("[FittedMap::fit] could not determine projected bounds"))?;
        let (width, height) = (bounds.width(), bounds.height());
        ensure!(width > 0.0 || height > 0.0, "[FittedMap::fit] projected bounds have zero extent");

        let scale = fill / (width / region.width()).max(height / region.height());
        let translate = Vec2::new(
            region.x0 + (region.width() - scale * (bounds.min().x + bounds.max().x)) / 2.0,
            region.y0 + (region.height() - scale * (bounds.min().y + bounds.max().y)) / 2.0,
        );

        tracing::debug!(
            central_meridian = projection.central_meridian(),
            scale,
            translate_x = translate.x,
            translate_y = translate.y,
            "[FittedMap::fit] fitted map projection"
        );

        Ok(Self { shapes, scale, translate })
    }

    /// Pixels per projected meter.
    #[inline] pub fn scale(&self) -> f64 { self.scale }

    /// Pixel position of the projected origin.
    #[inline] pub fn translate(&self) -> Vec2 { self.translate }

    /// Every district as one path, shifted by `offset` pixels from the fitted position.
    pub fn path(&self, offset: Vec2) -> BezPath {
        let translate = self.translate + offset;
        let mut path = BezPath::new();
        for shape in &self.shapes {
            for polygon in &shape.0 {
                self.push_ring(&mut path, polygon.exterior(), translate);
                for interior in polygon.interiors() {
                    self.push_ring(&mut path, interior, translate);
                }
            }
        }
        path
    }

    /// Append a ring as a closed subpath.
    fn push_ring(&self, path: &mut BezPath, ring: &LineString<f64>, translate: Vec2) {
        let mut coords = ring.coords_iter()
            .map(|coord| (translate.x + self.scale * coord.x, translate.y + self.scale * coord.y));
        if let Some(first) = coords.next() {
            path.move_to(first);
            for point in coords {
                path.line_to(point);
            }
            path.close_path();
        }
    }
}
