use geo::{BoundingRect, Centroid, Coord, MultiPolygon, Point, Rect};

/// District boundaries of one delegation, in district order.
#[derive(Debug, Clone, Default)]
pub struct DistrictBoundaries {
    shapes: Vec<MultiPolygon<f64>>,
}

impl DistrictBoundaries {
    pub fn new(shapes: Vec<MultiPolygon<f64>>) -> Self { Self { shapes } }

    /// Get the number of boundaries.
    #[inline] pub fn len(&self) -> usize { self.shapes.len() }

    /// Check if there are no boundaries.
    #[inline] pub fn is_empty(&self) -> bool { self.shapes.is_empty() }

    /// Get a reference to the list of MultiPolygons.
    #[inline] pub fn shapes(&self) -> &[MultiPolygon<f64>] { &self.shapes }

    /// Compute the bounding rectangle of all boundaries.
    pub fn bounds(&self) -> Option<Rect<f64>> { union_bounds(&self.shapes) }

    /// Area-weighted centroid of the whole collection, in lon/lat.
    pub fn centroid(&self) -> Option<Point<f64>> {
        MultiPolygon(self.shapes.iter().flat_map(|shape| shape.0.iter().cloned()).collect())
            .centroid()
    }
}

/// Bounding rectangle covering every shape, or `None` if no shape has any coordinates.
pub(crate) fn union_bounds(shapes: &[MultiPolygon<f64>]) -> Option<Rect<f64>> {
    shapes.iter()
        .filter_map(|shape| shape.bounding_rect())
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}
