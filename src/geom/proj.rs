use anyhow::{anyhow, Context, Result};
use geo::{Coord, MapCoords, MultiPolygon};
use proj4rs::{proj::Proj as Proj4, transform::transform};

/// Source geographic CRS of boundary files (GeoJSON is always WGS84 lon/lat).
const SOURCE_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

/// Standard parallels of the Albers projection used for US maps.
const STANDARD_PARALLELS: (f64, f64) = (29.5, 45.5);

/// Latitude of origin. Only shifts the projected plane, which map fitting absorbs.
const LATITUDE_OF_ORIGIN: f64 = 38.7;

/// Albers equal-area conic projection rotated so a chosen meridian runs straight up the page.
///
/// Output is in projected meters with the y axis pointing down, ready for a pixel transform.
pub struct AlbersProjection {
    from: Proj4,
    to: Proj4,
    central_meridian: f64,
}

impl AlbersProjection {
    /// Build a projection centred on `central_meridian` (degrees).
    pub fn centered_on(central_meridian: f64) -> Result<Self> {
        let from = Proj4::from_proj_string(SOURCE_PROJ4)
            .with_context(|| anyhow!("[AlbersProjection] failed to build source PROJ.4: {SOURCE_PROJ4}"))?;

        let target = albers_proj4(central_meridian);
        let to = Proj4::from_proj_string(&target)
            .with_context(|| anyhow!("[AlbersProjection] failed to build target PROJ.4: {target}"))?;

        Ok(Self { from, to, central_meridian })
    }

    #[inline] pub fn central_meridian(&self) -> f64 { self.central_meridian }

    /// Project one lon/lat coordinate (degrees) to page-oriented meters.
    pub fn project(&self, coord: Coord<f64>) -> Result<Coord<f64>> {
        let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
        transform(&self.from, &self.to, &mut point)
            .with_context(|| format!("[AlbersProjection::project] transform failed at ({}, {})", coord.x, coord.y))?;
        Ok(Coord { x: point.0, y: -point.1 })
    }

    /// Project every coordinate of every shape.
    pub fn project_shapes(&self, shapes: &[MultiPolygon<f64>]) -> Result<Vec<MultiPolygon<f64>>> {
        shapes.iter()
            .map(|shape| shape.try_map_coords(|coord| self.project(coord)))
            .collect()
    }
}

/// PROJ.4 string for the rotated Albers projection.
fn albers_proj4(central_meridian: f64) -> String {
    let (lat_1, lat_2) = STANDARD_PARALLELS;
    format!(
        "+proj=aea +lat_1={lat_1} +lat_2={lat_2} +lat_0={LATITUDE_OF_ORIGIN} +lon_0={central_meridian} \
         +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs +type=crs"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proj4_string_names_the_central_meridian() {
        let s = albers_proj4(-77.25);
        assert!(s.starts_with("+proj=aea"));
        assert!(s.contains("+lon_0=-77.25"));
        assert!(s.contains("+lat_1=29.5 +lat_2=45.5"));
    }

    #[test]
    fn central_meridian_projects_to_vertical_axis() {
        let projection = AlbersProjection::centered_on(-90.0).unwrap();
        let north = projection.project(Coord { x: -90.0, y: 45.0 }).unwrap();
        let south = projection.project(Coord { x: -90.0, y: 30.0 }).unwrap();
        assert!(north.x.abs() < 1e-6);
        assert!(south.x.abs() < 1e-6);
        // y grows downward on the page
        assert!(north.y < south.y);
    }

    #[test]
    fn east_is_right_of_west() {
        let projection = AlbersProjection::centered_on(-100.0).unwrap();
        let west = projection.project(Coord { x: -105.0, y: 40.0 }).unwrap();
        let east = projection.project(Coord { x: -95.0, y: 40.0 }).unwrap();
        assert!(west.x < 0.0 && east.x > 0.0);
        assert!((west.x + east.x).abs() < 1e-6);
    }
}
