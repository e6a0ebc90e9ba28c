use anyhow::{ensure, Result};

use crate::{
    election::District,
    error::{ReportError, ReportResult},
    geom::DistrictBoundaries,
};

/// A collection of districts sharing a jurisdiction (e.g. a state's congressional delegation).
/// District order is input order and is preserved for rendering.
#[derive(Clone, Debug)]
pub struct Delegation {
    name: String,
    abbreviation: String,
    districts: Vec<District>,
}

impl Delegation {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>, districts: Vec<District>) -> Self {
        Self { name: name.into(), abbreviation: abbreviation.into(), districts }
    }

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub fn abbreviation(&self) -> &str { &self.abbreviation }

    #[inline] pub fn districts(&self) -> &[District] { &self.districts }

    /// Append a district, keeping insertion order. Fails if the delegation's vote total would overflow.
    pub(crate) fn push(&mut self, district: District) -> Result<()> {
        ensure!(
            self.votes().checked_add(district.total_votes()).is_some(),
            "[Delegation::push] vote total of '{}' overflows at district '{}'",
            self.name,
            district.identifier()
        );
        self.districts.push(district);
        Ok(())
    }

    /// Number of seats, one per district.
    #[inline] pub fn seats(&self) -> usize { self.districts.len() }

    /// District boundaries in district order.
    pub fn district_boundaries(&self) -> DistrictBoundaries {
        DistrictBoundaries::new(self.districts.iter().map(|district| district.boundary().clone()).collect())
    }

    /// Reject delegations whose ratio metrics would divide by zero.
    pub fn validate(&self) -> ReportResult<()> {
        if self.seats() == 0 {
            return Err(ReportError::degenerate(&self.name, "delegation has no seats"));
        }
        if self.votes() == 0 {
            return Err(ReportError::degenerate(&self.name, "delegation has no recorded votes"));
        }
        Ok(())
    }
}
