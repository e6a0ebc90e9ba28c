/// Continuous linear map from a domain interval onto a range interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self { Self { domain, range } }

    /// Map `value` into the range. Values outside the domain extrapolate.
    /// A single-point domain maps everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 - d0 == 0.0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_interpolates() {
        let scale = LinearScale::new((0.0, 300.0), (0.0, 540.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(300.0), 540.0);
        assert_eq!(scale.apply(150.0), 270.0);
        assert_eq!(scale.apply(600.0), 1080.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((1.0, 1.0), (62.0, 64.0));
        assert_eq!(scale.apply(1.0), 63.0);
        assert_eq!(scale.apply(7.0), 63.0);
    }
}
