mod efficiency_gap;
mod electoral;
mod imputation;

/// Round to the nearest integer, with halves rounded toward positive infinity.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 { (x + 0.5).floor() }

#[cfg(test)]
mod tests {
    use super::round_half_up;

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(33.333), 33.0);
    }
}
