use crate::election::{metrics::round_half_up, Delegation, Side};

impl Delegation {
    /// How effectively the right party's votes were distributed across districts.
    /// Negative when the left party distributed its votes more effectively.
    pub fn efficiency_gap(&self) -> f64 {
        self.seat_margin() - 2.0 * self.vote_margin()
    }

    /// Efficiency gap had every seat been contested. Seat counts are never imputed.
    pub fn efficiency_gap_imputation(&self) -> f64 {
        self.seat_margin() - 2.0 * self.vote_margin_imputation()
    }

    /// Seats gained through the efficiency gap, unsigned.
    pub fn efficiency_gap_seats(&self) -> usize {
        self.gap_seats(self.efficiency_gap())
    }

    /// Seats gained through the imputed efficiency gap, unsigned.
    pub fn efficiency_gap_seats_imputation(&self) -> usize {
        self.gap_seats(self.efficiency_gap_imputation())
    }

    /// Side favored by the imputed efficiency gap; a zero gap is reported for the left.
    pub fn advantage_side(&self) -> Side {
        if self.efficiency_gap_imputation() <= 0.0 { Side::Left } else { Side::Right }
    }

    /// Imputed gap magnitude as a percentage with one decimal, e.g. "12.3%".
    pub fn efficiency_gap_percent(&self) -> String {
        let percent = round_half_up(self.efficiency_gap_imputation().abs() * 1000.0) / 10.0;
        format!("{percent}%")
    }

    /// Imputed gap rounded to two decimals, as reported per delegation.
    pub fn score(&self) -> f64 {
        round_half_up(self.efficiency_gap_imputation() * 100.0) / 100.0
    }

    /// Seat-equivalent of `gap`, clamped to the seats the benefitting party actually won.
    /// A one-seat delegation cannot gain seats through the gap.
    fn gap_seats(&self, gap: f64) -> usize {
        let seats = self.seats();
        if seats == 1 { return 0 }

        let raw = round_half_up((gap * seats as f64).abs()) as usize;
        if raw == 0 { return 0 }

        let benefitting = if gap < 0.0 { Side::Left } else { Side::Right };
        raw.min(self.seat_results()[benefitting])
    }
}

#[cfg(test)]
mod tests {
    use geo::MultiPolygon;

    use crate::election::{Delegation, District, Side};

    fn delegation(votes: &[[u64; 2]]) -> Delegation {
        let districts = votes.iter().enumerate()
            .map(|(i, v)| District::new(format!("{}", i + 1), *v, MultiPolygon(vec![])).unwrap())
            .collect();
        Delegation::new("Test", "TS", districts)
    }

    #[test]
    fn three_seat_left_favoring_gap() {
        let d = delegation(&[[60, 40], [55, 45], [30, 70]]);
        assert_eq!(d.seat_results(), [2, 1]);
        assert_eq!(d.vote_results(), [145, 155]);
        assert!((d.seat_margin() + 0.166_666).abs() < 1e-4);
        assert!((d.vote_margin() - 0.016_666).abs() < 1e-4);
        assert!((d.efficiency_gap() + 0.2).abs() < 1e-12);
        assert_eq!(d.efficiency_gap_seats(), 1);
        assert_eq!(d.advantage_side(), Side::Left);
        assert_eq!(d.efficiency_gap_percent(), "20%");
        assert_eq!(d.score(), -0.2);
    }

    #[test]
    fn single_uncontested_seat() {
        let d = delegation(&[[0, 100]]);
        assert_eq!(d.uncontested_seats(), [1, 0]);
        assert_eq!(d.vote_results_imputation(), [33, 100]);
        assert_eq!(d.efficiency_gap_seats(), 0);
        assert_eq!(d.efficiency_gap_seats_imputation(), 0);
    }

    #[test]
    fn five_seats_balanced_votes() {
        // 304 votes each way, four narrow left wins, one lopsided right win
        let d = delegation(&[[51, 49], [51, 49], [51, 49], [51, 49], [100, 108]]);
        assert_eq!(d.seat_results(), [4, 1]);
        assert_eq!(d.vote_margin(), 0.0);
        assert!((d.efficiency_gap() + 0.3).abs() < 1e-12);
        assert_eq!(d.efficiency_gap_seats(), 2);
    }

    #[test]
    fn one_seat_never_gains_seats() {
        for votes in [[1, 1_000_000], [999, 1], [500, 500], [0, 7]] {
            assert_eq!(delegation(&[votes]).efficiency_gap_seats(), 0);
            assert_eq!(delegation(&[votes]).efficiency_gap_seats_imputation(), 0);
        }
    }

    #[test]
    fn gap_seats_are_clamped_to_seats_won() {
        let d = delegation(&[[1, 1000], [1, 1000], [1, 1000], [2, 1]]);
        let gap = d.efficiency_gap();
        let benefitting = if gap < 0.0 { Side::Left } else { Side::Right };
        assert!(d.efficiency_gap_seats() <= d.seat_results()[benefitting]);

        let synthetic: Vec<Vec<[u64; 2]>> = vec![
            vec![[10, 90], [10, 90], [10, 90], [60, 40], [60, 40], [60, 40], [60, 40]],
            vec![[49, 51], [49, 51], [49, 51], [49, 51], [99, 1]],
            vec![[0, 10], [0, 10], [0, 10], [5, 1]],
            vec![[1, 0], [1, 0], [1, 0], [1, 2]],
        ];
        for votes in synthetic {
            let d = delegation(&votes);
            for (gap, seats) in [
                (d.efficiency_gap(), d.efficiency_gap_seats()),
                (d.efficiency_gap_imputation(), d.efficiency_gap_seats_imputation()),
            ] {
                let benefitting = if gap < 0.0 { Side::Left } else { Side::Right };
                assert!(seats <= d.seat_results()[benefitting], "votes {votes:?}");
            }
        }
    }

    #[test]
    fn imputation_is_a_no_op_without_uncontested_seats() {
        let d = delegation(&[[60, 40], [55, 45], [30, 70], [12, 88]]);
        assert_eq!(d.uncontested_seats(), [0, 0]);
        assert_eq!(d.vote_results_imputation(), d.vote_results());
        assert_eq!(d.efficiency_gap_imputation(), d.efficiency_gap());
        assert_eq!(d.efficiency_gap_seats_imputation(), d.efficiency_gap_seats());
    }

    #[test]
    fn imputation_shrinks_uncontested_vote_advantage() {
        let d = delegation(&[[0, 100], [0, 100], [60, 40], [60, 40]]);
        assert_eq!(d.vote_results(), [120, 280]);
        assert_eq!(d.vote_results_imputation(), [186, 280]);
        assert_eq!(d.votes_imputation(), 466);
        assert!(d.vote_margin_imputation() < d.vote_margin());
    }

    #[test]
    fn percent_formatting_keeps_one_decimal() {
        // seat margin 1 - 0.5 = 0.5; vote margin 56/100 - 0.5 = 0.06 -> gap 0.38
        let d = delegation(&[[22, 28], [22, 28]]);
        assert_eq!(d.seat_results(), [0, 2]);
        assert!((d.efficiency_gap() - 0.38).abs() < 1e-12);
        assert_eq!(d.efficiency_gap_percent(), "38%");

        let d = delegation(&[[60, 40], [55, 45], [30, 70], [12, 88], [50, 49], [48, 52]]);
        let expected = (d.efficiency_gap_imputation().abs() * 1000.0 + 0.5).floor() / 10.0;
        assert_eq!(d.efficiency_gap_percent(), format!("{expected}%"));
    }
}
