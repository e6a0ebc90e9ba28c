use crate::election::{metrics::round_half_up, Delegation, District, Side};

/// Imputed vote count for `side` in `district`: the actual count if the party ran a candidate,
/// otherwise a third of the opponent's votes, i.e. 25% of the new two-party total.
pub(crate) fn imputed_votes(district: &District, side: Side) -> u64 {
    let votes = district.votes();
    if votes[side] > 0 {
        votes[side]
    } else {
        round_half_up(votes[side.other()] as f64 / 3.0) as u64
    }
}

impl Delegation {
    /// Votes each party would have won had every seat been contested.
    /// An unopposed candidate is assumed to have faced an opponent taking 25% of the new total.
    pub fn vote_results_imputation(&self) -> [u64; 2] {
        self.districts().iter().fold([0, 0], |acc, district| {
            [
                acc[0].saturating_add(imputed_votes(district, Side::Left)),
                acc[1].saturating_add(imputed_votes(district, Side::Right)),
            ]
        })
    }

    /// Total votes had every seat been contested.
    pub fn votes_imputation(&self) -> u64 {
        let [left, right] = self.vote_results_imputation();
        left.saturating_add(right)
    }

    /// Vote margin had every seat been contested.
    pub fn vote_margin_imputation(&self) -> f64 {
        self.vote_results_imputation()[Side::Right] as f64 / self.votes_imputation() as f64 - 0.5
    }
}
