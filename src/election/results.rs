use crate::election::{Delegation, Parties, Party, Side};

/// The results for a set of delegations from an election between a left and a right party.
#[derive(Clone, Debug)]
pub struct ElectionResults {
    parties: Parties,
    delegations: Vec<Delegation>,
}

/// One row of the per-delegation score table.
#[derive(Clone, Debug, PartialEq)]
pub struct DelegationSummary {
    pub name: String,
    pub abbreviation: String,
    pub seats: usize,
    pub seat_results: [usize; 2],
    pub efficiency_gap: f64,
    pub efficiency_gap_seats: usize,
    pub efficiency_gap_imputation: f64,
    pub efficiency_gap_seats_imputation: usize,
    pub uncontested_seats: [usize; 2],
}

impl ElectionResults {
    pub fn new(left: Party, right: Party, delegations: Vec<Delegation>) -> Self {
        Self { parties: Parties::new(left, right), delegations }
    }

    #[inline] pub fn parties(&self) -> &Parties { &self.parties }

    #[inline] pub fn party(&self, side: Side) -> &Party { self.parties.get(side) }

    #[inline] pub fn delegations(&self) -> &[Delegation] { &self.delegations }

    /// Score table over every delegation that can be scored, in input order.
    /// Delegations failing validation are left out.
    pub fn summaries(&self) -> Vec<DelegationSummary> {
        self.delegations.iter()
            .filter(|delegation| delegation.validate().is_ok())
            .map(DelegationSummary::from)
            .collect()
    }
}

impl From<&Delegation> for DelegationSummary {
    fn from(delegation: &Delegation) -> Self {
        Self {
            name: delegation.name().to_string(),
            abbreviation: delegation.abbreviation().to_string(),
            seats: delegation.seats(),
            seat_results: delegation.seat_results(),
            efficiency_gap: delegation.efficiency_gap(),
            efficiency_gap_seats: delegation.efficiency_gap_seats(),
            efficiency_gap_imputation: delegation.efficiency_gap_imputation(),
            efficiency_gap_seats_imputation: delegation.efficiency_gap_seats_imputation(),
            uncontested_seats: delegation.uncontested_seats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::MultiPolygon;

    use super::*;
    use crate::{election::District, render::Rgb};

    fn delegation(name: &str, votes: &[[u64; 2]]) -> Delegation {
        let districts = votes.iter().enumerate()
            .map(|(i, v)| District::new(format!("{}", i + 1), *v, MultiPolygon(vec![])).unwrap())
            .collect();
        Delegation::new(name, &name[..2], districts)
    }

    #[test]
    fn summaries_skip_delegations_without_seats() {
        let results = ElectionResults::new(
            Party::new("Democratic", Rgb::new(0x45, 0xba, 0xe8)),
            Party::new("Republican", Rgb::new(0xff, 0x59, 0x5f)),
            vec![
                delegation("Alpha", &[[60, 40], [55, 45], [30, 70]]),
                Delegation::new("Empty", "EM", vec![]),
                delegation("Beta", &[[0, 100]]),
            ],
        );

        let rows = results.summaries();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Alpha");
        assert_eq!(rows[0].seats, 3);
        assert_eq!(rows[0].efficiency_gap_seats, 1);
        assert_eq!(rows[1].name, "Beta");
        assert_eq!(rows[1].uncontested_seats, [1, 0]);
        assert_eq!(results.party(Side::Right).name(), "Republican");
    }
}
