use crate::election::{Delegation, Side};

impl Delegation {
    /// Number of seats won by each party.
    pub fn seat_results(&self) -> [usize; 2] {
        let mut seats = [0, 0];
        for district in self.districts() {
            seats[district.result()] += 1;
        }
        seats
    }

    /// Number of votes won by each party. Saturates rather than overflowing.
    pub fn vote_results(&self) -> [u64; 2] {
        self.districts().iter().fold([0, 0], |acc, district| {
            let votes = district.votes();
            [acc[0].saturating_add(votes[0]), acc[1].saturating_add(votes[1])]
        })
    }

    /// Number of seats each party left uncontested.
    pub fn uncontested_seats(&self) -> [usize; 2] {
        Side::BOTH.map(|side| {
            self.districts().iter().filter(|district| district.is_uncontested_by(side)).count()
        })
    }

    /// Whether either party left any seat uncontested.
    pub fn has_uncontested_seats(&self) -> bool {
        self.uncontested_seats() != [0, 0]
    }

    /// Total number of votes cast for both parties.
    pub fn votes(&self) -> u64 {
        let [left, right] = self.vote_results();
        left.saturating_add(right)
    }

    /// Share of seats won by the right party, minus one half.
    /// Negative when the left party won more seats.
    pub fn seat_margin(&self) -> f64 {
        self.seat_results()[Side::Right] as f64 / self.seats() as f64 - 0.5
    }

    /// Share of votes won by the right party, minus one half.
    /// Negative when the left party won more votes.
    pub fn vote_margin(&self) -> f64 {
        self.vote_results()[Side::Right] as f64 / self.votes() as f64 - 0.5
    }
}
