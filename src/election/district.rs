use anyhow::{anyhow, ensure, Result};
use geo::MultiPolygon;

use crate::election::Side;

/// A geographic area represented by one seat, contested by at most one candidate per party.
#[derive(Clone, Debug)]
pub struct District {
    identifier: String,
    votes: [u64; 2],
    boundary: MultiPolygon<f64>,
}

impl District {
    /// Construct a district from already-parsed vote counts.
    /// A zero count means that party fielded no candidate; both zero is rejected, as is a
    /// total that does not fit in a `u64`.
    pub fn new(identifier: impl Into<String>, votes: [u64; 2], boundary: MultiPolygon<f64>) -> Result<Self> {
        let identifier = identifier.into();
        ensure!(
            votes.iter().any(|&v| v > 0),
            "[District::new] district '{identifier}' has no recorded votes for either party"
        );
        ensure!(
            votes[0].checked_add(votes[1]).is_some(),
            "[District::new] vote total of district '{identifier}' overflows"
        );

        Ok(Self { identifier, votes, boundary })
    }

    /// Construct a district from raw vote strings as they appear in the results table.
    pub fn parse(identifier: impl Into<String>, votes: [&str; 2], boundary: MultiPolygon<f64>) -> Result<Self> {
        let identifier = identifier.into();
        let parse = |side: Side| {
            let raw = votes[side.index()].trim();
            raw.parse::<u64>().map_err(|_| anyhow!(
                "[District::parse] {side:?} vote count '{raw}' for district '{identifier}' is not a non-negative integer"
            ))
        };

        let votes = [parse(Side::Left)?, parse(Side::Right)?];
        Self::new(identifier, votes, boundary)
    }

    #[inline] pub fn identifier(&self) -> &str { &self.identifier }

    #[inline] pub fn votes(&self) -> [u64; 2] { self.votes }

    /// Votes cast for both parties.
    #[inline] pub fn total_votes(&self) -> u64 { self.votes[0] + self.votes[1] }

    #[inline] pub fn boundary(&self) -> &MultiPolygon<f64> { &self.boundary }

    /// The winning side. Ties go to the right.
    #[inline]
    pub fn result(&self) -> Side {
        if self.votes[0] > self.votes[1] { Side::Left } else { Side::Right }
    }

    /// Right votes minus left votes; negative numbers show a left victory.
    #[inline] pub fn margin(&self) -> i128 { i128::from(self.votes[1]) - i128::from(self.votes[0]) }

    /// Whether `side` left this seat uncontested (fielded no candidate).
    #[inline] pub fn is_uncontested_by(&self, side: Side) -> bool { self.votes[side] == 0 }
}
