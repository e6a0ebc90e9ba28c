mod delegation;
mod district;
pub(crate) mod metrics;
mod party;
mod results;

pub use delegation::Delegation;
pub use district::District;
pub use party::{Parties, Party, Side};
pub use results::{DelegationSummary, ElectionResults};
