pub type ReportResult<T> = Result<T, ReportError>;

/// Failures surfaced while turning raw election data into infographics.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Raw input could not be turned into a district (bad votes, missing boundary, ...).
    #[error("ingestion error in delegation '{delegation}', district '{district}': {reason}")]
    Ingestion { delegation: String, district: String, reason: String },

    /// The delegation is well-formed but cannot be scored (no seats, no votes).
    #[error("delegation '{delegation}' cannot be reported: {reason}")]
    Degenerate { delegation: String, reason: String },

    /// Drawing or writing the delegation's image failed.
    #[error("rendering failed for delegation '{delegation}': {source:#}")]
    Render {
        delegation: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    pub fn ingestion(delegation: impl Into<String>, district: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Ingestion { delegation: delegation.into(), district: district.into(), reason: reason.into() }
    }

    pub fn degenerate(delegation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Degenerate { delegation: delegation.into(), reason: reason.into() }
    }

    pub fn render(delegation: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Render { delegation: delegation.into(), source: source.into() }
    }

    /// Whether this error only affects a single delegation, so the batch may continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Degenerate { .. } | Self::Render { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_records() {
        let err = ReportError::ingestion("PA", "07", "left votes 'abc' is not an integer");
        let msg = err.to_string();
        assert!(msg.contains("'PA'"));
        assert!(msg.contains("'07'"));
        assert!(msg.contains("abc"));

        let err = ReportError::degenerate("Wyoming", "no seats");
        assert!(err.to_string().contains("Wyoming"));
    }

    #[test]
    fn render_preserves_source_chain() {
        let base = std::io::Error::other("disk full");
        let err = ReportError::render("Ohio", anyhow::Error::new(base).context("[io::png] write"));
        let msg = err.to_string();
        assert!(msg.contains("Ohio"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn only_per_delegation_errors_are_recoverable() {
        assert!(ReportError::degenerate("x", "y").is_recoverable());
        assert!(ReportError::render("x", anyhow::anyhow!("boom")).is_recoverable());
        assert!(!ReportError::ingestion("x", "y", "z").is_recoverable());
        assert!(!ReportError::Other(anyhow::anyhow!("config")).is_recoverable());
    }
}
