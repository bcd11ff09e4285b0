use super::error::ValidationError;
use super::outcome::Outcome;

/// A cross-field rule evaluated over one draft against a fixed subunit list.
///
/// Implementors are stateless apart from borrowed inputs, so a rule can be
/// re-run on every field change.
pub trait DraftRule {
    type Draft;

    /// # Errors
    ///
    /// Returns [`ValidationError::NotFound`] when the draft selects a subunit
    /// the rule was not given.
    fn check(&self, draft: &Self::Draft) -> Result<Outcome, ValidationError>;

    fn check_all(&self, drafts: &[Self::Draft]) -> Result<Vec<Outcome>, ValidationError> {
        drafts.iter().map(|d| self.check(d)).collect()
    }
}
