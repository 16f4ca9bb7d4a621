use super::Validator;
use crate::validation::RejectionReason;

/// A validator for a non-empty card holder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolderNameValidator;

impl Validator<str> for HolderNameValidator {
    type Error = RejectionReason;

    #[inline]
    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        if data.trim().is_empty() {
            return Err(RejectionReason::MissingHolderName);
        }
        Ok(())
    }
}
