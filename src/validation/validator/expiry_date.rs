use super::Validator;
use crate::{expiry::Expiry, validation::RejectionReason};

/// A validator for an `MM/YY` expiry date which must not lie in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryValidator;

impl Validator<str> for ExpiryValidator {
    type Error = RejectionReason;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        let expiry = data.parse::<Expiry>()?;
        if expiry.is_expired() {
            return Err(RejectionReason::CardExpired);
        }
        Ok(())
    }
}
