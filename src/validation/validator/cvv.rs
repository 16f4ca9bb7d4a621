use super::Validator;
use crate::{brand::CardBrand, validation::RejectionReason};

/// A validator for a CVV with a brand-specific length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvvValidator(pub CardBrand);

impl Validator<str> for CvvValidator {
    type Error = RejectionReason;

    #[inline]
    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        let expected_length = self.0.cvv_length();
        if data.len() != expected_length || !data.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(RejectionReason::InvalidCvv(expected_length));
        }
        Ok(())
    }
}
