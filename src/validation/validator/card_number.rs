use super::Validator;
use crate::{brand::CardBrand, validation::RejectionReason};

/// A validator for a card number digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardNumberValidator;

impl Validator<str> for CardNumberValidator {
    type Error = RejectionReason;

    #[inline]
    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        let brand = CardBrand::detect(data);
        if data.len() != brand.expected_length() || !data.bytes().all(|byte| byte.is_ascii_digit())
        {
            return Err(RejectionReason::InvalidCardNumber(brand));
        }
        Ok(())
    }
}
