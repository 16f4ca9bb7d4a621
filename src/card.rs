//! Payment input and the submission validation pipeline.
use crate::{brand::CardBrand, expiry::Expiry, validation::RejectionReason};
use chrono::{Datelike, Local};
use serde::Serialize;

/// Raw payment details collected from a checkout form.
///
/// Instances are transient: constructed from the form fields, validated once
/// per submission, and discarded. Nothing here is ever persisted.
#[derive(Debug, Clone, Default)]
pub struct CardInput {
    /// The card number as typed, possibly with separators.
    pub number: String,
    /// The expiry date in the `MM/YY` format.
    pub expiry: String,
    /// The card verification value.
    pub cvv: String,
    /// The card holder name.
    pub holder_name: String,
}

impl CardInput {
    /// Returns the card number with all non-digit characters stripped.
    #[inline]
    pub fn number_digits(&self) -> String {
        self.number.chars().filter(char::is_ascii_digit).collect()
    }

    /// Validates the input against the current local date.
    ///
    /// Every rejection is terminal for the submission attempt: the caller
    /// re-prompts with the reason and nothing is retried automatically.
    pub fn validate(&self) -> Result<CardSummary, RejectionReason> {
        let now = Local::now();
        self.validate_at(now.year().rem_euclid(100) as u32, now.month())
    }

    /// Validates the input against the given two-digit year and 1-12 month.
    pub fn validate_at(
        &self,
        current_year: u32,
        current_month: u32,
    ) -> Result<CardSummary, RejectionReason> {
        let digits = self.number_digits();
        let brand = CardBrand::detect(&digits);
        if digits.len() != brand.expected_length() {
            return Err(RejectionReason::InvalidCardNumber(brand));
        }

        let expiry = self.expiry.parse::<Expiry>()?;
        if expiry.is_expired_at(current_year, current_month) {
            return Err(RejectionReason::CardExpired);
        }

        let cvv_length = brand.cvv_length();
        if self.cvv.len() != cvv_length || !self.cvv.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(RejectionReason::InvalidCvv(cvv_length));
        }

        if self.holder_name.trim().is_empty() {
            return Err(RejectionReason::MissingHolderName);
        }

        let last4 = digits[digits.len() - 4..].to_owned();
        Ok(CardSummary {
            brand,
            last4,
            expiry_month: expiry.month(),
            expiry_year: expiry.year(),
        })
    }
}

/// The summary of an accepted card, safe to forward to a payment-recording
/// endpoint. It never contains the full card number or the CVV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    /// The detected card brand.
    pub brand: CardBrand,
    /// The last four digits of the card number.
    pub last4: String,
    /// The expiry month in the range 1-12.
    pub expiry_month: u32,
    /// The two-digit expiry year.
    pub expiry_year: u32,
}

#[cfg(test)]
mod tests {
    use super::CardInput;
    use crate::{brand::CardBrand, validation::RejectionReason};

    fn input(number: &str, expiry: &str, cvv: &str, holder_name: &str) -> CardInput {
        CardInput {
            number: number.to_owned(),
            expiry: expiry.to_owned(),
            cvv: cvv.to_owned(),
            holder_name: holder_name.to_owned(),
        }
    }

    #[test]
    fn it_accepts_a_valid_visa_card() {
        let summary = input("4111 1111 1111 1111", "08/29", "123", "Ada Lovelace")
            .validate_at(26, 8)
            .unwrap();
        assert_eq!(summary.brand, CardBrand::Visa);
        assert_eq!(summary.last4, "1111");
        assert_eq!(summary.expiry_month, 8);
        assert_eq!(summary.expiry_year, 29);
    }

    #[test]
    fn it_requires_a_four_digit_cvv_for_amex() {
        let card = input("341111111111111", "08/29", "123", "Ada Lovelace");
        assert_eq!(card.validate_at(26, 8), Err(RejectionReason::InvalidCvv(4)));

        let summary = input("341111111111111", "08/29", "1234", "Ada Lovelace")
            .validate_at(26, 8)
            .unwrap();
        assert_eq!(summary.brand, CardBrand::AmericanExpress);
        assert_eq!(summary.last4, "1111");
    }

    #[test]
    fn it_checks_length_against_the_detected_brand() {
        let card = input("4111 1111 1111 111", "08/29", "123", "Ada Lovelace");
        assert_eq!(
            card.validate_at(26, 8),
            Err(RejectionReason::InvalidCardNumber(CardBrand::Unknown)),
        );

        let summary = input("30123456789012", "08/29", "123", "Ada Lovelace")
            .validate_at(26, 8)
            .unwrap();
        assert_eq!(summary.brand, CardBrand::DinersClub);
        assert_eq!(summary.last4, "9012");
    }

    #[test]
    fn it_accepts_an_unknown_brand_at_the_default_length() {
        // Shape checking only: unrecognized brands fall back to the 16-digit
        // default, so a processor-side rejection is still possible.
        let summary = input("1234567890123456", "08/29", "123", "Ada Lovelace")
            .validate_at(26, 8)
            .unwrap();
        assert_eq!(summary.brand, CardBrand::Unknown);
        assert_eq!(summary.last4, "3456");
    }

    #[test]
    fn it_rejects_bad_expiry_dates() {
        let card = input("4111111111111111", "8/29", "123", "Ada Lovelace");
        assert_eq!(
            card.validate_at(26, 8),
            Err(RejectionReason::InvalidExpiryFormat),
        );

        let card = input("4111111111111111", "02/20", "123", "Ada Lovelace");
        assert_eq!(card.validate_at(26, 8), Err(RejectionReason::CardExpired));

        // The current month is still valid; the previous month is not.
        let card = input("4111111111111111", "08/26", "123", "Ada Lovelace");
        assert!(card.validate_at(26, 8).is_ok());
        let card = input("4111111111111111", "07/26", "123", "Ada Lovelace");
        assert_eq!(card.validate_at(26, 8), Err(RejectionReason::CardExpired));
    }

    #[test]
    fn it_rejects_a_malformed_cvv_and_a_missing_name() {
        let card = input("4111111111111111", "08/29", "12a", "Ada Lovelace");
        assert_eq!(card.validate_at(26, 8), Err(RejectionReason::InvalidCvv(3)));

        let card = input("4111111111111111", "08/29", "1234", "Ada Lovelace");
        assert_eq!(card.validate_at(26, 8), Err(RejectionReason::InvalidCvv(3)));

        let card = input("4111111111111111", "08/29", "123", "   ");
        assert_eq!(
            card.validate_at(26, 8),
            Err(RejectionReason::MissingHolderName),
        );
    }
}
