//! Rejection taxonomy, field validators, and validation records.
use crate::{brand::CardBrand, card::CardInput, expiry::ParseExpiryError, Map, SharedString};
use smallvec::SmallVec;
use std::{error, fmt};

mod validator;

pub use validator::{
    CardNumberValidator, CvvValidator, ExpiryValidator, HolderNameValidator, Validator,
};

/// A reason for rejecting a payment submission.
///
/// Every variant maps 1:1 to a user-displayable message and a form field.
/// Rejections are terminal for the attempt; the caller re-prompts rather
/// than retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The number length does not match the detected brand.
    InvalidCardNumber(CardBrand),
    /// The expiry date is not in the `MM/YY` format.
    InvalidExpiryFormat,
    /// The expiry date lies in the past.
    CardExpired,
    /// The CVV is not the expected number of digits for the brand.
    InvalidCvv(usize),
    /// The holder name is empty.
    MissingHolderName,
}

impl RejectionReason {
    /// Returns the form field the rejection applies to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidCardNumber(_) => "number",
            Self::InvalidExpiryFormat | Self::CardExpired => "expiry",
            Self::InvalidCvv(_) => "cvv",
            Self::MissingHolderName => "holder_name",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCardNumber(CardBrand::Unknown) => write!(f, "invalid card number"),
            Self::InvalidCardNumber(brand) => write!(f, "invalid {brand} card number"),
            Self::InvalidExpiryFormat => {
                write!(f, "invalid expiry date, expected the `MM/YY` format")
            }
            Self::CardExpired => write!(f, "the card has expired"),
            Self::InvalidCvv(length) => write!(f, "invalid CVV, expected {length} digits"),
            Self::MissingHolderName => write!(f, "the card holder name is required"),
        }
    }
}

impl error::Error for RejectionReason {}

impl From<ParseExpiryError> for RejectionReason {
    #[inline]
    fn from(_: ParseExpiryError) -> Self {
        Self::InvalidExpiryFormat
    }
}

/// A record of validation results for a checkout form.
#[derive(Debug, Default)]
pub struct Validation {
    failed_entries: SmallVec<[(SharedString, RejectionReason); 4]>,
}

impl Validation {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            failed_entries: SmallVec::new(),
        }
    }

    /// Checks every field of the payment input, recording all failures.
    ///
    /// Unlike [`CardInput::validate`], this does not stop at the first
    /// rejection, so a form can flag every invalid field at once. It is
    /// pure and idempotent and may be re-run on every keystroke.
    pub fn check_card(card: &CardInput) -> Self {
        let mut validation = Self::new();
        let digits = card.number_digits();
        if let Err(err) = CardNumberValidator.validate(digits.as_str()) {
            validation.record_fail("number", err);
        }
        if let Err(err) = ExpiryValidator.validate(card.expiry.as_str()) {
            validation.record_fail("expiry", err);
        }
        let brand = CardBrand::detect(&digits);
        if let Err(err) = CvvValidator(brand).validate(card.cvv.as_str()) {
            validation.record_fail("cvv", err);
        }
        if let Err(err) = HolderNameValidator.validate(card.holder_name.as_str()) {
            validation.record_fail("holder_name", err);
        }
        validation
    }

    /// Records a failed entry for the field.
    #[inline]
    pub fn record_fail(
        &mut self,
        field: impl Into<SharedString>,
        reason: impl Into<RejectionReason>,
    ) {
        self.failed_entries.push((field.into(), reason.into()));
    }

    /// Returns `true` if the validation contains an entry for the field.
    #[inline]
    pub fn contains_key(&self, field: &str) -> bool {
        self.failed_entries.iter().any(|(key, _)| key == field)
    }

    /// Returns `true` if the validation is success.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed_entries.is_empty()
    }

    /// Returns a list of invalid fields.
    #[inline]
    pub fn invalid_params(&self) -> Vec<&str> {
        self.failed_entries
            .iter()
            .map(|entry| entry.0.as_ref())
            .collect()
    }

    /// Consumes the validation and returns a json object of field messages.
    #[must_use]
    pub fn into_map(self) -> Map {
        let mut map = Map::new();
        for (field, reason) in self.failed_entries {
            let message = reason.to_string();
            tracing::warn!("invalid value for `{field}`: {message}");
            map.insert(field.into_owned(), message.into());
        }
        map
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let failed_entries = &self.failed_entries;
        let mut errors = Vec::with_capacity(failed_entries.len());
        for (field, reason) in failed_entries {
            errors.push(format!("invalid value for `{field}`: {reason}"));
        }
        write!(f, "{}", errors.join(","))
    }
}
