//! Card brand classification by number prefix and length.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A card network identified by the number's prefix and length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardBrand {
    /// Visa.
    Visa,
    /// Mastercard.
    Mastercard,
    /// American Express.
    AmericanExpress,
    /// Discover.
    Discover,
    /// RuPay.
    RuPay,
    /// Diners Club.
    DinersClub,
    /// JCB.
    Jcb,
    /// An unrecognized network. Still validated against the 16-digit,
    /// 3-digit-CVV defaults rather than rejected outright.
    #[default]
    Unknown,
}

impl CardBrand {
    /// Detects the card brand from a digit string.
    ///
    /// Total and deterministic: any input maps to exactly one brand, with
    /// `Unknown` for strings matching no pattern. The prefix sets overlap,
    /// so the patterns are tested in a fixed priority order.
    pub fn detect(digits: &str) -> Self {
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Self::Unknown;
        }

        let length = digits.len();
        if length == 15 && (digits.starts_with("34") || digits.starts_with("37")) {
            return Self::AmericanExpress;
        }
        if (length == 13 || length == 16) && digits.starts_with('4') {
            return Self::Visa;
        }
        if length == 16 && matches!(leading_number(digits, 2), Some(51..=55 | 22..=27)) {
            return Self::Mastercard;
        }
        if length == 16 && (digits.starts_with("6011") || digits.starts_with("65")) {
            return Self::Discover;
        }
        // Discover claims `6011` and `65` first, so in practice this arm
        // only sees the remaining `60` prefixes.
        if length == 16
            && (digits.starts_with("60")
                || (digits.starts_with("652")
                    && matches!(leading_number(&digits[3..], 3), Some(150..=179))))
        {
            return Self::RuPay;
        }
        if length == 14
            && (matches!(leading_number(digits, 3), Some(300..=305))
                || digits.starts_with("36")
                || digits.starts_with("38"))
        {
            return Self::DinersClub;
        }
        if (length == 15 && (digits.starts_with("2131") || digits.starts_with("1800")))
            || (length == 16 && digits.starts_with("35"))
        {
            return Self::Jcb;
        }
        Self::Unknown
    }

    /// Returns the expected total number of digits for the brand.
    #[inline]
    pub fn expected_length(&self) -> usize {
        match self {
            Self::AmericanExpress => 15,
            Self::DinersClub => 14,
            _ => 16,
        }
    }

    /// Returns the expected number of CVV digits for the brand.
    #[inline]
    pub fn cvv_length(&self) -> usize {
        match self {
            Self::AmericanExpress => 4,
            _ => 3,
        }
    }

    /// Returns the user-displayable brand label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::RuPay => "RuPay",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the leading digits of a string as a number.
fn leading_number(digits: &str, num_digits: usize) -> Option<u32> {
    digits.get(..num_digits)?.parse().ok()
}
