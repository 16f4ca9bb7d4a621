#![doc = include_str!("../README.md")]

pub mod brand;
pub mod card;
pub mod expiry;
pub mod format;
pub mod validation;

pub use brand::CardBrand;
pub use card::{CardInput, CardSummary};
pub use expiry::{Expiry, ParseExpiryError};
pub use validation::{RejectionReason, Validation, Validator};

/// A JSON value.
pub type JsonValue = serde_json::Value;

/// A JSON key-value type.
pub type Map = serde_json::Map<String, JsonValue>;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
