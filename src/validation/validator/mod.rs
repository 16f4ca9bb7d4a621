//! Field validators for payment input.

mod card_number;
mod cvv;
mod expiry_date;
mod holder_name;

pub use card_number::CardNumberValidator;
pub use cvv::CvvValidator;
pub use expiry_date::ExpiryValidator;
pub use holder_name::HolderNameValidator;

/// A generic validator.
pub trait Validator<T: ?Sized> {
    /// The error type.
    type Error: Into<super::RejectionReason>;

    /// Validates the data.
    fn validate(&self, data: &T) -> Result<(), Self::Error>;
}
