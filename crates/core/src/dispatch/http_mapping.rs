//! Pure functions for mapping contact errors to HTTP status codes.

use super::ContactError;

/// Maps a [`ContactError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `Store` -> 500 (Internal Server Error), whatever the store reported
///
/// # Examples
///
/// ```
/// use contacts_core::contact::ValidationError;
/// use contacts_core::dispatch::{contact_error_to_status_code, ContactError};
///
/// let error = ContactError::from(ValidationError::MissingFields);
/// assert_eq!(contact_error_to_status_code(&error), 400);
/// ```
pub fn contact_error_to_status_code(error: &ContactError) -> u16 {
    match error {
        ContactError::Validation(_) => 400,
        ContactError::Store { .. } => 500,
    }
}
