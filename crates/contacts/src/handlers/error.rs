use contacts_core::dispatch::{contact_error_to_status_code, ContactError, ContactResponse};

/// Renders an error as a response and logs it.
pub fn error_response(error: &ContactError) -> ContactResponse {
    let status = contact_error_to_status_code(error);

    match error {
        ContactError::Validation(_) => {
            tracing::warn!(status, error = %error, "Request rejected");
        }
        ContactError::Store { .. } => {
            tracing::error!(status, error = %error, "Store operation failed");
        }
    }

    ContactResponse::message(status, error.to_string())
}
