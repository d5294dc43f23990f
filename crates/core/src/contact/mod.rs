mod error;
mod requests;
mod types;

pub use error::ValidationError;
pub use requests::ContactPayload;
pub use types::Contact;
