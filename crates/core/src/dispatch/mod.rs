//! Routing of inbound events to contact operations.
//!
//! Pure functions only: turning a gateway event into an [`Operation`], and
//! turning outcomes into a [`ContactResponse`]. Running the operation against
//! a repository is the shell's job.

mod error;
mod event;
mod http_mapping;
mod method;
mod operations;

pub use error::{ContactError, StoreAction};
pub use event::{ContactEvent, ContactResponse};
pub use http_mapping::contact_error_to_status_code;
pub use method::Method;
pub use operations::{
    added_message, deleted_message, parse_operation, updated_message, Operation,
};
