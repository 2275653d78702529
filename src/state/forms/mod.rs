//! Form domain layer
//!
//! Field values, the registration schema and the error slots derived from it.

mod errors;
mod field;
mod form_state;
pub mod validation;

pub use errors::{ErrorRefresh, ErrorSet};
pub use field::{FieldName, FieldSet};
pub use form_state::{Form, RegistrationForm};
