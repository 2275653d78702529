//! Registration endpoint client module

mod client;
mod error;
mod traits;

pub use client::{RegistrationClient, SubmitReceipt, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use traits::RegistrationClientTrait;

#[cfg(test)]
pub use traits::MockRegistrationClientTrait;
