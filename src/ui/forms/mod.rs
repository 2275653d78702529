//! Form rendering module
//!
//! - `field_renderer`: input boxes with their error slot
//! - `registration_form`: the registration form layout

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration;
