//! Form rendering module
//!
//! - `field_renderer`: text input, selector and checkbox rendering
//! - `registration_form`: the registration panel of the page

mod field_renderer;
mod registration_form;

pub use registration_form::draw;
