//! Form domain layer
//!
//! Type-safe state for the registration form: text fields, the role
//! selector with its conditional field, consent, and the submission state.

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::{FormFocus, FormPayload, RegistrationForm};
pub use validation::ValidationError;

#[cfg(test)]
pub use form_state::{Role, SubmissionState};
