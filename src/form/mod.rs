//! Form domain layer
//!
//! Field declarations and the editable contact form the pipeline validates.

mod contact_form;
mod field;

pub use contact_form::{ContactForm, Form, FormError};
pub use field::{FieldKind, FormField};
