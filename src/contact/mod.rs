//! Contact form: field validation, submission status and email delivery.

mod form;
mod status;
mod transport;

pub use form::{ContactForm, Field, FieldErrors, Service};
pub use status::SubmissionStatus;
pub use transport::{EmailClient, EmailRequest};
