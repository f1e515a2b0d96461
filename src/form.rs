use serde::Serialize;

/// Names one field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// The record bound to the contact form, serialized as-is into the request
/// body. Required-ness is enforced by the input widgets, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Returns a fresh record with exactly one field replaced.
    #[must_use]
    pub fn with_field(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Message => next.message = value,
        }
        next
    }
}
