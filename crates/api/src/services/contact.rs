//! Contact form service.

use sqlx::PgPool;
use thiserror::Error;

use blonde_shop_core::{Email, EmailError};

use crate::db::{ContactRepository, RepositoryError};

/// Errors that can occur when submitting the contact form.
#[derive(Debug, Error)]
pub enum ContactError {
    /// A required field was empty.
    #[error("missing contact fields")]
    MissingFields,

    /// Email failed format validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// A validated contact submission.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub number: String,
    pub message: String,
}

/// Validate the contact form fields.
///
/// All four fields are required (after trimming); the email must also
/// pass format validation.
///
/// # Errors
///
/// Returns `ContactError::MissingFields` or `ContactError::InvalidEmail`.
pub fn validate(
    name: &str,
    email: &str,
    number: &str,
    message: &str,
) -> Result<ContactSubmission, ContactError> {
    let name = name.trim();
    let email = email.trim();
    let number = number.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || number.is_empty() || message.is_empty() {
        return Err(ContactError::MissingFields);
    }

    let email = Email::parse(email)?;

    Ok(ContactSubmission {
        name: name.to_owned(),
        email,
        number: number.to_owned(),
        message: message.to_owned(),
    })
}

/// Contact form service.
pub struct ContactService<'a> {
    messages: ContactRepository<'a>,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            messages: ContactRepository::new(pool),
        }
    }

    /// Validate and store a contact form submission.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingFields` or `ContactError::InvalidEmail`
    /// on bad input, `ContactError::Repository` if the insert fails.
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        number: &str,
        message: &str,
    ) -> Result<(), ContactError> {
        let submission = validate(name, email, number, message)?;

        self.messages
            .insert(
                &submission.name,
                &submission.email,
                &submission.number,
                &submission.message,
            )
            .await?;

        Ok(())
    }
}
