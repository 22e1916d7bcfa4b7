//! Contact message repository.

use sqlx::PgPool;

use blonde_shop_core::Email;

use super::RepositoryError;

/// Repository for contact form submissions.
pub struct ContactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a contact form submission.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        name: &str,
        email: &Email,
        number: &str,
        message: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO contact_messages (name, email, number, message)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(name)
        .bind(email.as_str())
        .bind(number)
        .bind(message)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
