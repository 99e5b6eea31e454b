//! Checks applied before a user is stored.

use thiserror::Error;

use super::dto::NewUser;

/// Errors raised by user creation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Name, email and age are required.")]
    MissingFields,

    #[error("User must be an adult.")]
    Underage,
}

pub const MIN_AGE: u32 = 18;

/// Presence is checked before age, so an empty name with age 10 reports
/// `MissingFields`.
pub fn validate_new_user(input: &NewUser) -> Result<(), UserValidationError> {
    if input.name.is_empty() || input.email.is_empty() {
        return Err(UserValidationError::MissingFields);
    }

    if input.age < MIN_AGE {
        return Err(UserValidationError::Underage);
    }

    Ok(())
}
