//! Raw client input and its conversion into domain values.

use thiserror::Error;
use validator::ValidationErrors;

pub mod client;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid personal id")]
    InvalidPersonalId,
}
