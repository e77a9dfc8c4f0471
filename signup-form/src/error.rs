//! Error types for the sign-up form.

use thiserror::Error;

use crate::draft::Field;

/// A failed submit-time check. Each variant maps to one fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("The email you input is invalid.")]
    InvalidEmail,

    #[error("The password you entered should contain {min} or more characters.")]
    PasswordTooShort {
        /// Minimum number of characters required.
        min: usize,
    },

    #[error("The passwords don't match. Try again.")]
    PasswordMismatch,
}

impl SignupError {
    /// The field this failure is reported against.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidEmail => Field::Email,
            Self::PasswordTooShort { .. } => Field::Password,
            Self::PasswordMismatch => Field::ConfirmPassword,
        }
    }
}

/// Errors from binding values into the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
}
