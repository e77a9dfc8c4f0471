//! Submit-time validation.
//!
//! Checks are declared per field with a fluent builder and run strictly in
//! declaration order. The first failing check wins and nothing after it runs.
//!
//! # Example
//!
//! ```
//! use signup_form::{Field, SignupDraft, SignupError, Validator};
//!
//! let validator = Validator::new()
//!     .field(Field::Email)
//!         .email(SignupError::InvalidEmail)
//!     .field(Field::Password)
//!         .min_length(5, SignupError::PasswordTooShort { min: 5 })
//!     .build();
//!
//! let mut draft = SignupDraft::new();
//! draft.set(Field::Email, "selenagmail.com");
//! assert_eq!(validator.validate(&draft), Err(SignupError::InvalidEmail));
//! ```

mod rules;
mod validator;

pub use rules::{equals, has_min_chars, is_email};
pub use validator::{FieldBuilder, Validator};
