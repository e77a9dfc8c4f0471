//! Validator builder for the fluent validation API.

use log::debug;

use super::rules;
use crate::config::SignupConfig;
use crate::draft::{Field, SignupDraft};
use crate::error::SignupError;

/// Rule over the whole draft. Returns true when the check passes.
type Rule = Box<dyn Fn(&SignupDraft) -> bool + Send + Sync>;

/// One ordered check.
struct Check {
    field: Field,
    error: SignupError,
    rule: Rule,
}

/// Ordered, short-circuiting list of checks.
///
/// # Example
///
/// ```
/// use signup_form::{Field, SignupError, Validator};
///
/// let validator = Validator::new()
///     .field(Field::Password)
///         .min_length(5, SignupError::PasswordTooShort { min: 5 })
///     .field(Field::ConfirmPassword)
///         .matches(Field::Password, SignupError::PasswordMismatch)
///     .build();
/// assert_eq!(validator.len(), 2);
/// ```
pub struct Validator {
    checks: Vec<Check>,
}

impl Validator {
    /// Create a validator with no checks.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// The standard sign-up checks: email syntax, password length, then
    /// password confirmation.
    pub fn signup(config: &SignupConfig) -> Self {
        let min = config.min_password_length;
        Self::new()
            .field(Field::Email)
            .email(SignupError::InvalidEmail)
            .field(Field::Password)
            .min_length(min, SignupError::PasswordTooShort { min })
            .field(Field::ConfirmPassword)
            .matches(Field::Password, SignupError::PasswordMismatch)
            .build()
    }

    /// Start adding checks for a field.
    pub fn field(self, field: Field) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            field,
        }
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run the checks in order and return the first failure.
    ///
    /// Checks after a failing one are never evaluated.
    pub fn validate(&self, draft: &SignupDraft) -> Result<(), SignupError> {
        for (index, check) in self.checks.iter().enumerate() {
            if !(check.rule)(draft) {
                debug!("check {} on '{}' failed: {:?}", index, check.field, check.error);
                return Err(check.error.clone());
            }
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.checks.iter().map(|check| (check.field, &check.error)))
            .finish()
    }
}

/// Builder for adding checks to a single field.
pub struct FieldBuilder {
    validator: Validator,
    field: Field,
}

impl FieldBuilder {
    /// Add a custom check on this field's value.
    pub fn rule<F>(self, f: F, error: SignupError) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let field = self.field;
        self.draft_rule(move |draft| f(draft.get(field)), error)
    }

    /// Add a custom check that can read every field of the draft.
    pub fn draft_rule<F>(mut self, f: F, error: SignupError) -> Self
    where
        F: Fn(&SignupDraft) -> bool + Send + Sync + 'static,
    {
        self.validator.checks.push(Check {
            field: self.field,
            error,
            rule: Box::new(f),
        });
        self
    }

    /// Require a valid email address. Empty input fails.
    pub fn email(self, error: SignupError) -> Self {
        self.rule(rules::is_email, error)
    }

    /// Require at least `min` characters.
    pub fn min_length(self, min: usize, error: SignupError) -> Self {
        self.rule(move |v| rules::has_min_chars(v, min), error)
    }

    /// Require the value to equal another field's value exactly.
    pub fn matches(self, other: Field, error: SignupError) -> Self {
        let field = self.field;
        self.draft_rule(
            move |draft| rules::equals(draft.get(other), draft.get(field)),
            error,
        )
    }

    /// Continue with the next field.
    pub fn field(self, field: Field) -> FieldBuilder {
        self.validator.field(field)
    }

    /// Finish building.
    pub fn build(self) -> Validator {
        self.validator
    }

    /// Finish building and validate a draft.
    pub fn validate(self, draft: &SignupDraft) -> Result<(), SignupError> {
        self.build().validate(draft)
    }
}
