//! The sign-up form: draft state, the current error, and the submit handler.

use log::{debug, info};

use crate::config::{SignupConfig, SuccessPolicy};
use crate::draft::{Field, SignupDraft};
use crate::error::{FormError, SignupError};
use crate::validation::Validator;

/// A submit request. Handlers call [`prevent_default`](Self::prevent_default)
/// to stop the surrounding surface from navigating away or reloading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Input the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's raw value changed.
    Change { field: Field, value: String },
    /// The form was submitted.
    Submit,
}

/// What a submission produced.
///
/// `Accepted` only means no error is shown. Nothing is sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(SignupError),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A sign-up form with email, password and confirm-password fields.
///
/// # Example
///
/// ```
/// use signup_form::{Field, SignupForm, SubmitEvent};
///
/// let mut form = SignupForm::new();
/// form.handle_change(Field::Email, "selenagmail.com");
///
/// let mut event = SubmitEvent::new();
/// form.submit(&mut event);
/// assert!(event.default_prevented());
/// assert_eq!(
///     form.error_message().as_deref(),
///     Some("The email you input is invalid.")
/// );
/// ```
#[derive(Debug)]
pub struct SignupForm {
    draft: SignupDraft,
    error: Option<SignupError>,
    config: SignupConfig,
    validator: Validator,
}

impl SignupForm {
    /// Create an empty form with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SignupConfig::default())
    }

    pub fn with_config(config: SignupConfig) -> Self {
        let validator = Validator::signup(&config);
        Self {
            draft: SignupDraft::new(),
            error: None,
            config,
            validator,
        }
    }

    pub fn config(&self) -> &SignupConfig {
        &self.config
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    /// Current value of a field, exactly as typed.
    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    /// The error currently on display.
    pub fn error(&self) -> Option<&SignupError> {
        self.error.as_ref()
    }

    /// The text of the error line, absent when no error is set.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Store a field's new raw value. Nothing is validated here and the
    /// current error is left alone.
    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!("field '{}' changed ({} chars)", field, value.chars().count());
        self.draft.set(field, value);
    }

    /// Store a value by the field's binding key.
    pub fn handle_named_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field =
            Field::from_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.handle_change(field, value);
        Ok(())
    }

    /// Validate the draft and update the error line.
    ///
    /// The event's default action is always prevented, whatever the outcome.
    pub fn submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        match self.validator.validate(&self.draft) {
            Ok(()) => {
                if self.config.on_success == SuccessPolicy::ClearError {
                    self.error = None;
                }
                info!("sign-up form passed validation");
                SubmitOutcome::Accepted
            }
            Err(error) => {
                info!("sign-up form rejected: {:?}", error);
                self.error = Some(error.clone());
                SubmitOutcome::Rejected(error)
            }
        }
    }

    /// Dispatch an event. Returns the outcome for submissions.
    pub fn handle_event(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Change { field, value } => {
                self.handle_change(field, value);
                None
            }
            FormEvent::Submit => Some(self.submit(&mut SubmitEvent::new())),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
