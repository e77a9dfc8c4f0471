//! Form configuration.

/// Default minimum password length, in characters.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 5;

/// Configuration for a [`SignupForm`](crate::SignupForm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfig {
    /// Minimum number of characters (code points) in the password.
    pub min_password_length: usize,

    /// What happens to a previously shown error when a submission passes.
    pub on_success: SuccessPolicy,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            on_success: SuccessPolicy::default(),
        }
    }
}

impl SignupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum password length.
    pub fn min_password_length(mut self, min: usize) -> Self {
        self.min_password_length = min;
        self
    }

    /// Set the success policy.
    pub fn on_success(mut self, policy: SuccessPolicy) -> Self {
        self.on_success = policy;
        self
    }

    /// Leave stale errors on screen after a passing submission.
    pub fn keep_error_on_success(mut self) -> Self {
        self.on_success = SuccessPolicy::KeepError;
        self
    }
}

/// Behavior of the error line when every check passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuccessPolicy {
    /// Remove any error left over from an earlier submission.
    #[default]
    ClearError,

    /// Leave the previous error untouched.
    KeepError,
}
