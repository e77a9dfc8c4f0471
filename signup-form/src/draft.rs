//! The in-memory record of one form session.

/// One of the three text fields on the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields, in display and validation order.
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::ConfirmPassword];

    /// The binding key used by change events.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Look a field up by its binding key. Exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Visible label shown above the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Element id the label points at.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }

    /// Whether the field is a password input whose content is hidden on screen.
    pub fn is_masked(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Zero-based position in [`Field::ALL`].
    pub fn position(self) -> usize {
        match self {
            Field::Email => 0,
            Field::Password => 1,
            Field::ConfirmPassword => 2,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw field values as typed. Intermediate values may be empty or malformed;
/// nothing here is ever trimmed, normalized or rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    values: [String; 3],
}

impl SignupDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.position()]
    }

    /// Replace the value of one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.position()] = value.into();
    }

    pub fn email(&self) -> &str {
        self.get(Field::Email)
    }

    pub fn password(&self) -> &str {
        self.get(Field::Password)
    }

    pub fn confirm_password(&self) -> &str {
        self.get(Field::ConfirmPassword)
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}
