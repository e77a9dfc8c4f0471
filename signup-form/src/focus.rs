//! Keyboard focus across the form's controls.

use crate::draft::Field;

/// A focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    /// Tab order.
    pub const ORDER: [Focus; 4] = [
        Focus::Field(Field::Email),
        Focus::Field(Field::Password),
        Focus::Field(Field::ConfirmPassword),
        Focus::Submit,
    ];

    /// The focused field, if a text field has focus.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }
}

/// Cycles focus through [`Focus::ORDER`], wrapping at both ends.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    index: usize,
}

impl FocusRing {
    /// Start with the email field focused.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Focus {
        Focus::ORDER[self.index]
    }

    pub fn is_focused(&self, focus: Focus) -> bool {
        self.current() == focus
    }

    /// Move to the next control.
    pub fn focus_next(&mut self) -> Focus {
        self.index = (self.index + 1) % Focus::ORDER.len();
        self.current()
    }

    /// Move to the previous control.
    pub fn focus_prev(&mut self) -> Focus {
        self.index = (self.index + Focus::ORDER.len() - 1) % Focus::ORDER.len();
        self.current()
    }

    /// Jump straight to a control.
    pub fn focus(&mut self, focus: Focus) {
        if let Some(index) = Focus::ORDER.iter().position(|f| *f == focus) {
            self.index = index;
        }
    }
}
