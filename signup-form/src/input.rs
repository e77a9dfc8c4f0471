//! Cursor and selection state for a controlled text field.
//!
//! An [`InputEditor`] never owns the text it edits. The caller passes in the
//! current field value on every keystroke and writes the returned value back
//! into the form, so what is on screen is always what is in the draft.
//! Positions are counted in characters.

use crate::key::{Key, Modifiers};

/// Result of handling a text editing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResult {
    /// Text was modified; carries the new value.
    Changed(String),
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Editing state for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEditor {
    cursor: usize,
    /// Anchor position for selection. When Some and != cursor, text is selected.
    anchor: Option<usize>,
}

impl InputEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the selection range as (start, end) where start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor.and_then(|a| {
            if a != self.cursor {
                Some(if a < self.cursor {
                    (a, self.cursor)
                } else {
                    (self.cursor, a)
                })
            } else {
                None
            }
        })
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Clamp cursor and selection after the text changed elsewhere.
    pub fn sync(&mut self, text: &str) {
        let len = text.chars().count();
        self.cursor = self.cursor.min(len);
        if let Some(anchor) = self.anchor {
            self.anchor = Some(anchor.min(len));
        }
    }

    /// Apply a key to `text`.
    pub fn edit(&mut self, text: &str, key: Key, modifiers: Modifiers) -> EditResult {
        self.sync(text);

        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                EditResult::Changed(self.insert_char(text, c))
            }

            Key::Backspace if modifiers.none() => match self.delete_back(text) {
                Some(new_text) => EditResult::Changed(new_text),
                None => EditResult::Handled,
            },

            Key::Delete if modifiers.none() => match self.delete_forward(text) {
                Some(new_text) => EditResult::Changed(new_text),
                None => EditResult::Handled,
            },

            Key::Left if !modifiers.ctrl => {
                self.move_cursor(text, -1, modifiers.shift);
                EditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.move_cursor(text, 1, modifiers.shift);
                EditResult::Handled
            }

            Key::Home if !modifiers.ctrl => {
                self.move_to(0, modifiers.shift);
                EditResult::Handled
            }

            Key::End if !modifiers.ctrl => {
                self.move_to(text.chars().count(), modifiers.shift);
                EditResult::Handled
            }

            Key::Char('a') if modifiers.ctrl => {
                self.select_all(text);
                EditResult::Handled
            }

            Key::Enter => EditResult::Submitted,

            _ => EditResult::Ignored,
        }
    }

    /// Select all text.
    pub fn select_all(&mut self, text: &str) {
        if !text.is_empty() {
            self.anchor = Some(0);
            self.cursor = text.chars().count();
        }
    }

    /// Insert a character at cursor, replacing selection if any.
    fn insert_char(&mut self, text: &str, c: char) -> String {
        let (start, end) = self.selection().unwrap_or((self.cursor, self.cursor));
        let new_text = splice(text, start, end, Some(c));
        self.cursor = start + 1;
        self.clear_selection();
        new_text
    }

    /// Delete character before cursor or delete selection.
    fn delete_back(&mut self, text: &str) -> Option<String> {
        if let Some((start, end)) = self.selection() {
            self.cursor = start;
            self.clear_selection();
            Some(splice(text, start, end, None))
        } else if self.cursor > 0 {
            let start = self.cursor - 1;
            self.cursor = start;
            Some(splice(text, start, start + 1, None))
        } else {
            None
        }
    }

    /// Delete character after cursor or delete selection.
    fn delete_forward(&mut self, text: &str) -> Option<String> {
        if let Some((start, end)) = self.selection() {
            self.cursor = start;
            self.clear_selection();
            Some(splice(text, start, end, None))
        } else if self.cursor < text.chars().count() {
            Some(splice(text, self.cursor, self.cursor + 1, None))
        } else {
            None
        }
    }

    /// Move cursor by delta characters.
    fn move_cursor(&mut self, text: &str, delta: isize, extend_selection: bool) {
        if !extend_selection {
            // Collapse an existing selection onto the edge in the direction of travel
            if let Some((start, end)) = self.selection() {
                self.cursor = if delta < 0 { start } else { end };
                self.clear_selection();
                return;
            }
        }

        let len = text.chars().count();
        let target = self.cursor.saturating_add_signed(delta).min(len);
        self.move_to(target, extend_selection);
    }

    fn move_to(&mut self, position: usize, extend_selection: bool) {
        if extend_selection && self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        } else if !extend_selection {
            self.clear_selection();
        }
        self.cursor = position;
    }
}

/// Replace the characters in `start..end` with `insert`.
fn splice(text: &str, start: usize, end: usize, insert: Option<char>) -> String {
    let start_byte = char_to_byte_index(text, start);
    let end_byte = char_to_byte_index(text, end);
    let mut new_text = String::with_capacity(text.len() + 4);
    new_text.push_str(&text[..start_byte]);
    if let Some(c) = insert {
        new_text.push(c);
    }
    new_text.push_str(&text[end_byte..]);
    new_text
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
