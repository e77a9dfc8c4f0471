//! Draws the form into a [`Buffer`].
//!
//! Layout, top to bottom: a label and input row per field, the error line
//! (blank when no error is set), the submit button and a key hint.

use signup_form::{Field, Focus, InputEditor};

use crate::app::SignupApp;
use crate::buffer::{Buffer, Cell, Rgb, TextStyle, char_width};

pub const LEFT: u16 = 2;
pub const TOP: u16 = 1;

/// Preferred width of an input row, in columns.
const FIELD_WIDTH: u16 = 40;

/// Shown in place of each character of a password.
const MASK: char = '•';

pub const SUBMIT_LABEL: &str = "[ Submit ]";
const HINT: &str = "Tab/Shift+Tab move · Enter submit · Esc quit";

const TEXT: Rgb = Rgb::new(230, 230, 230);
const MUTED: Rgb = Rgb::new(140, 140, 150);
const PRIMARY: Rgb = Rgb::new(90, 150, 250);
const ERROR: Rgb = Rgb::new(230, 80, 80);
const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const INPUT_BG: Rgb = Rgb::new(40, 40, 48);
const FOCUS_BG: Rgb = Rgb::new(60, 60, 76);
const SELECTION_BG: Rgb = Rgb::new(70, 100, 170);

/// Row of a field's label.
pub fn label_row(field: Field) -> u16 {
    TOP + field.position() as u16 * 3
}

/// Row of a field's input.
pub fn input_row(field: Field) -> u16 {
    label_row(field) + 1
}

/// Row of the error line.
pub fn error_row() -> u16 {
    TOP + 9
}

/// Row of the submit button.
pub fn submit_row() -> u16 {
    error_row() + 1
}

fn hint_row() -> u16 {
    submit_row() + 2
}

/// Draw the whole form. Returns the caret position when a field has focus.
pub fn render(app: &SignupApp, buf: &mut Buffer) -> Option<(u16, u16)> {
    let form = app.form();
    let max_x = buf.width().saturating_sub(LEFT);
    let field_width = FIELD_WIDTH.min(max_x.saturating_sub(LEFT));
    let mut caret = None;

    for field in Field::ALL {
        buf.put_str(
            LEFT,
            label_row(field),
            field.label(),
            max_x,
            Cell::default().with_fg(TEXT).with_style(TextStyle::bold()),
        );

        let editor = (app.focus() == Focus::Field(field)).then(|| app.editor(field));
        let field_caret = render_input(
            buf,
            (LEFT, input_row(field)),
            field_width,
            field,
            form.value(field),
            editor,
        );
        caret = caret.or(field_caret);
    }

    if let Some(message) = form.error_message() {
        buf.put_str(
            LEFT,
            error_row(),
            &message,
            max_x,
            Cell::default().with_fg(ERROR).with_bg(BACKGROUND),
        );
    }

    let button = if app.focus() == Focus::Submit {
        Cell::default()
            .with_fg(BACKGROUND)
            .with_bg(PRIMARY)
            .with_style(TextStyle::bold())
    } else {
        Cell::default().with_fg(PRIMARY)
    };
    buf.put_str(LEFT, submit_row(), SUBMIT_LABEL, max_x, button);

    buf.put_str(
        LEFT,
        hint_row(),
        HINT,
        max_x,
        Cell::default().with_fg(MUTED).with_style(TextStyle {
            dim: true,
            ..TextStyle::new()
        }),
    );

    caret
}

/// Draw one input row. `editor` is set only for the focused field.
fn render_input(
    buf: &mut Buffer,
    (x, y): (u16, u16),
    width: u16,
    field: Field,
    value: &str,
    editor: Option<&InputEditor>,
) -> Option<(u16, u16)> {
    let bg = if editor.is_some() { FOCUS_BG } else { INPUT_BG };
    buf.fill(x, y, width, Cell::new(' ').with_bg(bg));

    let shown: Vec<char> = if field.is_masked() {
        value.chars().map(|_| MASK).collect()
    } else {
        value.chars().collect()
    };

    let cursor = editor.map_or(0, |e| e.cursor().min(shown.len()));
    let start = scroll_start(&shown, cursor, width as usize);
    let selection = editor.and_then(InputEditor::selection);
    let max_x = x.saturating_add(width);

    let mut col = x;
    for (i, ch) in shown.iter().enumerate().skip(start) {
        let selected = selection.is_some_and(|(s, e)| i >= s && i < e);
        let template = Cell::default()
            .with_fg(TEXT)
            .with_bg(if selected { SELECTION_BG } else { bg });
        let mut utf8 = [0u8; 4];
        let written = buf.put_str(col, y, ch.encode_utf8(&mut utf8), max_x, template);
        if written == 0 && char_width(*ch) > 0 {
            break;
        }
        col += written;
    }

    editor.map(|_| {
        let offset: usize = shown[start..cursor].iter().map(|c| char_width(*c)).sum();
        let caret_x = x.saturating_add(offset as u16);
        (caret_x.min(max_x.saturating_sub(1)), y)
    })
}

/// First visible character so that everything up to the cursor, plus one
/// column for the caret, fits in `width`.
fn scroll_start(shown: &[char], cursor: usize, width: usize) -> usize {
    let mut used = 1;
    let mut start = cursor;
    while start > 0 {
        let w = char_width(shown[start - 1]);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}
