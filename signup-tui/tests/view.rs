//! Tests for drawing the form into a buffer.

use signup_form::{Field, Key, Modifiers};
use signup_tui::view::{self, LEFT, SUBMIT_LABEL};
use signup_tui::{Buffer, SignupApp};

fn press(app: &mut SignupApp, key: Key) {
    app.handle_key(key, Modifiers::new());
}

fn type_text(app: &mut SignupApp, text: &str) {
    for c in text.chars() {
        press(app, Key::Char(c));
    }
}

fn draw(app: &SignupApp, width: u16, height: u16) -> (Buffer, Option<(u16, u16)>) {
    let mut buf = Buffer::new(width, height);
    let caret = view::render(app, &mut buf);
    (buf, caret)
}

fn screen(buf: &Buffer) -> Vec<String> {
    (0..buf.height()).map(|y| buf.line(y)).collect()
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_labels_and_button() {
    let app = SignupApp::new();
    let (buf, _) = draw(&app, 80, 20);

    assert_eq!(buf.line(view::label_row(Field::Email)).trim(), "Email Address");
    assert_eq!(buf.line(view::label_row(Field::Password)).trim(), "Password");
    assert_eq!(
        buf.line(view::label_row(Field::ConfirmPassword)).trim(),
        "Confirm Password"
    );
    assert_eq!(buf.line(view::submit_row()).trim(), SUBMIT_LABEL);
}

#[test]
fn test_no_error_line_initially() {
    let app = SignupApp::new();
    let (buf, _) = draw(&app, 80, 20);
    assert_eq!(buf.line(view::error_row()), "");
}

#[test]
fn test_inputs_initially_empty() {
    let app = SignupApp::new();
    let (buf, _) = draw(&app, 80, 20);
    for field in Field::ALL {
        assert_eq!(buf.line(view::input_row(field)), "");
    }
}

// ============================================================================
// Field content
// ============================================================================

#[test]
fn test_email_is_shown_as_typed() {
    let mut app = SignupApp::new();
    type_text(&mut app, "selena@gmail.com");
    let (buf, caret) = draw(&app, 80, 20);

    assert_eq!(buf.line(view::input_row(Field::Email)).trim(), "selena@gmail.com");
    assert_eq!(caret, Some((LEFT + 16, view::input_row(Field::Email))));
}

#[test]
fn test_passwords_are_masked() {
    let mut app = SignupApp::new();
    press(&mut app, Key::Tab);
    type_text(&mut app, "qwer1234");
    let (buf, _) = draw(&app, 80, 20);

    let row = buf.line(view::input_row(Field::Password));
    assert_eq!(row.trim(), "••••••••");
    assert!(!screen(&buf).iter().any(|line| line.contains("qwer")));
    // The state itself is untouched
    assert_eq!(app.form().value(Field::Password), "qwer1234");
}

#[test]
fn test_long_value_scrolls_to_caret() {
    let mut app = SignupApp::new();
    let long = format!("{}@example.com", "a".repeat(60));
    type_text(&mut app, &long);
    let (buf, caret) = draw(&app, 80, 20);

    let row = buf.line(view::input_row(Field::Email));
    assert!(row.trim_end().ends_with("@example.com"));
    let (x, _) = caret.unwrap();
    assert!(x < LEFT + 40);
}

#[test]
fn test_caret_follows_focus() {
    let mut app = SignupApp::new();
    press(&mut app, Key::Tab);
    press(&mut app, Key::Tab);
    let (_, caret) = draw(&app, 80, 20);
    assert_eq!(caret, Some((LEFT, view::input_row(Field::ConfirmPassword))));

    press(&mut app, Key::Tab);
    let (_, caret) = draw(&app, 80, 20);
    assert_eq!(caret, None);
}

// ============================================================================
// Error line
// ============================================================================

#[test]
fn test_error_line_after_failed_submit() {
    let mut app = SignupApp::new();
    type_text(&mut app, "selenagmail.com");
    app.submit();
    let (buf, _) = draw(&app, 80, 20);

    assert_eq!(
        buf.line(view::error_row()).trim(),
        "The email you input is invalid."
    );
    let lines = screen(&buf);
    assert!(!lines.iter().any(|l| l.contains("characters")));
    assert!(!lines.iter().any(|l| l.contains("match")));
}

#[test]
fn test_error_line_cleared_after_valid_submit() {
    let mut app = SignupApp::new();
    type_text(&mut app, "a@b.com");
    app.submit();
    let (buf, _) = draw(&app, 80, 20);
    assert!(buf.line(view::error_row()).contains("5 or more characters"));

    press(&mut app, Key::Tab);
    type_text(&mut app, "qwer12345");
    press(&mut app, Key::Tab);
    type_text(&mut app, "qwer12345");
    app.submit();
    let (buf, _) = draw(&app, 80, 20);
    assert_eq!(buf.line(view::error_row()), "");
}

#[test]
fn test_narrow_terminal_clips_without_panicking() {
    let mut app = SignupApp::new();
    type_text(&mut app, "bad");
    app.submit();
    let (buf, _) = draw(&app, 12, 20);
    assert!(buf.line(view::error_row()).chars().count() <= 12);
}
