//! Tests for keyboard handling on the sign-up form.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
};
use signup_form::{Field, Focus, Key, Modifiers, SignupConfig, SignupError, SubmitOutcome};
use signup_tui::SignupApp;

const EMAIL_ERROR: &str = "The email you input is invalid.";
const LENGTH_ERROR: &str = "The password you entered should contain 5 or more characters.";
const MISMATCH_ERROR: &str = "The passwords don't match. Try again.";

fn press(app: &mut SignupApp, key: Key) {
    app.handle_key(key, Modifiers::new());
}

fn type_text(app: &mut SignupApp, text: &str) {
    for c in text.chars() {
        press(app, Key::Char(c));
    }
}

/// Fill the three fields in tab order and leave focus on the submit button.
fn fill(app: &mut SignupApp, email: &str, password: &str, confirm: &str) {
    type_text(app, email);
    press(app, Key::Tab);
    type_text(app, password);
    press(app, Key::Tab);
    type_text(app, confirm);
    press(app, Key::Tab);
}

// ============================================================================
// Typing and focus
// ============================================================================

#[test]
fn test_initial_state() {
    let app = SignupApp::new();
    assert_eq!(app.focus(), Focus::Field(Field::Email));
    for field in Field::ALL {
        assert_eq!(app.form().value(field), "");
    }
    assert!(app.form().error_message().is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut app = SignupApp::new();
    fill(&mut app, "selena@gmail.com", "qwer1234", "qwer1234");

    assert_eq!(app.form().value(Field::Email), "selena@gmail.com");
    assert_eq!(app.form().value(Field::Password), "qwer1234");
    assert_eq!(app.form().value(Field::ConfirmPassword), "qwer1234");
    assert_eq!(app.focus(), Focus::Submit);
}

#[test]
fn test_editing_keys_update_form() {
    let mut app = SignupApp::new();
    type_text(&mut app, "selenax");
    press(&mut app, Key::Backspace);
    type_text(&mut app, "@gmail.com");
    assert_eq!(app.form().value(Field::Email), "selena@gmail.com");
    assert_eq!(app.editor(Field::Email).cursor(), 16);
}

#[test]
fn test_up_and_down_move_focus() {
    let mut app = SignupApp::new();
    press(&mut app, Key::Down);
    assert_eq!(app.focus(), Focus::Field(Field::Password));
    press(&mut app, Key::Up);
    press(&mut app, Key::Up);
    assert_eq!(app.focus(), Focus::Submit);
}

#[test]
fn test_keys_on_submit_button_do_not_edit() {
    let mut app = SignupApp::new();
    press(&mut app, Key::BackTab);
    type_text(&mut app, "abc");
    for field in Field::ALL {
        assert_eq!(app.form().value(field), "");
    }
}

// ============================================================================
// Submitting
// ============================================================================

#[test]
fn test_enter_on_button_submits() {
    let mut app = SignupApp::new();
    fill(&mut app, "selenagmail.com", "", "");
    assert!(app.form().error_message().is_none());

    press(&mut app, Key::Enter);
    assert_eq!(app.form().error_message().as_deref(), Some(EMAIL_ERROR));
}

#[test]
fn test_space_on_button_submits() {
    let mut app = SignupApp::new();
    fill(&mut app, "a@b.com", "123", "123");
    press(&mut app, Key::Char(' '));
    assert_eq!(app.form().error_message().as_deref(), Some(LENGTH_ERROR));
}

#[test]
fn test_enter_in_field_submits() {
    let mut app = SignupApp::new();
    fill(&mut app, "a@b.com", "qwer12345", "12345qwer");
    press(&mut app, Key::BackTab);
    press(&mut app, Key::Enter);
    assert_eq!(app.form().error_message().as_deref(), Some(MISMATCH_ERROR));
    // Enter does not end up in the field
    assert_eq!(app.form().value(Field::ConfirmPassword), "12345qwer");
}

#[test]
fn test_valid_submission() {
    let mut app = SignupApp::new();
    fill(&mut app, "a@b.com", "qwer12345", "qwer12345");
    assert_eq!(app.submit(), SubmitOutcome::Accepted);
    assert!(app.form().error_message().is_none());
}

#[test]
fn test_rule_precedence() {
    let mut app = SignupApp::new();
    fill(&mut app, "bad", "1", "2");
    assert_eq!(
        app.submit(),
        SubmitOutcome::Rejected(SignupError::InvalidEmail)
    );
}

#[test]
fn test_fixing_input_clears_error_on_next_submit() {
    let mut app = SignupApp::new();
    fill(&mut app, "a@b.com", "qwer12345", "12345qwer");
    press(&mut app, Key::Enter);
    assert_eq!(app.form().error_message().as_deref(), Some(MISMATCH_ERROR));

    // Back to confirm-password, replace its contents
    press(&mut app, Key::BackTab);
    app.handle_key(Key::Char('a'), Modifiers::ctrl());
    type_text(&mut app, "qwer12345");
    assert_eq!(app.form().error_message().as_deref(), Some(MISMATCH_ERROR));

    press(&mut app, Key::Enter);
    assert!(app.form().error_message().is_none());
}

#[test]
fn test_keep_error_config() {
    let mut app = SignupApp::with_config(SignupConfig::new().keep_error_on_success());
    fill(&mut app, "bad", "qwer12345", "qwer12345");
    press(&mut app, Key::Enter);

    press(&mut app, Key::Tab);
    app.handle_key(Key::Char('a'), Modifiers::ctrl());
    type_text(&mut app, "a@b.com");
    assert_eq!(app.submit(), SubmitOutcome::Accepted);
    assert_eq!(app.form().error_message().as_deref(), Some(EMAIL_ERROR));
}

// ============================================================================
// Quitting and raw events
// ============================================================================

#[test]
fn test_escape_quits() {
    let mut app = SignupApp::new();
    press(&mut app, Key::Escape);
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = SignupApp::new();
    app.handle_key(Key::Char('c'), Modifiers::ctrl());
    assert!(app.should_quit());
    assert_eq!(app.form().value(Field::Email), "");
}

#[test]
fn test_crossterm_key_press() {
    let mut app = SignupApp::new();
    let event = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    app.handle_event(&event);
    assert_eq!(app.form().value(Field::Email), "a");
}

#[test]
fn test_crossterm_key_release_is_ignored() {
    let mut app = SignupApp::new();
    let event = CrosstermEvent::Key(KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    app.handle_event(&event);
    assert_eq!(app.form().value(Field::Email), "");
}

#[test]
fn test_resize_event_is_ignored() {
    let mut app = SignupApp::new();
    app.handle_event(&CrosstermEvent::Resize(100, 40));
    assert_eq!(app.focus(), Focus::Field(Field::Email));
}
