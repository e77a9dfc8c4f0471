//! Maps terminal input onto form operations.

use std::io;

use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind};
use log::{debug, info};
use signup_form::{
    EditResult, Field, Focus, FocusRing, InputEditor, Key, Modifiers, SignupConfig, SignupForm,
    SubmitEvent, SubmitOutcome,
};

use crate::terminal::Terminal;
use crate::view;

/// The sign-up form plus the keyboard state around it.
#[derive(Debug)]
pub struct SignupApp {
    form: SignupForm,
    focus: FocusRing,
    editors: [InputEditor; 3],
    should_quit: bool,
}

impl SignupApp {
    pub fn new() -> Self {
        Self::with_config(SignupConfig::default())
    }

    pub fn with_config(config: SignupConfig) -> Self {
        Self {
            form: SignupForm::with_config(config),
            focus: FocusRing::new(),
            editors: Default::default(),
            should_quit: false,
        }
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus.current()
    }

    pub fn editor(&self, field: Field) -> &InputEditor {
        &self.editors[field.position()]
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one raw terminal event.
    pub fn handle_event(&mut self, event: &CrosstermEvent) {
        if let CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            self.handle_key((*code).into(), (*modifiers).into());
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Escape => self.quit(),
            Key::Char('c') if modifiers.ctrl => self.quit(),
            Key::Tab | Key::Down => {
                self.focus.focus_next();
            }
            Key::BackTab | Key::Up => {
                self.focus.focus_prev();
            }
            _ => match self.focus.current() {
                Focus::Submit => {
                    if matches!(key, Key::Enter | Key::Char(' ')) {
                        self.submit();
                    }
                }
                Focus::Field(field) => self.edit_field(field, key, modifiers),
            },
        }
    }

    /// Submit the form as the button would.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut event = SubmitEvent::new();
        let outcome = self.form.submit(&mut event);
        debug!("submit handled, default prevented: {}", event.default_prevented());
        outcome
    }

    fn edit_field(&mut self, field: Field, key: Key, modifiers: Modifiers) {
        let editor = &mut self.editors[field.position()];
        match editor.edit(self.form.value(field), key, modifiers) {
            EditResult::Changed(value) => self.form.handle_change(field, value),
            EditResult::Submitted => {
                self.submit();
            }
            EditResult::Handled | EditResult::Ignored => {}
        }
    }

    fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }
}

impl Default for SignupApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw, wait for input, repeat until the user quits.
pub fn run(terminal: &mut Terminal, app: &mut SignupApp) -> io::Result<()> {
    loop {
        terminal.draw(|buf| view::render(app, buf))?;

        for event in terminal.poll(None)? {
            app.handle_event(&event);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
