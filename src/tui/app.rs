//! TUI application state
//!
//! Owns the form controls and the submission session. Key handling is pure
//! state mutation so it can be exercised without a terminal.

use crate::collector::FormState;
use crate::predictor::Predictor;
use crate::session::Session;
use crate::tui::event::KeyAction;

/// Interactive form application
pub struct FormApp {
    /// Current control values and focus
    pub form: FormState,
    /// Prediction session (result / last error)
    pub session: Session,
    /// Is the app running
    pub running: bool,
    /// Show help overlay
    pub show_help: bool,
    /// Short model description shown in the footer
    pub model_description: String,
}

impl FormApp {
    pub fn new(predictor: Predictor) -> Self {
        let model_description = predictor.artifacts().classifier().describe();
        Self {
            form: FormState::new(),
            session: Session::new(predictor),
            running: true,
            show_help: false,
            model_description,
        }
    }

    /// Check if app should continue running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Signal the app to quit
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Apply one key action.
    pub fn handle_key(&mut self, action: KeyAction) {
        if self.show_help {
            match action {
                KeyAction::Quit => self.quit(),
                KeyAction::Help | KeyAction::Cancel => self.show_help = false,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::Increase => self.form.increment(),
            KeyAction::Decrease => self.form.decrement(),
            KeyAction::Input(c) => self.form.type_char(c),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::Submit => self.submit(),
            KeyAction::Cancel => {
                if self.form.editing().is_some() {
                    self.form.cancel_edit();
                } else {
                    self.quit();
                }
            }
            KeyAction::Reset => self.form.reset(),
            KeyAction::Help => self.toggle_help(),
            KeyAction::None => {}
        }
    }

    /// Press "Prediksi Risiko". Editing a control never triggers inference;
    /// only this does.
    pub fn submit(&mut self) {
        self.form.submit();
        let (request, submitted) = self.form.collect();
        if submitted {
            self.session.submit(request);
        }
    }
}
