//! Contact form state.
//!
//! Submission is a placeholder: nothing leaves the process. It mimics
//! server-side processing with a short delay on a background task and
//! reports back through a channel the app polls on tick.

use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;

const SIMULATED_LATENCY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub const fn prev(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    /// Reachable state for parity with the site copy; no code path
    /// produces it because the placeholder transport cannot fail.
    Error,
}

pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: Field,
    status: FormStatus,
    outcome_rx: Option<mpsc::Receiver<FormStatus>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: Field::Name,
            status: FormStatus::Idle,
            outcome_rx: None,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn input_char(&mut self, ch: char) {
        if self.status == FormStatus::Sending {
            return;
        }
        self.clear_result_status();
        self.field_mut().push(ch);
    }

    pub fn backspace(&mut self) {
        if self.status == FormStatus::Sending {
            return;
        }
        self.clear_result_status();
        self.field_mut().pop();
    }

    /// Kicks off the simulated submission. Ignored while one is already
    /// in flight.
    pub fn submit(&mut self) {
        if self.status == FormStatus::Sending {
            return;
        }
        info!("contact form submitted (placeholder transport)");
        let (tx, rx) = mpsc::channel(1);
        self.outcome_rx = Some(rx);
        self.status = FormStatus::Sending;
        tokio::spawn(async move {
            tokio::time::sleep(SIMULATED_LATENCY).await;
            let _ = tx.send(FormStatus::Success).await;
        });
    }

    /// Drains the pending submission outcome, if any. Returns true when
    /// the status changed, so the caller knows to relayout.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &mut self.outcome_rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                debug!("contact form outcome: {outcome:?}");
                self.status = outcome;
                self.outcome_rx = None;
                if outcome == FormStatus::Success {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                    self.focus = Field::Name;
                }
                true
            }
            Err(_) => false,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    // Editing after a result message returns the form to its idle look.
    fn clear_result_status(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
        }
    }
}
