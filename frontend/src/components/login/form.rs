//! Behavioral core of the login form, free of framework types.
//!
//! The component owns a [`FormState`] and drives it with two calls:
//! [`FormState::begin_submit`] gates an attempt, [`FormState::resolve`]
//! lands it. Everything observable about the form lives here, so the
//! whole contract is checkable on the host target.

use interfacing::{LoginRequest, SecretString};

pub const VALIDATION_PROMPT: &str = "Please enter both username and password";
pub const LOGIN_SUCCESSFUL: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SERVER_UNREACHABLE: &str = "Unable to reach the server";

/// Message region content. At most one message is ever displayed,
/// the enum makes the "error and success never coexist" invariant
/// unrepresentable instead of a convention over two strings.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Feedback {
    #[default]
    None,
    Error(String),
    Success(String),
}

/// Classification of one resolved network attempt.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Status in 200..=299, body parsed. The body itself is discarded
    /// until sessions are wired in.
    Accepted,
    /// Non-success status, with the server-supplied reason when present.
    Rejected(Option<String>),
    /// The transport failed before a valid response could be obtained
    /// or parsed.
    Unreachable,
}

impl SubmitOutcome {
    /// Maps one HTTP exchange onto an outcome. The exchange is the status
    /// plus the parsed failure reason, or whatever error kept a valid
    /// response from being obtained or parsed.
    pub fn classify<E>(exchange: Result<(u16, Option<String>), E>) -> Self {
        match exchange {
            Ok((status, _)) if success_range(status) => Self::Accepted,
            Ok((_, reason)) => Self::Rejected(reason),
            Err(_) => Self::Unreachable,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct FormState {
    pub username: String,
    pub password: String,
    is_loading: bool,
    feedback: Feedback,
}

impl FormState {
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn error_message(&self) -> &str {
        match &self.feedback {
            Feedback::Error(message) => message,
            _ => "",
        }
    }

    pub fn success_message(&self) -> &str {
        match &self.feedback {
            Feedback::Success(message) => message,
            _ => "",
        }
    }

    /// Gate of the submit path. Returns the wire payload when the attempt
    /// is admitted; exactly one network call may be made per payload.
    ///
    /// A submit with an empty field records the validation prompt and
    /// admits nothing. A submit while a request is in flight is ignored,
    /// the rendered button is disabled too, but the guard belongs to the
    /// data layer, not the markup.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.is_loading {
            return None;
        }

        // as typed, no trimming
        if self.username.is_empty() || self.password.is_empty() {
            self.feedback = Feedback::Error(VALIDATION_PROMPT.to_owned());
            return None;
        }

        self.is_loading = true;
        self.feedback = Feedback::None;

        Some(LoginRequest {
            username: self.username.clone(),
            password: SecretString::new(self.password.clone()),
        })
    }

    /// Lands an attempt. Runs on every exit path of the network task,
    /// so the loading flag always comes back down.
    pub fn resolve(&mut self, outcome: SubmitOutcome) {
        self.is_loading = false;
        self.feedback = match outcome {
            SubmitOutcome::Accepted => Feedback::Success(LOGIN_SUCCESSFUL.to_owned()),
            SubmitOutcome::Rejected(Some(message)) => Feedback::Error(message),
            SubmitOutcome::Rejected(None) => Feedback::Error(LOGIN_FAILED.to_owned()),
            SubmitOutcome::Unreachable => Feedback::Error(SERVER_UNREACHABLE.to_owned()),
        };
    }
}

pub fn success_range(status: u16) -> bool {
    (200..300).contains(&status)
}
