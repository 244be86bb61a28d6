// SPDX-License-Identifier: MIT OR Apache-2.0

//! Login form state.
//!
//! Transient UI state owned by the login form. Every mutation goes through
//! [`FormState::apply`] so the form component can drive it with a reducer.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetEmail(String),
    SetPassword(String),
    ToggleVisibility,
    SubmitStarted,
    SubmitFinished,
}

impl FormState {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetEmail(email) => self.email = email,
            FormAction::SetPassword(password) => self.password = password,
            FormAction::ToggleVisibility => self.password_visible = !self.password_visible,
            FormAction::SubmitStarted => self.submitting = true,
            FormAction::SubmitFinished => self.submitting = false,
        }
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    /// A second submit while one is in flight is ignored.
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Plaintext credentials handed to the application's login handler.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = FormState::default();
        assert!(state.email.is_empty());
        assert!(state.password.is_empty());
        assert!(!state.password_visible);
        assert!(!state.submitting);
        assert_eq!(state.password_input_type(), "password");
    }

    #[test]
    fn toggling_twice_restores_input_type() {
        let mut state = FormState::default();
        let original = state.password_input_type();
        state.apply(FormAction::ToggleVisibility);
        assert_eq!(state.password_input_type(), "text");
        state.apply(FormAction::ToggleVisibility);
        assert_eq!(state.password_input_type(), original);
    }

    #[test]
    fn submit_cycle_snapshots_credentials() {
        let mut state = FormState::default();
        state.apply(FormAction::SetEmail("a@b.com".into()));
        state.apply(FormAction::SetPassword("secret".into()));
        assert!(state.can_submit());

        state.apply(FormAction::SubmitStarted);
        assert!(!state.can_submit());
        let creds = state.credentials();
        state.apply(FormAction::SubmitFinished);

        assert!(state.can_submit());
        assert_eq!(creds.email, "a@b.com");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let creds = LoginCredentials {
            email: "a@b.com".into(),
            password: "secret".into(),
        };
        let shown = format!("{creds:?}");
        assert!(shown.contains("a@b.com"));
        assert!(!shown.contains("secret"));
    }
}
