//! Login form state.

use crate::auth::Credentials;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Email/password inputs plus the in-flight flag for a submitted login.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub field: LoginField,
    pub pending: bool,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Ignored while a login is in flight.
    pub fn push_char(&mut self, c: char) {
        if !self.pending {
            self.focused_mut().push(c);
        }
    }

    pub fn pop_char(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.focused_mut().pop().is_some()
    }

    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    /// Marks the form as submitted and returns what to send.
    ///
    /// Returns `None` when a login is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(Credentials::new(self.email.trim(), self.password.clone()))
    }

    /// Inputs survive a failure; only the password is dropped on success.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.pending = false;
        if succeeded {
            self.password.clear();
            self.field = LoginField::Email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginState {
        let mut state = LoginState::new();
        "demo@socialboost.app".chars().for_each(|c| state.push_char(c));
        state.next_field();
        "secret".chars().for_each(|c| state.push_char(c));
        state
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let state = filled();
        assert_eq!(state.email, "demo@socialboost.app");
        assert_eq!(state.password, "secret");
        assert_eq!(state.masked_password(), "••••••");
    }

    #[test]
    fn test_pop_char_edits_focused_field() {
        let mut state = filled();
        assert!(state.pop_char());
        assert_eq!(state.password, "secre");
        assert_eq!(state.email, "demo@socialboost.app");
    }

    #[test]
    fn test_submit_blocks_while_pending() {
        let mut state = filled();
        let creds = state.begin_submit().unwrap();
        assert_eq!(creds.email, "demo@socialboost.app");
        assert!(state.begin_submit().is_none());

        state.push_char('x');
        assert_eq!(state.password, "secret");
    }

    #[test]
    fn test_failure_keeps_inputs() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(false);
        assert!(!state.pending);
        assert_eq!(state.password, "secret");
    }

    #[test]
    fn test_success_clears_password_only() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(true);
        assert!(state.password.is_empty());
        assert_eq!(state.email, "demo@socialboost.app");
        assert_eq!(state.field, LoginField::Email);
    }
}
