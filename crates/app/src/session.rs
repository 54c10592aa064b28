use dioxus::prelude::*;
use shared_types::{mock, AppError, SessionUser, UserRole, ViewAccess};
use std::collections::HashMap;

/// Global session state, provided once at the App root.
///
/// Every page reads the same store; none keeps its own copy of the
/// authentication flag or role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// The viewer's role; anonymous viewers are Public.
    pub fn role(&self) -> UserRole {
        role_of(self.current_user.read().as_ref())
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }
}

/// Role for an optional signed-in user; a cleared session is Public again.
pub fn role_of(user: Option<&SessionUser>) -> UserRole {
    user.map(|u| u.role).unwrap_or(UserRole::Public)
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Hook evaluating the visibility table for the current viewer.
pub fn use_view_access() -> ViewAccess {
    let session = use_session();
    ViewAccess::evaluate(session.is_authenticated(), session.role())
}

/// Reject empty credentials before any sign-in attempt.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    let mut field_errors = HashMap::new();
    if email.trim().is_empty() {
        field_errors.insert("email".to_string(), "Email is required".to_string());
    }
    if password.trim().is_empty() {
        field_errors.insert("password".to_string(), "Password is required".to_string());
    }
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(
            "Please enter both email and password",
            field_errors,
        ))
    }
}

/// Simulated sign-in.
///
/// There is no identity backend in this build: any non-empty credentials
/// resolve to the demo Security operator. The async shape is real so the
/// form logic (spawned task, cancellation, error surface) carries over
/// unchanged when a backend arrives.
pub async fn authenticate(email: String, password: String) -> Result<SessionUser, AppError> {
    validate_credentials(&email, &password)?;
    tracing::info!(email = %email, "demo sign-in accepted");
    Ok(mock::demo_operator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_email_is_rejected_with_field_error() {
        let err = validate_credentials("", "hunter2").unwrap_err();
        assert_eq!(err.message, "Please enter both email and password");
        assert!(err.field_errors.contains_key("email"));
        assert!(!err.field_errors.contains_key("password"));
    }

    #[test]
    fn empty_password_is_rejected_with_field_error() {
        let err = validate_credentials("op@smartcity.gov", "").unwrap_err();
        assert!(err.field_errors.contains_key("password"));
        assert!(!err.field_errors.contains_key("email"));
    }

    #[test]
    fn blank_credentials_flag_both_fields() {
        let err = validate_credentials("   ", "").unwrap_err();
        assert_eq!(err.field_errors.len(), 2);
    }

    #[test]
    fn non_empty_credentials_pass_validation() {
        assert!(validate_credentials("op@smartcity.gov", "hunter2").is_ok());
    }

    #[test]
    fn cleared_session_falls_back_to_public_role() {
        let operator = mock::demo_operator();
        assert_eq!(role_of(Some(&operator)), UserRole::Security);
        assert_eq!(role_of(None), UserRole::Public);
    }
}
