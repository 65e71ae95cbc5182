//! # User, session, and credential models
//!
//! Defines the account-side types of the platform:
//!
//! ## [`Session`] (client only, in spirit)
//!
//! The in-memory record of the currently signed-in user: a username and a
//! [`Role`]. The SPA creates it locally from validated login-form input — the
//! signed-in state never leaves the browser tab and is lost on reload.
//!
//! ## [`Credentials`] and [`ValidationError`]
//!
//! Raw login-form input and the validation it must pass. The only check is
//! that the password matches its confirmation; username and role are taken
//! verbatim, and the password itself is never stored or sent anywhere.
//!
//! ## [`User`] (server only)
//!
//! The complete registry record for a registered account, including the
//! Argon2 password hash. [`User::to_info`] projects it into a [`UserInfo`],
//! the client-safe subset that crosses the server/client boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "server")]
use uuid::Uuid;

/// Access role attached to a session or account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only bracket viewer.
    Participant,
    /// Tournament-management actor.
    Registrar,
}

impl Role {
    /// Wire/display name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Participant => "participant",
            Role::Registrar => "registrar",
        }
    }
}

/// The in-memory record of the currently signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

/// Raw login-form input, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Login-form validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl Credentials {
    /// Validate the form input and produce a session.
    ///
    /// Username and role are carried over verbatim; the password is only
    /// compared against its confirmation and then dropped.
    pub fn into_session(self) -> Result<Session, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(Session {
            username: self.username,
            role: self.role,
        })
    }
}

/// Full account record held by the server-side registry.
#[cfg(feature = "server")]
#[derive(Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub full_name: String,
    pub role: Role,
    /// Position inside the organizing body; registrar accounts only.
    pub post: Option<String>,
    pub password_hash: String,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
        }
    }
}

/// Account information safe to send to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(password: &str, confirm: &str) -> Credentials {
        Credentials {
            username: "alice".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role: Role::Registrar,
        }
    }

    #[test]
    fn test_password_mismatch_is_rejected() {
        let result = credentials("x", "y").into_session();
        assert_eq!(result, Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_matching_passwords_produce_session() {
        let session = credentials("x", "x").into_session().unwrap();
        assert_eq!(session.username, "alice");
        assert_eq!(session.role, Role::Registrar);
    }

    #[test]
    fn test_username_is_not_normalized() {
        let creds = Credentials {
            username: "  Alice Smith  ".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            role: Role::Participant,
        };
        let session = creds.into_session().unwrap();
        assert_eq!(session.username, "  Alice Smith  ");
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&Role::Participant).unwrap(),
            "\"participant\""
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"registrar\"").unwrap(),
            Role::Registrar
        );
    }
}
