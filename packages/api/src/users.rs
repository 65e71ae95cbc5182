//! # In-memory user registry
//!
//! Accounts live in process memory for the lifetime of the server: a
//! [`UserRegistry`] guards a `Vec<User>` behind a `Mutex`, and the server
//! functions share one [`static@USERS`] instance. Passwords are hashed with
//! Argon2id before they are stored; login verifies against the stored
//! PHC-format hash.
//!
//! Registration rules:
//!
//! - email must look like an address and be unused,
//! - username must be unused,
//! - password must be at least 8 characters,
//! - registrar accounts must state their `post` (position).
//!
//! Login accepts either the account email or its phone number.

use std::sync::Mutex;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use uuid::Uuid;

use crate::models::{Role, User, UserInfo};

/// Registration input, as decoded from the register form.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub full_name: String,
    pub role: Role,
    pub post: Option<String>,
    pub password: String,
}

/// Registry of platform accounts, kept in process memory.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Mutex<Vec<User>>,
}

/// Process-wide registry used by the server functions.
pub static USERS: UserRegistry = UserRegistry::new();

impl UserRegistry {
    pub const fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// Register a new account, enforcing the platform's validation rules.
    pub fn register(&self, new_user: NewUser) -> Result<UserInfo, String> {
        let email = new_user.email.trim().to_lowercase();
        let username = new_user.username.trim().to_string();

        if email.is_empty() || !email.contains('@') {
            return Err("Invalid email address".to_string());
        }
        if username.is_empty() {
            return Err("Username is required".to_string());
        }
        if new_user.password.len() < 8 {
            return Err("Password must be at least 8 characters".to_string());
        }
        let post = match new_user.role {
            Role::Registrar => match new_user.post.filter(|p| !p.trim().is_empty()) {
                Some(post) => Some(post),
                None => return Err("Registrar accounts must state a post".to_string()),
            },
            Role::Participant => None,
        };

        let mut users = self.users.lock().map_err(|_| "Registry poisoned")?;
        if users.iter().any(|u| u.email == email) {
            return Err("An account with this email already exists".to_string());
        }
        if users.iter().any(|u| u.username == username) {
            return Err("This username is already taken".to_string());
        }

        let password_hash = hash_password(&new_user.password)?;
        let user = User {
            id: Uuid::new_v4(),
            username,
            email,
            phone: new_user.phone.filter(|p| !p.trim().is_empty()),
            full_name: new_user.full_name.trim().to_string(),
            role: new_user.role,
            post,
            password_hash,
        };
        let info = user.to_info();
        users.push(user);
        Ok(info)
    }

    /// Look up an account by email or phone and verify its password.
    pub fn login(&self, login: &str, password: &str) -> Result<UserInfo, String> {
        let login = login.trim();
        let email = login.to_lowercase();
        let users = self.users.lock().map_err(|_| "Registry poisoned")?;
        let user = users
            .iter()
            .find(|u| u.email == email || u.phone.as_deref() == Some(login));

        let Some(user) = user else {
            return Err("Invalid login or password".to_string());
        };
        if !verify_password(password, &user.password_hash)? {
            return Err("Invalid login or password".to_string());
        }
        Ok(user.to_info())
    }
}

/// Hash a password using Argon2id. Returns a PHC-format string.
fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            phone: None,
            full_name: "Test User".to_string(),
            role: Role::Participant,
            post: None,
            password: "longenough".to_string(),
        }
    }

    #[test]
    fn test_register_and_login_by_email() {
        let registry = UserRegistry::new();
        let info = registry.register(participant("bob", "bob@example.com")).unwrap();
        assert_eq!(info.username, "bob");
        assert_eq!(info.role, Role::Participant);

        let logged_in = registry.login("bob@example.com", "longenough").unwrap();
        assert_eq!(logged_in, info);
    }

    #[test]
    fn test_login_by_phone() {
        let registry = UserRegistry::new();
        let mut new_user = participant("carol", "carol@example.com");
        new_user.phone = Some("+1555000".to_string());
        registry.register(new_user).unwrap();

        assert!(registry.login("+1555000", "longenough").is_ok());
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let registry = UserRegistry::new();
        registry.register(participant("dave", "dave@example.com")).unwrap();

        let err = registry.login("dave@example.com", "wrong").unwrap_err();
        assert_eq!(err, "Invalid login or password");
    }

    #[test]
    fn test_short_password_is_rejected() {
        let registry = UserRegistry::new();
        let mut new_user = participant("eve", "eve@example.com");
        new_user.password = "short".to_string();
        assert!(registry.register(new_user).is_err());
    }

    #[test]
    fn test_duplicate_email_and_username_are_rejected() {
        let registry = UserRegistry::new();
        registry.register(participant("frank", "frank@example.com")).unwrap();

        let err = registry
            .register(participant("frank2", "frank@example.com"))
            .unwrap_err();
        assert!(err.contains("email"));

        let err = registry
            .register(participant("frank", "other@example.com"))
            .unwrap_err();
        assert!(err.contains("username"));
    }

    #[test]
    fn test_registrar_requires_post() {
        let registry = UserRegistry::new();
        let mut new_user = participant("grace", "grace@example.com");
        new_user.role = Role::Registrar;
        assert!(registry.register(new_user.clone()).is_err());

        new_user.post = Some("Head referee".to_string());
        let info = registry.register(new_user).unwrap();
        assert_eq!(info.role, Role::Registrar);
    }
}
