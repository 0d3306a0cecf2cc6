//! Demo login backed by a fixed account list.

use crate::store::{KvStore, USER_DATA_KEY, USER_TOKEN_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const SESSION_TOKEN: &str = "authenticated";
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "lana@email.com",
        password: "123456",
        name: "Lana Andrade",
    },
    DemoAccount {
        email: "admin@careermatch.com",
        password: "admin123",
        name: "Administrador",
    },
    DemoAccount {
        email: "teste@email.com",
        password: "teste123",
        name: "Usuário Teste",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub email: String,
    pub name: String,
    #[serde(rename = "loginDate")]
    pub login_date: DateTime<Utc>,
}

impl UserData {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug)]
pub enum LoginError {
    MissingFields,
    InvalidEmail,
    WeakPassword,
    InvalidCredentials,
    StoreFailed(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::MissingFields => write!(f, "Enter both email and password"),
            LoginError::InvalidEmail => write!(f, "Enter a valid email address"),
            LoginError::WeakPassword => write!(
                f,
                "Password must have at least {} characters",
                MIN_PASSWORD_LEN
            ),
            LoginError::InvalidCredentials => write!(f, "Incorrect email or password"),
            LoginError::StoreFailed(msg) => write!(f, "Failed to save session: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot in the domain
/// with something on both sides of it.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Check credentials and open a session.
///
/// Checks run in order (missing fields, email shape, password length,
/// account match) and stop at the first failure.
pub fn login(store: &mut KvStore, email: &str, password: &str) -> Result<UserData, LoginError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }
    if !validate_email(email) {
        return Err(LoginError::InvalidEmail);
    }
    if !validate_password(password) {
        return Err(LoginError::WeakPassword);
    }

    let account = DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email == email && a.password == password)
        .ok_or(LoginError::InvalidCredentials)?;

    let user = UserData {
        email: account.email.to_string(),
        name: account.name.to_string(),
        login_date: Utc::now(),
    };

    store
        .set(USER_TOKEN_KEY, SESSION_TOKEN)
        .and_then(|_| store.set_json(USER_DATA_KEY, &user))
        .map_err(|e| LoginError::StoreFailed(format!("{:#}", e)))?;

    Ok(user)
}

/// End the session. Returns true if one was open.
pub fn logout(store: &mut KvStore) -> anyhow::Result<bool> {
    let had_token = store.remove(USER_TOKEN_KEY)?;
    store.remove(USER_DATA_KEY)?;
    Ok(had_token)
}

pub fn is_logged_in(store: &KvStore) -> bool {
    store.get(USER_TOKEN_KEY) == Some(SESSION_TOKEN)
}

/// Logged-in user, if a session exists and its user record is readable
pub fn current_user(store: &KvStore) -> Option<UserData> {
    if !is_logged_in(store) {
        return None;
    }
    store.get_json::<UserData>(USER_DATA_KEY).ok().flatten()
}
