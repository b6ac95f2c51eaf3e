//! Local shape validation for the sign-in and sign-up forms.
//!
//! Nothing here talks to a backend or stores anything: a submission is either
//! rejected with a single user-facing error or handed back as validated values.
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Which of the two credential forms is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Sign up",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Don't have an account? Sign up",
            Self::SignUp => "Already have an account? Sign in",
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username and password are required.")]
    MissingCredentials,
    #[error("All fields are required.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Invalid email address.")]
    InvalidEmail,
}

/// Values accepted by the sign-in form
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Values accepted by the sign-up form
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpDetails {
    pub username: String,
    pub password: String,
    pub email: String,
}

// passwords end up in debug logs through the dispatcher otherwise
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for SignUpDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpDetails")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Both fields must be non-empty once trimmed. The untrimmed values are passed on.
pub fn validate_sign_in(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    if is_blank(username) || is_blank(password) {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Checks run in a fixed order and the first failure wins: presence, password
/// confirmation, then the email pattern.
pub fn validate_sign_up(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<SignUpDetails, ValidationError> {
    if [username, password, email, confirm_password]
        .iter()
        .any(|field| is_blank(field))
    {
        return Err(ValidationError::MissingFields);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(SignUpDetails {
        username: username.to_string(),
        password: password.to_string(),
        email: email.to_string(),
    })
}
