//! Registration form state and submission flow.
//!
//! The input is an immutable record replaced wholesale on every field update,
//! so a field only ever holds the last value written to it. Submitting derives
//! the request sent to the registration service, awaits it, and performs one
//! side effect per outcome: a success toast plus a history-replacing navigation
//! to the login page, or a destructive toast with the input left untouched.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use tracing::{error, info, instrument};

use super::{
    notify::{Navigator, Notification, Notifier},
    paths,
    registrar::Registrar,
};

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_DESCRIPTION: &str = "Account created! redirecting to login.";
pub const FAILURE_TITLE: &str = "Error";
pub const FAILURE_DESCRIPTION: &str = "Unable to sign up, try again later.";

/// Editable fields of the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the input `name` attributes rendered by the signup page.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "first_name" | "first" => Ok(Self::FirstName),
            "last_name" | "last" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Working state of the signup form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationInput {
    /// Return a copy with exactly one field replaced.
    #[must_use]
    pub fn with_field(self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::FirstName => Self {
                first_name: value,
                ..self
            },
            Field::LastName => Self {
                last_name: value,
                ..self
            },
            Field::Email => Self {
                email: value,
                ..self
            },
            Field::Password => Self {
                password: value,
                ..self
            },
        }
    }

    #[must_use]
    pub fn with_first_name(self, value: impl Into<String>) -> Self {
        self.with_field(Field::FirstName, value)
    }

    #[must_use]
    pub fn with_last_name(self, value: impl Into<String>) -> Self {
        self.with_field(Field::LastName, value)
    }

    #[must_use]
    pub fn with_email(self, value: impl Into<String>) -> Self {
        self.with_field(Field::Email, value)
    }

    #[must_use]
    pub fn with_password(self, value: impl Into<String>) -> Self {
        self.with_field(Field::Password, value)
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Payload sent to the registration service.
///
/// The role picked on the page is not part of it.
#[derive(Clone, Debug, Serialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

impl From<&RegistrationInput> for RegistrationRequest {
    fn from(input: &RegistrationInput) -> Self {
        Self {
            name: format!("{} {}", input.first_name, input.last_name),
            email: input.email.clone(),
            password: SecretString::from(input.password.clone()),
        }
    }
}

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure,
}

/// `Submitting` only while the registration call is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

/// Signup form: field state plus the submission flow.
#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    input: RegistrationInput,
    state: FormState,
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Replace one field; editing always brings the form back to `Idle`.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.input = std::mem::take(&mut self.input).with_field(field, value);
        self.state = FormState::Idle;
    }

    /// Send the current input to the registration service.
    ///
    /// Every call issues its own request; nothing is de-duplicated. The form is
    /// `Idle` again once the outcome's side effects have run.
    #[instrument(skip_all)]
    pub async fn submit(
        &mut self,
        registrar: &dyn Registrar,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> SubmissionOutcome {
        let request = RegistrationRequest::from(&self.input);
        self.state = FormState::Submitting;

        let outcome = match registrar.sign_up(&request).await {
            Ok(()) => {
                info!("Account created, redirecting to login");
                notifier.notify(Notification::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
                navigator.replace(paths::LOGIN);
                SubmissionOutcome::Success
            }
            Err(err) => {
                // The cause stays in the logs; the user gets a generic message.
                error!("Registration failed: {err}");
                notifier.notify(Notification::destructive(FAILURE_TITLE, FAILURE_DESCRIPTION));
                SubmissionOutcome::Failure
            }
        };

        self.state = FormState::Idle;
        outcome
    }
}
