//! Server-rendered pages. Templates live in `templates/` and are autoescaped,
//! so typed values can be echoed back safely.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::str::FromStr;
use tracing::error;

use super::{form::RegistrationInput, notify::Notification, paths};

/// Account roles offered on the signup page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Advocate,
    Judge,
    Client,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Advocate, Role::Judge, Role::Client];

    #[must_use]
    pub fn value(&self) -> &'static str {
        match self {
            Role::Advocate => "advocate",
            Role::Judge => "judge",
            Role::Client => "client",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Role::Advocate => "Advocate",
            Role::Judge => "Judge",
            Role::Client => "Client",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.value() == value)
            .ok_or_else(|| format!("unknown role: {value}"))
    }
}

/// One radio of the role group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleOption {
    pub role: Role,
    pub checked: bool,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupPage<'a> {
    pub input: &'a RegistrationInput,
    pub toasts: &'a [Notification],
    pub roles: Vec<RoleOption>,
    pub action: &'a str,
    pub login: &'a str,
    /// Set when the page must replace itself in history with another path.
    pub redirect: Option<&'a str>,
}

impl<'a> SignupPage<'a> {
    #[must_use]
    pub fn new(input: &'a RegistrationInput, toasts: &'a [Notification]) -> Self {
        Self {
            input,
            toasts,
            roles: role_options(None),
            action: paths::SIGNUP,
            login: paths::LOGIN,
            redirect: None,
        }
    }

    /// Check the radio of the role picked before.
    #[must_use]
    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.roles = role_options(role);
        self
    }

    #[must_use]
    pub fn with_redirect(mut self, path: &'a str) -> Self {
        self.redirect = Some(path);
        self
    }
}

fn role_options(selected: Option<Role>) -> Vec<RoleOption> {
    Role::ALL
        .into_iter()
        .map(|role| RoleOption {
            role,
            checked: selected == Some(role),
        })
        .collect()
}

/// Render a template, mapping failures to a bare 500.
pub fn render<T: Template>(page: &T) -> Response {
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("Failed to render page: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
