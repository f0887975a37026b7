//! Signup page: session guard on `GET`, registration flow on `POST`.
//!
//! Flow Overview: `GET` runs the session guard before anything is rendered and
//! either redirects to the dashboard or renders the empty form. `POST` replays the
//! posted fields into a fresh form, submits it, and renders the recorded effects
//! into the response: the success toast together with a history-replacing
//! navigation to the login page, or the form again with the typed values and an
//! error toast. Notifications never outlive the response that shows them.

use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::AppState;
use crate::ledger::{
    form::{Field, RegistrationForm, RegistrationInput},
    notify::PageEffects,
    pages::{self, Role, SignupPage},
    session::{self, cookie_header, RenderDecision},
};

/// Fields posted by the signup page.
///
/// Documentation only: `submit` reads the body as ordered pairs so every field is
/// applied through `update_field` in the order the browser sent it.
#[derive(ToSchema, Debug)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Echoed back on re-render, never forwarded to the registration service.
    pub role: Option<String>,
}

#[utoipa::path(
    get,
    path = "/auth/signup",
    responses(
        (status = 200, description = "Registration page", body = String, content_type = "text/html"),
        (status = 308, description = "Session cookies present, redirected to /dashboard")
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn page(headers: HeaderMap, state: Extension<Arc<AppState>>) -> Response {
    let cookies = cookie_header(&headers);

    match session::decide(cookies.as_deref(), state.config().cookie_names()) {
        RenderDecision::Redirect { redirect } => {
            debug!("Session cookies present, redirecting to {}", redirect.destination);
            if redirect.permanent {
                Redirect::permanent(&redirect.destination).into_response()
            } else {
                Redirect::temporary(&redirect.destination).into_response()
            }
        }
        RenderDecision::Render { props: _ } => {
            pages::render(&SignupPage::new(&RegistrationInput::default(), &[]))
        }
    }
}

#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body(content = SignupForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Success toast and a history-replacing redirect to /auth/login, or the form again with an error toast", body = String, content_type = "text/html")
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn submit(
    state: Extension<Arc<AppState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let mut form = RegistrationForm::new();
    let mut role = None;
    for (name, value) in fields {
        if name == "role" {
            role = value.parse::<Role>().ok();
            continue;
        }
        match name.parse::<Field>() {
            Ok(field) => form.update_field(field, value),
            Err(err) => debug!("Ignoring posted field: {err}"),
        }
    }

    let effects = PageEffects::new();
    form.submit(state.registrar(), &effects, &effects).await;

    let notifications = effects.notifications();
    match effects.navigation() {
        Some(target) => {
            let input = RegistrationInput::default();
            pages::render(&SignupPage::new(&input, &notifications).with_redirect(&target))
        }
        None => pages::render(&SignupPage::new(form.input(), &notifications).with_role(role)),
    }
}
