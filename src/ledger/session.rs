//! Pre-render session guard for pages that only make sense to anonymous
//! visitors (signup). It looks at cookie presence only; tokens are never
//! validated here and real access control stays with the API.

use axum::http::{header::COOKIE, HeaderMap};
use serde::Serialize;
use std::collections::HashMap;

use super::paths;

pub const DEFAULT_ACCESS_COOKIE: &str = "legal-ledger-access-token";
pub const DEFAULT_REFRESH_COOKIE: &str = "legal-ledger-refresh-token";

/// Names of the cookies that carry the session tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCookieNames {
    access: String,
    refresh: String,
}

impl SessionCookieNames {
    #[must_use]
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    #[must_use]
    pub fn access(&self) -> &str {
        &self.access
    }

    #[must_use]
    pub fn refresh(&self) -> &str {
        &self.refresh
    }
}

impl Default for SessionCookieNames {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_COOKIE, DEFAULT_REFRESH_COOKIE)
    }
}

/// Access/refresh tokens as presented by the browser on this request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionCredentialPair {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl SessionCredentialPair {
    /// Pull both tokens out of a parsed cookie map.
    #[must_use]
    pub fn from_cookies(cookies: &HashMap<String, String>, names: &SessionCookieNames) -> Self {
        Self {
            access_token: cookies.get(names.access()).cloned(),
            refresh_token: cookies.get(names.refresh()).cloned(),
        }
    }

    /// A session counts only when both tokens are present and non-empty.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        let present = |token: &Option<String>| token.as_deref().is_some_and(|t| !t.is_empty());
        present(&self.access_token) && present(&self.refresh_token)
    }
}

// Token values must never end up in logs.
impl std::fmt::Debug for SessionCredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentialPair")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageProps {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub destination: String,
    pub permanent: bool,
}

/// Routing decision taken before any markup is produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderDecision {
    Redirect { redirect: Redirect },
    Render { props: PageProps },
}

impl RenderDecision {
    #[must_use]
    pub fn render() -> Self {
        Self::Render {
            props: PageProps::default(),
        }
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Decide whether the page renders or the visitor goes to the dashboard.
///
/// Never fails: a missing or malformed header is the same as "no session".
#[must_use]
pub fn decide(cookie_header: Option<&str>, names: &SessionCookieNames) -> RenderDecision {
    let cookies = parse_cookies(cookie_header.unwrap_or_default());
    let credentials = SessionCredentialPair::from_cookies(&cookies, names);

    if credentials.is_authenticated() {
        RenderDecision::Redirect {
            redirect: Redirect {
                destination: paths::DASHBOARD.to_string(),
                permanent: true,
            },
        }
    } else {
        RenderDecision::render()
    }
}

/// Join every `Cookie` header line; HTTP/2 clients may split them.
#[must_use]
pub fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join("; "))
    }
}

/// Parse a `Cookie` header into name/value pairs.
///
/// Pairs without `=` are skipped, the first occurrence of a name wins and a
/// value wrapped in double quotes is unquoted.
#[must_use]
pub fn parse_cookies(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for pair in header.split(';') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
            .unwrap_or(value);

        cookies
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
    }

    cookies
}
