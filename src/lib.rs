//! # Legal Ledger (web front end)
//!
//! `legal-ledger` serves the client-facing pages of the Legal Ledger records
//! management product. It renders the navigation chrome and the account
//! registration page.
//!
//! ## Session Guard
//!
//! Before the registration page is rendered, the request cookies are checked for
//! the access and refresh token pair. When both are present the visitor already
//! holds a session and is permanently redirected to `/dashboard`. Only presence is
//! checked; the API behind the dashboard remains the authority on validity.
//!
//! ## Registration
//!
//! The signup form posts back to the page. Each posted field is applied to an
//! immutable input record, the derived request is sent to the external
//! registration service, and the outcome drives exactly one notification. On
//! success the browser is sent to `/auth/login`; on failure the page is rendered
//! again with the typed values kept.

pub mod cli;
pub mod ledger;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
