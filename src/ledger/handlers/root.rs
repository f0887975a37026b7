use axum::response::{IntoResponse, Redirect};

use crate::ledger::paths;

// The only page served here is signup; send visitors there.
pub async fn root() -> impl IntoResponse {
    Redirect::to(paths::SIGNUP)
}
