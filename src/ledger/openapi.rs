use super::handlers::{health, signup};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::health, signup::page, signup::submit),
    components(schemas(health::Health, signup::SignupForm)),
    tags(
        (name = "health", description = "Liveness and build information"),
        (name = "auth", description = "Account registration page")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    // Use Cargo.toml metadata for the document info.
    doc.info.title = env!("CARGO_PKG_NAME").to_string();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc.info.description = optional_str(env!("CARGO_PKG_DESCRIPTION")).map(str::to_string);
    doc
}

fn optional_str(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_pages() {
        let doc = openapi();
        assert_eq!(doc.info.title, env!("CARGO_PKG_NAME"));
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/auth/signup"));
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|components| components.schemas.contains_key("SignupForm")));
    }
}
