//! Route paths shared by handlers, redirects and templates.

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const SIGNUP: &str = "/auth/signup";
pub const LOGIN: &str = "/auth/login";
pub const DASHBOARD: &str = "/dashboard";
