use std::fmt;

/// Failure of a call to the external registration service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Serialization(String),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Config(message) => write!(formatter, "Config error: {message}"),
            RegistrationError::Network(message) => write!(formatter, "Network error: {message}"),
            RegistrationError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            RegistrationError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            RegistrationError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status() {
        let err = RegistrationError::Http {
            status: 409,
            message: "email taken".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (409): email taken");
    }
}
