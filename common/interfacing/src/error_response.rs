use serde::Deserialize;

/// Failure body of the authentication endpoint.
///
/// The server may attach a human-readable reason, but is not required to.
#[derive(Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_a_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"message": "Invalid credentials"}"#).unwrap();

        assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn deserializes_without_a_message() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();

        assert!(body.message.is_none());
    }
}
