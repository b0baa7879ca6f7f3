use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Payload of the authentication call.
///
/// The password stays behind [`SecretString`] everywhere in the app,
/// it is exposed exactly once, while crossing the wire.
#[derive(Deserialize, Clone, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: SecretString,
}

impl Serialize for LoginRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("LoginRequest", 2)?;
        s.serialize_field("username", &self.username)?;
        s.serialize_field("password", &self.password.expose_secret())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_exactly_two_plain_string_fields() {
        let request = LoginRequest {
            username: "admin".to_owned(),
            password: SecretString::new("comahue719".to_owned()),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"username": "admin", "password": "comahue719"})
        );
    }

    #[test]
    fn debug_does_not_leak_the_password() {
        let request = LoginRequest {
            username: "admin".to_owned(),
            password: SecretString::new("comahue719".to_owned()),
        };

        assert!(!format!("{:?}", request).contains("comahue719"));
    }
}
