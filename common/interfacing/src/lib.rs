mod error_response;
mod login_request;

pub use error_response::ErrorResponse;
pub use login_request::LoginRequest;
pub use secrecy::{ExposeSecret, SecretString};
