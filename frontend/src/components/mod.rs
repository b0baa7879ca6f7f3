pub mod imports;

mod login;
mod status_msg;

pub use login::comp::Login;
pub use status_msg::StatusMessage;
