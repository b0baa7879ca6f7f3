pub use crate::router::Route;
pub use static_routes::*;

pub use gloo_console as console;
pub use gloo_net::http::{Request, Response};
pub use serde::{Deserialize, Serialize};
pub use stylist::yew::styled_component;
pub use web_sys::HtmlInputElement;

pub use secrecy::{ExposeSecret, SecretString};
pub use stylist::{css, style, Style};
pub use yew::prelude::*;
pub use yew_router::prelude::*;

pub trait RequestExtend {
    fn static_post_with_base(static_path: impl Post, base_url: &str) -> Self;
}

impl RequestExtend for Request {
    fn static_post_with_base(static_path: impl Post, base_url: &str) -> Self {
        Request::post(&static_path.post().complete_with_base(base_url))
    }
}

pub trait ResponseExtend {
    fn log_status(&self);
}

impl ResponseExtend for Response {
    fn log_status(&self) {
        console::log!(format!("{} status {}", self.url(), self.status()));
    }
}
