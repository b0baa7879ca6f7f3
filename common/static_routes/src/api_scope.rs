use crate::primitives::{Post, Url};

#[derive(Default)]
pub struct Routes {
    pub auth: Auth,
}

#[derive(Default)]
pub struct Auth {
    pub login: Login,
}

#[derive(Default)]
pub struct Login;

impl Url for Login {
    fn postfix(&self) -> &str {
        "/auth/login"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

impl Post for Login {}
