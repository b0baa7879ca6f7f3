use crate::primitives::{Get, Url};

#[derive(Default)]
pub struct Routes {
    pub home: Home,
    pub login: Login,
}

#[derive(Default)]
pub struct Home;

impl Url for Home {
    fn postfix(&self) -> &str {
        "/"
    }
}

impl Get for Home {}

#[derive(Default)]
pub struct Login;

impl Url for Login {
    fn postfix(&self) -> &str {
        "/login"
    }
}

impl Get for Login {}
