mod api_scope;
mod primitives;
mod root_scope;

pub use primitives::{Get, Post, RelativePath, Url};

#[allow(dead_code)]
#[derive(Default)]
pub struct Routes {
    pub api: api_scope::Routes,
    pub root: root_scope::Routes,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn routes() -> Routes {
    Routes::new()
}

#[cfg(test)]
mod tests {
    #![allow(non_upper_case_globals)]
    use super::*;

    static localhost_dns: &str = "http://localhost";
    static localhost: &str = "http://127.0.0.1";
    static localhost_with_port: &str = "http://127.0.0.1:5000";
    static zeros_with_port: &str = "http://0.0.0.0:5000";

    static hosts: &[&'static str] = &[localhost_dns, localhost, localhost_with_port, zeros_with_port];

    #[test]
    fn test_login() {
        let route = routes().api.auth.login.post();

        assert_eq!(route.postfix(), "/auth/login");
        assert_eq!(route.prefix(), "/api");
        assert_eq!(route.complete(), "/api/auth/login");
        for host in hosts {
            assert_eq!(
                route.complete_with_base(host),
                format!("{}/api/auth/login", host)
            );
        }
    }

    #[test]
    fn test_home() {
        let route = routes().root.home.get();

        assert_eq!(route.postfix(), "/");
        assert_eq!(route.prefix(), "");
        assert_eq!(route.complete(), "/");
        for host in hosts {
            assert_eq!(route.complete_with_base(host), format!("{}/", host));
        }
    }
}
