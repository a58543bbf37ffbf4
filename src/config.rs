//! Backend origin and redirect targets for the auth pages.
//!
//! The client has no environment or file configuration: pages build a
//! `ClientConfig::default()` and tests swap the origin through the builders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOGIN_LOCATION: &str = "loginpage.html";
pub const DEFAULT_HOME_LOCATION: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub api_base_url: String,
    /// Where a successful signup sends the browser.
    pub login_location: String,
    /// Where a successful login or federated sign-in sends the browser.
    pub home_location: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            login_location: DEFAULT_LOGIN_LOCATION.to_owned(),
            home_location: DEFAULT_HOME_LOCATION.to_owned(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_api_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_locations(mut self, login: &str, home: &str) -> Self {
        self.login_location = login.to_owned();
        self.home_location = home.to_owned();
        self
    }

    pub fn signup_url(&self) -> String {
        self.endpoint("signup")
    }

    pub fn google_signin_url(&self) -> String {
        self.endpoint("google-signin")
    }

    pub fn login_url(&self) -> String {
        self.endpoint("login")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.api_base_url)
    }
}
