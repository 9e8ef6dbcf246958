#![allow(dead_code)]
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// Platform notification-permission state, as the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// Asks the host platform whether this app may post notifications.
pub trait PermissionProvider {
    fn status(&mut self) -> PermissionStatus;
    fn request(&mut self) -> PermissionStatus;
}

/// Hands out the device's push token. Failure here is transient: the
/// platform may simply not have issued a token yet.
pub trait TokenProvider {
    fn token(&mut self) -> Result<String>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// The venue backend's token registration endpoint.
pub trait RegistrationEndpoint {
    fn register(&mut self, token: &str) -> Result<RegistrationReply>;
}

/// Permission backed by the notifications switch in the config file. The
/// terminal has no OS permission prompt, so the user's setting answers
/// both the query and the request.
pub struct SettingsPermission {
    pub enabled: bool,
}

impl PermissionProvider for SettingsPermission {
    fn status(&mut self) -> PermissionStatus {
        if self.enabled {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    fn request(&mut self) -> PermissionStatus {
        self.status()
    }
}

/// Token from the config file, falling back to `MIHRAB_PUSH_TOKEN`.
pub struct StaticToken {
    pub token: Option<String>,
}

impl StaticToken {
    pub fn from_config(token: Option<String>) -> Self {
        StaticToken {
            token: token.or_else(|| std::env::var("MIHRAB_PUSH_TOKEN").ok()),
        }
    }
}

impl TokenProvider for StaticToken {
    fn token(&mut self) -> Result<String> {
        self.token
            .clone()
            .ok_or_else(|| anyhow!("no push token available yet"))
    }
}

/// POSTs `{"token": ...}` to the backend's register-token endpoint.
pub struct HttpRegistrationEndpoint {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpRegistrationEndpoint {
    pub fn new(backend_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Building HTTP client")?;
        Ok(HttpRegistrationEndpoint {
            client,
            url: format!(
                "{}/api/register-token",
                backend_url.trim_end_matches('/')
            ),
        })
    }
}

impl RegistrationEndpoint for HttpRegistrationEndpoint {
    fn register(&mut self, token: &str) -> Result<RegistrationReply> {
        let reply = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .context("Sending registration request")?
            .json::<RegistrationReply>()
            .context("Decoding registration reply")?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_permission_mirrors_the_switch() {
        let mut on = SettingsPermission { enabled: true };
        assert_eq!(on.status(), PermissionStatus::Granted);
        let mut off = SettingsPermission { enabled: false };
        assert_eq!(off.status(), PermissionStatus::Denied);
        assert_eq!(off.request(), PermissionStatus::Denied);
    }

    #[test]
    fn static_token_errors_when_absent() {
        let mut some = StaticToken {
            token: Some("ExponentPushToken[abc]".to_string()),
        };
        assert_eq!(some.token().unwrap(), "ExponentPushToken[abc]");
        let mut none = StaticToken { token: None };
        assert!(none.token().is_err());
    }

    #[test]
    fn endpoint_url_is_normalized() {
        let endpoint = HttpRegistrationEndpoint::new("http://localhost:4000/").unwrap();
        assert_eq!(endpoint.url, "http://localhost:4000/api/register-token");
    }
}
