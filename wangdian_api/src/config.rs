//! Account credentials and endpoint for the WangDian open API.

use std::fmt;

use url::Url;

use crate::Error;

/// Production endpoint of the WangDian open API.
pub const DEFAULT_API_URL: &str = "https://wdt.wangdian.cn/openapi";

const ENV_SID: &str = "WANGDIAN_SID";
const ENV_APP_KEY: &str = "WANGDIAN_APP_KEY";
const ENV_APP_SECRET: &str = "WANGDIAN_APP_SECRET";
const ENV_API_URL: &str = "WANGDIAN_API_URL";

/// Immutable client configuration.
///
/// The app secret issued by WangDian has the form `secret:salt`. The secret
/// wraps the signature input and never leaves the process; the salt is sent
/// in every query string.
#[derive(Clone)]
pub struct ClientConfig {
    sid: String,
    app_key: String,
    secret: String,
    salt: String,
    api_url: Url,
}

impl ClientConfig {
    /// Builds a configuration for the production endpoint.
    ///
    /// Fails if `sid` or `app_key` is empty, or if `app_secret` is not exactly
    /// one `secret:salt` pair with both halves present.
    pub fn new(sid: &str, app_key: &str, app_secret: &str) -> Result<Self, Error> {
        if sid.is_empty() {
            return Err(Error::InvalidConfig("sid must not be empty".to_string()));
        }
        if app_key.is_empty() {
            return Err(Error::InvalidConfig("app key must not be empty".to_string()));
        }
        let (secret, salt) = split_app_secret(app_secret)?;
        let api_url = Url::parse(DEFAULT_API_URL)
            .map_err(|e| Error::InvalidConfig(format!("invalid default API URL: {}", e)))?;
        Ok(Self {
            sid: sid.to_string(),
            app_key: app_key.to_string(),
            secret: secret.to_string(),
            salt: salt.to_string(),
            api_url,
        })
    }

    /// Points the configuration at a different endpoint (staging host, mock server).
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, Error> {
        self.api_url = Url::parse(api_url)
            .map_err(|e| Error::InvalidConfig(format!("invalid API URL {:?}: {}", api_url, e)))?;
        Ok(self)
    }

    /// Reads `WANGDIAN_SID`, `WANGDIAN_APP_KEY`, `WANGDIAN_APP_SECRET` and the
    /// optional `WANGDIAN_API_URL` from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        let config = Self::new(
            &require_env(ENV_SID)?,
            &require_env(ENV_APP_KEY)?,
            &require_env(ENV_APP_SECRET)?,
        )?;
        match std::env::var(ENV_API_URL).ok().filter(|url| !url.is_empty()) {
            Some(url) => config.with_api_url(&url),
            None => Ok(config),
        }
    }

    pub fn sid(&self) -> &str {
        &self.sid
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("sid", &self.sid)
            .field("app_key", &self.app_key)
            .field("secret", &"<redacted>")
            .field("salt", &self.salt)
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

fn split_app_secret(app_secret: &str) -> Result<(&str, &str), Error> {
    match app_secret.split_once(':') {
        Some((secret, salt)) if !secret.is_empty() && !salt.is_empty() && !salt.contains(':') => {
            Ok((secret, salt))
        }
        _ => Err(Error::InvalidConfig(
            "app secret must have the form secret:salt".to_string(),
        )),
    }
}

fn require_env(key: &str) -> Result<String, Error> {
    std::env::var(key)
        .ok()
        .filter(|val| !val.is_empty())
        .ok_or_else(|| Error::InvalidConfig(format!("environment variable {} is not set", key)))
}
