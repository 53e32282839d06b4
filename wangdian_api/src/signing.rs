//! Request signing for the WangDian open API.
//!
//! Every request carries `sid`, `key`, `salt`, `method`, `timestamp`, `v` and
//! a `sign` in its query string. The signature is the lowercase hex MD5 of
//! `secret + k1v1k2v2... + secret` over all parameters sorted by key,
//! including the JSON body, which is then dropped from the query string and
//! sent as the POST payload instead. MD5 is what the server verifies.

use chrono::{DateTime, Utc};
use url::Url;

use crate::{ClientConfig, Error, Pager};

/// Start of the API's clock: 2012-01-01T00:00:00Z as a unix timestamp.
pub const API_EPOCH: i64 = 1_325_347_200;

/// Protocol version sent as `v`.
pub const API_VERSION: &str = "1.0";

const SIGN_KEY: &str = "sign";
const BODY_KEY: &str = "body";

/// Whole seconds elapsed since [`API_EPOCH`], rounded down.
pub fn api_timestamp(now: DateTime<Utc>) -> i64 {
    now.timestamp() - API_EPOCH
}

/// Ordered key/value parameters of a request.
///
/// Insertion order is kept for the query string; signing sorts by key.
#[derive(Clone, Debug, Default)]
pub struct RequestParams {
    pairs: Vec<(&'static str, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(k, _)| *k == key)?;
        Some(self.pairs.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Computes the signature over every parameter except `sign`.
    pub fn sign(&self, secret: &str) -> String {
        let mut sorted: Vec<&(&'static str, String)> =
            self.pairs.iter().filter(|(k, _)| *k != SIGN_KEY).collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut input = String::from(secret);
        for (key, value) in sorted {
            input.push_str(key);
            input.push_str(value);
        }
        input.push_str(secret);

        format!("{:x}", md5::compute(input.as_bytes()))
    }
}

/// A fully signed request, ready to be POSTed.
#[derive(Clone, Debug)]
pub struct SignedRequest {
    /// Base API URL with the signed query string.
    pub url: Url,
    /// JSON text that was signed and must be sent unchanged as the payload.
    pub body: String,
    /// The `timestamp` parameter that was signed.
    pub timestamp: i64,
}

impl SignedRequest {
    /// Signs a call to `method` with the given JSON `body` at time `now`.
    pub fn build(
        config: &ClientConfig,
        method: &str,
        body: String,
        pager: Option<&Pager>,
        now: DateTime<Utc>,
    ) -> Result<Self, Error> {
        if method.trim().is_empty() {
            return Err(Error::InvalidMethod(method.to_string()));
        }

        let timestamp = api_timestamp(now);
        let mut params = RequestParams::new();
        params.push("sid", config.sid());
        params.push("key", config.app_key());
        params.push("salt", config.salt());
        params.push("method", method);
        params.push("timestamp", timestamp.to_string());
        params.push("v", API_VERSION);
        params.push(BODY_KEY, body);
        if let Some(pager) = pager {
            pager.add_to_params(&mut params)?;
        }

        let sign = params.sign(config.secret());
        params.push(SIGN_KEY, sign);
        let body = params.remove(BODY_KEY).unwrap_or_default();

        let mut url = config.api_url().clone();
        url.query_pairs_mut().clear().extend_pairs(params.iter());

        Ok(Self {
            url,
            body,
            timestamp,
        })
    }
}
