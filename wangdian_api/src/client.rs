//! HTTP client for the WangDian open API.

use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{
    signing::SignedRequest,
    types::{ResponseEnvelope, WarehousePage, WarehouseQuery, QUERY_WAREHOUSE_METHOD},
    ClientConfig, Error, Pager,
};

/// HTTP client for the WangDian open API.
///
/// Every call is signed independently with the current time, so one client
/// can be shared across tasks. There is no timeout, retry or rate limiting;
/// pass a preconfigured `reqwest::Client` to [`Client::with_http_client`] if
/// you need a timeout.
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
    clock: fn() -> DateTime<Utc>,
}

impl Client {
    /// Creates a client with a default `reqwest::Client`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            config,
            http,
            clock: Utc::now,
        }
    }

    /// Replaces the wall clock used for request timestamps. Used for testing.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Invokes `method` with `params` as the JSON body and returns the
    /// envelope's `data`.
    ///
    /// A response without `data` decodes as JSON `null`, which suits
    /// `T = Option<_>`, `()` or `serde_json::Value`.
    pub async fn call<T, P>(&self, method: &str, params: &P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_string(params).map_err(Error::Serialize)?;
        self.invoke(method, body, None).await
    }

    /// Invokes a paginated `method`.
    ///
    /// The body is `[params]`: list methods take their filter as the single
    /// element of a positional argument array. Not every remote method
    /// follows this shape, so check the method's documentation before
    /// reusing it for new endpoints.
    pub async fn page_call<T, P>(&self, method: &str, pager: &Pager, params: &P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_string(&[params]).map_err(Error::Serialize)?;
        self.invoke(method, body, Some(pager)).await
    }

    /// Fetches one page of warehouses.
    pub async fn query_warehouses(
        &self,
        pager: &Pager,
        query: &WarehouseQuery,
    ) -> Result<WarehousePage, Error> {
        self.page_call(QUERY_WAREHOUSE_METHOD, pager, query).await
    }

    async fn invoke<T>(&self, method: &str, body: String, pager: Option<&Pager>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let request = SignedRequest::build(&self.config, method, body, pager, (self.clock)())?;
        tracing::debug!(
            method,
            timestamp = request.timestamp,
            page_no = pager.map(|p| p.page_no()),
            page_size = pager.map(|p| p.page_size()),
            "Calling WangDian API"
        );

        let resp = self
            .http
            .post(request.url)
            .header(CONTENT_TYPE, "application/json")
            .body(request.body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to call {}: {}", method, e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        decode_response(method, status, &body)
    }
}

fn decode_response<T>(method: &str, status: StatusCode, body: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let envelope = match serde_json::from_str::<Option<ResponseEnvelope<Value>>>(body) {
        Ok(Some(envelope)) => envelope,
        Ok(None) => return Err(undecodable(method, status, "response body is null", body)),
        Err(e) => return Err(undecodable(method, status, &e.to_string(), body)),
    };

    if envelope.is_error() {
        let message = envelope.message.unwrap_or_default();
        tracing::warn!("{} returned status {}: {}", method, envelope.status, message);
        return Err(Error::Remote {
            code: envelope.status,
            message,
        });
    }

    serde_json::from_value(envelope.data.unwrap_or(Value::Null)).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse {} data: {} | body: {}", method, e, snippet);
        Error::InvalidResponse {
            reason: e.to_string(),
            body: snippet,
        }
    })
}

fn undecodable(method: &str, status: StatusCode, reason: &str, body: &str) -> Error {
    let snippet = truncate_body(body);
    if !status.is_success() {
        tracing::error!("{} failed with status {}: {}", method, status, snippet);
        return Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        };
    }
    tracing::error!("Invalid response from {}: {} | body: {}", method, reason, snippet);
    Error::InvalidResponse {
        reason: reason.to_string(),
        body: snippet,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_data_on_success() {
        let data: Value =
            decode_response("ping", StatusCode::OK, r#"{"status":0,"data":{"x":1}}"#).unwrap();
        assert_eq!(data, serde_json::json!({"x": 1}));
    }

    #[test]
    fn missing_data_decodes_as_null() {
        let data: Option<Value> = decode_response("ping", StatusCode::OK, r#"{"status":0}"#).unwrap();
        assert!(data.is_none());

        let err = decode_response::<WarehousePage>("ping", StatusCode::OK, r#"{"status":0}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
    }

    #[test]
    fn positive_status_is_remote_error() {
        let err = decode_response::<Value>(
            "ping",
            StatusCode::OK,
            r#"{"status":5,"message":"bad sid"}"#,
        )
        .unwrap_err();
        match err {
            Error::Remote { code, message } => {
                assert_eq!(code, 5);
                assert_eq!(message, "bad sid");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn remote_error_wins_over_mismatched_data() {
        let err = decode_response::<WarehousePage>(
            "ping",
            StatusCode::OK,
            r#"{"status":100,"data":[],"message":"sign error"}"#,
        )
        .unwrap_err();
        assert_eq!(err.remote_code(), Some(100));
    }

    #[test]
    fn negative_status_counts_as_success() {
        let data: i64 = decode_response("ping", StatusCode::OK, r#"{"status":-1,"data":7}"#).unwrap();
        assert_eq!(data, 7);
    }

    #[test]
    fn empty_null_and_garbage_bodies_are_invalid() {
        for body in ["", "null", "{not valid json}", "{}", "<html></html>"] {
            let err = decode_response::<Value>("ping", StatusCode::OK, body).unwrap_err();
            assert!(
                matches!(err, Error::InvalidResponse { .. }),
                "body {:?} gave {:?}",
                body,
                err
            );
        }
    }

    #[test]
    fn unparseable_error_page_keeps_http_status() {
        let err = decode_response::<Value>("ping", StatusCode::BAD_GATEWAY, "Bad Gateway")
            .unwrap_err();
        match err {
            Error::HttpStatus { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn truncates_on_char_boundary() {
        let body = "仓".repeat(2001);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert_eq!(snippet.chars().filter(|c| *c == '仓').count(), 2000);
        assert_eq!(truncate_body("short"), "short");
    }
}
