//! JSON-RPC 2.0 over HTTP.

use crate::error::RpcError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct Request<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct Response<R> {
    result: Option<R>,
    #[serde(default)]
    error: Option<ErrorObject>,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    code: i64,
    message: String,
}

/// A JSON-RPC endpoint, e.g. `http://127.0.0.1:9650/ext/bc/P`.
pub struct JsonRpcTransport {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    url: reqwest::Url,
    timeout: Duration,
    next_id: AtomicU64,
}

impl JsonRpcTransport {
    /// Bind a transport to `path` under `base_url`.
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> Result<Self, RpcError> {
        let joined = format!("{}{}", base_url.trim_end_matches('/'), path);
        let url = reqwest::Url::parse(&joined).map_err(|e| RpcError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
            .build()
            .map_err(|e| RpcError::Client(e.to_string()))?;
        Ok(Self {
            http_client,
            url,
            timeout,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Invoke `method` with `params` and decode the `result` member.
    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R, RpcError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = Request {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        tracing::debug!(url = %self.url, method, id, "sending JSON-RPC request");

        let response = self
            .http_client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RpcError::Timeout(self.timeout)
                } else if e.is_connect() {
                    RpcError::Unreachable(format!("connection failed: {e}"))
                } else {
                    RpcError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(RpcError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let body: Response<R> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                RpcError::Timeout(self.timeout)
            } else {
                RpcError::InvalidResponse(format!("failed to parse {method} response: {e}"))
            }
        })?;

        match (body.result, body.error) {
            (_, Some(err)) => Err(RpcError::Remote {
                code: err.code,
                message: err.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(RpcError::InvalidResponse(format!(
                "{method} response has neither result nor error"
            ))),
        }
    }
}
