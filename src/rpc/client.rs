use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("RPC request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC endpoint returned HTTP {status}: {reason}")]
    Network { status: u16, reason: String },

    #[error("RPC protocol violation: {0}")]
    Protocol(String),
}

/// Thin JSON-RPC client over plain HTTP POST.
///
/// One request, one response. No retry, no backoff, no timeout: a failed
/// call propagates immediately and a hung call blocks until the transport
/// gives up on its own.
pub struct RpcClient {
    http: Client,
    endpoint: String,
}

impl RpcClient {
    pub fn new(endpoint: &str) -> Result<Self, RpcError> {
        if endpoint.trim().is_empty() {
            return Err(RpcError::InvalidInput(
                "RPC endpoint must be a non-empty string".to_string(),
            ));
        }

        Ok(Self {
            http: Client::new(),
            endpoint: endpoint.to_string(),
        })
    }

    /// Issue one JSON-RPC exchange and return the `result` payload verbatim.
    ///
    /// The envelope is validated here; the shape of the payload itself is the
    /// caller's problem.
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        if method.trim().is_empty() {
            return Err(RpcError::InvalidInput(
                "RPC method must be a non-empty string".to_string(),
            ));
        }

        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        debug!("calling {} on {}", method, self.endpoint);
        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Network {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let envelope: Value = response.json().await.map_err(|e| {
            RpcError::Protocol(format!("response body is not valid JSON: {}", e))
        })?;

        let envelope = envelope.as_object().ok_or_else(|| {
            RpcError::Protocol("response body is not a JSON object".to_string())
        })?;

        if let Some(err) = envelope.get("error") {
            if !err.is_null() {
                return Err(RpcError::Protocol(format!("node returned error: {}", err)));
            }
        }

        match envelope.get("result") {
            None => Err(RpcError::Protocol(
                "response carries no result field".to_string(),
            )),
            Some(Value::Null) => Err(RpcError::Protocol("result is null".to_string())),
            Some(result) => Ok(result.clone()),
        }
    }
}
