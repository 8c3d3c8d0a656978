//! Sui full-node JSON-RPC client with reliability features.
//!
//! Features:
//! - Multiple endpoint fallback with retry passes
//! - Request logging with redacted endpoints
//! - Error classification (network vs. timeout vs. RPC-level)
//!
//! The client owns a Tokio runtime and exposes a synchronous facade;
//! async internals are shared with the balance watcher.

use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

use crate::core::address::SuiAddress;
use crate::core::coin::CoinType;
use crate::core::digest::TransactionDigest;
use crate::core::sui_amount::SuiAmount;
use crate::core::transaction_effects::TransactionEffects;
use super::digest_polling;
use super::network::NetworkConfig;
use super::rpc_url::RpcUrl;
use super::signer::SignedTransaction;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of extra passes over the endpoint list.
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Errors that can occur during ChainClient creation.
#[derive(Debug, thiserror::Error)]
pub enum ChainClientCreationError {
    #[error("No RPC URLs provided")]
    NoRpcUrlsProvided,

    #[error("Failed to create Tokio runtime: {0}")]
    TokioRuntimeError(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClientError(String),
}

/// Errors that can occur during ChainClient operations.
#[derive(Debug, thiserror::Error)]
pub enum ChainClientError {
    #[error("RPC request failed: {0}")]
    RpcError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timeout error: {0}")]
    TimeoutError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("All RPC endpoints failed: {0}")]
    AllEndpointsFailed(String),
}

impl ChainClientError {
    /// `last_error`: most recent failure from the try loop; uses
    /// "No endpoints attempted" if `None`.
    pub fn all_endpoints_failed<E: std::fmt::Display>(last_error: Option<E>) -> Self {
        ChainClientError::AllEndpointsFailed(
            last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "No endpoints attempted".to_string()),
        )
    }
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Sui full-node JSON-RPC client.
pub struct ChainClient {
    /// Endpoints to try in order (with fallback)
    rpc_urls: Vec<RpcUrl>,
    /// Extra passes over the endpoint list before giving up
    max_retries: u32,
    http: reqwest::Client,
    /// Tokio runtime backing the synchronous facade
    runtime: Runtime,
}

impl ChainClient {
    /// Creates a new ChainClient.
    ///
    /// # Arguments
    /// * `rpc_urls` - Endpoints to try in order with fallback
    /// * `timeout` - Per-request timeout in seconds
    /// * `max_retries` - Extra passes over the endpoint list per request
    pub fn new(
        rpc_urls: Vec<RpcUrl>,
        timeout: u64,
        max_retries: u32,
    ) -> Result<Self, ChainClientCreationError> {
        if rpc_urls.is_empty() {
            return Err(ChainClientCreationError::NoRpcUrlsProvided);
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout))
            .build()
            .map_err(|e| ChainClientCreationError::HttpClientError(e.to_string()))?;

        let runtime = Runtime::new()
            .map_err(|e| ChainClientCreationError::TokioRuntimeError(e.to_string()))?;

        Ok(Self {
            rpc_urls,
            max_retries,
            http,
            runtime,
        })
    }

    /// Creates a client from a resolved network configuration, with the
    /// default timeout and retry settings.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, ChainClientCreationError> {
        Self::new(
            config.rpc_urls.clone(),
            DEFAULT_TIMEOUT_SECS,
            DEFAULT_MAX_RETRIES,
        )
    }

    /// Gets the coin balance of an address.
    ///
    /// # Examples
    /// ```no_run
    /// # use suifund::chain::{ChainClient, rpc_url::RpcUrl};
    /// # use suifund::core::{address::SuiAddress, coin::CoinType};
    /// let client = ChainClient::new(
    ///     vec![RpcUrl::plain("https://fullnode.testnet.sui.io:443").unwrap()],
    ///     30,
    ///     1,
    /// )?;
    /// # let owner = SuiAddress::from_string(
    /// #     "0x0000000000000000000000000000000000000000000000000000000000000002",
    /// # ).unwrap();
    /// let balance = client.get_balance(&owner, &CoinType::sui())?;
    /// println!("{}", balance);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get_balance(
        &self,
        owner: &SuiAddress,
        coin: &CoinType,
    ) -> Result<SuiAmount, ChainClientError> {
        self.runtime.block_on(self.get_balance_async(owner, coin))
    }

    pub(crate) async fn get_balance_async(
        &self,
        owner: &SuiAddress,
        coin: &CoinType,
    ) -> Result<SuiAmount, ChainClientError> {
        let params = serde_json::json!([owner.as_str(), coin.type_tag]);
        let result = self.rpc_call_async("suix_getBalance", params).await?;

        // totalBalance arrives as a decimal string; tolerate a number too.
        let mist = match result.get("totalBalance") {
            Some(serde_json::Value::String(s)) => s.parse::<u128>().map_err(|_| {
                ChainClientError::InvalidResponse(format!("Unparseable totalBalance: {s:?}"))
            })?,
            Some(serde_json::Value::Number(n)) => n.as_u64().map(u128::from).ok_or_else(|| {
                ChainClientError::InvalidResponse(format!("Unparseable totalBalance: {n}"))
            })?,
            _ => {
                return Err(ChainClientError::InvalidResponse(
                    "Balance response missing totalBalance".to_string(),
                ))
            }
        };

        Ok(SuiAmount::new(mist))
    }

    /// Submits a signed transaction and returns its digest.
    ///
    /// The full node executes the transaction before responding, but
    /// indexing may lag; follow up with [`ChainClient::wait_for_transaction`]
    /// to observe the effects.
    pub fn execute_transaction(
        &self,
        signed: &SignedTransaction,
    ) -> Result<TransactionDigest, ChainClientError> {
        let params = serde_json::json!([
            signed.tx_bytes,
            signed.signatures,
            { "showEffects": true },
            "WaitForLocalExecution",
        ]);
        let result = self
            .runtime
            .block_on(self.rpc_call_async("sui_executeTransactionBlock", params))?;

        let digest = result
            .get("digest")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ChainClientError::InvalidResponse(
                    "Execution response missing digest".to_string(),
                )
            })?;

        TransactionDigest::from_string(digest)
            .map_err(|e| ChainClientError::InvalidResponse(format!("Invalid digest: {e}")))
    }

    /// Looks a transaction up by digest.
    ///
    /// Returns `Ok(None)` while the digest is not yet indexed.
    pub fn get_transaction(
        &self,
        digest: &TransactionDigest,
    ) -> Result<Option<TransactionEffects>, ChainClientError> {
        self.runtime.block_on(self.get_transaction_async(digest))
    }

    pub(crate) async fn get_transaction_async(
        &self,
        digest: &TransactionDigest,
    ) -> Result<Option<TransactionEffects>, ChainClientError> {
        let params = serde_json::json!([digest.as_str(), { "showEffects": true }]);
        match self.rpc_call_async("sui_getTransactionBlock", params).await {
            Ok(result) => TransactionEffects::from_rpc(result)
                .map(Some)
                .map_err(|e| {
                    ChainClientError::InvalidResponse(format!("Failed to parse effects: {e}"))
                }),
            // The node reports an unindexed digest as an RPC-level error.
            Err(ChainClientError::RpcError(msg)) if msg.contains("Could not find") => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Waits until a submitted transaction is indexed.
    ///
    /// # Arguments
    /// * `digest` - The digest to wait for
    /// * `timeout` - Maximum time to wait in seconds
    /// * `poll_interval` - Interval between polls in seconds
    pub fn wait_for_transaction(
        &self,
        digest: &TransactionDigest,
        timeout: u64,
        poll_interval: f64,
    ) -> Result<TransactionEffects, ChainClientError> {
        self.runtime.block_on(digest_polling::poll_for_transaction(
            self,
            digest,
            timeout,
            poll_interval,
        ))
    }

    pub(crate) async fn rpc_call_async(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ChainClientError> {
        let mut last_error = None;

        for pass in 0..=self.max_retries {
            for rpc_url in &self.rpc_urls {
                match self.try_rpc_url(rpc_url, method, params.clone()).await {
                    Ok(result) => return Ok(result),
                    // The node understood the request; another endpoint
                    // would answer the same.
                    Err(e @ ChainClientError::RpcError(_)) => return Err(e),
                    Err(e) => {
                        warn!(endpoint = %rpc_url, %method, pass, error = %e, "RPC request failed");
                        last_error = Some(e);
                    }
                }
            }
        }

        Err(ChainClientError::all_endpoints_failed(last_error))
    }

    async fn try_rpc_url(
        &self,
        rpc_url: &RpcUrl,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ChainClientError> {
        let target = rpc_url
            .as_url()
            .map_err(|e| ChainClientError::InvalidEndpoint(e.to_string()))?;

        debug!(endpoint = %rpc_url, %method, "RPC request");

        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self
            .http
            .post(target)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let response: RpcResponse = response
            .json()
            .await
            .map_err(|e| ChainClientError::InvalidResponse(e.to_string()))?;

        if let Some(error) = response.error {
            return Err(ChainClientError::RpcError(format!(
                "{} (code {})",
                error.message, error.code
            )));
        }

        response.result.ok_or_else(|| {
            ChainClientError::InvalidResponse("Response carried neither result nor error".into())
        })
    }
}

fn classify_transport_error(e: reqwest::Error) -> ChainClientError {
    if e.is_timeout() {
        ChainClientError::TimeoutError(e.to_string())
    } else {
        ChainClientError::NetworkError(e.to_string())
    }
}
