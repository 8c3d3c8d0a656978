//! Polling loop for a submitted transaction digest.
//!
//! Execution responses can outrun indexing, so the digest is polled until
//! the full node can serve it. Endpoint failures during a poll pass are
//! treated as transient; only the deadline ends the wait.

use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, warn};

use crate::core::digest::TransactionDigest;
use crate::core::transaction_effects::TransactionEffects;
use super::chain_client::{ChainClient, ChainClientError};

pub(crate) async fn poll_for_transaction(
    client: &ChainClient,
    digest: &TransactionDigest,
    timeout: u64,
    poll_interval: f64,
) -> Result<TransactionEffects, ChainClientError> {
    let deadline = Duration::from_secs(timeout);
    let interval = Duration::from_secs_f64(poll_interval);
    let start = Instant::now();

    loop {
        check_deadline(start, deadline, timeout)?;

        match client.get_transaction_async(digest).await {
            Ok(Some(effects)) => return Ok(effects),
            Ok(None) => {
                debug!(digest = %digest, "Transaction not indexed yet");
            }
            Err(e) => {
                warn!(digest = %digest, error = %e, "Poll pass failed");
            }
        }

        let remaining = deadline.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            return Err(timeout_error(timeout));
        }
        sleep(remaining.min(interval)).await;
    }
}

fn check_deadline(
    start: Instant,
    deadline: Duration,
    timeout: u64,
) -> Result<(), ChainClientError> {
    if start.elapsed() >= deadline {
        return Err(timeout_error(timeout));
    }
    Ok(())
}

fn timeout_error(timeout: u64) -> ChainClientError {
    ChainClientError::TimeoutError(format!(
        "Timeout waiting for transaction after {} seconds",
        timeout
    ))
}
