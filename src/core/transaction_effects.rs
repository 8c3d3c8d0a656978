//! Execution effects of a submitted transaction, parsed from full-node JSON.

use thiserror::Error;

use super::digest::{DigestError, TransactionDigest};
use super::sui_amount::SuiAmount;

#[derive(Error, Debug)]
pub enum EffectsError {
    #[error("Effects must be a JSON object")]
    NotAnObject,

    #[error("Missing field in transaction effects: {0}")]
    MissingField(String),

    #[error("Invalid field in transaction effects: {0}")]
    InvalidField(String),

    #[error("Invalid transaction digest in effects: {0}")]
    InvalidDigest(#[from] DigestError),
}

/// Terminal status of an executed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    Success,
    Failure { error: String },
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionStatus::Success)
    }
}

/// Gas charged for a transaction, in MIST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasSummary {
    pub computation_cost: u128,
    pub storage_cost: u128,
    pub storage_rebate: u128,
}

#[derive(Debug, Clone)]
pub struct TransactionEffects {
    pub digest: TransactionDigest,
    pub status: ExecutionStatus,
    pub gas: GasSummary,
    pub checkpoint: Option<u64>,
}

impl TransactionEffects {
    /// Net gas charge (computation + storage − rebate) as a SUI amount.
    pub fn total_gas(&self) -> SuiAmount {
        let charged = self.gas.computation_cost + self.gas.storage_cost;
        SuiAmount::new(charged.saturating_sub(self.gas.storage_rebate))
    }

    /// Parses a `sui_getTransactionBlock` / `sui_executeTransactionBlock`
    /// result. Numeric fields may arrive as decimal strings or numbers.
    pub fn from_rpc(result: serde_json::Value) -> Result<Self, EffectsError> {
        let obj = result.as_object().ok_or(EffectsError::NotAnObject)?;

        let digest_str = obj
            .get("digest")
            .and_then(|v| v.as_str())
            .ok_or_else(|| EffectsError::MissingField("digest".to_string()))?;
        let digest = TransactionDigest::from_string(digest_str)?;

        let effects = obj
            .get("effects")
            .and_then(|v| v.as_object())
            .ok_or_else(|| EffectsError::MissingField("effects".to_string()))?;

        let status_obj = effects
            .get("status")
            .and_then(|v| v.as_object())
            .ok_or_else(|| EffectsError::MissingField("effects.status".to_string()))?;
        let status_str = status_obj
            .get("status")
            .and_then(|v| v.as_str())
            .ok_or_else(|| EffectsError::MissingField("effects.status.status".to_string()))?;
        let status = match status_str {
            "success" => ExecutionStatus::Success,
            "failure" => ExecutionStatus::Failure {
                error: status_obj
                    .get("error")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown execution failure")
                    .to_string(),
            },
            other => {
                return Err(EffectsError::InvalidField(format!(
                    "effects.status.status: {other:?}"
                )))
            }
        };

        let gas_used = effects
            .get("gasUsed")
            .and_then(|v| v.as_object())
            .ok_or_else(|| EffectsError::MissingField("effects.gasUsed".to_string()))?;
        let gas = GasSummary {
            computation_cost: parse_mist_field(gas_used, "computationCost")?,
            storage_cost: parse_mist_field(gas_used, "storageCost")?,
            storage_rebate: parse_mist_field(gas_used, "storageRebate")?,
        };

        let checkpoint = match obj.get("checkpoint") {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(
                parse_u64(value)
                    .ok_or_else(|| EffectsError::InvalidField("checkpoint".to_string()))?,
            ),
        };

        Ok(Self {
            digest,
            status,
            gas,
            checkpoint,
        })
    }
}

fn parse_mist_field(
    obj: &serde_json::Map<String, serde_json::Value>,
    field: &str,
) -> Result<u128, EffectsError> {
    let value = obj
        .get(field)
        .ok_or_else(|| EffectsError::MissingField(format!("effects.gasUsed.{field}")))?;
    match value {
        serde_json::Value::String(s) => s
            .parse::<u128>()
            .map_err(|_| EffectsError::InvalidField(format!("effects.gasUsed.{field}: {s:?}"))),
        serde_json::Value::Number(n) => n
            .as_u64()
            .map(u128::from)
            .ok_or_else(|| EffectsError::InvalidField(format!("effects.gasUsed.{field}: {n}"))),
        _ => Err(EffectsError::InvalidField(format!(
            "effects.gasUsed.{field} must be a string or number"
        ))),
    }
}

fn parse_u64(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::String(s) => s.parse().ok(),
        serde_json::Value::Number(n) => n.as_u64(),
        _ => None,
    }
}
