//! Move-call transaction building for the crowdfunding package.

use serde_json::json;
use thiserror::Error;

use crate::core::address::SuiAddress;
use crate::core::forms::CreateCampaignRequest;
use crate::core::transaction_effects::TransactionEffects;
use super::chain_client::{ChainClient, ChainClientError};
use super::signer::{SignerError, TransactionSigner};

/// Default gas budget for a create call, in MIST (0.05 SUI).
pub const DEFAULT_GAS_BUDGET: u64 = 50_000_000;

#[derive(Error, Debug)]
pub enum TransactionBuildError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Crowdfunding package id is not configured for this network")]
    PackageNotConfigured,

    #[error("Target amount does not fit the on-chain u64 argument")]
    TargetOutOfRange,

    #[error("Signing failed: {0}")]
    Signer(#[from] SignerError),

    #[error("Chain client error: {0}")]
    Chain(#[from] ChainClientError),
}

/// A pure (BCS-encodable) Move call argument, in Sui JSON form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Str(String),
    U64(u64),
}

impl CallArg {
    /// Sui JSON renders u64 as a decimal string to stay safe for JSON
    /// consumers without exact 64-bit integers.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CallArg::Str(s) => json!({ "type": "pure", "valueType": "string", "value": s }),
            CallArg::U64(n) => {
                json!({ "type": "pure", "valueType": "u64", "value": n.to_string() })
            }
        }
    }
}

/// A single Move call inside a transaction.
#[derive(Debug, Clone)]
pub struct MoveCall {
    pub package: SuiAddress,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<CallArg>,
}

impl MoveCall {
    /// `package::module::function` form, as wallets display it.
    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package, self.module, self.function)
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "target": self.target(),
            "typeArguments": self.type_arguments,
            "arguments": self.arguments.iter().map(CallArg::to_json).collect::<Vec<_>>(),
        })
    }
}

/// An unsigned transaction handed to the wallet for signing.
#[derive(Debug, Clone)]
pub struct TransactionData {
    pub sender: SuiAddress,
    pub gas_budget: u64,
    pub calls: Vec<MoveCall>,
}

impl TransactionData {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "sender": self.sender.as_str(),
            "gasBudget": self.gas_budget.to_string(),
            "calls": self.calls.iter().map(MoveCall::to_json).collect::<Vec<_>>(),
        })
    }
}

/// Fluent builder for a single Move call.
pub struct MoveCallBuilder {
    package: SuiAddress,
    module: String,
    function: String,
    type_arguments: Vec<String>,
    arguments: Vec<CallArg>,
}

impl MoveCallBuilder {
    pub fn new(package: SuiAddress, module: &str, function: &str) -> Self {
        Self {
            package,
            module: module.to_string(),
            function: function.to_string(),
            type_arguments: vec![],
            arguments: vec![],
        }
    }

    pub fn type_argument(mut self, type_tag: &str) -> Self {
        self.type_arguments.push(type_tag.to_string());
        self
    }

    pub fn pure_str(mut self, value: &str) -> Self {
        self.arguments.push(CallArg::Str(value.to_string()));
        self
    }

    pub fn pure_u64(mut self, value: u64) -> Self {
        self.arguments.push(CallArg::U64(value));
        self
    }

    pub fn build(self) -> Result<MoveCall, TransactionBuildError> {
        if self.module.is_empty() {
            return Err(TransactionBuildError::MissingField("module".into()));
        }
        if self.function.is_empty() {
            return Err(TransactionBuildError::MissingField("function".into()));
        }
        Ok(MoveCall {
            package: self.package,
            module: self.module,
            function: self.function,
            type_arguments: self.type_arguments,
            arguments: self.arguments,
        })
    }
}

/// Builds and submits crowdfunding transactions against one package.
pub struct CampaignTransactions {
    package_id: Option<SuiAddress>,
    gas_budget: u64,
}

impl CampaignTransactions {
    pub fn new(package_id: Option<SuiAddress>) -> Self {
        Self {
            package_id,
            gas_budget: DEFAULT_GAS_BUDGET,
        }
    }

    pub fn with_gas_budget(mut self, gas_budget: u64) -> Self {
        self.gas_budget = gas_budget;
        self
    }

    /// Builds the `crowdfunding::create` call for a validated request.
    ///
    /// Argument order matches the Move entry function: name, description,
    /// image reference, then the target in MIST as `u64`.
    pub fn create_campaign(
        &self,
        sender: SuiAddress,
        request: &CreateCampaignRequest,
    ) -> Result<TransactionData, TransactionBuildError> {
        let package = self
            .package_id
            .clone()
            .ok_or(TransactionBuildError::PackageNotConfigured)?;

        let target_mist = u64::try_from(request.target.mist)
            .map_err(|_| TransactionBuildError::TargetOutOfRange)?;

        let call = MoveCallBuilder::new(package, "crowdfunding", "create")
            .type_argument(&request.coin.type_tag)
            .pure_str(&request.name)
            .pure_str(&request.description)
            .pure_str(&request.image_ref)
            .pure_u64(target_mist)
            .build()?;

        Ok(TransactionData {
            sender,
            gas_budget: self.gas_budget,
            calls: vec![call],
        })
    }

    /// Full submission path: build, sign through the wallet, execute, and
    /// wait for the transaction to be indexed.
    pub fn submit_create(
        &self,
        client: &ChainClient,
        signer: &dyn TransactionSigner,
        request: &CreateCampaignRequest,
    ) -> Result<TransactionEffects, TransactionBuildError> {
        let sender = signer.address()?;
        let tx = self.create_campaign(sender, request)?;
        let signed = signer.sign(&tx)?;
        let digest = client.execute_transaction(&signed)?;
        let effects = client.wait_for_transaction(&digest, 120, 1.0)?;
        Ok(effects)
    }
}
