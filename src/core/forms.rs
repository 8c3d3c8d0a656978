//! Form-level validation for campaign creation and contribution.
//!
//! Validation here is strict and locally recoverable: every failure maps to
//! a message the UI can surface next to the form for re-entry. Range policy
//! (the 100 SUI target cap) lives here, not in the amount converter.

use thiserror::Error;

use super::coin::CoinType;
use super::sui_amount::{AmountError, SuiAmount};

/// Maximum campaign target, in whole SUI.
pub const MAX_TARGET_SUI: u64 = 100;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Please fill in the required field: {0}")]
    MissingField(&'static str),

    #[error("Selected token is not supported yet: {0}")]
    UnsupportedToken(String),

    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Target fund cannot exceed {MAX_TARGET_SUI} SUI")]
    TargetTooLarge,
}

/// Raw, user-entered state of the create-campaign form.
#[derive(Debug, Clone, Default)]
pub struct CreateCampaignForm {
    pub name: String,
    pub target: String,
    pub description: String,
    pub image_ref: String,
    pub token: String,
}

/// A validated create request, ready for transaction building.
#[derive(Debug, Clone)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub description: String,
    pub image_ref: String,
    pub coin: CoinType,
    pub target: SuiAmount,
}

impl CreateCampaignForm {
    /// Validates the form, applying the rules in submission order:
    /// required fields, token support, amount format, positivity, cap.
    pub fn validate(&self) -> Result<CreateCampaignRequest, FormError> {
        let name = self.name.trim();
        let target = self.target.trim();
        let description = self.description.trim();

        if name.is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if target.is_empty() {
            return Err(FormError::MissingField("target"));
        }
        if description.is_empty() {
            return Err(FormError::MissingField("description"));
        }

        let coin = CoinType::from_symbol(&self.token)
            .ok_or_else(|| FormError::UnsupportedToken(self.token.clone()))?;

        let target = SuiAmount::from_decimal(target)?;
        if target.is_zero() {
            return Err(FormError::ZeroAmount);
        }
        if target > SuiAmount::from_sui(MAX_TARGET_SUI) {
            return Err(FormError::TargetTooLarge);
        }

        Ok(CreateCampaignRequest {
            name: name.to_string(),
            description: description.to_string(),
            image_ref: self.image_ref.trim().to_string(),
            coin,
            target,
        })
    }
}

/// Raw state of the contribution form on a campaign detail page.
#[derive(Debug, Clone, Default)]
pub struct ContributionForm {
    pub amount: String,
    pub token: String,
}

/// A validated contribution. Applied to the local catalog only; there is
/// no contribute call on chain yet.
#[derive(Debug, Clone)]
pub struct ContributionRequest {
    pub coin: CoinType,
    pub amount: SuiAmount,
}

impl ContributionForm {
    pub fn validate(&self) -> Result<ContributionRequest, FormError> {
        let coin = CoinType::from_symbol(&self.token)
            .ok_or_else(|| FormError::UnsupportedToken(self.token.clone()))?;

        let amount = SuiAmount::from_decimal(&self.amount)?;
        if amount.is_zero() {
            return Err(FormError::ZeroAmount);
        }

        Ok(ContributionRequest { coin, amount })
    }
}
