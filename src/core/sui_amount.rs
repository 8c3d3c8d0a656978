//! Exact SUI ↔ MIST conversion.
//!
//! 1 SUI = 10^9 MIST. All arithmetic is integer-only on `u128`: scaling a
//! decimal amount by 10^9 pushes realistic balances past what an `f64` can
//! hold exactly, so no floating point is involved at any step.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of MIST in one SUI.
pub const MIST_PER_SUI: u128 = 1_000_000_000;

/// Number of decimal places SUI supports (1 SUI = 10^9 MIST).
pub const SUI_DECIMALS: usize = 9;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount is required")]
    EmptyAmount,

    #[error("Amount must be a valid decimal number: {0:?}")]
    InvalidFormat(String),

    #[error("Fractional part has {0} digits, but SUI supports at most 9 decimal places")]
    PrecisionExceeded(usize),

    #[error("Amount is too large to represent in MIST")]
    Overflow,
}

/// An exact, non-negative SUI amount stored in MIST.
///
/// This is the only representation handed to the transaction-encoding
/// boundary; display strings are derived from it, never the other way
/// around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SuiAmount {
    pub mist: u128,
}

impl SuiAmount {
    pub const ZERO: SuiAmount = SuiAmount { mist: 0 };

    pub fn new(mist: u128) -> Self {
        Self { mist }
    }

    /// Whole SUI, no fractional part.
    pub fn from_sui(sui: u64) -> Self {
        Self {
            mist: sui as u128 * MIST_PER_SUI,
        }
    }

    /// Parses a user-entered decimal string (e.g. `"1.5"`) into MIST.
    ///
    /// Validation rules, applied in order on the trimmed input:
    /// 1. empty → [`AmountError::EmptyAmount`]
    /// 2. not of the form `digits[.digits]` → [`AmountError::InvalidFormat`]
    /// 3. more than 9 fractional digits → [`AmountError::PrecisionExceeded`]
    ///
    /// No upper bound is enforced here beyond `u128` range; policy limits
    /// (such as a maximum campaign target) belong to the caller.
    ///
    /// # Examples
    /// ```
    /// # use suifund::core::sui_amount::SuiAmount;
    /// assert_eq!(SuiAmount::from_decimal("1.5").unwrap().mist, 1_500_000_000);
    /// assert_eq!(SuiAmount::from_decimal("0.000000001").unwrap().mist, 1);
    /// assert!(SuiAmount::from_decimal("1.2.3").is_err());
    /// ```
    pub fn from_decimal(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AmountError::EmptyAmount);
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        // Matches ^\d+(\.\d+)?$: both parts must be non-empty ASCII digit
        // runs, and a second '.' lands in the fraction and fails here.
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || (trimmed.contains('.') && !all_digits(fraction)) {
            return Err(AmountError::InvalidFormat(trimmed.to_string()));
        }

        if fraction.len() > SUI_DECIMALS {
            return Err(AmountError::PrecisionExceeded(fraction.len()));
        }

        let whole: u128 = whole.parse().map_err(|_| AmountError::Overflow)?;
        let fraction: u128 = if fraction.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", fraction, width = SUI_DECIMALS);
            padded.parse().map_err(|_| AmountError::Overflow)?
        };

        let mist = whole
            .checked_mul(MIST_PER_SUI)
            .and_then(|scaled| scaled.checked_add(fraction))
            .ok_or(AmountError::Overflow)?;

        Ok(Self { mist })
    }

    /// MIST → trimmed decimal string (no floats, no trailing zeros).
    ///
    /// # Examples
    /// ```
    /// # use suifund::core::sui_amount::SuiAmount;
    /// assert_eq!(SuiAmount::new(1_000_000_000).human(), "1");
    /// assert_eq!(SuiAmount::new(1_500_000_000).human(), "1.5");
    /// assert_eq!(SuiAmount::new(0).human(), "0");
    /// ```
    pub fn human(&self) -> String {
        let whole = self.mist / MIST_PER_SUI;
        let remainder = self.mist % MIST_PER_SUI;
        if remainder == 0 {
            return format!("{}", whole);
        }
        let fraction = format!("{:0>width$}", remainder, width = SUI_DECIMALS);
        let trimmed = fraction.trim_end_matches('0');
        format!("{}.{}", whole, trimmed)
    }

    /// Lenient display path for balances coming back from a full node.
    ///
    /// `suix_getBalance` reports `totalBalance` as a decimal string; an
    /// absent or unparseable value renders as `"0"` rather than an error,
    /// so a failed or missing balance never breaks a display surface.
    /// Callers that need strict validation use [`SuiAmount::from_decimal`].
    ///
    /// # Examples
    /// ```
    /// # use suifund::core::sui_amount::SuiAmount;
    /// assert_eq!(SuiAmount::format_balance(Some("1500000000")), "1.5");
    /// assert_eq!(SuiAmount::format_balance(None), "0");
    /// assert_eq!(SuiAmount::format_balance(Some("not a number")), "0");
    /// ```
    pub fn format_balance(total_balance: Option<&str>) -> String {
        match total_balance.and_then(|s| s.trim().parse::<u128>().ok()) {
            Some(mist) => SuiAmount::new(mist).human(),
            None => "0".to_string(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.mist == 0
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, AmountError> {
        let mist = self
            .mist
            .checked_add(other.mist)
            .ok_or(AmountError::Overflow)?;
        Ok(Self { mist })
    }

    pub fn saturating_sub(&self, other: &Self) -> Self {
        Self {
            mist: self.mist.saturating_sub(other.mist),
        }
    }
}

impl FromStr for SuiAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl fmt::Display for SuiAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SUI", self.human())
    }
}
