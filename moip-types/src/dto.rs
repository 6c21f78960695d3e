//! Data Transfer Objects (DTOs) for requests and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Amount, BankCode, TaxDocument};

// ─────────────────────────────────────────────────────────────────────────────
// Refund Requests
// ─────────────────────────────────────────────────────────────────────────────

/// Refunding instrument code for bank transfers.
pub const BANK_ACCOUNT_INSTRUMENT: &str = "BANK_ACCOUNT";

/// Kind of bank account a refund is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountType {
    Checking,
    Saving,
}

impl std::fmt::Display for BankAccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankAccountType::Checking => write!(f, "CHECKING"),
            BankAccountType::Saving => write!(f, "SAVING"),
        }
    }
}

impl std::str::FromStr for BankAccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CHECKING" => Ok(BankAccountType::Checking),
            "SAVING" => Ok(BankAccountType::Saving),
            _ => Err(format!(
                "Unknown bank account type: {}. Supported: CHECKING, SAVING",
                s
            )),
        }
    }
}

/// Owner of the bank account receiving a refund.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    pub tax_document: TaxDocument,
}

/// Bank account details of a bank-transfer refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRequest {
    #[serde(rename = "type")]
    pub account_type: BankAccountType,
    /// Bank code, e.g. 001, 237, 341
    pub bank_number: String,
    /// Codes are sent as given: numbers stay numbers, text keeps leading zeros
    pub agency_number: BankCode,
    pub agency_check_number: BankCode,
    pub account_number: BankCode,
    pub account_check_number: BankCode,
    pub holder: HolderRequest,
}

/// Body of a refund creation request.
///
/// An empty request serializes to `{}`, which refunds the full amount to
/// the original credit card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunding_instrument: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccountRequest>,
    /// Amount to refund in smallest currency unit (partial refunds only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl RefundRequest {
    /// Creates a request refunding only `amount`.
    pub fn partial(amount: impl Into<Amount>) -> Self {
        Self {
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    /// Creates a request sending the funds to a bank account.
    pub fn to_bank_account(bank_account: BankAccountRequest) -> Self {
        Self {
            refunding_instrument: Some(BANK_ACCOUNT_INSTRUMENT.to_string()),
            bank_account: Some(bank_account),
            amount: None,
        }
    }

    /// Limits the request to `amount`.
    pub fn with_amount(mut self, amount: impl Into<Amount>) -> Self {
        self.amount = Some(amount.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Envelope of a refund listing: `{ "refunds": [ ... ] }`.
///
/// Elements are kept raw so each can be populated into its own resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefundList {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub refunds: Vec<Value>,
}
