//! Payment document.

use serde::{Deserialize, Serialize};

use super::amount::PaymentAmount;
use super::links::Links;

/// Instrument a payment was funded with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundingInstrument {
    /// CREDIT_CARD, BOLETO, ONLINE_BANK_DEBIT, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// A payment made against an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentData {
    /// Upstream identifier (PAY-XXXXXXXXXXXX)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<PaymentAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<i64>,
    /// Text shown on the card holder's statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_instrument: Option<FundingInstrument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}
