//! Monetary groups embedded in resource documents.
//!
//! Values are usually integers in the smallest unit of the currency
//! (centavos for BRL), but the API may also send decimals; [`Amount`] keeps
//! whichever form was received. The currency is kept as the upstream code
//! string so unknown codes still deserialize.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A monetary value as sent by the API: integer or decimal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Number);

impl Amount {
    /// Creates a decimal amount. Returns `None` for NaN or infinite values.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    /// Returns the value if it is an integer that fits in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// Returns the value as `f64` (may lose precision on huge integers).
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    /// Returns true if the API sent an integer.
    pub fn is_integer(&self) -> bool {
        self.0.is_i64() || self.0.is_u64()
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self(Number::from(value))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount group of a ledger entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryAmount {
    /// Gross value of the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Amount>,
    /// Processing fee charged on the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Amount>,
    /// Net value (total minus fee)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquid: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl EntryAmount {
    /// Returns true if no field of the group was populated.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Amount group of a refund.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Amount>,
    /// Portion of the refund discounted from the fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Amount group of a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquid: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Amount group of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}
