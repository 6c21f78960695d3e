//! Order document.

use serde::{Deserialize, Serialize};

use super::amount::OrderAmount;
use super::links::Links;

/// A sales order; payments and refunds hang off it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderData {
    /// Upstream identifier (ORD-XXXXXXXXXXXX)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant's own reference for the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<OrderAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}
