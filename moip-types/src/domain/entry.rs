//! Ledger entry document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::amount::EntryAmount;
use super::payment::PaymentData;

/// A ledger/settlement record describing one money movement.
///
/// The `amount` group is always present (empty until populated); every
/// other field is unset until a response supplies it. Entries are
/// read-only: they are only ever produced from a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntryData {
    /// Identifier of the event that generated the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// SCHEDULED or SETTLED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub amount: EntryAmount,
    /// Free-form description supplied upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Payment the entry was generated from (`parent.payments` upstream)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_payments: Option<PaymentData>,
    /// Expected settlement date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_entry_has_empty_amount_group() {
        let entry = EntryData::default();
        assert!(entry.amount.is_empty());
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!({ "amount": {} }));
    }

    #[test]
    fn test_entry_without_optional_groups() {
        let entry: EntryData =
            serde_json::from_value(json!({ "id": "ENT-1", "status": "SCHEDULED" })).unwrap();
        assert_eq!(entry.id.as_deref(), Some("ENT-1"));
        assert!(entry.amount.is_empty());
        assert!(entry.details.is_none());
        assert!(entry.parent_payments.is_none());
    }

    #[test]
    fn test_entry_document_round_trip() {
        let entry: EntryData = serde_json::from_value(json!({
            "id": "ENT-1",
            "status": "SETTLED",
            "operation": "CREDIT",
            "amount": { "total": 1000, "fee": 50, "liquid": 950, "currency": "BRL" },
            "details": "Pagamento",
            "scheduledFor": "2016-03-01T00:00:00.000-03",
            "settledAt": "2016-03-01T10:00:00.000-03",
            "parentPayments": { "id": "PAY-1" }
        }))
        .unwrap();

        let json = serde_json::to_string(&entry).unwrap();
        let reparsed: EntryData = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, entry);
    }

    #[test]
    fn test_null_amount_is_an_empty_group() {
        let entry: EntryData = serde_json::from_value(json!({
            "id": "ENT-3",
            "amount": null,
            "details": null
        }))
        .unwrap();
        assert_eq!(entry.id.as_deref(), Some("ENT-3"));
        assert!(entry.amount.is_empty());
        assert!(entry.details.is_none());
    }
}
