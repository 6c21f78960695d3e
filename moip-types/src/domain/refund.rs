//! Refund document.

use serde::{Deserialize, Serialize};

use super::amount::{Amount, RefundAmount};
use super::links::Links;

/// Bank/agency/account code as returned upstream.
///
/// The API is not consistent about sending these as numbers or strings,
/// so both are accepted and preserved as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BankCode {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for BankCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankCode::Number(n) => write!(f, "{}", n),
            BankCode::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for BankCode {
    fn from(value: i64) -> Self {
        BankCode::Number(value)
    }
}

impl From<&str> for BankCode {
    fn from(value: &str) -> Self {
        BankCode::Text(value.to_string())
    }
}

impl From<String> for BankCode {
    fn from(value: String) -> Self {
        BankCode::Text(value)
    }
}

/// Parses digits as a number unless that would drop leading zeros
/// (`"0001"` stays text).
impl std::str::FromStr for BankCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Ok(BankCode::Number(n)),
            _ => Ok(BankCode::Text(s.to_string())),
        }
    }
}

/// Bank account funds were returned to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefundBankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_number: Option<BankCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_number: Option<BankCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_check_number: Option<BankCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<BankCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_check_number: Option<BankCode>,
    /// CHECKING or SAVING
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

/// Instrument used to return the funds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefundingInstrument {
    /// CREDIT_CARD or BANK_ACCOUNT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<RefundBankAccount>,
}

/// A refund of an order or a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefundData {
    /// Upstream identifier (REF-XXXXXXXXXXXX)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<RefundAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Amount>,
    /// REQUESTED, COMPLETED or FAILED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// FULL or PARTIAL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunding_instrument: Option<RefundingInstrument>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bank_refund_response() -> serde_json::Value {
        json!({
            "id": "REF-1",
            "status": "REQUESTED",
            "method": "FULL",
            "fee": 0,
            "createdAt": "2016-02-19T11:46:29.000-02",
            "amount": { "total": 2000, "discounted": 0, "currency": "BRL" },
            "refundingInstrument": {
                "method": "BANK_ACCOUNT",
                "bankAccount": {
                    "bankNumber": "001",
                    "bankName": "BANCO DO BRASIL S.A.",
                    "agencyNumber": 4444444,
                    "agencyCheckNumber": 2,
                    "accountNumber": 1234,
                    "accountCheckNumber": 4,
                    "type": "CHECKING"
                }
            },
            "_links": {
                "order": { "href": "https://sandbox.moip.com.br/v2/orders/ORD-1", "title": "ORD-1" }
            }
        })
    }

    #[test]
    fn test_refund_with_bank_account() {
        let refund: RefundData = serde_json::from_value(bank_refund_response()).unwrap();
        let instrument = refund.refunding_instrument.unwrap();
        assert_eq!(instrument.method.as_deref(), Some("BANK_ACCOUNT"));

        let account = instrument.bank_account.unwrap();
        assert_eq!(account.bank_number, Some(BankCode::Text("001".into())));
        assert_eq!(account.agency_check_number, Some(BankCode::Number(2)));
        assert_eq!(account.account_check_number, Some(BankCode::Number(4)));
        assert_eq!(account.account_type.as_deref(), Some("CHECKING"));
    }

    #[test]
    fn test_refund_without_optional_groups() {
        let refund: RefundData =
            serde_json::from_value(json!({ "id": "REF-2", "status": "COMPLETED" })).unwrap();
        assert_eq!(refund.id.as_deref(), Some("REF-2"));
        assert!(refund.amount.is_none());
        assert!(refund.refunding_instrument.is_none());
        assert!(refund.links.is_none());
    }

    #[test]
    fn test_credit_card_instrument_has_no_bank_account() {
        let refund: RefundData = serde_json::from_value(json!({
            "id": "REF-3",
            "refundingInstrument": { "method": "CREDIT_CARD" }
        }))
        .unwrap();
        let instrument = refund.refunding_instrument.unwrap();
        assert_eq!(instrument.method.as_deref(), Some("CREDIT_CARD"));
        assert!(instrument.bank_account.is_none());
    }

    #[test]
    fn test_refund_document_round_trip() {
        let refund: RefundData = serde_json::from_value(bank_refund_response()).unwrap();
        let reparsed: RefundData =
            serde_json::from_str(&serde_json::to_string(&refund).unwrap()).unwrap();
        assert_eq!(reparsed, refund);
    }

    #[test]
    fn test_bank_code_display() {
        assert_eq!(BankCode::Text("001".into()).to_string(), "001");
        assert_eq!(BankCode::Number(341).to_string(), "341");
    }

    #[test]
    fn test_bank_code_parsing_keeps_leading_zeros() {
        assert_eq!("0001".parse::<BankCode>().unwrap(), BankCode::Text("0001".into()));
        assert_eq!("4444".parse::<BankCode>().unwrap(), BankCode::Number(4444));
        assert_eq!("12-X".parse::<BankCode>().unwrap(), BankCode::Text("12-X".into()));
    }

    #[test]
    fn test_decimal_fee_and_null_groups() {
        let refund: RefundData = serde_json::from_value(json!({
            "id": "REF-4",
            "fee": 1.25,
            "amount": { "total": 99.9, "currency": "BRL" },
            "refundingInstrument": { "method": "BANK_ACCOUNT", "bankAccount": null },
            "_links": null
        }))
        .unwrap();
        assert_eq!(refund.fee.unwrap().as_f64(), Some(1.25));
        assert_eq!(refund.amount.unwrap().total.unwrap().as_f64(), Some(99.9));
        assert!(refund.refunding_instrument.unwrap().bank_account.is_none());
        assert!(refund.links.is_none());
    }
}
