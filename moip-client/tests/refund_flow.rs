//! Integration tests for the refund flow through the public client API.
//!
//! A scripted transport stands in for the network: it answers each path
//! with a canned response and records what was sent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use moip_client::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, Moip, MoipError, Refund, Resource,
};
use moip_types::Amount;

/// Transport answering by `(method, path)`.
struct ScriptedHttp {
    routes: HashMap<(String, String), (u16, String)>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttp {
    fn new(routes: Vec<(HttpMethod, &str, u16, serde_json::Value)>) -> Arc<Self> {
        Arc::new(Self {
            routes: routes
                .into_iter()
                .map(|(method, path, status, body)| {
                    ((method.to_string(), path.to_string()), (status, body.to_string()))
                })
                .collect(),
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MoipError> {
        let key = (request.method.to_string(), request.path.clone());
        self.sent.lock().unwrap().push(request);
        let (status_code, content) = self
            .routes
            .get(&key)
            .cloned()
            .unwrap_or((404, String::new()));
        let status_message = match status_code {
            200 => "OK",
            404 => "Not Found",
            _ => "Error",
        };
        Ok(HttpResponse {
            status_code,
            status_message: status_message.to_string(),
            content,
        })
    }
}

#[tokio::test]
async fn test_refund_payment_found_through_entry() {
    let http = ScriptedHttp::new(vec![
        (
            HttpMethod::Get,
            "/v2/entries/ENT-1",
            200,
            json!({ "id": "ENT-1", "parent": { "payments": { "id": "PAY-9" } } }),
        ),
        (
            HttpMethod::Post,
            "/v2/payments/PAY-9/refunds",
            200,
            json!({ "id": "REF-1", "status": "REQUESTED", "amount": { "total": 300 } }),
        ),
        (
            HttpMethod::Get,
            "/v2/payments/PAY-9/refunds",
            200,
            json!({ "refunds": [ { "id": "REF-0" }, { "id": "REF-1" } ] }),
        ),
    ]);
    let moip = Moip::with_http_client(http.clone());

    let entry = moip.entries().get("ENT-1").await.unwrap();
    let payment = entry.parent_payments().unwrap();
    let refunds = payment.refunds();

    let created = refunds.credit_card_partial(300).await.unwrap();
    assert_eq!(created.id(), Some("REF-1"));
    assert_eq!(created.amount_total(), Some(&Amount::from(300)));

    let ids: Vec<String> = refunds
        .list()
        .await
        .unwrap()
        .filter_map(|r| r.id().map(String::from))
        .collect();
    assert_eq!(ids, vec!["REF-0", "REF-1"]);

    // The prototype used for both calls was never populated.
    assert!(refunds.id().is_none());
    assert_eq!(http.sent().len(), 3);
}

#[tokio::test]
async fn test_unknown_entry_reports_status() {
    let http = ScriptedHttp::new(vec![]);
    let moip = Moip::with_http_client(http);

    let err = moip.entries().get("ENT-404").await.unwrap_err();
    match err {
        MoipError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_listed_refunds_keep_document_fields() {
    let http = ScriptedHttp::new(vec![(
        HttpMethod::Get,
        "/v2/orders/ORD-1/refunds",
        200,
        json!({ "refunds": [ {
            "id": "REF-1",
            "fee": 15,
            "refundingInstrument": {
                "method": "BANK_ACCOUNT",
                "bankAccount": { "bankNumber": 341, "bankName": "ITAU", "type": "SAVING" }
            },
            "_links": { "self": { "href": "https://sandbox.moip.com.br/v2/refunds/REF-1" } }
        } ] }),
    )]);
    let moip = Moip::with_http_client(http);
    let refund: Refund = moip
        .refunds()
        .with_owner(moip_client::RefundOwner::Order("ORD-1".into()))
        .list()
        .await
        .unwrap()
        .next()
        .unwrap();

    assert_eq!(refund.fee(), Some(&Amount::from(15)));
    let account = refund.refunding_bank_account().unwrap();
    assert_eq!(account.bank_name.as_deref(), Some("ITAU"));
    assert_eq!(account.bank_number.as_ref().unwrap().to_string(), "341");
    assert!(refund.links().unwrap().contains_key("self"));

    let json = refund.to_json().unwrap();
    assert_eq!(json["refundingInstrument"]["bankAccount"]["bankNumber"], json!(341));
    assert!(json.get("amount").is_none());
}
