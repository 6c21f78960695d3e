//! Refunds (`/v2/orders/{id}/refunds`, `/v2/payments/{id}/refunds`).

use serde_json::Value;
use tracing::{debug, instrument};

use moip_types::{
    Amount, BankAccountRequest, BankAccountType, BankCode, HolderRequest, Links,
    RefundBankAccount, RefundData, RefundList, RefundRequest, TaxDocument,
};

use crate::error::MoipError;
use crate::http::{APPLICATION_JSON, CONTENT_LENGTH, CONTENT_TYPE, HttpMethod};
use crate::moip::Moip;
use crate::resource::Resource;
use crate::resources::Customer;

/// The resource a refund belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefundOwner {
    /// Refund of an order (ORD-XXXXXXXXXXXX)
    Order(String),
    /// Refund of a single payment (PAY-XXXXXXXXXXXX)
    Payment(String),
}

impl RefundOwner {
    /// Returns the refund collection path of the owner.
    pub fn refunds_path(&self) -> String {
        match self {
            RefundOwner::Order(id) => format!("/v2/orders/{}/refunds", id),
            RefundOwner::Payment(id) => format!("/v2/payments/{}/refunds", id),
        }
    }
}

/// A refund of an order or a payment.
///
/// Obtain one bound to its owner through [`Order::refunds`](crate::Order::refunds),
/// [`Payment::refunds`](crate::Payment::refunds) or [`Refund::with_owner`]; an
/// unbound refund fails every request with [`MoipError::MissingRefundTarget`].
#[derive(Debug, Clone)]
pub struct Refund {
    moip: Moip,
    owner: Option<RefundOwner>,
    data: RefundData,
}

impl Refund {
    pub fn new(moip: Moip) -> Self {
        Self {
            moip,
            owner: None,
            data: RefundData::default(),
        }
    }

    /// Binds the refund to an order or payment.
    pub fn with_owner(mut self, owner: RefundOwner) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn owner(&self) -> Option<&RefundOwner> {
        self.owner.as_ref()
    }

    fn refunds_path(&self) -> Result<String, MoipError> {
        self.owner
            .as_ref()
            .map(RefundOwner::refunds_path)
            .ok_or(MoipError::MissingRefundTarget)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Creation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a refund. `None` sends `{}`: a full refund to the original card.
    #[instrument(skip(self, request), fields(owner = ?self.owner))]
    pub async fn execute(&self, request: Option<&RefundRequest>) -> Result<Refund, MoipError> {
        let path = self.refunds_path()?;
        let body = match request {
            Some(request) => serde_json::to_string(request)?,
            None => "{}".to_string(),
        };

        let mut connection = self.moip.create_connection();
        connection
            .add_header(CONTENT_TYPE, APPLICATION_JSON)
            .add_header(CONTENT_LENGTH, body.len().to_string())
            .set_request_body(body);

        let content = connection
            .execute(&path, HttpMethod::Post)
            .await?
            .ensure_ok()?;
        let response: Value = serde_json::from_str(&content)?;
        self.populate(&response)
    }

    /// Builds the payload of a refund sent to a bank account owned by `holder`.
    ///
    /// Agency and account codes are sent as given, so `BankCode::Text("0001")`
    /// keeps its leading zeros.
    #[allow(clippy::too_many_arguments)]
    pub fn bank_account(
        account_type: BankAccountType,
        bank_number: impl Into<String>,
        agency_number: BankCode,
        agency_check_number: BankCode,
        account_number: BankCode,
        account_check_number: BankCode,
        holder: &Customer,
    ) -> RefundRequest {
        RefundRequest::to_bank_account(BankAccountRequest {
            account_type,
            bank_number: bank_number.into(),
            agency_number,
            agency_check_number,
            account_number,
            account_check_number,
            holder: HolderRequest {
                fullname: holder.fullname().map(String::from),
                tax_document: TaxDocument {
                    document_type: holder.tax_document_type().map(String::from),
                    number: holder.tax_document_number().map(String::from),
                },
            },
        })
    }

    /// Refunds the full amount to a bank account.
    #[allow(clippy::too_many_arguments)]
    pub async fn bank_account_full(
        &self,
        account_type: BankAccountType,
        bank_number: impl Into<String>,
        agency_number: BankCode,
        agency_check_number: BankCode,
        account_number: BankCode,
        account_check_number: BankCode,
        holder: &Customer,
    ) -> Result<Refund, MoipError> {
        let request = Self::bank_account(
            account_type,
            bank_number,
            agency_number,
            agency_check_number,
            account_number,
            account_check_number,
            holder,
        );
        self.execute(Some(&request)).await
    }

    /// Refunds `amount` to a bank account.
    #[allow(clippy::too_many_arguments)]
    pub async fn bank_account_partial(
        &self,
        amount: impl Into<Amount>,
        account_type: BankAccountType,
        bank_number: impl Into<String>,
        agency_number: BankCode,
        agency_check_number: BankCode,
        account_number: BankCode,
        account_check_number: BankCode,
        holder: &Customer,
    ) -> Result<Refund, MoipError> {
        let request = Self::bank_account(
            account_type,
            bank_number,
            agency_number,
            agency_check_number,
            account_number,
            account_check_number,
            holder,
        )
        .with_amount(amount);
        self.execute(Some(&request)).await
    }

    /// Refunds the full amount to the original credit card.
    pub async fn credit_card_full(&self) -> Result<Refund, MoipError> {
        self.execute(None).await
    }

    /// Refunds `amount` to the original credit card.
    pub async fn credit_card_partial(&self, amount: impl Into<Amount>) -> Result<Refund, MoipError> {
        self.execute(Some(&RefundRequest::partial(amount))).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists the owner's refunds in the order the API returns them.
    ///
    /// The iterator is one-shot; list again to re-read.
    #[instrument(skip(self), fields(owner = ?self.owner))]
    pub async fn list(&self) -> Result<std::vec::IntoIter<Refund>, MoipError> {
        let path = self.refunds_path()?;

        let mut connection = self.moip.create_connection();
        connection.add_header(CONTENT_TYPE, APPLICATION_JSON);

        let content = connection
            .execute(&path, HttpMethod::Get)
            .await?
            .ensure_ok()?;
        let envelope: RefundList = serde_json::from_str(&content)?;
        let refunds = envelope
            .refunds
            .iter()
            .map(|refund| self.populate(refund))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = refunds.len(), "listed refunds");
        Ok(refunds.into_iter())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }

    pub fn amount_total(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.total.as_ref())
    }

    pub fn amount_discounted(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.discounted.as_ref())
    }

    pub fn amount_currency(&self) -> Option<&str> {
        self.data.amount.as_ref().and_then(|a| a.currency.as_deref())
    }

    pub fn fee(&self) -> Option<&Amount> {
        self.data.fee.as_ref()
    }

    /// REQUESTED, COMPLETED or FAILED.
    pub fn status(&self) -> Option<&str> {
        self.data.status.as_deref()
    }

    /// FULL or PARTIAL.
    pub fn method(&self) -> Option<&str> {
        self.data.method.as_deref()
    }

    pub fn created_at(&self) -> Option<&str> {
        self.data.created_at.as_deref()
    }

    /// CREDIT_CARD or BANK_ACCOUNT.
    pub fn refunding_instrument_method(&self) -> Option<&str> {
        self.data
            .refunding_instrument
            .as_ref()
            .and_then(|r| r.method.as_deref())
    }

    /// Bank account funds were returned to, for bank-transfer refunds.
    pub fn refunding_bank_account(&self) -> Option<&RefundBankAccount> {
        self.data
            .refunding_instrument
            .as_ref()
            .and_then(|r| r.bank_account.as_ref())
    }

    pub fn links(&self) -> Option<&Links> {
        self.data.links.as_ref()
    }
}

impl Resource for Refund {
    type Document = RefundData;

    fn moip(&self) -> &Moip {
        &self.moip
    }

    fn document(&self) -> &RefundData {
        &self.data
    }

    fn with_document(&self, document: RefundData) -> Self {
        Self {
            moip: self.moip.clone(),
            owner: self.owner.clone(),
            data: document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_paths() {
        assert_eq!(
            RefundOwner::Order("ORD-1".into()).refunds_path(),
            "/v2/orders/ORD-1/refunds"
        );
        assert_eq!(
            RefundOwner::Payment("PAY-1".into()).refunds_path(),
            "/v2/payments/PAY-1/refunds"
        );
    }

    #[test]
    fn test_bank_account_payload_takes_holder_from_customer() {
        let holder = Customer::new(Moip::new("http://localhost"))
            .with_fullname("Jose Silva")
            .with_tax_document("CPF", "22222222222");
        let req = Refund::bank_account(
            BankAccountType::Saving,
            "341",
            BankCode::Text("0001".into()),
            BankCode::Number(2),
            BankCode::Number(3),
            BankCode::Number(4),
            &holder,
        );

        let account = req.bank_account.unwrap();
        assert_eq!(req.refunding_instrument.as_deref(), Some("BANK_ACCOUNT"));
        assert_eq!(account.account_type, BankAccountType::Saving);
        assert_eq!(account.agency_number, BankCode::Text("0001".into()));
        assert_eq!(account.holder.fullname.as_deref(), Some("Jose Silva"));
        assert_eq!(account.holder.tax_document.number.as_deref(), Some("22222222222"));
        assert!(req.amount.is_none());
    }
}
