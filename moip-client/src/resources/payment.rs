//! Payments (`/v2/payments`).

use tracing::instrument;

use moip_types::{Amount, Links, PaymentData};

use crate::error::MoipError;
use crate::moip::Moip;
use crate::resource::Resource;
use crate::resources::{Refund, RefundOwner};

/// A payment made against an order.
#[derive(Debug, Clone)]
pub struct Payment {
    moip: Moip,
    data: PaymentData,
}

impl Payment {
    pub fn new(moip: Moip) -> Self {
        Self {
            moip,
            data: PaymentData::default(),
        }
    }

    /// Gets a payment by ID.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Payment, MoipError> {
        self.get_by_path(&format!("/v2/payments/{}", id)).await
    }

    /// Returns a refund resource bound to this payment.
    ///
    /// A payment without an ID yields an unbound refund, which fails on use.
    pub fn refunds(&self) -> Refund {
        let refund = Refund::new(self.moip.clone());
        match self.id() {
            Some(id) => refund.with_owner(RefundOwner::Payment(id.to_string())),
            None => refund,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.data.status.as_deref()
    }

    pub fn amount_total(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.total.as_ref())
    }

    pub fn amount_fees(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.fees.as_ref())
    }

    pub fn amount_refunds(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.refunds.as_ref())
    }

    pub fn amount_liquid(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.liquid.as_ref())
    }

    pub fn amount_currency(&self) -> Option<&str> {
        self.data.amount.as_ref().and_then(|a| a.currency.as_deref())
    }

    pub fn installment_count(&self) -> Option<i64> {
        self.data.installment_count
    }

    pub fn statement_descriptor(&self) -> Option<&str> {
        self.data.statement_descriptor.as_deref()
    }

    /// CREDIT_CARD, BOLETO, ONLINE_BANK_DEBIT, ...
    pub fn funding_instrument_method(&self) -> Option<&str> {
        self.data
            .funding_instrument
            .as_ref()
            .and_then(|f| f.method.as_deref())
    }

    pub fn created_at(&self) -> Option<&str> {
        self.data.created_at.as_deref()
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.data.updated_at.as_deref()
    }

    pub fn links(&self) -> Option<&Links> {
        self.data.links.as_ref()
    }
}

impl Resource for Payment {
    type Document = PaymentData;

    fn moip(&self) -> &Moip {
        &self.moip
    }

    fn document(&self) -> &PaymentData {
        &self.data
    }

    fn with_document(&self, document: PaymentData) -> Self {
        Self {
            moip: self.moip.clone(),
            data: document,
        }
    }
}
