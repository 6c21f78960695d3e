//! Orders (`/v2/orders`).

use tracing::instrument;

use moip_types::{Amount, Links, OrderData};

use crate::error::MoipError;
use crate::moip::Moip;
use crate::resource::Resource;
use crate::resources::{Refund, RefundOwner};

/// A sales order.
#[derive(Debug, Clone)]
pub struct Order {
    moip: Moip,
    data: OrderData,
}

impl Order {
    pub fn new(moip: Moip) -> Self {
        Self {
            moip,
            data: OrderData::default(),
        }
    }

    /// Gets an order by ID.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Order, MoipError> {
        self.get_by_path(&format!("/v2/orders/{}", id)).await
    }

    /// Returns a refund resource bound to this order.
    ///
    /// An order without an ID yields an unbound refund, which fails on use.
    pub fn refunds(&self) -> Refund {
        let refund = Refund::new(self.moip.clone());
        match self.id() {
            Some(id) => refund.with_owner(RefundOwner::Order(id.to_string())),
            None => refund,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }

    /// Merchant's own reference.
    pub fn own_id(&self) -> Option<&str> {
        self.data.own_id.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.data.status.as_deref()
    }

    pub fn amount_total(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.total.as_ref())
    }

    pub fn amount_paid(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.paid.as_ref())
    }

    pub fn amount_refunds(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.refunds.as_ref())
    }

    pub fn amount_fees(&self) -> Option<&Amount> {
        self.data.amount.as_ref().and_then(|a| a.fees.as_ref())
    }

    pub fn amount_currency(&self) -> Option<&str> {
        self.data.amount.as_ref().and_then(|a| a.currency.as_deref())
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

impl Resource for Order {
    type Document = OrderData;

    fn moip(&self) -> &Moip {
        &self.moip
    }

    fn document(&self) -> &OrderData {
        &self.data
    }

    fn with_document(&self, document: OrderData) -> Self {
        Self {
            moip: self.moip.clone(),
            data: document,
        }
    }
}
