//! Ledger entries (`/v2/entries`).

use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use moip_types::{Amount, EntryData};

use crate::error::MoipError;
use crate::moip::Moip;
use crate::resource::{Resource, get_if_set_in};
use crate::resources::Payment;

/// A ledger entry. Read-only: obtained through [`Entry::get`].
#[derive(Debug, Clone)]
pub struct Entry {
    moip: Moip,
    data: EntryData,
}

impl Entry {
    pub fn new(moip: Moip) -> Self {
        Self {
            moip,
            data: EntryData::default(),
        }
    }

    /// Gets an entry by the ID of the event that generated it.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Entry, MoipError> {
        self.get_by_path(&format!("/v2/entries/{}", id)).await
    }

    pub fn id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }

    /// SCHEDULED or SETTLED.
    pub fn status(&self) -> Option<&str> {
        self.data.status.as_deref()
    }

    pub fn operation(&self) -> Option<&str> {
        self.data.operation.as_deref()
    }

    /// Gross value in smallest currency unit.
    pub fn amount_total(&self) -> Option<&Amount> {
        self.data.amount.total.as_ref()
    }

    pub fn amount_fee(&self) -> Option<&Amount> {
        self.data.amount.fee.as_ref()
    }

    /// Net value in smallest currency unit.
    pub fn amount_liquid(&self) -> Option<&Amount> {
        self.data.amount.liquid.as_ref()
    }

    pub fn amount_currency(&self) -> Option<&str> {
        self.data.amount.currency.as_deref()
    }

    pub fn details(&self) -> Option<&Value> {
        self.data.details.as_ref()
    }

    /// Payment the entry was generated from.
    pub fn parent_payments(&self) -> Option<Payment> {
        self.data
            .parent_payments
            .clone()
            .map(|data| Payment::new(self.moip.clone()).with_document(data))
    }

    /// Expected settlement date.
    pub fn scheduled_for(&self) -> Option<&str> {
        self.data.scheduled_for.as_deref()
    }

    pub fn settled_at(&self) -> Option<&str> {
        self.data.settled_at.as_deref()
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.data.updated_at.as_deref()
    }

    pub fn created_at(&self) -> Option<&str> {
        self.data.created_at.as_deref()
    }
}

impl Resource for Entry {
    type Document = EntryData;

    fn moip(&self) -> &Moip {
        &self.moip
    }

    fn document(&self) -> &EntryData {
        &self.data
    }

    fn with_document(&self, document: EntryData) -> Self {
        Self {
            moip: self.moip.clone(),
            data: document,
        }
    }

    /// Upstream nests the originating payment under `parent.payments`;
    /// it is populated through the payment resource and kept as
    /// `parentPayments` in the document.
    fn populate(&self, response: &Value) -> Result<Self, MoipError> {
        let mut data = EntryData::deserialize(response)?;

        if let Some(payments) =
            get_if_set_in(response, "parent").and_then(|parent| get_if_set_in(parent, "payments"))
        {
            let payment = Payment::new(self.moip.clone()).populate(payments)?;
            data.parent_payments = Some(payment.document().clone());
        }

        Ok(self.with_document(data))
    }
}
