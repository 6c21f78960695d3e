//! Customers (`/v2/customers`).

use tracing::instrument;

use moip_types::{CustomerData, Links, TaxDocument};

use crate::error::MoipError;
use crate::moip::Moip;
use crate::resource::Resource;

/// A buyer. Also used locally as the holder of a refund bank account.
#[derive(Debug, Clone)]
pub struct Customer {
    moip: Moip,
    data: CustomerData,
}

impl Customer {
    pub fn new(moip: Moip) -> Self {
        Self {
            moip,
            data: CustomerData::default(),
        }
    }

    /// Gets a customer by ID.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Customer, MoipError> {
        self.get_by_path(&format!("/v2/customers/{}", id)).await
    }

    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.data.fullname = Some(fullname.into());
        self
    }

    /// Sets the tax document, e.g. `("CPF", "22222222222")`.
    pub fn with_tax_document(
        mut self,
        document_type: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        self.data.tax_document = Some(TaxDocument {
            document_type: Some(document_type.into()),
            number: Some(number.into()),
        });
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }

    pub fn own_id(&self) -> Option<&str> {
        self.data.own_id.as_deref()
    }

    pub fn fullname(&self) -> Option<&str> {
        self.data.fullname.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.data.email.as_deref()
    }

    pub fn tax_document_type(&self) -> Option<&str> {
        self.data
            .tax_document
            .as_ref()
            .and_then(|t| t.document_type.as_deref())
    }

    pub fn tax_document_number(&self) -> Option<&str> {
        self.data
            .tax_document
            .as_ref()
            .and_then(|t| t.number.as_deref())
    }

    pub fn created_at(&self) -> Option<&str> {
        self.data.created_at.as_deref()
    }

    pub fn links(&self) -> Option<&Links> {
        self.data.links.as_ref()
    }
}

impl Resource for Customer {
    type Document = CustomerData;

    fn moip(&self) -> &Moip {
        &self.moip
    }

    fn document(&self) -> &CustomerData {
        &self.data
    }

    fn with_document(&self, document: CustomerData) -> Self {
        Self {
            moip: self.moip.clone(),
            data: document,
        }
    }
}
