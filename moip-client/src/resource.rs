//! Base contract shared by every API resource.
//!
//! A resource pairs the client context with a typed document. The document's
//! `Default` is the freshly initialized state: every group empty, every field
//! unset. Responses are never written into an existing resource; `populate`
//! builds a new one from the prototype's configuration plus the parsed
//! fields, so a value already handed to a caller is never changed by a
//! later fetch.

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::MoipError;
use crate::http::{APPLICATION_JSON, CONTENT_TYPE, HttpMethod};
use crate::moip::Moip;

/// Returns `document[key]` if present and not `null`.
pub fn get_if_set_in<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    document.get(key).filter(|value| !value.is_null())
}

/// An API resource backed by a typed document.
#[async_trait]
pub trait Resource: Clone + Send + Sync + Sized {
    /// Typed JSON document holding the resource state.
    type Document: Serialize + DeserializeOwned + Default + Clone + Send + Sync;

    /// Returns the client context.
    fn moip(&self) -> &Moip;

    /// Returns the current document.
    fn document(&self) -> &Self::Document;

    /// Creates a new instance with this one's configuration and `document`.
    fn with_document(&self, document: Self::Document) -> Self;

    /// Maps a parsed response onto a new instance.
    ///
    /// Groups missing from the response stay unset.
    fn populate(&self, response: &Value) -> Result<Self, MoipError> {
        let document = Self::Document::deserialize(response)?;
        Ok(self.with_document(document))
    }

    /// Returns the document as JSON.
    fn to_json(&self) -> Result<Value, MoipError> {
        Ok(serde_json::to_value(self.document())?)
    }

    /// Returns a top-level field of the document, or `None` if unset.
    fn get_if_set(&self, key: &str) -> Option<Value> {
        let document = serde_json::to_value(self.document()).ok()?;
        get_if_set_in(&document, key).cloned()
    }

    /// Fetches `path` and populates a new instance from the response.
    async fn get_by_path(&self, path: &str) -> Result<Self, MoipError> {
        let mut connection = self.moip().create_connection();
        connection.add_header(CONTENT_TYPE, APPLICATION_JSON);

        let content = connection
            .execute(path, HttpMethod::Get)
            .await?
            .ensure_ok()?;
        let response: Value = serde_json::from_str(&content)?;
        self.populate(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_if_set_in_present() {
        let doc = json!({ "id": "ENT-1" });
        assert_eq!(get_if_set_in(&doc, "id"), Some(&json!("ENT-1")));
    }

    #[test]
    fn test_get_if_set_in_missing_or_null() {
        let doc = json!({ "details": null });
        assert_eq!(get_if_set_in(&doc, "details"), None);
        assert_eq!(get_if_set_in(&doc, "amount"), None);
    }

    #[test]
    fn test_get_if_set_in_non_object() {
        assert_eq!(get_if_set_in(&json!([1, 2]), "id"), None);
    }
}
