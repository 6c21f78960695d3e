//! Hypermedia links (`_links`) attached to resource documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single link relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Link relations keyed by name (`self`, `order`, `payment`, ...).
pub type Links = BTreeMap<String, Link>;
