//! The listing envelope and the product record it carries.
//!
//! `Listing` mirrors the paginated JSON envelope returned by the products API.
//! Only [`Listing::items`] is consumed by the controller; the pagination
//! fields are decoded and kept so the envelope round-trips unchanged.
//!
//! ## For contributors
//!
//! The JSON field for the item sequence is `products`.  It is renamed to
//! `items` on the Rust side because nothing downstream cares that the entries
//! happen to be products.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of the product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Page size requested from the server.
    pub limit: u64,
    /// Entries on this page, in server order.
    #[serde(rename = "products")]
    pub items: Vec<Product>,
    /// Offset of the first entry on this page.
    pub skip: u64,
    /// Total number of entries available on the server.
    pub total: u64,
}

/// A single product/photo entry.
///
/// Kept as the JSON object the server sent, so re-encoding reproduces it
/// exactly: integer prices stay integers and explicit `null`s stay `null`.
/// The controller never looks inside; the accessors exist for the
/// presentation layer and tolerate missing or mistyped fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    fields: Map<String, Value>,
}

impl Product {
    pub fn id(&self) -> Option<u64> {
        self.fields.get("id").and_then(Value::as_u64)
    }

    /// Empty when the server sent no title or a `null` one.
    pub fn title(&self) -> &str {
        self.str_field("title").unwrap_or_default()
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    pub fn price(&self) -> Option<f64> {
        self.fields.get("price").and_then(Value::as_f64)
    }

    /// URL of the product photo thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.str_field("thumbnail")
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

#[cfg(test)]
impl Product {
    /// Shorthand for a product with only an id and a title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), Value::from(id));
        fields.insert("title".into(), Value::from(title.into()));
        Self { fields }
    }

    /// Builder-style setter for extra fields in tests.
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
