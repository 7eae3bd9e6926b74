//! Wire DTOs for the chatbot service boundary.
//!
//! DESIGN
//! ======
//! The bot service answers with a loosely shaped JSON object: product lists
//! arrive under `products`, `recommendations` or `results` depending on which
//! code path produced them, and product fields use more than one spelling.
//! Everything is normalized here so the widget only sees one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /api/chatbot/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BotRequestBody<'a> {
    pub message: &'a str,
    pub initial: bool,
}

/// Successful bot service response.
///
/// Product lists are decoded entry by entry: an entry that does not fit
/// `Product` is dropped instead of failing the whole reply.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BotReply {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default, deserialize_with = "lenient_products")]
    products: Option<Vec<Product>>,
    #[serde(default, deserialize_with = "lenient_products")]
    recommendations: Option<Vec<Product>>,
    #[serde(default, deserialize_with = "lenient_products")]
    results: Option<Vec<Product>>,
}

impl BotReply {
    /// Reply text, treating an empty string as absent.
    pub fn reply_text(&self) -> Option<&str> {
        self.reply.as_deref().filter(|text| !text.is_empty())
    }

    /// Consume the reply, returning the product list whichever field the
    /// service used.
    ///
    /// Non-empty lists win in the order `recommendations`, `results`,
    /// `products`. When all are empty or missing the result is empty.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        [self.recommendations, self.results, self.products]
            .into_iter()
            .flatten()
            .find(|list| !list.is_empty())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl BotReply {
    pub(crate) fn new(reply: Option<String>, products: Vec<Product>) -> Self {
        Self { reply, products: Some(products), recommendations: None, results: None }
    }

    pub(crate) fn with_recommendations(reply: Option<String>, recommendations: Vec<Product>) -> Self {
        Self { reply, products: None, recommendations: Some(recommendations), results: None }
    }
}

fn lenient_products<'de, D>(deserializer: D) -> Result<Option<Vec<Product>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value::<Product>(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error body returned with a non-success status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BotErrorBody {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A product preview as sent by the bot service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub seller: Option<Seller>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub faculty: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default, alias = "category")]
    pub category_name: Option<String>,
}

impl Product {
    /// Minimal product with only an id and a title.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            seller: None,
            university: None,
            faculty: None,
            price: None,
            condition: None,
            category_name: None,
        }
    }
}

/// Seller summary attached to a product.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(default, alias = "name")]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Product identifier; numeric from the classifieds API, string elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

/// Price as a JSON number or a decimal string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    /// Zero and blank prices are not worth showing.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0.0,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
