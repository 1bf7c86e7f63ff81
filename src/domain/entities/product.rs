//! # Product Entity
//!
//! Upstream product records and their enriched form.
//!
//! A [`RawProduct`] is whatever an upstream catalog returned. A [`Product`]
//! is only obtainable through [`Product::enrich`], which stamps the
//! identifier and source company and derives availability, so every
//! `Product` upholds `availability == Yes` iff `discount > 0`.
//!
//! # Examples
//!
//! ```
//! use product_aggregator::domain::entities::product::{Product, RawProduct};
//! use product_aggregator::domain::value_objects::{Availability, CompanyId, ProductId};
//!
//! let raw = RawProduct::new("Laptop 1", 2236.0, 4.7, 63.0);
//! let product = Product::enrich(raw, ProductId::from_u128(1), CompanyId::new("AMZ"));
//!
//! assert_eq!(product.company().as_str(), "AMZ");
//! assert_eq!(product.availability(), Availability::Yes);
//! ```

use crate::domain::value_objects::{Availability, CompanyId, ProductId};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A product record as supplied by an upstream catalog.
///
/// Every field is optional on the wire; a missing or `null` field takes
/// its zero value. Values are not validated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProduct {
    /// Upstream identifier (discarded during enrichment).
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name.
    #[serde(rename = "productName", deserialize_with = "null_as_default")]
    pub name: String,
    /// Category as reported upstream.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// Company as reported upstream (overwritten during enrichment).
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    /// Price.
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// Rating.
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
    /// Discount.
    #[serde(deserialize_with = "null_as_default")]
    pub discount: f64,
    /// Availability as reported upstream (recomputed during enrichment).
    #[serde(deserialize_with = "null_as_default")]
    pub availability: String,
    /// Free-text description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Deserializes `null` as `T::default()`.
///
/// # Errors
///
/// Fails only if a non-null value is not a valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawProduct {
    /// Creates a raw product with the ranking-relevant fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, rating: f64, discount: f64) -> Self {
        Self {
            name: name.into(),
            price,
            rating,
            discount,
            ..Default::default()
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An enriched product, ready to be ranked and returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    #[serde(rename = "productName")]
    name: String,
    category: String,
    company: CompanyId,
    price: f64,
    rating: f64,
    discount: f64,
    availability: Availability,
    description: String,
}

impl Product {
    /// Builds a product from an upstream record.
    ///
    /// The upstream `id`, `company` and `availability` are replaced.
    #[must_use]
    pub fn enrich(raw: RawProduct, id: ProductId, company: CompanyId) -> Self {
        Self {
            id,
            name: raw.name,
            category: raw.category,
            company,
            price: raw.price,
            rating: raw.rating,
            availability: Availability::from_discount(raw.discount),
            discount: raw.discount,
            description: raw.description,
        }
    }

    /// Returns the product ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the source company.
    #[inline]
    #[must_use]
    pub fn company(&self) -> &CompanyId {
        &self.company
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the rating.
    #[inline]
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Returns the discount.
    #[inline]
    #[must_use]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Returns the derived availability.
    #[inline]
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Returns the description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product({} {} from {} @ {:.2})",
            self.id, self.name, self.company, self.price
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_product_decodes_partial_records() {
        let raw: RawProduct = serde_json::from_value(json!({
            "productName": "Laptop 3",
            "price": 9102,
            "rating": 4.46,
            "discount": 0,
            "availability": "yes"
        }))
        .unwrap();

        assert_eq!(raw.name, "Laptop 3");
        assert!((raw.price - 9102.0).abs() < f64::EPSILON);
        assert!(raw.company.is_empty());
        assert!(raw.description.is_empty());
    }

    #[test]
    fn null_fields_take_zero_values() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": null,
            "productName": "a",
            "price": 10,
            "rating": 4,
            "discount": null,
            "description": null
        }))
        .unwrap();

        assert_eq!(raw.name, "a");
        assert!(raw.id.is_empty());
        assert!(raw.description.is_empty());
        assert!(raw.discount.abs() < f64::EPSILON);
    }

    #[test]
    fn wrongly_typed_field_is_still_rejected() {
        let result = serde_json::from_value::<RawProduct>(json!({"price": "cheap"}));
        assert!(result.is_err());
    }

    #[test]
    fn enrich_overwrites_upstream_identity_and_availability() {
        let mut raw = RawProduct::new("Phone", 100.0, 3.0, 0.0);
        raw.id = "upstream-id".to_string();
        raw.company = "SOMEONE_ELSE".to_string();
        raw.availability = "yes".to_string();

        let product = Product::enrich(raw, ProductId::from_u128(9), CompanyId::new("SP"));

        assert_eq!(product.id(), ProductId::from_u128(9));
        assert_eq!(product.company().as_str(), "SP");
        assert_eq!(product.availability(), Availability::OutOfStock);
    }

    #[test]
    fn product_serializes_with_wire_field_names() {
        let raw = RawProduct::new("TV", 499.99, 4.1, 10.0)
            .with_category("TV")
            .with_description("55 inch");
        let product = Product::enrich(raw, ProductId::from_u128(2), CompanyId::new("HYN"));

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000002");
        assert_eq!(value["productName"], "TV");
        assert_eq!(value["category"], "TV");
        assert_eq!(value["company"], "HYN");
        assert_eq!(value["availability"], "yes");
        assert_eq!(value["description"], "55 inch");
        assert_eq!(value["discount"], 10.0);
    }
}
