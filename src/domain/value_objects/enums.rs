//! # Domain Enums
//!
//! Enumeration types for product and ranking concepts.
//!
//! - [`Availability`] - Stock flag derived from the discount
//! - [`SortKey`] - Field the candidate set is ranked by
//! - [`SortOrder`] - Ranking direction
//!
//! Query-string values are resolved leniently: an unknown `sortBy` becomes
//! [`SortKey::Unordered`] and any `order` other than `asc` becomes
//! [`SortOrder::Desc`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The value is not a known variant.
    #[error("invalid {0} value: {1:?}")]
    InvalidValue(&'static str, String),
}

/// Stock flag of a product.
///
/// # Examples
///
/// ```
/// use product_aggregator::domain::value_objects::enums::Availability;
///
/// assert_eq!(Availability::from_discount(12.5), Availability::Yes);
/// assert_eq!(Availability::from_discount(0.0), Availability::OutOfStock);
/// assert_eq!(Availability::OutOfStock.to_string(), "out-of-stock");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    /// The product is purchasable.
    #[serde(rename = "yes")]
    Yes,
    /// The product is out of stock.
    #[serde(rename = "out-of-stock")]
    OutOfStock,
}

impl Availability {
    /// Derives availability from a discount: `Yes` iff `discount > 0`.
    #[inline]
    #[must_use]
    pub fn from_discount(discount: f64) -> Self {
        if discount > 0.0 {
            Self::Yes
        } else {
            Self::OutOfStock
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::OutOfStock => "out-of-stock",
        }
    }

    /// Returns true if the product is available.
    #[inline]
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field used to rank the candidate set.
///
/// `Unordered` keeps the merge order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Numeric price.
    #[default]
    Price,
    /// Numeric rating.
    Rating,
    /// Numeric discount.
    Discount,
    /// Company code, compared lexicographically.
    Company,
    /// No reordering.
    Unordered,
}

impl SortKey {
    /// Resolves a `sortBy` query value; unknown values map to `Unordered`.
    ///
    /// # Examples
    ///
    /// ```
    /// use product_aggregator::domain::value_objects::enums::SortKey;
    ///
    /// assert_eq!(SortKey::from_query("rating"), SortKey::Rating);
    /// assert_eq!(SortKey::from_query("popularity"), SortKey::Unordered);
    /// ```
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        value.parse().unwrap_or(Self::Unordered)
    }

    /// Returns the query-string name of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Discount => "discount",
            Self::Company => "company",
            Self::Unordered => "unordered",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            "discount" => Ok(Self::Discount),
            "company" => Ok(Self::Company),
            _ => Err(ParseEnumError::InvalidValue("SortKey", s.to_string())),
        }
    }
}

/// Ranking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// Resolves an `order` query value.
    ///
    /// Only the exact value `asc` is ascending; everything else, including
    /// typos and the empty string, is descending.
    ///
    /// # Examples
    ///
    /// ```
    /// use product_aggregator::domain::value_objects::enums::SortOrder;
    ///
    /// assert_eq!(SortOrder::from_query("asc"), SortOrder::Asc);
    /// assert_eq!(SortOrder::from_query("desc"), SortOrder::Desc);
    /// assert_eq!(SortOrder::from_query("xyz"), SortOrder::Desc);
    /// ```
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        if value == "asc" { Self::Asc } else { Self::Desc }
    }

    /// Returns true if ascending.
    #[inline]
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// A `(sortBy, order)` pair chosen per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RankingKey {
    /// Field to rank by.
    pub sort_by: SortKey,
    /// Direction.
    pub order: SortOrder,
}

impl RankingKey {
    /// Creates a ranking key.
    #[must_use]
    pub const fn new(sort_by: SortKey, order: SortOrder) -> Self {
        Self { sort_by, order }
    }
}

impl fmt::Display for RankingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sort_by, self.order)
    }
}
