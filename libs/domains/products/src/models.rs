use rust_decimal::Decimal;
use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};

/// Largest price a NUMERIC(14,2) column can hold.
fn max_price() -> Decimal {
    Decimal::new(99_999_999_999_999, 2)
}

/// Price must be non-negative, in whole cents and fit the storage column.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("negative_price"));
    }
    if price.normalize().scale() > 2 {
        return Err(ValidationError::new("price_precision"));
    }
    if *price > max_price() {
        return Err(ValidationError::new("price_out_of_range"));
    }
    Ok(())
}

/// Product category, persisted and serialized by name (e.g. `"FOOD"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
    #[sea_orm(string_value = "CLOTHS")]
    Cloths,
    #[sea_orm(string_value = "FOOD")]
    Food,
    #[sea_orm(string_value = "HOUSEWARES")]
    Housewares,
    #[sea_orm(string_value = "AUTOMOTIVE")]
    Automotive,
    #[sea_orm(string_value = "TOOLS")]
    Tools,
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hat")]
    pub name: String,
    #[schema(example = "A red fedora")]
    pub description: String,
    /// Exact decimal, serialized as a string
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Product {
    pub fn new(id: i32, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            available: input.available,
            category: input.category,
        }
    }

    /// Overwrite every mutable field; `id` is kept.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.available = input.available;
        self.category = input.category;
    }
}

/// Request body for create and full-replacement update.
///
/// `id` in the body is ignored; the server assigns it on create and takes it
/// from the path on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Hat")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    pub available: bool,
    #[serde(default)]
    pub category: Category,
}

impl ProductInput {
    /// Pad the price to two decimal places so every store returns the same
    /// representation. Only called on validated input, where this is lossless.
    pub fn normalized(mut self) -> Self {
        let mut price = self.price.normalize();
        price.rescale(2);
        self.price = price;
        self
    }
}

/// Raw list query as sent by the client
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact, case-sensitive name match
    pub name: Option<String>,
    /// Category name, case-insensitive, e.g. `FOOD`
    pub category: Option<String>,
    /// `true` or `false` (case-insensitive)
    pub available: Option<String>,
    /// Exact decimal price, e.g. `12.50`
    pub price: Option<String>,
}

/// Parsed list filters. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub available: Option<bool>,
    pub price: Option<Decimal>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.name.as_ref().is_none_or(|name| &product.name == name)
            && self.category.is_none_or(|category| product.category == category)
            && self.available.is_none_or(|available| product.available == available)
            && self.price.is_none_or(|price| product.price == price)
    }
}

impl TryFrom<ProductQuery> for ProductFilter {
    type Error = ProductError;

    fn try_from(query: ProductQuery) -> ProductResult<Self> {
        let category = query
            .category
            .map(|raw| {
                Category::from_str(&raw.trim().to_ascii_uppercase()).map_err(|_| {
                    ProductError::InvalidFilter(format!("Unknown category '{}'", raw))
                })
            })
            .transpose()?;

        let available = query
            .available
            .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(true),
                "false" | "no" | "0" => Ok(false),
                _ => Err(ProductError::InvalidFilter(format!(
                    "Invalid value '{}' for 'available': expected true or false",
                    raw
                ))),
            })
            .transpose()?;

        let price = query
            .price
            .map(|raw| {
                Decimal::from_str(raw.trim()).map_err(|_| {
                    ProductError::InvalidFilter(format!("Invalid price '{}'", raw))
                })
            })
            .transpose()?;

        Ok(Self {
            name: query.name,
            category,
            available,
            price,
        })
    }
}
