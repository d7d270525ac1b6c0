use std::fmt;

use crate::domain::user::models::Username;
use crate::product::errors::PriceError;
use crate::product::errors::ProductNameError;

/// Product unique identifier value object.
///
/// Assigned monotonically by the catalog store; an id is never reused
/// within a process lifetime, even after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Get the raw id value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name value type. Only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    /// Create a new product name.
    ///
    /// # Errors
    /// * `Empty` - Input is empty or whitespace-only
    pub fn new(name: String) -> Result<Self, ProductNameError> {
        if name.trim().is_empty() {
            return Err(ProductNameError::Empty);
        }
        Ok(Self(name))
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-negative, finite price value type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    /// * `NotFinite` - NaN or infinite input
    /// * `Negative` - Input below zero
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if value < 0.0 {
            return Err(PriceError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Get the raw price value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Product aggregate entity.
///
/// `seller` records the creating identity; any seller-role identity may
/// mutate or delete the product regardless of who created it.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    pub seller: Username,
}

/// A product accepted into the catalog but not yet assigned an id.
#[derive(Debug)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: Price,
    pub seller: Username,
}

/// Command to add a product to the catalog.
#[derive(Debug)]
pub struct CreateProductCommand {
    pub name: ProductName,
    pub price: Price,
}

impl CreateProductCommand {
    pub fn new(name: ProductName, price: Price) -> Self {
        Self { name, price }
    }
}

/// Command to change an existing product.
///
/// All fields are optional to support partial updates; only provided
/// fields are applied.
#[derive(Debug)]
pub struct UpdateProductCommand {
    pub name: Option<ProductName>,
    pub price: Option<Price>,
}
