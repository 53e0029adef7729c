use serde::{Deserialize, Serialize};

/// Represents a product to be shipped.
///
/// See [`ShippingCalculator`](crate::shipping::ShippingCalculator) for how its
/// weight is priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub weight: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `weight` - Shipping weight
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}
