//! Shipping costs as pluggable strategies.
//!
//! [`ShippingCalculator`] is closed for modification: a new way to price a
//! parcel is a new [`Shipping`] implementation, not an edit here.

use crate::model::Product;
use tracing::debug;

/// Cost per unit of weight for [`StandardShipping`].
pub const STANDARD_RATE: f64 = 0.05;
/// Cost per unit of weight for [`ExpressShipping`].
pub const EXPRESS_RATE: f64 = 0.1;

/// A pricing strategy for shipping a given weight.
pub trait Shipping: Send + Sync {
    fn calculate_shipping_cost(&self, weight: f64) -> f64;
}

impl<S: Shipping + ?Sized> Shipping for Box<S> {
    fn calculate_shipping_cost(&self, weight: f64) -> f64 {
        (**self).calculate_shipping_cost(weight)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardShipping;

impl Shipping for StandardShipping {
    fn calculate_shipping_cost(&self, weight: f64) -> f64 {
        weight * STANDARD_RATE
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressShipping;

impl Shipping for ExpressShipping {
    fn calculate_shipping_cost(&self, weight: f64) -> f64 {
        weight * EXPRESS_RATE
    }
}

/// Prices products with whichever [`Shipping`] strategy it was built with.
pub struct ShippingCalculator<S: Shipping> {
    shipping: S,
}

impl<S: Shipping> ShippingCalculator<S> {
    pub fn new(shipping: S) -> Self {
        Self { shipping }
    }

    pub fn calculate_shipping_cost(&self, product: &Product) -> f64 {
        let cost = self.shipping.calculate_shipping_cost(product.weight);
        debug!(product = %product.name, weight = product.weight, cost, "Shipping cost");
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_standard_rate() {
        for weight in [0.0, 1.0, 10.0, 42.5] {
            assert!((StandardShipping.calculate_shipping_cost(weight) - weight * 0.05).abs() < EPSILON);
        }
    }

    #[test]
    fn test_express_rate() {
        assert_eq!(ExpressShipping.calculate_shipping_cost(10.0), 1.0);
        assert!((ExpressShipping.calculate_shipping_cost(42.5) - 4.25).abs() < EPSILON);
    }

    #[test]
    fn test_calculator_uses_product_weight() {
        let parcel = Product::new("Book", 20.0);
        assert_eq!(ShippingCalculator::new(StandardShipping).calculate_shipping_cost(&parcel), 1.0);
        assert_eq!(ShippingCalculator::new(ExpressShipping).calculate_shipping_cost(&parcel), 2.0);
    }

    #[test]
    fn test_calculator_accepts_boxed_strategy() {
        struct FlatRate(f64);

        impl Shipping for FlatRate {
            fn calculate_shipping_cost(&self, _weight: f64) -> f64 {
                self.0
            }
        }

        let strategies: Vec<Box<dyn Shipping>> = vec![Box::new(ExpressShipping), Box::new(FlatRate(3.0))];
        let parcel = Product::new("Lamp", 5.0);
        let costs: Vec<f64> = strategies
            .into_iter()
            .map(|s| ShippingCalculator::new(s).calculate_shipping_cost(&parcel))
            .collect();
        assert_eq!(costs, vec![0.5, 3.0]);
    }
}
