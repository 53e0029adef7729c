//! Shapes behind a single area contract.
//!
//! Every shape implements [`Shape`], so [`AreaCalculator`] works with any of
//! them and with shapes that do not exist yet. [`Square`] is its own type
//! rather than a [`Rectangle`] with coupled setters: anything accepting a
//! `&dyn Shape` can take either one, and resizing a rectangle can never
//! silently change its other side.

pub mod circle;
pub mod rectangle;
pub mod square;

pub use circle::*;
pub use rectangle::*;
pub use square::*;

use tracing::debug;

/// Anything with an area.
pub trait Shape {
    fn area(&self) -> f64;

    /// Short human-readable kind, used in logs.
    fn name(&self) -> &'static str;
}

/// Computes areas without knowing which concrete shapes exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_area(&self, shape: &dyn Shape) -> f64 {
        let area = shape.area();
        debug!(shape = shape.name(), area, "Area");
        area
    }

    /// Sum of the areas of a mixed collection of shapes.
    pub fn total_area(&self, shapes: &[Box<dyn Shape>]) -> f64 {
        shapes.iter().map(|s| self.calculate_area(s.as_ref())).sum()
    }
}
