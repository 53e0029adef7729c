use super::Shape;

/// A square stores a single side, so width and height cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn width(&self) -> f64 {
        self.side
    }

    pub fn height(&self) -> f64 {
        self.side
    }

    pub fn set_side(&mut self, side: f64) {
        self.side = side;
    }

    /// Resizes the whole square.
    pub fn set_width(&mut self, width: f64) {
        self.set_side(width);
    }

    /// Resizes the whole square.
    pub fn set_height(&mut self, height: f64) {
        self.set_side(height);
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn name(&self) -> &'static str {
        "square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_of_four() {
        assert_eq!(Square::new(4.0).area(), 16.0);
    }

    #[test]
    fn test_sides_stay_equal_after_mutation() {
        let mut square = Square::new(4.0);

        square.set_width(6.0);
        assert_eq!(square.side(), 6.0);
        assert_eq!(square.width(), square.height());
        assert_eq!(square.area(), 36.0);

        square.set_height(2.5);
        assert_eq!(square.width(), 2.5);
        assert_eq!(square.height(), 2.5);
        assert_eq!(square.area(), 6.25);
    }
}
