//! Mapping hand angles onto the polygon catalog.

use crate::angle::{Angle, FULL_TURN};

/// Integer encoding for "no polygon".
pub const NO_SHAPE: i8 = -1;

/// Polygons in the shape catalog, ordered by side count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Triangle,
    Quadrilateral,
    Pentagon,
    Hexagon,
}

impl Shape {
    pub const ALL: [Shape; 4] = [
        Shape::Triangle,
        Shape::Quadrilateral,
        Shape::Pentagon,
        Shape::Hexagon,
    ];

    /// Catalog index (0-3).
    pub fn index(self) -> usize {
        match self {
            Shape::Triangle => 0,
            Shape::Quadrilateral => 1,
            Shape::Pentagon => 2,
            Shape::Hexagon => 3,
        }
    }

    /// Look up a catalog entry by index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number of vertices.
    pub fn sides(self) -> usize {
        self.index() + 3
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Quadrilateral => "quadrilateral",
            Shape::Pentagon => "pentagon",
            Shape::Hexagon => "hexagon",
        }
    }
}

/// Pick the polygon for an angle.
///
/// The circle is cut into six 60 degree sectors which produce side counts
/// 3 through 8. Counts of 7 and up have no catalog entry, so the last two
/// sectors (240 to 360 degrees) select nothing.
pub fn angle_to_shape(angle: Angle) -> Option<Shape> {
    let sides = (angle.units() * 12 / FULL_TURN) / 2 + 3;
    if sides >= 7 {
        return None;
    }
    Shape::from_index((sides - 3) as usize)
}

/// Integer form of [`angle_to_shape`]: 0-3, or [`NO_SHAPE`].
pub fn shape_index(angle: Angle) -> i8 {
    angle_to_shape(angle).map_or(NO_SHAPE, |shape| shape.index() as i8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// First angle of the given sixth of the circle.
    fn sector_start(sector: u32) -> Angle {
        Angle::from((FULL_TURN * sector).div_ceil(6))
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(angle_to_shape(sector_start(0)), Some(Shape::Triangle));
        assert_eq!(angle_to_shape(sector_start(1)), Some(Shape::Quadrilateral));
        assert_eq!(angle_to_shape(sector_start(2)), Some(Shape::Pentagon));
        assert_eq!(angle_to_shape(sector_start(3)), Some(Shape::Hexagon));

        // Last unit of each sector still belongs to it.
        let before_second = Angle::from(sector_start(1).units() - 1);
        assert_eq!(angle_to_shape(before_second), Some(Shape::Triangle));
        let before_fifth = Angle::from(sector_start(4).units() - 1);
        assert_eq!(angle_to_shape(before_fifth), Some(Shape::Hexagon));
    }

    #[test]
    fn test_last_third_has_no_shape() {
        assert_eq!(angle_to_shape(sector_start(4)), None);
        assert_eq!(angle_to_shape(sector_start(5)), None);
        assert_eq!(angle_to_shape(Angle::from(FULL_TURN - 1)), None);
        assert_eq!(shape_index(Angle::from(3 * FULL_TURN / 4)), NO_SHAPE);
    }

    #[test]
    fn test_shape_index() {
        assert_eq!(shape_index(Angle::ZERO), 0);
        assert_eq!(shape_index(Angle::QUARTER), 1);
        assert_eq!(shape_index(Angle::HALF), 3);
    }

    #[test]
    fn test_catalog() {
        for (i, shape) in Shape::ALL.into_iter().enumerate() {
            assert_eq!(shape.index(), i);
            assert_eq!(Shape::from_index(i), Some(shape));
            assert_eq!(shape.sides(), i + 3);
        }
        assert_eq!(Shape::from_index(4), None);
        assert_eq!(Shape::Pentagon.name(), "pentagon");
    }

    proptest! {
        #[test]
        fn prop_shape_index_domain(units in 0u32..FULL_TURN) {
            let index = shape_index(Angle::from(units));
            prop_assert!((-1..=3).contains(&index));
            prop_assert_eq!(index, shape_index(Angle::from(units)));
        }
    }
}
