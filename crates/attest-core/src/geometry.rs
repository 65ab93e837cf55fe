//! Basic geometric types used throughout the drawing code.
//!
//! All types are small `Copy` values: [`Point`], [`Size`], [`Bounds`], and
//! [`Insets`]. Coordinates follow the SVG convention (y grows downward);
//! diagram definitions that use an upward-growing grid flip their y values
//! when converting to canvas coordinates.

/// A point in 2D space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point from x and y coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise addition.
    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise subtraction.
    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// The midpoint between this point and `other`.
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean length of this point treated as a vector.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Scales both components by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Creates bounds of the given size centered on this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// A width/height pair.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Grows this size by the given insets on all sides.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self::new(
            self.width + insets.horizontal_sum(),
            self.height + insets.vertical_sum(),
        )
    }

    /// Scales both dimensions by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Point,
    size: Size,
}

impl Bounds {
    /// Creates bounds of `size` centered on `center`.
    pub fn new_from_center(center: Point, size: Size) -> Self {
        Self {
            min: Point::new(
                center.x() - size.width() / 2.0,
                center.y() - size.height() / 2.0,
            ),
            size,
        }
    }

    /// Creates bounds from a top-left corner and size.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min: top_left,
            size,
        }
    }

    /// Smallest x coordinate.
    pub fn min_x(self) -> f32 {
        self.min.x()
    }

    /// Smallest y coordinate.
    pub fn min_y(self) -> f32 {
        self.min.y()
    }

    /// Largest x coordinate.
    pub fn max_x(self) -> f32 {
        self.min.x() + self.size.width()
    }

    /// Largest y coordinate.
    pub fn max_y(self) -> f32 {
        self.min.y() + self.size.height()
    }

    /// Center point of these bounds.
    pub fn center(self) -> Point {
        Point::new(
            self.min.x() + self.size.width() / 2.0,
            self.min.y() + self.size.height() / 2.0,
        )
    }

    /// Width of these bounds.
    pub fn width(self) -> f32 {
        self.size.width()
    }

    /// Height of these bounds.
    pub fn height(self) -> f32 {
        self.size.height()
    }

    /// The top-left corner.
    pub fn min_point(self) -> Point {
        self.min
    }

    /// The size of these bounds.
    pub fn to_size(self) -> Size {
        self.size
    }

    /// Returns true if `point` lies inside these bounds (edges included).
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.min_x()
            && point.x() <= self.max_x()
            && point.y() >= self.min_y()
            && point.y() <= self.max_y()
    }

    /// The smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());

        Self {
            min: Point::new(min_x, min_y),
            size: Size::new(max_x - min_x, max_y - min_y),
        }
    }

    /// Grows these bounds outward by the given insets.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min: Point::new(self.min.x() - insets.left(), self.min.y() - insets.top()),
            size: self.size.add_padding(insets),
        }
    }
}

/// Per-side padding values.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates insets with explicit values for each side.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates insets with the same value on all sides.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Top inset.
    pub fn top(self) -> f32 {
        self.top
    }

    /// Right inset.
    pub fn right(self) -> f32 {
        self.right
    }

    /// Bottom inset.
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Left inset.
    pub fn left(self) -> f32 {
        self.left
    }

    /// Sum of the left and right insets.
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 6.0);

        let sum = a.add_point(b);
        assert_approx_eq!(f32, sum.x(), 4.0);
        assert_approx_eq!(f32, sum.y(), 8.0);

        let diff = b.sub_point(a);
        assert_approx_eq!(f32, diff.x(), 2.0);
        assert_approx_eq!(f32, diff.y(), 4.0);

        let mid = a.midpoint(b);
        assert_approx_eq!(f32, mid.x(), 2.0);
        assert_approx_eq!(f32, mid.y(), 4.0);
    }

    #[test]
    fn test_point_hypot() {
        let p = Point::new(3.0, 4.0);
        assert_approx_eq!(f32, p.hypot(), 5.0);
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(10.0, 20.0);
        let padded = size.add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_approx_eq!(f32, padded.width(), 16.0);
        assert_approx_eq!(f32, padded.height(), 24.0);
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Point::new(10.0, 10.0).to_bounds(Size::new(4.0, 6.0));
        assert_approx_eq!(f32, bounds.min_x(), 8.0);
        assert_approx_eq!(f32, bounds.min_y(), 7.0);
        assert_approx_eq!(f32, bounds.max_x(), 12.0);
        assert_approx_eq!(f32, bounds.max_y(), 13.0);
        assert_eq!(bounds.center(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        assert!(bounds.contains(Point::new(5.0, 5.0)));
        assert!(bounds.contains(Point::new(0.0, 10.0)));
        assert!(!bounds.contains(Point::new(10.1, 5.0)));
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (0.0f32..1000.0, 0.0f32..1000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    proptest! {
        #[test]
        fn prop_merge_contains_both(
            a_min in point_strategy(),
            a_size in size_strategy(),
            b_min in point_strategy(),
            b_size in size_strategy(),
        ) {
            let a = Bounds::new_from_top_left(a_min, a_size);
            let b = Bounds::new_from_top_left(b_min, b_size);
            let merged = a.merge(&b);

            prop_assert!(merged.min_x() <= a.min_x());
            prop_assert!(merged.min_y() <= b.min_y().min(a.min_y()));
            prop_assert!(merged.max_x() >= b.max_x().max(a.max_x()));
            prop_assert!(merged.max_y() >= a.max_y());
        }

        #[test]
        fn prop_padding_roundtrip(size in size_strategy(), pad in 0.0f32..100.0) {
            let padded = size.add_padding(Insets::uniform(pad));
            prop_assert!(padded.width() >= size.width());
            prop_assert!(padded.height() >= size.height());
        }
    }
}
