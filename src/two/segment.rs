use crate::math::Point2;

/// A directed line segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    /// Creates a segment from flat `(ax, ay, bx, by)` coordinates.
    #[must_use]
    pub fn new(ax: f64, ay: f64, bx: f64, by: f64) -> Self {
        Self {
            a: Point2::new(ax, ay),
            b: Point2::new(bx, by),
        }
    }

    /// Creates a segment between two points.
    #[must_use]
    pub fn from_points(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Returns the coordinates as `[ax, ay, bx, by]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.a.x, self.a.y, self.b.x, self.b.y]
    }
}

/// Returns the closed edge loop of a polygon.
///
/// Each vertex is joined to its successor, and the last vertex to the first.
#[must_use]
pub fn edges(poly: &[Point2]) -> Vec<Segment> {
    poly.iter()
        .zip(poly.iter().cycle().skip(1))
        .map(|(a, b)| Segment::from_points(*a, *b))
        .collect()
}
