use std::f64::consts::PI;

use nalgebra::Rotation2;

use super::Segment;
use crate::math::Point2;

/// Rotates `point` counter-clockwise by `radians` about `center` (the origin when `None`).
#[must_use]
pub fn rotate(point: &Point2, radians: f64, center: Option<&Point2>) -> Point2 {
    rotate_with(&Rotation2::new(radians), point, center)
}

/// Rotates every vertex of `poly` about a shared center.
#[must_use]
pub fn rotate_poly(poly: &[Point2], radians: f64, center: Option<&Point2>) -> Vec<Point2> {
    let rotation = Rotation2::new(radians);
    poly.iter()
        .map(|p| rotate_with(&rotation, p, center))
        .collect()
}

/// Rotates both endpoints of `segment` about a shared center.
#[must_use]
pub fn rotate_segment(segment: &Segment, radians: f64, center: Option<&Point2>) -> Segment {
    let rotation = Rotation2::new(radians);
    Segment::from_points(
        rotate_with(&rotation, &segment.a, center),
        rotate_with(&rotation, &segment.b, center),
    )
}

fn rotate_with(rotation: &Rotation2<f64>, point: &Point2, center: Option<&Point2>) -> Point2 {
    match center {
        Some(c) => c + rotation * (point - c),
        None => Point2::from(rotation * point.coords),
    }
}

/// Returns the angle of the vector from `origin` (the origin when `None`) to
/// `point`, normalized to `[0, 2π)`.
///
/// A zero y-component is matched exactly and short-circuits to `0` or `π`
/// without dividing.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn angle_from_vector(point: &Point2, origin: Option<&Point2>) -> f64 {
    let v = match origin {
        Some(o) => point - o,
        None => point.coords,
    };
    if v.y == 0.0 {
        return if v.x < 0.0 { PI } else { 0.0 };
    }
    let angle = ((v.y / v.x).atan() + PI) % PI;
    if v.y < 0.0 {
        angle + PI
    } else {
        angle
    }
}
