use super::ray_trace::{ray_trace_poly, TraceHit};
use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Fewest vertices a polygon can have.
const MIN_VERTICES: usize = 2;

/// Rule deciding which regions of a self-intersecting polygon count as inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Inside when the ray crosses the boundary an odd number of times.
    /// Overlapping loops cancel out, producing a checkerboard.
    #[default]
    EvenOdd,
    /// Inside when leftward and rightward crossings do not balance.
    /// Regions wound more than once stay filled.
    NonZero,
}

/// Returns whether `point` lies inside `poly`; points on the boundary are inside.
///
/// An upward ray is traced against every edge. Vertical edges never count.
/// A crossing is ignored when the previous non-vertical edge travels the same
/// horizontal direction, so a ray through a shared vertex between two edges
/// heading the same way is counted once. The previous edge does not have to be
/// crossed for this to apply, so a run of same-direction edges can hide
/// a genuine crossing.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_inside_poly(poly: &[Point2], point: &Point2, rule: FillRule) -> bool {
    let traces = ray_trace_poly(poly, point, None);

    if traces.iter().any(|t| t.distance == 0.0) {
        tracing::trace!(x = point.x, y = point.y, "point lies on polygon boundary");
        return true;
    }

    let sloped: Vec<TraceHit> = traces.into_iter().filter(|t| t.direction != 0).collect();
    let n = sloped.len();
    let crossings = sloped.iter().enumerate().filter_map(|(i, t)| {
        let prev = &sloped[(i + n - 1) % n];
        (t.is_hit() && t.direction != prev.direction).then_some(t.direction)
    });

    match rule {
        FillRule::EvenOdd => crossings.count() % 2 == 1,
        FillRule::NonZero => {
            let (left, right) = crossings.fold((0usize, 0usize), |(left, right), dir| {
                if dir < 0 {
                    (left + 1, right)
                } else {
                    (left, right + 1)
                }
            });
            left != right
        }
    }
}

/// Even-odd containment test. See [`is_inside_poly`].
#[must_use]
pub fn contains(poly: &[Point2], point: &Point2) -> bool {
    is_inside_poly(poly, point, FillRule::EvenOdd)
}

/// Checks that `poly` has enough vertices to form edges.
///
/// The tracing functions assume this without checking; call it on untrusted input.
///
/// # Errors
///
/// Returns `GeometryError::TooFewVertices` for fewer than two vertices.
pub fn check_polygon(poly: &[Point2]) -> Result<()> {
    if poly.len() < MIN_VERTICES {
        return Err(GeometryError::TooFewVertices {
            count: poly.len(),
            min: MIN_VERTICES,
        }
        .into());
    }
    Ok(())
}
