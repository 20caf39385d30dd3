use std::f64::consts::FRAC_PI_2;

use super::rotate::{angle_from_vector, rotate_segment};
use super::segment::{edges, Segment};
use crate::math::scalar::{direction, fade_progress, is_between, is_number};
use crate::math::{Point2, Vector2};

/// Outcome of casting a ray against one segment.
///
/// A miss carries NaN in `distance` and `along`. `direction` is always set,
/// since polygon containment needs it for edges the ray does not cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    /// Travel from the ray origin to the crossing, in units of the ray vector's length.
    pub distance: f64,
    /// Position of the crossing along the segment: `0` at `a`, `1` at `b`.
    pub along: f64,
    /// Horizontal direction of the segment in the traced frame: `-1`, `0` or `1`.
    pub direction: i8,
}

impl TraceHit {
    #[must_use]
    pub fn new(distance: f64, along: f64, direction: i8) -> Self {
        Self {
            distance,
            along,
            direction,
        }
    }

    /// A miss against a segment travelling in `direction`.
    #[must_use]
    pub fn miss(direction: i8) -> Self {
        Self::new(f64::NAN, f64::NAN, direction)
    }

    /// Returns `true` unless this is a miss.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        !self.distance.is_nan()
    }
}

/// Casts a ray from `point` along `vector` and reports where it crosses `segment`.
///
/// Without a vector the ray points straight up (+y) and distances are raw
/// units. With a vector the whole scene is rotated about `point` so the ray
/// points up, and the distance is divided by the vector's length: a hit at
/// distance `d` lies at `point + vector * d`.
///
/// Hits behind the ray origin are misses. A point lying on the segment is a
/// hit at distance zero.
#[must_use]
pub fn ray_trace_line(segment: &Segment, point: &Point2, vector: Option<&Vector2>) -> TraceHit {
    let Some(vector) = vector else {
        return trace_upward(segment, point);
    };
    let angle = angle_from_vector(&Point2::from(*vector), None) - FRAC_PI_2;
    let upright = rotate_segment(segment, -angle, Some(point));
    let hit = trace_upward(&upright, point);
    TraceHit {
        distance: hit.distance / vector.norm(),
        ..hit
    }
}

#[allow(clippy::float_cmp)]
fn trace_upward(segment: &Segment, point: &Point2) -> TraceHit {
    let Segment { a, b } = *segment;
    let (x, y) = (point.x, point.y);

    let along = fade_progress(x, a.x, b.x);
    let dir = direction(a.x, b.x);
    let miss = TraceHit::miss(dir);

    if !is_between(x, a.x, b.x) {
        return miss;
    }

    // Vertical: the ray either starts on the segment or runs up into its lower end.
    if a.x == b.x {
        if is_between(y, a.y, b.y) {
            return TraceHit::new(0.0, fade_progress(y, a.y, b.y), 0);
        }
        if y > a.y {
            return miss;
        }
        if a.y <= b.y {
            return TraceHit::new(a.y - y, 0.0, 0);
        }
        return TraceHit::new(b.y - y, 1.0, 0);
    }

    if a.y == b.y {
        if a.y < y {
            return miss;
        }
        return TraceHit::new(a.y - y, along, dir);
    }

    let slope = (b.y - a.y) / (b.x - a.x);
    let intercept = a.y - a.x * slope;
    let sy = x * slope + intercept;
    if sy < y {
        return miss;
    }
    TraceHit::new(sy - y, along, dir)
}

/// Traces a ray against every edge of `poly`, in edge order.
#[must_use]
pub fn ray_trace_poly(poly: &[Point2], point: &Point2, vector: Option<&Vector2>) -> Vec<TraceHit> {
    edges(poly)
        .iter()
        .map(|edge| ray_trace_line(edge, point, vector))
        .collect()
}

/// Returns the first point where a ray from `point` along `vector` meets the
/// boundary of `poly`, or `None` if the ray misses every edge.
#[must_use]
pub fn ray_trace_poly_closest(poly: &[Point2], point: &Point2, vector: &Vector2) -> Option<Point2> {
    let nearest = ray_trace_poly(poly, point, Some(vector))
        .into_iter()
        .map(|hit| hit.distance)
        .filter(|d| is_number(*d))
        .min_by(f64::total_cmp);

    let Some(distance) = nearest else {
        tracing::debug!(
            x = point.x,
            y = point.y,
            edges = poly.len(),
            "ray misses every polygon edge"
        );
        return None;
    };
    Some(point + vector * distance)
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::test_support::init_tracing;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn assert_miss(hit: TraceHit, direction: i8) {
        assert!(hit.distance.is_nan(), "expected miss, got {hit:?}");
        assert!(hit.along.is_nan(), "expected miss, got {hit:?}");
        assert_eq!(hit.direction, direction);
        assert!(!hit.is_hit());
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]
    }

    #[test]
    fn detects_intersection() {
        let flat = Segment::new(0.0, 0.0, 2.0, 0.0);
        assert_eq!(ray_trace_line(&flat, &p(1.0, -1.0), None), TraceHit::new(1.0, 0.5, 1));
        assert_miss(ray_trace_line(&flat, &p(-1.0, -1.0), None), 1);
        assert_miss(ray_trace_line(&flat, &p(1.0, 1.0), None), 1);
        assert_miss(ray_trace_line(&Segment::new(0.0, 0.0, 0.0, 2.0), &p(0.0, 3.0), None), 0);
        assert_miss(ray_trace_line(&Segment::new(0.0, 0.0, 2.0, 1.0), &p(1.0, 1.0), None), 1);
    }

    #[test]
    fn sloped_distance() {
        let cases = [
            (Segment::new(0.0, -1.0, 2.0, 1.0), p(1.0, -1.0), TraceHit::new(1.0, 0.5, 1)),
            (Segment::new(0.0, 0.0, 2.0, 1.0), p(1.0, 0.0), TraceHit::new(0.5, 0.5, 1)),
            (Segment::new(0.0, 0.0, 2.0, 1.0), p(1.0, -1.0), TraceHit::new(1.5, 0.5, 1)),
            (Segment::new(0.0, 0.0, 2.0, 1.0), p(0.5, -1.0), TraceHit::new(1.25, 0.25, 1)),
            (Segment::new(0.0, 0.0, 2.0, 0.0), p(1.5, -1.0), TraceHit::new(1.0, 0.75, 1)),
        ];
        for (segment, point, expected) in cases {
            assert_eq!(ray_trace_line(&segment, &point, None), expected, "{segment:?} {point:?}");
        }
    }

    #[test]
    fn vertical_segments() {
        let up = Segment::new(0.0, 0.0, 0.0, 2.0);
        assert_eq!(ray_trace_line(&up, &p(0.0, 0.0), None), TraceHit::new(0.0, 0.0, 0));
        assert_eq!(ray_trace_line(&up, &p(0.0, 1.0), None), TraceHit::new(0.0, 0.5, 0));
        assert_eq!(ray_trace_line(&up, &p(0.0, -1.0), None), TraceHit::new(1.0, 0.0, 0));

        let down = Segment::new(0.0, 2.0, 0.0, 0.0);
        assert_eq!(ray_trace_line(&down, &p(0.0, 0.0), None), TraceHit::new(0.0, 1.0, 0));
        assert_eq!(ray_trace_line(&down, &p(0.0, -1.0), None), TraceHit::new(1.0, 1.0, 0));
        assert_miss(ray_trace_line(&down, &p(0.0, 3.0), None), 0);
    }

    #[test]
    fn degenerate_point_segment() {
        let dot = Segment::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(ray_trace_line(&dot, &p(0.0, -1.0), None), TraceHit::new(1.0, 0.0, 0));
    }

    #[test]
    fn direction_follows_segment() {
        let back = Segment::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(ray_trace_line(&back, &p(1.0, -1.0), None), TraceHit::new(1.0, 0.5, -1));
    }

    #[test]
    fn nan_point_misses() {
        let flat = Segment::new(0.0, 0.0, 2.0, 0.0);
        assert_miss(ray_trace_line(&flat, &p(f64::NAN, 0.0), None), 1);
    }

    #[test]
    fn traces_along_vector() {
        let line = Segment::new(0.0, 0.0, 1.0, 1.0);
        let hit = ray_trace_line(&line, &p(1.0, 0.0), Some(&Vector2::new(-1.0, 1.0)));
        assert_relative_eq!(hit.distance, 0.5, epsilon = 1e-10);
        assert_relative_eq!(hit.along, 0.5, epsilon = 1e-10);
        assert_eq!(hit.direction, 1);
    }

    #[test]
    fn vector_length_scales_distance() {
        let top = Segment::new(0.0, 4.0, 4.0, 4.0);
        let unit = ray_trace_line(&top, &p(1.0, 2.0), Some(&Vector2::new(0.0, 1.0)));
        let half = ray_trace_line(&top, &p(1.0, 2.0), Some(&Vector2::new(0.0, 0.5)));
        assert_relative_eq!(unit.distance, 2.0, epsilon = 1e-10);
        assert_relative_eq!(half.distance, 4.0, epsilon = 1e-10);
        assert_relative_eq!(half.along, 0.25, epsilon = 1e-10);
    }

    #[test]
    fn poly_traces_every_edge() {
        let poly = [p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let traces = ray_trace_poly(&poly, &p(1.0, 0.0), None);
        assert_eq!(traces.len(), 4);
        assert_eq!(traces[0], TraceHit::new(0.0, 0.5, 1));
        assert_eq!(traces[1], TraceHit::new(1.0, 1.0, -1));
        assert_eq!(traces[2], TraceHit::new(1.0, 0.0, -1));
        assert_miss(traces[3], 0);
    }

    #[test]
    fn poly_traces_along_vector() {
        let traces = ray_trace_poly(&square(), &p(1.0, 2.0), Some(&Vector2::new(2.0, 0.0)));
        let hits: Vec<usize> = traces
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_hit())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hits, vec![1]);
        assert_relative_eq!(traces[1].distance, 1.5, epsilon = 1e-10);
        assert_relative_eq!(traces[1].along, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn closest_hit_walks_vector() {
        let hit = ray_trace_poly_closest(&square(), &p(1.0, 2.0), &Vector2::new(2.0, 0.0)).unwrap();
        assert_relative_eq!(hit, p(4.0, 2.0), epsilon = 1e-10);

        let hit = ray_trace_poly_closest(&square(), &p(1.0, 2.0), &Vector2::new(0.0, 0.5)).unwrap();
        assert_relative_eq!(hit, p(1.0, 4.0), epsilon = 1e-10);
    }

    #[test]
    fn closest_hit_picks_nearest_edge() {
        // Ray from below crosses the bottom edge before the top edge.
        let hit = ray_trace_poly_closest(&square(), &p(1.0, -2.0), &Vector2::new(0.0, 1.0)).unwrap();
        assert_relative_eq!(hit, p(1.0, 0.0), epsilon = 1e-10);
    }

    #[test]
    fn closest_hit_none_when_ray_escapes() {
        init_tracing();
        let miss = ray_trace_poly_closest(&square(), &p(5.0, 2.0), &Vector2::new(1.0, 0.0));
        assert!(miss.is_none());
    }
}
