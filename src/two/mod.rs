//! 2D ray tracing and point-in-polygon kernel.
//!
//! Polygons are plain slices of [`Point2`](crate::math::Point2) with at least two vertices. They
//! are implicitly closed: the last vertex connects back to the first, and no
//! closing duplicate is expected. Tracing never fails; degenerate input
//! surfaces as NaN in the returned values.
//!
//! Axis-aligned segments are detected with exact float equality. A segment
//! that is vertical only up to rounding error is traced as a steep sloped
//! segment instead, which can flip results for rays passing exactly through
//! its endpoints.

mod contain;
mod ray_trace;
mod rotate;
mod segment;

pub use contain::{check_polygon, contains, is_inside_poly, FillRule};
pub use ray_trace::{ray_trace_line, ray_trace_poly, ray_trace_poly_closest, TraceHit};
pub use rotate::{angle_from_vector, rotate, rotate_poly, rotate_segment};
pub use segment::{edges, Segment};
