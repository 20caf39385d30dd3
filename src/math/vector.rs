use super::scalar::{fade, round};
use super::VectorN;

/// How [`contain_box`] picks its scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxFit {
    /// Largest scale that keeps every side inside the container.
    #[default]
    Contain,
    /// Smallest scale that makes every side reach the container.
    Cover,
}

/// Element-wise sum.
#[must_use]
pub fn add_vectors<const D: usize>(a: &VectorN<D>, b: &VectorN<D>) -> VectorN<D> {
    a + b
}

/// Element-wise difference `a - b`.
#[must_use]
pub fn subtract_vectors<const D: usize>(a: &VectorN<D>, b: &VectorN<D>) -> VectorN<D> {
    a - b
}

/// Euclidean length.
#[must_use]
pub fn magnitude<const D: usize>(v: &VectorN<D>) -> f64 {
    v.norm()
}

/// Euclidean length of `v` measured from `origin`.
#[must_use]
pub fn magnitude_from<const D: usize>(v: &VectorN<D>, origin: &VectorN<D>) -> f64 {
    (origin - v).norm()
}

/// Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance<const D: usize>(a: &VectorN<D>, b: &VectorN<D>) -> f64 {
    (a - b).norm()
}

/// Chebyshev distance: the largest absolute component of `a - b`.
///
/// Cheaper than [`distance`] and good enough for coarse thresholds.
#[must_use]
pub fn distance_lazy<const D: usize>(a: &VectorN<D>, b: &VectorN<D>) -> f64 {
    (a - b).amax()
}

/// Rescales `v` to the given length, keeping its direction.
///
/// A negative `length` flips the vector. A zero vector has no direction and
/// comes back as NaN.
#[must_use]
pub fn fix_magnitude<const D: usize>(v: &VectorN<D>, length: f64) -> VectorN<D> {
    v * (length / v.norm())
}

/// Component-wise linear interpolation.
#[must_use]
pub fn fade_vector<const D: usize>(a: &VectorN<D>, b: &VectorN<D>, t: f64) -> VectorN<D> {
    fade_vector_with(a, b, t, |v| v)
}

/// Component-wise interpolation with `t` passed through `easing`.
#[must_use]
pub fn fade_vector_with<const D: usize>(
    a: &VectorN<D>,
    b: &VectorN<D>,
    t: f64,
    easing: impl Fn(f64) -> f64,
) -> VectorN<D> {
    let eased = easing(t);
    a.zip_map(b, |x, y| fade(x, y, eased))
}

/// Moves from `a` toward `b` by `travel` units of Euclidean distance.
///
/// Travel at or below zero stays on `a`; travel reaching `b` stops on `b`.
#[must_use]
pub fn fade_vector_by_distance<const D: usize>(
    a: &VectorN<D>,
    b: &VectorN<D>,
    travel: f64,
) -> VectorN<D> {
    fade_vector_by_distance_with(a, b, travel, |v| v)
}

/// [`fade_vector_by_distance`] with an easing curve over the progress.
#[must_use]
pub fn fade_vector_by_distance_with<const D: usize>(
    a: &VectorN<D>,
    b: &VectorN<D>,
    travel: f64,
    easing: impl Fn(f64) -> f64,
) -> VectorN<D> {
    fade_clamped(a, b, travel / distance(a, b), easing)
}

/// Like [`fade_vector_by_distance`], measuring with [`distance_lazy`].
#[must_use]
pub fn fade_vector_by_distance_lazy<const D: usize>(
    a: &VectorN<D>,
    b: &VectorN<D>,
    travel: f64,
) -> VectorN<D> {
    fade_vector_by_distance_lazy_with(a, b, travel, |v| v)
}

/// [`fade_vector_by_distance_lazy`] with an easing curve over the progress.
#[must_use]
pub fn fade_vector_by_distance_lazy_with<const D: usize>(
    a: &VectorN<D>,
    b: &VectorN<D>,
    travel: f64,
    easing: impl Fn(f64) -> f64,
) -> VectorN<D> {
    fade_clamped(a, b, travel / distance_lazy(a, b), easing)
}

fn fade_clamped<const D: usize>(
    a: &VectorN<D>,
    b: &VectorN<D>,
    progress: f64,
    easing: impl Fn(f64) -> f64,
) -> VectorN<D> {
    if progress <= 0.0 {
        return *a;
    }
    if progress >= 1.0 {
        return *b;
    }
    fade_vector_with(a, b, progress, easing)
}

/// Rounds every component to a multiple of `10^exp`.
#[must_use]
pub fn round_vector<const D: usize>(v: &VectorN<D>, exp: i32) -> VectorN<D> {
    v.map(|c| round(c, exp))
}

/// Uniformly scales `size` to fit `container` according to `fit`.
///
/// Fewer than two dimensions have no aspect ratio to preserve, so the
/// container is returned as-is.
#[must_use]
pub fn contain_box<const D: usize>(
    size: &VectorN<D>,
    container: &VectorN<D>,
    fit: BoxFit,
) -> VectorN<D> {
    if D < 2 {
        return *container;
    }
    let ratios = container.component_div(size);
    let scale = match fit {
        BoxFit::Contain => ratios.iter().copied().fold(f64::INFINITY, f64::min),
        BoxFit::Cover => ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };
    size * scale
}
