use std::f64::consts::PI;

/// Returns `true` for finite, non-NaN values.
#[must_use]
pub fn is_number(value: f64) -> bool {
    value.is_finite()
}

/// Clamps `value` into `[low, high]`.
///
/// Unlike [`f64::clamp`] this never panics when `low > high`; `high` wins.
#[must_use]
pub fn limit(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

/// Wraps `value` into `[low, high)`.
///
/// With `inclusive_high`, values at or past `high` that wrap exactly onto `low`
/// are reported as `high` instead, so `high` itself stays reachable.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn limit_wrap(value: f64, low: f64, high: f64, inclusive_high: bool) -> f64 {
    let range = high - low;
    let wrapped = low + (value - low) % range;
    if inclusive_high && value >= high && wrapped == low {
        return high;
    }
    if wrapped < low {
        wrapped + range
    } else {
        wrapped
    }
}

/// Rounds `value` to a multiple of `10^exp`.
///
/// Halves round toward positive infinity (`-1.5` rounds to `-1`), and negative
/// zero is normalized to `0`.
#[must_use]
pub fn round(value: f64, exp: i32) -> f64 {
    let scale = 10f64.powi(exp);
    let rounded = (value / scale + 0.5).floor() * scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Sign of travel from `a` to `b`: `1` ascending, `-1` descending, `0` otherwise.
///
/// NaN on either side yields `0`.
#[must_use]
pub fn direction(a: f64, b: f64) -> i8 {
    if a < b {
        1
    } else if b < a {
        -1
    } else {
        0
    }
}

/// Linear interpolation from `a` to `b`.
#[must_use]
pub fn fade(a: f64, b: f64, t: f64) -> f64 {
    fade_with(a, b, t, |v| v)
}

/// Interpolation from `a` to `b` with `t` passed through `easing` first.
#[must_use]
pub fn fade_with(a: f64, b: f64, t: f64, easing: impl Fn(f64) -> f64) -> f64 {
    easing(t) * (b - a) + a
}

/// Inverse of [`fade`]: how far `value` sits between `a` (0) and `b` (1).
///
/// Endpoints are matched exactly before dividing, so `fade_progress(a, a, a)`
/// is `0` rather than NaN. Any other value against an empty span divides by zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn fade_progress(value: f64, a: f64, b: f64) -> f64 {
    if value == a {
        return 0.0;
    }
    if value == b {
        return 1.0;
    }
    (value - a) / (b - a)
}

/// Returns `true` if `value` lies within the closed span of `a` and `b`, in
/// either order. NaN anywhere yields `false`.
#[must_use]
pub fn is_between(value: f64, a: f64, b: f64) -> bool {
    let progress = fade_progress(value, a, b);
    (0.0..=1.0).contains(&progress)
}

/// Converts degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Weighted average over `(value, weight)` pairs.
///
/// Returns `(average, weighted_sum)`. An empty input or zero total weight
/// yields a NaN average.
#[must_use]
pub fn average_with_weight<I>(pairs: I) -> (f64, f64)
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (sum, weight) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(sum, weight), (v, w)| (sum + v * w, weight + w));
    (sum / weight, sum)
}

/// Splits `values` into runs where each value is within `range` of the one before it.
#[must_use]
pub fn group_neighbors(values: &[f64], range: f64) -> Vec<Vec<f64>> {
    group_neighbors_by(values, range, |v| *v)
}

/// Like [`group_neighbors`], comparing the result of `key` for each item.
pub fn group_neighbors_by<T, F>(items: &[T], range: f64, key: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut groups: Vec<Vec<T>> = Vec::new();
    let mut previous: Option<f64> = None;
    for item in items {
        let k = key(item);
        let joins = previous.is_some_and(|p| (k - p).abs() <= range);
        previous = Some(k);
        if joins {
            if let Some(group) = groups.last_mut() {
                group.push(item.clone());
                continue;
            }
        }
        groups.push(vec![item.clone()]);
    }
    groups
}
