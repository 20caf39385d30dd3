//! Easing curves over `t ∈ [0, 1]`.
//!
//! Generators return plain closures so they can be handed to any `*_with`
//! fade function in this crate.

/// Builds an ease-in curve `t^exp`.
#[must_use]
pub fn make_in(exp: f64) -> impl Fn(f64) -> f64 + Copy {
    move |t| t.powf(exp)
}

/// Builds an ease-out curve `1 - |(t - 1)^exp|`.
#[must_use]
pub fn make_out(exp: f64) -> impl Fn(f64) -> f64 + Copy {
    move |t| 1.0 - (t - 1.0).powf(exp).abs()
}

/// Builds an ease-in-out curve: [`make_in`] over the first half, [`make_out`]
/// over the second, each squeezed into half the output range.
#[must_use]
pub fn make_both(exp: f64) -> impl Fn(f64) -> f64 + Copy {
    let ease_in = make_in(exp);
    let ease_out = make_out(exp);
    move |t| {
        if t < 0.5 {
            ease_in(t * 2.0) / 2.0
        } else {
            ease_out(t * 2.0 - 1.0) / 2.0 + 0.5
        }
    }
}

#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}

#[must_use]
pub fn quad(t: f64) -> f64 {
    make_both(2.0)(t)
}

#[must_use]
pub fn quad_in(t: f64) -> f64 {
    make_in(2.0)(t)
}

#[must_use]
pub fn quad_out(t: f64) -> f64 {
    make_out(2.0)(t)
}

#[must_use]
pub fn cubic(t: f64) -> f64 {
    make_both(3.0)(t)
}

#[must_use]
pub fn cubic_in(t: f64) -> f64 {
    make_in(3.0)(t)
}

#[must_use]
pub fn cubic_out(t: f64) -> f64 {
    make_out(3.0)(t)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_curve(curve: impl Fn(f64) -> f64, samples: [(f64, f64); 3]) {
        assert_eq!(curve(0.0), 0.0);
        assert_eq!(curve(1.0), 1.0);
        for (t, expected) in samples {
            assert_abs_diff_eq!(curve(t), expected, epsilon = TOL);
        }
    }

    #[test]
    fn ease_in() {
        assert_curve(make_in(2.0), [(0.1, 0.01), (0.5, 0.25), (0.9, 0.81)]);
        assert_curve(make_in(3.0), [(0.1, 0.001), (0.5, 0.125), (0.9, 0.729)]);
    }

    #[test]
    fn ease_out() {
        assert_curve(make_out(2.0), [(0.1, 0.19), (0.5, 0.75), (0.9, 0.99)]);
        assert_curve(make_out(3.0), [(0.1, 0.271), (0.5, 0.875), (0.9, 0.999)]);
    }

    #[test]
    fn ease_both() {
        assert_curve(make_both(2.0), [(0.1, 0.02), (0.5, 0.5), (0.9, 0.98)]);
        assert_curve(make_both(3.0), [(0.1, 0.004), (0.5, 0.5), (0.9, 0.996)]);
    }

    #[test]
    fn presets_match_generators() {
        for t in [0.0, 0.2, 0.5, 0.7, 1.0] {
            assert_eq!(linear(t), t);
            assert_eq!(quad(t), make_both(2.0)(t));
            assert_eq!(quad_in(t), make_in(2.0)(t));
            assert_eq!(quad_out(t), make_out(2.0)(t));
            assert_eq!(cubic(t), make_both(3.0)(t));
            assert_eq!(cubic_in(t), make_in(3.0)(t));
            assert_eq!(cubic_out(t), make_out(3.0)(t));
        }
    }
}
