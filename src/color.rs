//! sRGB colors, HSL conversion and hue-aware fading.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::math::scalar::{fade, round};

const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Saturation below which a color's hue is treated as meaningless when fading.
const GREY_SATURATION: f64 = 0.1;

/// An sRGB color with 8-bit channels and optional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a: Some(a) }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses `rgb(r, g, b)`, `rgba(r, g, b, a)` and `#`-prefixed hex in
    /// 3, 4, 6 or 8 digit forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex(s, digits);
        }
        if let Some(body) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            return parse_channels(s, body, 4);
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            return parse_channels(s, body, 3);
        }
        Err(ColorError::UnknownFormat(s.to_owned()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if let Some(a) = self.a {
            write!(f, "{a:02x}")?;
        }
        Ok(())
    }
}

fn from_channels(source: &str, channels: &[u8]) -> Result<Color, ColorError> {
    match *channels {
        [r, g, b] => Ok(Color::rgb(r, g, b)),
        [r, g, b, a] => Ok(Color::rgba(r, g, b, a)),
        _ => Err(ColorError::UnknownFormat(source.to_owned())),
    }
}

fn parse_hex(source: &str, digits: &str) -> Result<Color, ColorError> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::UnknownFormat(source.to_owned()));
    }
    let channels: Vec<u8> = match digits.len() {
        // Short form doubles each digit: `#abc` is `#aabbcc`.
        3 | 4 => digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|n| u8::try_from(n * 17).unwrap_or(u8::MAX))
            .collect(),
        6 | 8 => digits
            .as_bytes()
            .chunks(2)
            .filter_map(|pair| std::str::from_utf8(pair).ok())
            .filter_map(|pair| u8::from_str_radix(pair, 16).ok())
            .collect(),
        _ => return Err(ColorError::UnknownFormat(source.to_owned())),
    };
    from_channels(source, &channels)
}

fn parse_channels(source: &str, body: &str, count: usize) -> Result<Color, ColorError> {
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != count {
        return Err(ColorError::UnknownFormat(source.to_owned()));
    }
    let mut channels = Vec::with_capacity(count);
    for (i, part) in parts.into_iter().enumerate() {
        // Whitespace is only allowed after a comma.
        let value = if i == 0 { part } else { part.trim_start() };
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ColorError::UnknownFormat(source.to_owned()));
        }
        let channel = value.parse::<u8>().map_err(|_| ColorError::InvalidChannel {
            channel: CHANNELS[i],
            value: value.to_owned(),
        })?;
        channels.push(channel);
    }
    from_channels(source, &channels)
}

/// Parses a color string, falling back to black when it is not recognized.
///
/// Use [`Color::from_str`] to see why parsing failed.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    s.parse().unwrap_or_else(|err: ColorError| {
        tracing::debug!(input = s, %err, "unparseable color, using black");
        Color::BLACK
    })
}

/// Hue, saturation and lightness, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Converts an sRGB color to HSL. Alpha is dropped.
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn rgb_to_hsl(color: Color) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if min == max {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    Hsl::new(h / 6.0, s, l)
}

/// Converts HSL to an opaque sRGB color.
///
/// Hues outside `[0, 1]` wrap around. Zero or negative saturation yields grey.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let Hsl { h, s, l } = hsl;
    if s <= 0.0 {
        let v = to_channel(l);
        return Color::rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let [r, g, b] =
        [1.0 / 3.0, 0.0, -1.0 / 3.0].map(|offset| to_channel(hue_to_level(p, q, h + offset)));
    Color::rgb(r, g, b)
}

/// Level of one RGB channel at hue position `t` between the `p` and `q` extremes.
fn hue_to_level(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t = nonzero_or(t % 1.0, -1.0) + 1.0;
    }
    if t > 1.0 {
        t = nonzero_or(t % 1.0, 1.0);
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Whole turns wrap onto the far end of the range instead of zero.
#[allow(clippy::float_cmp)]
fn nonzero_or(value: f64, fallback: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        fallback
    } else {
        value
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(level: f64) -> u8 {
    round(level * 255.0, 0) as u8
}

/// Fades between two colors through HSL space.
#[must_use]
pub fn fade_color(from: Color, to: Color, t: f64) -> Color {
    fade_color_with(from, to, t, |v| v)
}

/// Fades between two colors through HSL space with an easing curve.
///
/// `t` at or outside the ends returns the matching input unchanged. A
/// near-grey endpoint borrows the other endpoint's hue, and the hue takes
/// the shorter way around the color wheel.
#[must_use]
pub fn fade_color_with(from: Color, to: Color, t: f64, easing: impl Fn(f64) -> f64) -> Color {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }

    let mut a = rgb_to_hsl(from);
    let mut b = rgb_to_hsl(to);
    if a.s < GREY_SATURATION {
        a.h = b.h;
    }
    if b.s < GREY_SATURATION {
        b.h = a.h;
    }

    let wraps = (a.h - b.h).abs() > 0.5;
    if wraps {
        a.h = (a.h + 0.5) % 1.0;
        b.h = (b.h + 0.5) % 1.0;
    }

    let eased = easing(t);
    let mut hsl = Hsl::new(fade(a.h, b.h, eased), fade(a.s, b.s, eased), fade(a.l, b.l, eased));
    if wraps {
        hsl.h = (hsl.h + 0.5) % 1.0;
    }
    hsl_to_rgb(hsl)
}
