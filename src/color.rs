//! RGBA color type, named color lookup, and spectrum sampling.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color with explicit RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Resolve a color name to a color.
    ///
    /// Accepts matplotlib-style single-letter codes (`"r"`, `"g"`, `"b"`,
    /// `"c"`, `"m"`, `"y"`, `"k"`, `"w"`), a small set of common names, and
    /// `#RRGGBB` / `#RRGGBBAA` hex. Anything unrecognized falls back to
    /// opaque black; specifiers are deliberately never rejected.
    pub fn by_name(name: &str) -> Color {
        if let Some(hex) = name.strip_prefix('#') {
            if let Some(c) = Self::from_hex(hex) {
                return c;
            }
        }
        match name.to_ascii_lowercase().as_str() {
            "r" | "red" => Color::RED,
            "g" | "green" => Color::GREEN,
            "b" | "blue" => Color::BLUE,
            "c" | "cyan" => Color::rgb(0, 255, 255),
            "m" | "magenta" => Color::rgb(255, 0, 255),
            "y" | "yellow" => Color::rgb(255, 255, 0),
            "w" | "white" => Color::WHITE,
            "orange" => Color::rgb(255, 165, 0),
            "purple" => Color::rgb(128, 0, 128),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            _ => Color::BLACK,
        }
    }

    fn from_hex(hex: &str) -> Option<Color> {
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    // Common colors
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
}

/// A color spectrum: a function from `[0, 1]` to a color.
///
/// Any perceptually-ordered spectrum satisfies the rainbow contract; exact
/// values only need to be distinct and ordered.
pub type ColorMap = fn(f64) -> Color;

/// The "jet" spectrum: blue through cyan, green, and yellow to red.
pub fn jet(t: f64) -> Color {
    let channel = |v: f64| {
        let v = v.clamp(0.0, 1.0);
        (v * 255.0).round() as u8
    };
    let t = t.clamp(0.0, 1.0);
    Color::rgb(
        channel(1.5 - (4.0 * t - 3.0).abs()),
        channel(1.5 - (4.0 * t - 2.0).abs()),
        channel(1.5 - (4.0 * t - 1.0).abs()),
    )
}

/// Sample `n` evenly spaced colors across the full domain of a spectrum,
/// inclusive of both ends when `n > 1`. The i-th sample is at `i / (n - 1)`;
/// a single sample is taken at 0.
pub fn spectrum(map: ColorMap, n: usize) -> Vec<Color> {
    match n {
        0 => Vec::new(),
        1 => vec![map(0.0)],
        _ => (0..n).map(|i| map(i as f64 / (n - 1) as f64)).collect(),
    }
}

/// A color specifier for bulk plot operations: one uniform color, or the
/// rainbow (one spectrum sample per element, in sequence order).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    Fixed(Color),
    Rainbow,
}

impl ColorSpec {
    /// Parse a specifier string. The literal `"rainbow"` (case-insensitive)
    /// selects rainbow coloring; everything else resolves through
    /// [`Color::by_name`] with its permissive fallback.
    pub fn parse(spec: &str) -> Self {
        if spec.eq_ignore_ascii_case("rainbow") {
            ColorSpec::Rainbow
        } else {
            ColorSpec::Fixed(Color::by_name(spec))
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(c: Color) -> Self {
        ColorSpec::Fixed(c)
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        ColorSpec::parse(s)
    }
}
