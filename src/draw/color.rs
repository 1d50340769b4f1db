//! RGBA color type, predefined color constants and color-string parsing.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use scrawl::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(Color::parse("#ff0000"), Some(red));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Creates a color from 8-bit channels including alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Parses a color string as used by the stroke configuration.
    ///
    /// # Supported Forms (case-insensitive)
    /// - Named colors: "black", "white", "red", "green", "blue", "yellow", "orange",
    ///   "pink", "transparent"
    /// - Hex: `#rgb`, `#rrggbb`, `#rrggbbaa`
    ///
    /// # Returns
    /// - `Some(Color)` if the string is recognized
    /// - `None` otherwise
    pub fn parse(spec: &str) -> Option<Color> {
        let spec = spec.trim();
        match spec.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => name_to_color(spec),
        }
    }
}

fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            // #rgb expands each nibble: #f80 == #ff8800
            let mut channels = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let nibble = c.to_digit(16)? as u8;
                channels[i] = nibble * 17;
            }
            Some(Color::from_rgb8(channels[0], channels[1], channels[2]))
        }
        6 => Some(Color::from_rgb8(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        8 => Some(Color::from_rgba8(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
        )),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=0.5, B=0.0), matching the CSS keyword
pub const GREEN: Color = Color {
    r: 0.0,
    g: 128.0 / 255.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.65, B=0.0), matching the CSS keyword
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 165.0 / 255.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink color (R=1.0, G=0.75, B=0.8), matching the CSS keyword
pub const PINK: Color = Color {
    r: 1.0,
    g: 192.0 / 255.0,
    b: 203.0 / 255.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0), the default stroke color
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!(Color::parse("black"), Some(BLACK));
        assert_eq!(Color::parse("Red"), Some(RED));
        assert_eq!(Color::parse("  WHITE "), Some(WHITE));
        assert_eq!(Color::parse("transparent"), Some(TRANSPARENT));
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse("#000"), Some(BLACK));
        assert_eq!(Color::parse("#ff0000"), Some(RED));
        assert_eq!(Color::parse("#FFFFFF"), Some(WHITE));

        let half_blue = Color::parse("#0000ff80").unwrap();
        assert_eq!(half_blue.b, 1.0);
        assert!((half_blue.a - 128.0 / 255.0).abs() < f64::EPSILON);

        let short = Color::parse("#f80").unwrap();
        assert_eq!(short, Color::from_rgb8(0xff, 0x88, 0x00));
    }

    #[test]
    fn rejects_unknown_colors() {
        assert_eq!(Color::parse("chartreuse-ish"), None);
        assert_eq!(Color::parse("#12"), None);
        assert_eq!(Color::parse("#gg0000"), None);
        assert_eq!(Color::parse("#ééé"), None);
        assert_eq!(Color::parse(""), None);
        // Radix parsing alone would accept a leading sign.
        assert_eq!(Color::parse("#+f+f+f"), None);
        assert_eq!(Color::parse("#+f0000"), None);
    }
}
