// Sticker color tokens
//
// Accepted forms:
// - "#RGB" and "#RRGGBB" hex
// - "grayN" / "greyN" with N in 0..=100 (X11 gray ramp)
// - a small set of basic color names

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("white", Rgb(255, 255, 255)),
    ("black", Rgb(0, 0, 0)),
    ("gray", Rgb(190, 190, 190)),
    ("grey", Rgb(190, 190, 190)),
    ("red", Rgb(255, 0, 0)),
    ("green", Rgb(0, 255, 0)),
    ("blue", Rgb(0, 0, 255)),
    ("yellow", Rgb(255, 255, 0)),
    ("orange", Rgb(255, 165, 0)),
    ("purple", Rgb(160, 32, 240)),
    ("pink", Rgb(255, 192, 203)),
    ("cyan", Rgb(0, 255, 255)),
    ("magenta", Rgb(255, 0, 255)),
    ("brown", Rgb(165, 42, 42)),
    ("lightblue", Rgb(173, 216, 230)),
    ("lightgreen", Rgb(144, 238, 144)),
    ("lightyellow", Rgb(255, 255, 224)),
];

/// Parse a color token into RGB
pub fn parse_color(token: &str) -> Option<Rgb> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = token.to_lowercase();
    if let Some(level) = lower.strip_prefix("gray").or_else(|| lower.strip_prefix("grey")) {
        if !level.is_empty() {
            return parse_gray_level(level);
        }
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, rgb)| *rgb)
}

pub fn is_valid_color(token: &str) -> bool {
    parse_color(token).is_some()
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

fn parse_gray_level(level: &str) -> Option<Rgb> {
    let n: u32 = level.parse().ok()?;
    if n > 100 {
        return None;
    }
    // Rounds half down, matching the X11 ramp (gray50 = 127)
    let v = ((n * 255 + 49) / 100) as u8;
    Some(Rgb(v, v, v))
}
