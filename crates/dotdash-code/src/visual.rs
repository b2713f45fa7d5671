//! Glyph rendering for Morse strings.

/// Glyph shown for a dot.
pub const DOT_GLYPH: char = '•';
/// Glyph shown for a dash.
pub const DASH_GLYPH: char = '▬';

/// Renders a Morse string for display.
///
/// Dots and dashes become [`DOT_GLYPH`] and [`DASH_GLYPH`], a letter separator
/// becomes one space, and `/` becomes a wider three-space gap. Any other
/// character is dropped.
pub fn glyphs(morse: &str) -> String {
    let mut out = String::with_capacity(morse.len() * 3);
    for symbol in morse.chars() {
        match symbol {
            '.' => out.push(DOT_GLYPH),
            '-' => out.push(DASH_GLYPH),
            ' ' => out.push(' '),
            '/' => out.push_str("   "),
            _ => {}
        }
    }
    out
}
