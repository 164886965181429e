//! Named colors, a subset of the CSS named color table.

use super::ColorU8;

/// Black
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
/// White
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
/// Red
pub const RED: ColorU8 = ColorU8::from_rgb(255, 0, 0);
/// Green
pub const GREEN: ColorU8 = ColorU8::from_rgb(0, 128, 0);
/// Blue
pub const BLUE: ColorU8 = ColorU8::from_rgb(0, 0, 255);
/// Gray
pub const GRAY: ColorU8 = ColorU8::from_rgb(128, 128, 128);
/// Dark gray
pub const DARKGRAY: ColorU8 = ColorU8::from_rgb(169, 169, 169);
/// Light gray
pub const LIGHTGRAY: ColorU8 = ColorU8::from_rgb(211, 211, 211);
/// Orange
pub const ORANGE: ColorU8 = ColorU8::from_rgb(255, 165, 0);
/// Yellow
pub const YELLOW: ColorU8 = ColorU8::from_rgb(255, 255, 0);
/// Purple
pub const PURPLE: ColorU8 = ColorU8::from_rgb(128, 0, 128);
/// Brown
pub const BROWN: ColorU8 = ColorU8::from_rgb(165, 42, 42);
/// Pink
pub const PINK: ColorU8 = ColorU8::from_rgb(255, 192, 203);
/// Cyan
pub const CYAN: ColorU8 = ColorU8::from_rgb(0, 255, 255);
/// Magenta
pub const MAGENTA: ColorU8 = ColorU8::from_rgb(255, 0, 255);
/// Steel blue
pub const STEELBLUE: ColorU8 = ColorU8::from_rgb(70, 130, 180);
/// Firebrick
pub const FIREBRICK: ColorU8 = ColorU8::from_rgb(178, 34, 34);
/// Forest green
pub const FORESTGREEN: ColorU8 = ColorU8::from_rgb(34, 139, 34);
/// Navy
pub const NAVY: ColorU8 = ColorU8::from_rgb(0, 0, 128);
/// Teal
pub const TEAL: ColorU8 = ColorU8::from_rgb(0, 128, 128);
/// Tomato
pub const TOMATO: ColorU8 = ColorU8::from_rgb(255, 99, 71);
/// Gold
pub const GOLD: ColorU8 = ColorU8::from_rgb(255, 215, 0);

/// Look up a color by its (case-insensitive) name
pub fn lookup_name(name: &str) -> Option<ColorU8> {
    let name = name.to_ascii_lowercase();
    let col = match name.as_str() {
        "black" => BLACK,
        "white" => WHITE,
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        "gray" | "grey" => GRAY,
        "darkgray" | "darkgrey" => DARKGRAY,
        "lightgray" | "lightgrey" => LIGHTGRAY,
        "orange" => ORANGE,
        "yellow" => YELLOW,
        "purple" => PURPLE,
        "brown" => BROWN,
        "pink" => PINK,
        "cyan" => CYAN,
        "magenta" => MAGENTA,
        "steelblue" => STEELBLUE,
        "firebrick" => FIREBRICK,
        "forestgreen" => FORESTGREEN,
        "navy" => NAVY,
        "teal" => TEAL,
        "tomato" => TOMATO,
        "gold" => GOLD,
        _ => return None,
    };
    Some(col)
}
