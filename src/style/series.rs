//! Series styling: palettes and series color assignment.

use crate::color::{self, ColorU8};
use crate::style;

/// An index into the active series palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexColor(pub usize);

impl color::Color for IndexColor {}

/// A color for series elements
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Color {
    /// Color assigned automatically from the palette, following the
    /// series index
    #[default]
    Auto,
    /// A specific palette index
    Index(usize),
    /// A fixed RGB color
    Fixed(ColorU8),
}

impl From<ColorU8> for Color {
    fn from(color: ColorU8) -> Self {
        Color::Fixed(color)
    }
}

impl color::Color for Color {}

/// A series color palette.
///
/// Indices wrap around: when more series or categories than palette
/// entries are requested, colors recycle modulo the palette length.
pub trait Palette {
    /// The number of colors in the palette
    fn len(&self) -> usize;

    /// Check if the palette has no colors
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a color by index, recycling past the palette length
    fn get(&self, idx: IndexColor) -> ColorU8;
}

/// Built-in and custom palettes
pub mod palette {
    use super::{IndexColor, Palette};
    use crate::color::{self, ColorU8};

    /// The standard palette
    pub const STANDARD: [ColorU8; 10] = [
        ColorU8::from_html(b"#1f77b4"), // blue
        ColorU8::from_html(b"#ff7f0e"), // orange
        ColorU8::from_html(b"#2ca02c"), // green
        ColorU8::from_html(b"#d62728"), // red
        ColorU8::from_html(b"#9467bd"), // purple
        ColorU8::from_html(b"#8c564b"), // brown
        ColorU8::from_html(b"#e377c2"), // pink
        ColorU8::from_html(b"#7f7f7f"), // gray
        ColorU8::from_html(b"#bcbd22"), // olive
        ColorU8::from_html(b"#17becf"), // cyan
    ];

    /// A soft pastel palette
    pub const PASTEL: [ColorU8; 10] = [
        ColorU8::from_html(b"#aec7e8"), // blue
        ColorU8::from_html(b"#ffbb78"), // orange
        ColorU8::from_html(b"#98df8a"), // green
        ColorU8::from_html(b"#ff9896"), // red
        ColorU8::from_html(b"#c5b0d5"), // purple
        ColorU8::from_html(b"#c49c94"), // brown
        ColorU8::from_html(b"#f7b6d2"), // pink
        ColorU8::from_html(b"#c7c7c7"), // gray
        ColorU8::from_html(b"#dbdb8d"), // olive
        ColorU8::from_html(b"#9edae5"), // cyan
    ];

    /// The Okabe-Ito colorblind-safe palette
    pub const OKABE_ITO: [ColorU8; 8] = [
        ColorU8::from_html(b"#000000"), // black
        ColorU8::from_html(b"#e69f00"), // orange
        ColorU8::from_html(b"#56b4e9"), // sky blue
        ColorU8::from_html(b"#009e73"), // bluish green
        ColorU8::from_html(b"#f0e442"), // yellow
        ColorU8::from_html(b"#0072b2"), // blue
        ColorU8::from_html(b"#d55e00"), // vermillion
        ColorU8::from_html(b"#cc79a7"), // reddish purple
    ];

    /// Built-in palettes
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum Builtin {
        /// The standard palette
        #[default]
        Standard,
        /// A soft pastel palette
        Pastel,
        /// The Okabe-Ito colorblind-safe palette
        OkabeIto,
    }

    impl Builtin {
        const fn colors(&self) -> &'static [ColorU8] {
            match self {
                Builtin::Standard => &STANDARD,
                Builtin::Pastel => &PASTEL,
                Builtin::OkabeIto => &OKABE_ITO,
            }
        }
    }

    impl Palette for Builtin {
        fn len(&self) -> usize {
            self.colors().len()
        }

        fn get(&self, idx: IndexColor) -> ColorU8 {
            let colors = self.colors();
            colors[idx.0 % colors.len()]
        }
    }

    /// A user-provided palette.
    /// An empty palette resolves every index to black.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Custom(pub Vec<ColorU8>);

    impl Palette for Custom {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn get(&self, idx: IndexColor) -> ColorU8 {
            if self.0.is_empty() {
                color::BLACK
            } else {
                self.0[idx.0 % self.0.len()]
            }
        }
    }
}

/// Line style for series elements
pub type Line = style::Line<Color>;

impl Default for Line {
    fn default() -> Self {
        Line::new(Color::Auto).with_width(1.5)
    }
}

/// Fill style for series elements
pub type Fill = style::Fill<Color>;

impl Default for Fill {
    fn default() -> Self {
        Fill::new(Color::Auto)
    }
}

/// Marker style for series elements
pub type Marker = style::Marker<Color>;

impl Default for Marker {
    fn default() -> Self {
        Marker::new(Color::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_palettes_recycle() {
        let p = palette::Builtin::Standard;
        assert_eq!(p.get(IndexColor(0)), p.get(IndexColor(10)));
        assert_ne!(p.get(IndexColor(0)), p.get(IndexColor(9)));

        let p = palette::Builtin::OkabeIto;
        assert_eq!(p.get(IndexColor(3)), p.get(IndexColor(11)));
    }

    #[test]
    fn builtin_palette_distinct_within_len() {
        let p = palette::Builtin::Standard;
        for i in 0..p.len() {
            for j in (i + 1)..p.len() {
                assert_ne!(p.get(IndexColor(i)), p.get(IndexColor(j)));
            }
        }
    }

    #[test]
    fn custom_palette() {
        let p = palette::Custom(vec![color::RED, color::BLUE]);
        assert_eq!(p.get(IndexColor(0)), color::RED);
        assert_eq!(p.get(IndexColor(3)), color::BLUE);

        let empty = palette::Custom(vec![]);
        assert_eq!(empty.get(IndexColor(5)), color::BLACK);
    }
}
