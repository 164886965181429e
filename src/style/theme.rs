//! Theme definitions: colors of the figure chrome.

use crate::color::{self, ColorU8, ResolveColor};
use crate::style;

/// A theme, for styling the figure chrome
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// A custom theme
    Custom(ThemePalette),
}

impl Theme {
    /// Get the background color of the theme
    pub const fn background(&self) -> ColorU8 {
        self.palette().background
    }

    /// Get the foreground color of the theme
    pub const fn foreground(&self) -> ColorU8 {
        self.palette().foreground
    }

    /// Get the grid line color of the theme
    pub const fn grid(&self) -> ColorU8 {
        self.palette().grid
    }

    /// Get the legend background fill color of the theme
    pub const fn legend_fill(&self) -> ColorU8 {
        self.palette().legend_fill
    }

    /// Get the legend border color of the theme
    pub const fn legend_border(&self) -> ColorU8 {
        self.palette().legend_border
    }

    /// Get the theme palette
    pub const fn palette(&self) -> &ThemePalette {
        match self {
            Theme::Light => &ThemePalette::LIGHT,
            Theme::Dark => &ThemePalette::DARK,
            Theme::Custom(palette) => palette,
        }
    }

    /// Check whether the theme is dark or light.
    /// A theme is considered dark if its background luminance is < 0.5.
    pub fn is_dark(&self) -> bool {
        self.background().luminance() < 0.5
    }
}

/// The colors used in a theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    /// Background color
    pub background: ColorU8,
    /// Foreground color
    pub foreground: ColorU8,
    /// Grid line color
    pub grid: ColorU8,
    /// Legend background fill color
    pub legend_fill: ColorU8,
    /// Legend border color
    pub legend_border: ColorU8,
}

impl ThemePalette {
    /// The light built-in theme palette
    pub const LIGHT: Self = Self {
        background: color::WHITE,
        foreground: color::BLACK,
        grid: ColorU8::from_html(b"#808080").with_opacity(0.6),
        legend_fill: color::WHITE.with_opacity(0.8),
        legend_border: color::BLACK,
    };

    /// The dark built-in theme palette
    pub const DARK: Self = Self {
        background: ColorU8::from_html(b"#1e1e2e"),
        foreground: color::WHITE,
        grid: ColorU8::from_html(b"#c0c0c0").with_opacity(0.6),
        legend_fill: ColorU8::from_html(b"#1e1e2e").with_opacity(0.8),
        legend_border: color::WHITE,
    };

    /// Create a custom theme from background and foreground colors.
    /// The grid and legend colors are derived automatically.
    pub fn new_back_and_fore(background: ColorU8, foreground: ColorU8) -> Self {
        let grid = if background.luminance() < 0.5 {
            ColorU8::from_rgb(192, 192, 192).with_opacity(0.6)
        } else {
            ColorU8::from_rgb(128, 128, 128).with_opacity(0.6)
        };

        Self {
            background,
            foreground,
            grid,
            legend_fill: background.with_opacity(0.8),
            legend_border: foreground,
        }
    }
}

/// Predefined colors for theme elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Col {
    /// Background color
    Background,
    /// Foreground color
    Foreground,
    /// Grid line color
    Grid,
    /// Legend background fill color
    LegendFill,
    /// Legend border color
    LegendBorder,
}

impl color::Color for Col {}

impl std::str::FromStr for Col {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(Col::Background),
            "foreground" => Ok(Col::Foreground),
            "grid" => Ok(Col::Grid),
            "legend_fill" => Ok(Col::LegendFill),
            "legend_border" => Ok(Col::LegendBorder),
            _ => Err(()),
        }
    }
}

impl ResolveColor<Col> for Theme {
    fn resolve_color(&self, col: &Col) -> ColorU8 {
        match col {
            Col::Background => self.background(),
            Col::Foreground => self.foreground(),
            Col::Grid => self.grid(),
            Col::LegendFill => self.legend_fill(),
            Col::LegendBorder => self.legend_border(),
        }
    }
}

/// A flexible color for theme elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// A color from the theme
    Theme(Col),
    /// A fixed RGB color
    Fixed(ColorU8),
}

impl From<Col> for Color {
    fn from(color: Col) -> Self {
        Color::Theme(color)
    }
}

impl From<ColorU8> for Color {
    fn from(color: ColorU8) -> Self {
        Color::Fixed(color)
    }
}

impl color::Color for Color {}

impl std::str::FromStr for Color {
    type Err = <ColorU8 as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(col) = s.parse::<Col>() {
            Ok(Color::Theme(col))
        } else {
            let c = s.parse::<ColorU8>()?;
            Ok(Color::Fixed(c))
        }
    }
}

impl ResolveColor<Color> for Theme {
    fn resolve_color(&self, col: &Color) -> ColorU8 {
        match col {
            Color::Theme(col) => self.resolve_color(col),
            Color::Fixed(c) => *c,
        }
    }
}

/// Line style for theme elements
pub type Line = style::Line<Color>;

impl From<Col> for Line {
    fn from(col: Col) -> Self {
        Line::new(col.into())
    }
}

impl Default for Line {
    fn default() -> Self {
        Line::new(Col::Foreground.into())
    }
}

/// Fill style for theme elements
pub type Fill = style::Fill<Color>;

impl From<Col> for Fill {
    fn from(col: Col) -> Self {
        Fill::new(col.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_resolution() {
        let theme = Theme::Light;
        assert_eq!(theme.resolve_color(&Col::Background), color::WHITE);
        assert_eq!(
            theme.resolve_color(&Color::Fixed(color::RED)),
            color::RED
        );
        assert!(!theme.is_dark());
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn custom_theme_derivation() {
        let palette = ThemePalette::new_back_and_fore(color::BLACK, color::WHITE);
        let theme = Theme::Custom(palette);
        assert!(theme.is_dark());
        assert_eq!(theme.legend_border(), color::WHITE);
    }

    #[test]
    fn color_from_str() {
        assert_eq!(
            "foreground".parse::<Color>().unwrap(),
            Color::Theme(Col::Foreground)
        );
        assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::Fixed(color::RED));
    }
}
