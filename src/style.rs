//! Styling of figures.
//!
//! Styling is resolved late: figure descriptions and prepared drawings
//! carry abstract colors (theme entries, palette indices), and a
//! [`Style`] turns them into concrete values when the figure is drawn.
//! The same prepared figure can therefore be drawn with different styles.

use crate::color::{Color, ColorU8};
pub use crate::color::ResolveColor;
use crate::{geom, render};

pub mod series;
pub mod theme;

pub use theme::{Theme, ThemePalette};

/// A style, pairing a theme with a series palette
#[derive(Debug, Clone, PartialEq)]
pub struct Style<P = series::palette::Builtin> {
    /// Theme for the figure chrome (background, axes, grid, legend)
    pub theme: theme::Theme,
    /// Palette for series colors
    pub palette: P,
}

impl<P: Default> Default for Style<P> {
    fn default() -> Self {
        Style {
            theme: theme::Theme::default(),
            palette: P::default(),
        }
    }
}

impl<P> ResolveColor<theme::Col> for Style<P> {
    fn resolve_color(&self, color: &theme::Col) -> ColorU8 {
        self.theme.resolve_color(color)
    }
}

impl<P> ResolveColor<theme::Color> for Style<P> {
    fn resolve_color(&self, color: &theme::Color) -> ColorU8 {
        self.theme.resolve_color(color)
    }
}

impl<P: series::Palette> ResolveColor<series::IndexColor> for Style<P> {
    fn resolve_color(&self, color: &series::IndexColor) -> ColorU8 {
        self.palette.get(*color)
    }
}

/// Series colors resolve against a style paired with the series index,
/// which drives automatic palette assignment.
impl<P: series::Palette> ResolveColor<series::Color> for (&Style<P>, usize) {
    fn resolve_color(&self, color: &series::Color) -> ColorU8 {
        match color {
            series::Color::Auto => self.0.palette.get(series::IndexColor(self.1)),
            series::Color::Index(idx) => self.0.palette.get(series::IndexColor(*idx)),
            series::Color::Fixed(col) => *col,
        }
    }
}

impl<P> ResolveColor<theme::Color> for (&Style<P>, usize) {
    fn resolve_color(&self, color: &theme::Color) -> ColorU8 {
        self.0.theme.resolve_color(color)
    }
}

/// Dash pattern, relative to the line width
#[derive(Debug, Clone, PartialEq)]
pub struct Dash(pub Vec<f32>);

const DOT_DASH: [f32; 2] = [1.0, 1.0];

/// Line pattern
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LinePattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line, pattern relative to line width
    Dash(Dash),
    /// Dotted line
    Dot,
}

impl LinePattern {
    /// The pattern as a render primitive
    pub fn as_render(&self) -> render::LinePattern<'_> {
        match self {
            LinePattern::Solid => render::LinePattern::Solid,
            LinePattern::Dash(dash) => render::LinePattern::Dash(&dash.0),
            LinePattern::Dot => render::LinePattern::Dash(&DOT_DASH),
        }
    }
}

/// Line style, generic over the abstract color type
#[derive(Debug, Clone, PartialEq)]
pub struct Line<C> {
    /// Line color
    pub color: C,
    /// Line width
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern,
    /// Optional opacity factor in [0, 1], applied at resolution
    pub opacity: Option<f32>,
}

impl<C: Color> Line<C> {
    /// A solid line of width 1 with the given color
    pub fn new(color: C) -> Self {
        Line {
            color,
            width: 1.0,
            pattern: LinePattern::Solid,
            opacity: None,
        }
    }

    /// Set the line width
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the line pattern
    pub fn with_pattern(mut self, pattern: LinePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set the opacity factor in [0, 1]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Resolve into a render stroke
    pub fn as_stroke<R>(&self, rc: &R) -> render::Stroke<'_>
    where
        R: ResolveColor<C>,
    {
        let mut color = self.color.resolve(rc);
        if let Some(opacity) = self.opacity {
            color = color.with_opacity(opacity);
        }
        render::Stroke {
            color,
            width: self.width,
            pattern: self.pattern.as_render(),
        }
    }
}

impl<C: Color> From<C> for Line<C> {
    fn from(color: C) -> Self {
        Line::new(color)
    }
}

/// Fill style, generic over the abstract color type
#[derive(Debug, Clone, PartialEq)]
pub enum Fill<C> {
    /// Solid fill
    Solid {
        /// Fill color
        color: C,
        /// Optional opacity factor in [0, 1], applied at resolution
        opacity: Option<f32>,
    },
}

impl<C: Color> Fill<C> {
    /// An opaque solid fill with the given color
    pub fn new(color: C) -> Self {
        Fill::Solid {
            color,
            opacity: None,
        }
    }

    /// Set the opacity factor in [0, 1]
    pub fn with_opacity(self, opacity: f32) -> Self {
        match self {
            Fill::Solid { color, .. } => Fill::Solid {
                color,
                opacity: Some(opacity),
            },
        }
    }

    /// Resolve into a render paint
    pub fn as_paint<R>(&self, rc: &R) -> render::Paint
    where
        R: ResolveColor<C>,
    {
        match self {
            Fill::Solid { color, opacity } => {
                let mut color = color.resolve(rc);
                if let Some(opacity) = opacity {
                    color = color.with_opacity(*opacity);
                }
                render::Paint::Solid(color)
            }
        }
    }
}

impl<C: Color> From<C> for Fill<C> {
    fn from(color: C) -> Self {
        Fill::new(color)
    }
}

/// Marker shape for scatter series and outliers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerShape {
    /// Circle
    #[default]
    Circle,
    /// Square
    Square,
    /// Diamond
    Diamond,
    /// Diagonal cross
    Cross,
    /// Upright cross
    Plus,
    /// Upward triangle
    TriangleUp,
    /// Downward triangle
    TriangleDown,
}

impl MarkerShape {
    /// True for shapes made of strokes only, with no fillable interior
    pub fn is_open(&self) -> bool {
        matches!(self, MarkerShape::Cross | MarkerShape::Plus)
    }

    /// Build the shape outline centered on the origin, `size` wide
    pub fn to_path(&self, size: f32) -> geom::Path {
        let r = size / 2.0;
        let mut pb = geom::PathBuilder::new();
        match self {
            MarkerShape::Circle => {
                pb.push_circle(0.0, 0.0, r);
            }
            MarkerShape::Square => {
                geom::push_rect(&mut pb, &geom::Rect::from_xywh(-r, -r, size, size));
            }
            MarkerShape::Diamond => {
                pb.move_to(0.0, -r);
                pb.line_to(r, 0.0);
                pb.line_to(0.0, r);
                pb.line_to(-r, 0.0);
                pb.close();
            }
            MarkerShape::Cross => {
                let d = r * std::f32::consts::FRAC_1_SQRT_2;
                pb.move_to(-d, -d);
                pb.line_to(d, d);
                pb.move_to(-d, d);
                pb.line_to(d, -d);
            }
            MarkerShape::Plus => {
                pb.move_to(-r, 0.0);
                pb.line_to(r, 0.0);
                pb.move_to(0.0, -r);
                pb.line_to(0.0, r);
            }
            MarkerShape::TriangleUp => {
                let h = r * 0.866;
                pb.move_to(0.0, -r);
                pb.line_to(h, r / 2.0);
                pb.line_to(-h, r / 2.0);
                pb.close();
            }
            MarkerShape::TriangleDown => {
                let h = r * 0.866;
                pb.move_to(0.0, r);
                pb.line_to(h, -r / 2.0);
                pb.line_to(-h, -r / 2.0);
                pb.close();
            }
        }
        pb.finish().unwrap()
    }
}

/// Marker style, generic over the abstract color type
#[derive(Debug, Clone, PartialEq)]
pub struct Marker<C> {
    /// Marker size (width of the shape)
    pub size: f32,
    /// Marker shape
    pub shape: MarkerShape,
    /// Fill of the shape interior
    pub fill: Option<Fill<C>>,
    /// Stroke of the shape outline
    pub stroke: Option<Line<C>>,
}

impl<C: Color> Marker<C> {
    /// A filled circle marker of default size with the given color
    pub fn new(color: C) -> Self {
        Marker {
            size: 5.0,
            shape: MarkerShape::default(),
            fill: Some(Fill::new(color)),
            stroke: None,
        }
    }

    /// Set the marker size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the marker shape
    pub fn with_shape(mut self, shape: MarkerShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the fill style
    pub fn with_fill(mut self, fill: Fill<C>) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Remove the fill style
    pub fn without_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    /// Set the stroke style
    pub fn with_stroke(mut self, stroke: Line<C>) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_color_follows_series_index() {
        let style = Style::<series::palette::Builtin>::default();
        let color = series::Color::Auto;
        let c0 = (&style, 0usize).resolve_color(&color);
        let c1 = (&style, 1usize).resolve_color(&color);
        assert_ne!(c0, c1);
        assert_eq!(c0, series::palette::STANDARD[0]);
        assert_eq!(c1, series::palette::STANDARD[1]);
    }

    #[test]
    fn palette_recycles_modulo_len() {
        let style = Style::<series::palette::Builtin>::default();
        let len = series::Palette::len(&style.palette);
        let color = series::Color::Auto;
        let first = (&style, 0usize).resolve_color(&color);
        let recycled = (&style, len).resolve_color(&color);
        assert_eq!(first, recycled);
    }

    #[test]
    fn fixed_color_ignores_palette() {
        let style = Style::<series::palette::Builtin>::default();
        let red = crate::color::RED;
        let c = (&style, 3usize).resolve_color(&series::Color::Fixed(red));
        assert_eq!(c, red);
    }

    #[test]
    fn opacity_applied_at_resolution() {
        let style = Style::<series::palette::Builtin>::default();
        let fill = series::Fill::new(series::Color::Fixed(crate::color::BLUE)).with_opacity(0.5);
        let render::Paint::Solid(c) = fill.as_paint(&(&style, 0usize));
        assert_eq!(c.alpha(), 127);
    }
}
