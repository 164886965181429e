//! Render module: abstraction over rendering surfaces.
//!
//! All rendering backends implement the [`Surface`] trait. The drawing
//! step emits surface commands; it never renders pixels or glyphs
//! itself. Text in particular is passed through as plain strings, with
//! extents estimated from the font size for layout purposes, and is
//! rendered natively by the backend.

use crate::{ColorU8, geom};

/// Surface trait: the rendering surface API
pub trait Surface {
    /// Prepare the surface for drawing, with the given size in figure units
    fn prepare(&mut self, size: geom::Size);

    /// Fill the entire surface with the given paint
    fn fill(&mut self, fill: Paint);

    /// Draw a rectangle.
    ///
    /// The default implementation converts the rectangle to a path and
    /// calls [`draw_path`](Surface::draw_path).
    fn draw_rect(&mut self, rect: &Rect) {
        let path = rect.rect.to_path();
        let rpath = self::Path {
            path: &path,
            fill: rect.fill,
            stroke: rect.stroke,
            transform: rect.transform,
        };
        self.draw_path(&rpath);
    }

    /// Draw a path
    fn draw_path(&mut self, path: &Path);

    /// Draw a single line of text.
    ///
    /// The text origin is the baseline start (or the anchor point for
    /// middle/end anchors), placed by the transform.
    fn draw_text(&mut self, text: &Text);

    /// Push a clipping rect.
    /// Subsequent draw operations are clipped to this rect,
    /// until a matching [`pop_clip`](Surface::pop_clip) is called.
    fn push_clip(&mut self, clip: &Clip);

    /// Pop a clipping rect previously pushed with [`push_clip`](Surface::push_clip)
    fn pop_clip(&mut self);
}

/// Paint pattern, used for fill operations
#[derive(Debug, Clone, Copy)]
pub enum Paint {
    /// Solid color fill
    Solid(ColorU8),
}

impl From<ColorU8> for Paint {
    fn from(value: ColorU8) -> Self {
        Paint::Solid(value)
    }
}

/// Line pattern defines how a stroke is dashed
#[derive(Debug, Clone, Copy, Default)]
pub enum LinePattern<'a> {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line. The pattern is relative to the line width.
    Dash(&'a [f32]),
}

/// Stroke style definition
#[derive(Debug, Clone, Copy)]
pub struct Stroke<'a> {
    /// Line color
    pub color: ColorU8,
    /// Line width in figure units
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern<'a>,
}

/// Rectangle to draw
#[derive(Debug, Clone)]
pub struct Rect<'a> {
    /// Rectangle geometry
    pub rect: geom::Rect,
    /// Fill style
    pub fill: Option<Paint>,
    /// Stroke style
    pub stroke: Option<Stroke<'a>>,
    /// Optional transform to apply to the rectangle
    pub transform: Option<&'a geom::Transform>,
}

/// Path to draw
#[derive(Debug, Clone)]
pub struct Path<'a> {
    /// Path geometry
    pub path: &'a geom::Path,
    /// Fill style
    pub fill: Option<Paint>,
    /// Stroke style
    pub stroke: Option<Stroke<'a>>,
    /// Optional transform to apply to the path
    pub transform: Option<&'a geom::Transform>,
}

/// Clipping rectangle
#[derive(Debug, Clone)]
pub struct Clip<'a> {
    /// Clipping rectangle
    pub rect: &'a geom::Rect,
    /// Optional transform to apply to the clipping rectangle
    pub transform: Option<&'a geom::Transform>,
}

/// Horizontal anchoring of a text run relative to its origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// The origin is the start of the baseline
    #[default]
    Start,
    /// The origin is the middle of the baseline
    Middle,
    /// The origin is the end of the baseline
    End,
}

/// A font specification.
///
/// Backends render with their native sans-serif face; only the size is
/// specified. Extents are estimated with fixed ratios, which is
/// sufficient for layout of tick labels and titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Font size in figure units
    pub size: f32,
}

/// Average glyph advance, as a fraction of the font size
const AVG_ADVANCE: f32 = 0.58;
/// Ascent above the baseline, as a fraction of the font size
const ASCENT: f32 = 0.78;
/// Descent below the baseline, as a fraction of the font size
const DESCENT: f32 = 0.22;

impl Font {
    /// A font of the given size
    pub const fn new(size: f32) -> Self {
        Font { size }
    }

    /// Estimated width of a text run in this font
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * AVG_ADVANCE
    }

    /// Estimated total line height
    pub fn height(&self) -> f32 {
        self.size * (ASCENT + DESCENT)
    }

    /// Estimated ascent above the baseline
    pub fn ascent(&self) -> f32 {
        self.size * ASCENT
    }

    /// Estimated descent below the baseline
    pub fn descent(&self) -> f32 {
        self.size * DESCENT
    }
}

/// Text to draw
#[derive(Debug, Clone)]
pub struct Text<'a> {
    /// The text content, a single line
    pub text: &'a str,
    /// The font to render with
    pub font: Font,
    /// Fill of the glyphs
    pub fill: Option<Paint>,
    /// Anchoring of the run relative to its origin
    pub anchor: TextAnchor,
    /// Transform placing (and possibly rotating) the run
    pub transform: Option<&'a geom::Transform>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_extents_scale_with_size() {
        let small = Font::new(10.0);
        let large = Font::new(20.0);
        assert!(large.text_width("abc") > small.text_width("abc"));
        assert_eq!(large.height(), 2.0 * small.height());
        assert!(small.ascent() + small.descent() == small.height());
    }

    #[test]
    fn text_width_counts_chars() {
        let font = Font::new(10.0);
        assert_eq!(font.text_width(""), 0.0);
        assert_eq!(font.text_width("ab"), 2.0 * font.text_width("a"));
    }
}
