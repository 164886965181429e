/*!
 * Geometric primitives.
 *
 * Paths, points and transforms are publicly imported from tiny-skia-path.
 *
 * The Y axis grows downwards.
 */

use strict_num::{FiniteF32, PositiveF32};
pub use tiny_skia_path::{Path, PathBuilder, PathSegment, Point, Transform};

/// A 2D size, width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    w: f32,
    h: f32,
}

impl Size {
    /// Build a size from width and height
    pub const fn new(w: f32, h: f32) -> Self {
        Size { w, h }
    }

    /// The width
    pub const fn width(&self) -> f32 {
        self.w
    }

    /// The height
    pub const fn height(&self) -> f32 {
        self.h
    }

    /// Expand width and height by dw and dh
    pub const fn expand(&self, dw: f32, dh: f32) -> Size {
        Size {
            w: self.w + dw,
            h: self.h + dh,
        }
    }
}

/// An axis-aligned rectangle.
///
/// Coordinates are checked: x and y must be finite, width and height
/// must be positive or zero. Violations are programming errors and panic.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    x: FiniteF32,
    y: FiniteF32,
    w: PositiveF32,
    h: PositiveF32,
}

impl Rect {
    /// Build a rectangle from x, y, width and height
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect {
            x: FiniteF32::new(x).unwrap(),
            y: FiniteF32::new(y).unwrap(),
            w: PositiveF32::new(w).unwrap(),
            h: PositiveF32::new(h).unwrap(),
        }
    }

    /// Build a rectangle from top, right, bottom and left edges
    pub fn from_trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Rect::from_xywh(left, top, right - left, bottom - top)
    }

    /// Build a rectangle from its top-left point and size
    pub fn from_ps(top_left: Point, size: Size) -> Self {
        Rect::from_xywh(top_left.x, top_left.y, size.w, size.h)
    }

    /// Shrink the rectangle by removing padding from the 4 sides
    pub fn pad(&self, padding: &Padding) -> Self {
        Rect::from_xywh(
            self.x() + padding.left(),
            self.y() + padding.top(),
            self.width() - padding.sum_hor(),
            self.height() - padding.sum_ver(),
        )
    }

    /// The size of the rectangle
    pub const fn size(&self) -> Size {
        Size {
            w: self.width(),
            h: self.height(),
        }
    }

    /// The X coordinate of the left side
    pub const fn x(&self) -> f32 {
        self.x.get()
    }

    /// The Y coordinate of the top side
    pub const fn y(&self) -> f32 {
        self.y.get()
    }

    /// The width of the rectangle
    pub const fn width(&self) -> f32 {
        self.w.get()
    }

    /// The height of the rectangle
    pub const fn height(&self) -> f32 {
        self.h.get()
    }

    /// The top Y coordinate
    pub const fn top(&self) -> f32 {
        self.y.get()
    }

    /// The right X coordinate
    pub const fn right(&self) -> f32 {
        self.x.get() + self.w.get()
    }

    /// The bottom Y coordinate
    pub const fn bottom(&self) -> f32 {
        self.y.get() + self.h.get()
    }

    /// The left X coordinate
    pub const fn left(&self) -> f32 {
        self.x.get()
    }

    /// The top-left point of the rectangle
    pub const fn top_left(&self) -> Point {
        Point {
            x: self.left(),
            y: self.top(),
        }
    }

    /// The horizontal center X coordinate
    pub const fn center_x(&self) -> f32 {
        self.x() + self.width() / 2.0
    }

    /// The vertical center Y coordinate
    pub const fn center_y(&self) -> f32 {
        self.y() + self.height() / 2.0
    }

    /// The center point of the rectangle
    pub const fn center(&self) -> Point {
        Point {
            x: self.center_x(),
            y: self.center_y(),
        }
    }

    /// A copy of the rect with the top side shifted down by shift
    pub fn shifted_top_side(&self, shift: f32) -> Rect {
        Rect::from_xywh(
            self.x(),
            self.y() + shift,
            self.width(),
            self.height() - shift,
        )
    }

    /// Shift the top side down by shift (in-place)
    pub fn shift_top_side(&mut self, shift: f32) {
        *self = self.shifted_top_side(shift);
    }

    /// Shift the bottom side up by shift (in-place)
    pub fn shift_bottom_side(&mut self, shift: f32) {
        *self = Rect::from_xywh(self.x(), self.y(), self.width(), self.height() - shift);
    }

    /// Shift the left side right by shift (in-place)
    pub fn shift_left_side(&mut self, shift: f32) {
        *self = Rect::from_xywh(
            self.x() + shift,
            self.y(),
            self.width() - shift,
            self.height(),
        );
    }

    /// Shift the right side left by shift (in-place)
    pub fn shift_right_side(&mut self, shift: f32) {
        *self = Rect::from_xywh(self.x(), self.y(), self.width() - shift, self.height());
    }

    /// A copy of the rect translated by dx and dy
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::from_xywh(self.x() + dx, self.y() + dy, self.width(), self.height())
    }

    /// Test whether the rectangle contains a point
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Build a path tracing the rectangle outline
    pub fn to_path(&self) -> Path {
        let mut pb = PathBuilder::new();
        push_rect(&mut pb, self);
        pb.finish().unwrap()
    }
}

/// Append a rectangle outline to a path under construction
pub fn push_rect(pb: &mut PathBuilder, rect: &Rect) {
    pb.move_to(rect.left(), rect.top());
    pb.line_to(rect.right(), rect.top());
    pb.line_to(rect.right(), rect.bottom());
    pb.line_to(rect.left(), rect.bottom());
    pb.close();
}

/// Padding within a graphical element
#[derive(Debug, Clone, Copy)]
pub enum Padding {
    /// Uniform padding in all directions
    Even(f32),
    /// Vertical and horizontal padding
    Center {
        /// Vertical padding
        v: f32,
        /// Horizontal padding
        h: f32,
    },
    /// Top, right, bottom and left padding
    Custom {
        /// Top padding
        t: f32,
        /// Right padding
        r: f32,
        /// Bottom padding
        b: f32,
        /// Left padding
        l: f32,
    },
}

impl Padding {
    /// The top padding
    pub const fn top(&self) -> f32 {
        match self {
            Padding::Even(p) => *p,
            Padding::Center { v, .. } => *v,
            Padding::Custom { t, .. } => *t,
        }
    }

    /// The right padding
    pub const fn right(&self) -> f32 {
        match self {
            Padding::Even(p) => *p,
            Padding::Center { h, .. } => *h,
            Padding::Custom { r, .. } => *r,
        }
    }

    /// The bottom padding
    pub const fn bottom(&self) -> f32 {
        match self {
            Padding::Even(p) => *p,
            Padding::Center { v, .. } => *v,
            Padding::Custom { b, .. } => *b,
        }
    }

    /// The left padding
    pub const fn left(&self) -> f32 {
        match self {
            Padding::Even(p) => *p,
            Padding::Center { h, .. } => *h,
            Padding::Custom { l, .. } => *l,
        }
    }

    /// The total vertical padding
    pub const fn sum_ver(&self) -> f32 {
        match self {
            Padding::Even(p) => *p * 2.0,
            Padding::Center { v, .. } => *v * 2.0,
            Padding::Custom { t, b, .. } => *t + *b,
        }
    }

    /// The total horizontal padding
    pub const fn sum_hor(&self) -> f32 {
        match self {
            Padding::Even(p) => *p * 2.0,
            Padding::Center { h, .. } => *h * 2.0,
            Padding::Custom { l, r, .. } => *l + *r,
        }
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Padding::Even(value)
    }
}

impl From<(f32, f32)> for Padding {
    fn from((v, h): (f32, f32)) -> Self {
        Padding::Center { v, h }
    }
}

impl From<(f32, f32, f32, f32)> for Padding {
    fn from((t, r, b, l): (f32, f32, f32, f32)) -> Self {
        Padding::Custom { t, r, b, l }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center_x(), 60.0);
        assert_eq!(r.center_y(), 45.0);
    }

    #[test]
    fn rect_pad() {
        let r = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let p = r.pad(&Padding::Custom {
            t: 10.0,
            r: 20.0,
            b: 30.0,
            l: 40.0,
        });
        assert_eq!(p.left(), 40.0);
        assert_eq!(p.top(), 10.0);
        assert_eq!(p.width(), 40.0);
        assert_eq!(p.height(), 60.0);
    }

    #[test]
    fn rect_side_shifts() {
        let mut r = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        r.shift_left_side(10.0);
        r.shift_right_side(10.0);
        r.shift_top_side(5.0);
        r.shift_bottom_side(5.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 90.0);
        assert_eq!(r.top(), 5.0);
        assert_eq!(r.bottom(), 95.0);
    }
}
