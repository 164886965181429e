//! Figure preparation and drawing.
//!
//! [`Figure::prepare`] resolves a [`des::Figure`](crate::des::Figure)
//! against a data source: it fetches columns, computes statistics,
//! places ticks and lays out every element into figure coordinates.
//! All fallible work happens here. The resulting figure is then drawn
//! onto any [`render::Surface`](crate::render::Surface), as many times
//! and with as many styles as needed.

use std::fmt;

use crate::data;
use crate::geom;

mod axis;
mod figure;
mod legend;
mod plot;
mod scale;
mod series;
mod ticks;

pub use figure::Figure;

/// Error raised during figure preparation
#[derive(Debug)]
pub enum Error {
    /// A series references a column missing from the data source
    MissingDataSrc(String),
    /// A series references an axis its plot does not have
    UnknownAxisRef(String),
    /// An auto-scaled axis has no data to compute its range from
    UnboundedAxis,
    /// Series data that cannot be drawn as requested
    InconsistentData(String),
    /// A description that contradicts itself
    InconsistentDesign(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingDataSrc(name) => write!(f, "missing data source column: {name}"),
            Error::UnknownAxisRef(axis) => write!(f, "unknown axis reference: {axis}"),
            Error::UnboundedAxis => write!(f, "cannot compute bounds of an axis without data"),
            Error::InconsistentData(msg) => write!(f, "inconsistent data: {msg}"),
            Error::InconsistentDesign(msg) => write!(f, "inconsistent design: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<data::Error> for Error {
    fn from(err: data::Error) -> Self {
        match err {
            data::Error::MissingColumn(name) => Error::MissingDataSrc(name),
            data::Error::NotCategorical(name) => {
                Error::InconsistentData(format!("column {name} is not categorical"))
            }
            data::Error::NotNumeric(name) => {
                Error::InconsistentData(format!("column {name} is not numeric"))
            }
        }
    }
}

/// An edge of a rectangle, for layout carving
#[derive(Debug, Clone, Copy)]
pub(crate) enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Shrink `rect` from the given edge, refusing when less than one unit
/// of the affected dimension would remain. Returns whether it fit.
pub(crate) fn carve(rect: &mut geom::Rect, edge: Edge, amount: f32) -> bool {
    let fits = match edge {
        Edge::Top | Edge::Bottom => rect.height() - amount >= 1.0,
        Edge::Left | Edge::Right => rect.width() - amount >= 1.0,
    };
    if fits {
        match edge {
            Edge::Top => rect.shift_top_side(amount),
            Edge::Bottom => rect.shift_bottom_side(amount),
            Edge::Left => rect.shift_left_side(amount),
            Edge::Right => rect.shift_right_side(amount),
        }
    }
    fits
}

/// Numeric bounds accumulator.
/// Ignores non-finite samples; empty until at least one sample is pushed.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Bounds(Option<(f64, f64)>);

impl Bounds {
    pub fn new() -> Self {
        Bounds(None)
    }

    pub fn push(&mut self, v: f64) {
        if !v.is_finite() {
            return;
        }
        self.0 = match self.0 {
            Some((min, max)) => Some((min.min(v), max.max(v))),
            None => Some((v, v)),
        };
    }

    pub fn unite(&mut self, other: Bounds) {
        if let Some((min, max)) = other.0 {
            self.push(min);
            self.push(max);
        }
    }

    pub fn get(&self) -> Option<(f64, f64)> {
        self.0
    }
}

/// Ordered set of category labels, in first-seen order.
/// Indices are stable: appending never reorders previous entries.
#[derive(Debug, Clone, Default)]
pub(crate) struct Categories(Vec<String>);

impl Categories {
    pub fn new() -> Self {
        Categories(Vec::new())
    }

    /// Index of the category, inserting it at the end if new
    pub fn push_if_not_present(&mut self, cat: &str) -> usize {
        match self.0.iter().position(|c| c == cat) {
            Some(idx) => idx,
            None => {
                self.0.push(cat.to_string());
                self.0.len() - 1
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_skip_non_finite() {
        let mut b = Bounds::new();
        assert!(b.get().is_none());
        b.push(f64::NAN);
        assert!(b.get().is_none());
        b.push(2.0);
        b.push(-1.0);
        b.push(f64::INFINITY);
        assert_eq!(b.get(), Some((-1.0, 2.0)));
    }

    #[test]
    fn carve_refuses_overdraw() {
        let mut rect = geom::Rect::from_xywh(0.0, 0.0, 100.0, 50.0);
        assert!(carve(&mut rect, Edge::Top, 10.0));
        assert_eq!(rect.top(), 10.0);
        assert!(!carve(&mut rect, Edge::Bottom, 39.5));
        // a refused carve leaves the rect untouched
        assert_eq!(rect.height(), 40.0);
    }

    #[test]
    fn categories_first_seen_order() {
        let mut cats = Categories::new();
        assert_eq!(cats.push_if_not_present("b"), 0);
        assert_eq!(cats.push_if_not_present("a"), 1);
        assert_eq!(cats.push_if_not_present("b"), 0);
        assert_eq!(cats.labels(), &["b".to_string(), "a".to_string()]);
    }
}
