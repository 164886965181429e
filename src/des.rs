//! Figure description.
//!
//! A [`Figure`] is an immutable value describing what to draw: plots,
//! series, axes and legends. It holds no graphics state and performs no
//! rendering; it is turned into a laid-out drawing by
//! [`drawing::Figure::prepare`](crate::drawing::Figure::prepare).
//!
//! Layering is by construction: a plot lists all of its series, in
//! order, and that order drives both the paint order and the automatic
//! palette and legend assignment.

use std::fmt;

pub mod axis;
pub mod pairs;
pub mod series;

mod figure;
mod plot;

pub use figure::{FigLegend, FigLegendPos, Figure, Plots};
pub use plot::{Border, Insets, Legend, LegendPos, Plot, Subplots};
pub use series::Series;

/// Index of a panel in a subplot grid, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotIdx {
    /// Row of the panel, from the top
    pub row: u32,
    /// Column of the panel, from the left
    pub col: u32,
}

impl PlotIdx {
    /// The linear row-major index for a grid with `cols` columns
    pub fn index(&self, cols: u32) -> usize {
        (self.row * cols + self.col) as usize
    }
}

impl From<(u32, u32)> for PlotIdx {
    fn from((row, col): (u32, u32)) -> Self {
        PlotIdx { row, col }
    }
}

/// Error in a figure description
#[derive(Debug)]
pub enum Error {
    /// A panel index falls outside the configured subplot grid
    OutOfGrid {
        /// The offending index
        idx: PlotIdx,
        /// Number of rows in the grid
        rows: u32,
        /// Number of columns in the grid
        cols: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfGrid { idx, rows, cols } => write!(
                f,
                "panel ({}, {}) is outside the {}x{} subplot grid",
                idx.row, idx.col, rows, cols
            ),
        }
    }
}

impl std::error::Error for Error {}
