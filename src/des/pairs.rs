//! Scatter-plot matrix builder.
//!
//! Expands a list of numeric field names into an n-by-n [`Subplots`]
//! grid: each off-diagonal panel is a scatter plot of one field
//! against another, and diagonal panels carry the field names.

use crate::des::{axis, plot, series, Error, Subplots};
use crate::style::series as style;

/// A scatter-plot matrix description
#[derive(Debug, Clone)]
pub struct ScatterMatrix {
    fields: Vec<String>,
    marker: style::Marker,
    space: f32,
}

impl ScatterMatrix {
    /// A matrix over the given data source fields
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Self {
        ScatterMatrix {
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
            marker: style::Marker::default().with_size(3.0),
            space: crate::defaults::SUBPLOTS_SPACE,
        }
    }

    /// Set the marker used by every panel
    pub fn with_marker(mut self, marker: style::Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Set the space between panels, in figure units
    pub fn with_space(mut self, space: f32) -> Self {
        self.space = space;
        self
    }

    /// The fields of the matrix
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Expand the matrix into a subplot grid.
    ///
    /// The panel at row `i`, column `j` plots field `i` on the vertical
    /// axis against field `j` on the horizontal axis, matching the
    /// reading order of the diagonal labels.
    pub fn build(&self) -> Result<Subplots, Error> {
        let n = self.fields.len() as u32;
        let mut grid = Subplots::new(n, n).with_space(self.space);

        for (i, row_field) in self.fields.iter().enumerate() {
            for (j, col_field) in self.fields.iter().enumerate() {
                let plot = if i == j {
                    Self::label_panel(row_field)
                } else {
                    let scatter = series::Scatter::new(
                        col_field.as_str().into(),
                        row_field.as_str().into(),
                    )
                    .with_marker(self.marker.clone());
                    plot::Plot::new(vec![scatter.into()])
                };
                grid.set_plot((i as u32, j as u32), plot)?;
            }
        }

        Ok(grid)
    }

    /// A diagonal panel: no series, no ticks, only the field name
    fn label_panel(field: &str) -> plot::Plot {
        let hidden = axis::Axis::new()
            .with_scale(axis::Scale::Fixed { min: 0.0, max: 1.0 })
            .with_ticks(axis::Ticks::new().with_locator(axis::ticks::Locator::Breaks(vec![])));
        plot::Plot::new(vec![])
            .with_title(field)
            .with_x_axis(hidden.clone())
            .with_y_axis(hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::Series;

    #[test]
    fn matrix_shape() {
        let grid = ScatterMatrix::new(&["a", "b", "c"]).build().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.plots().flatten().count(), 9);
    }

    #[test]
    fn diagonal_panels_carry_labels() {
        let grid = ScatterMatrix::new(&["a", "b"]).build().unwrap();
        let diag = grid.plot((1, 1)).unwrap();
        assert_eq!(diag.title(), Some("b"));
        assert!(diag.series().is_empty());
    }

    #[test]
    fn off_diagonal_panels_pair_fields() {
        let grid = ScatterMatrix::new(&["a", "b"]).build().unwrap();
        let panel = grid.plot((0, 1)).unwrap();
        match &panel.series()[0] {
            Series::Scatter(s) => {
                assert_eq!(s.x_data().src_ref(), Some("b"));
                assert_eq!(s.y_data().src_ref(), Some("a"));
            }
            other => panic!("expected a scatter series, got {other:?}"),
        }
    }
}
