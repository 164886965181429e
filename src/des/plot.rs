use crate::des::{axis, Error, PlotIdx, Series};
use crate::style::theme;

/// Plot area framing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Border {
    /// A full box around the plot area
    #[default]
    Box,
    /// Spines along the sides that carry axes
    Axis,
}

/// Padding between the data range and the plot edges, per axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Insets {
    /// Expand the data range by 4% on each side
    #[default]
    Auto,
    /// Expand the data range by the given fractions of its span,
    /// low side first
    Fixed(f32, f32),
}

/// Position of a plot legend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegendPos {
    /// Above the plot area
    OutTop,
    /// Right of the plot area
    OutRight,
    /// Below the plot area
    OutBottom,
    /// Left of the plot area
    OutLeft,
    /// Inside, top-left corner
    InTopLeft,
    /// Inside, top-right corner
    #[default]
    InTopRight,
    /// Inside, bottom-left corner
    InBottomLeft,
    /// Inside, bottom-right corner
    InBottomRight,
}

impl LegendPos {
    /// Whether the legend overlays the plot area
    pub fn is_inside(&self) -> bool {
        matches!(
            self,
            LegendPos::InTopLeft
                | LegendPos::InTopRight
                | LegendPos::InBottomLeft
                | LegendPos::InBottomRight
        )
    }

    /// Whether entries should stack vertically rather than in a row
    pub fn prefers_vertical(&self) -> bool {
        !matches!(self, LegendPos::OutTop | LegendPos::OutBottom)
    }
}

/// A plot legend description
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Legend {
    pos: LegendPos,
}

impl Legend {
    /// A legend at the default position (inside, top-right)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the legend position
    pub fn with_pos(mut self, pos: LegendPos) -> Self {
        self.pos = pos;
        self
    }

    /// The legend position
    pub fn pos(&self) -> LegendPos {
        self.pos
    }
}

/// A plot: series drawn in a cartesian area framed by axes.
///
/// A plot starts with one default x axis and one default y axis.
/// The first call to [`with_x_axis`](Plot::with_x_axis) replaces the
/// default x axis and further calls add more; the same goes for the
/// y axes. Series pick their axes with [`axis::Ref`].
#[derive(Debug, Clone)]
pub struct Plot {
    series: Vec<Series>,
    x_axes: Vec<axis::Axis>,
    y_axes: Vec<axis::Axis>,
    x_axis_set: bool,
    y_axis_set: bool,
    title: Option<String>,
    fill: Option<theme::Fill>,
    border: Option<Border>,
    insets: Insets,
    legend: Option<Legend>,
}

impl Plot {
    /// A plot of the given series, with default axes
    pub fn new(series: Vec<Series>) -> Self {
        Plot {
            series,
            x_axes: vec![axis::Axis::default()],
            y_axes: vec![axis::Axis::default()],
            x_axis_set: false,
            y_axis_set: false,
            title: None,
            fill: None,
            border: Some(Border::default()),
            insets: Insets::default(),
            legend: None,
        }
    }

    /// Set the plot title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a horizontal axis.
    /// The first call replaces the default axis, further calls add
    /// secondary axes.
    pub fn with_x_axis(mut self, axis: axis::Axis) -> Self {
        if self.x_axis_set {
            self.x_axes.push(axis);
        } else {
            self.x_axes = vec![axis];
            self.x_axis_set = true;
        }
        self
    }

    /// Set a vertical axis.
    /// The first call replaces the default axis, further calls add
    /// secondary axes.
    pub fn with_y_axis(mut self, axis: axis::Axis) -> Self {
        if self.y_axis_set {
            self.y_axes.push(axis);
        } else {
            self.y_axes = vec![axis];
            self.y_axis_set = true;
        }
        self
    }

    /// Fill the plot area background
    pub fn with_fill(mut self, fill: impl Into<theme::Fill>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the plot area framing
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Remove the plot area framing
    pub fn without_border(mut self) -> Self {
        self.border = None;
        self
    }

    /// Set the padding between data range and plot edges
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Add a legend to the plot
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// The series of the plot, in paint order
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The horizontal axes
    pub fn x_axes(&self) -> &[axis::Axis] {
        &self.x_axes
    }

    /// The vertical axes
    pub fn y_axes(&self) -> &[axis::Axis] {
        &self.y_axes
    }

    /// The plot title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The plot area background fill
    pub fn fill(&self) -> Option<&theme::Fill> {
        self.fill.as_ref()
    }

    /// The plot area framing
    pub fn border(&self) -> Option<Border> {
        self.border
    }

    /// The padding between data range and plot edges
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// The plot legend
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }
}

/// A grid of plots sharing a figure
#[derive(Debug, Clone)]
pub struct Subplots {
    rows: u32,
    cols: u32,
    plots: Vec<Option<Plot>>,
    space: f32,
}

impl Subplots {
    /// An empty grid of the given dimensions
    pub fn new(rows: u32, cols: u32) -> Self {
        let mut plots = Vec::new();
        plots.resize_with((rows * cols) as usize, || None);
        Subplots {
            rows,
            cols,
            plots,
            space: crate::defaults::SUBPLOTS_SPACE,
        }
    }

    /// Place a plot in the grid
    pub fn set_plot(&mut self, idx: impl Into<PlotIdx>, plot: Plot) -> Result<(), Error> {
        let idx = idx.into();
        if idx.row >= self.rows || idx.col >= self.cols {
            return Err(Error::OutOfGrid {
                idx,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.plots[idx.index(self.cols)] = Some(plot);
        Ok(())
    }

    /// Place a plot in the grid, builder style
    pub fn with_plot(mut self, idx: impl Into<PlotIdx>, plot: Plot) -> Result<Self, Error> {
        self.set_plot(idx, plot)?;
        Ok(self)
    }

    /// Set the space between panels, in figure units
    pub fn with_space(mut self, space: f32) -> Self {
        self.space = space;
        self
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The space between panels, in figure units
    pub fn space(&self) -> f32 {
        self.space
    }

    /// The plot at the given position, if any.
    /// Out of grid positions return `None`.
    pub fn plot(&self, idx: impl Into<PlotIdx>) -> Option<&Plot> {
        let idx = idx.into();
        if idx.row >= self.rows || idx.col >= self.cols {
            return None;
        }
        self.plots[idx.index(self.cols)].as_ref()
    }

    /// Iterate the grid cells in row-major order
    pub fn plots(&self) -> impl Iterator<Item = Option<&Plot>> {
        self.plots.iter().map(|p| p.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_axis_call_replaces_default() {
        let plot = Plot::new(vec![]);
        assert_eq!(plot.y_axes().len(), 1);

        let plot = plot
            .with_y_axis(axis::Axis::new().with_id("left"))
            .with_y_axis(axis::Axis::new().with_id("right"));
        assert_eq!(plot.y_axes().len(), 2);
        assert_eq!(plot.y_axes()[0].id(), Some("left"));
        assert_eq!(plot.y_axes()[1].id(), Some("right"));
    }

    #[test]
    fn subplots_grid() {
        let mut grid = Subplots::new(2, 3);
        grid.set_plot((1, 2), Plot::new(vec![])).unwrap();
        assert!(grid.plot((1, 2)).is_some());
        assert!(grid.plot((0, 0)).is_none());
        assert!(grid.plot((5, 5)).is_none());

        let res = grid.set_plot((2, 0), Plot::new(vec![]));
        assert!(matches!(
            res,
            Err(Error::OutOfGrid { rows: 2, cols: 3, .. })
        ));

        assert_eq!(grid.plots().count(), 6);
        assert_eq!(grid.plots().flatten().count(), 1);
    }
}
