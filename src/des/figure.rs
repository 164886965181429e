use crate::des::{Plot, Subplots};
use crate::geom;
use crate::style::theme;

/// The plot content of a figure
#[derive(Debug, Clone)]
pub enum Plots {
    /// A single plot filling the figure
    Plot(Box<Plot>),
    /// A grid of plots
    Subplots(Subplots),
}

impl Plots {
    /// Number of panel rows
    pub fn rows(&self) -> u32 {
        match self {
            Plots::Plot(..) => 1,
            Plots::Subplots(sp) => sp.rows(),
        }
    }

    /// Number of panel columns
    pub fn cols(&self) -> u32 {
        match self {
            Plots::Plot(..) => 1,
            Plots::Subplots(sp) => sp.cols(),
        }
    }

    /// The space between panels, in figure units
    pub fn space(&self) -> f32 {
        match self {
            Plots::Plot(..) => 0.0,
            Plots::Subplots(sp) => sp.space(),
        }
    }

    /// The plot at the given grid position, if any
    pub fn plot(&self, row: u32, col: u32) -> Option<&Plot> {
        match self {
            Plots::Plot(plot) if row == 0 && col == 0 => Some(plot),
            Plots::Plot(..) => None,
            Plots::Subplots(sp) => sp.plot((row, col)),
        }
    }
}

impl From<Plot> for Plots {
    fn from(plot: Plot) -> Self {
        Plots::Plot(Box::new(plot))
    }
}

impl From<Subplots> for Plots {
    fn from(subplots: Subplots) -> Self {
        Plots::Subplots(subplots)
    }
}

/// Position of a figure-level legend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FigLegendPos {
    /// Above the plots, below the figure title
    Top,
    /// Right of the plots
    #[default]
    Right,
    /// Below the plots
    Bottom,
    /// Left of the plots
    Left,
}

impl FigLegendPos {
    /// Whether entries should stack vertically rather than in a row
    pub fn prefers_vertical(&self) -> bool {
        matches!(self, FigLegendPos::Left | FigLegendPos::Right)
    }
}

/// A figure-level legend, collecting entries from all plots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FigLegend {
    pos: FigLegendPos,
}

impl FigLegend {
    /// A legend at the default position (right)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the legend position
    pub fn with_pos(mut self, pos: FigLegendPos) -> Self {
        self.pos = pos;
        self
    }

    /// The legend position
    pub fn pos(&self) -> FigLegendPos {
        self.pos
    }
}

/// A complete figure description
#[derive(Debug, Clone)]
pub struct Figure {
    plots: Plots,
    title: Option<String>,
    size: geom::Size,
    legend: Option<FigLegend>,
    fill: Option<theme::Fill>,
    padding: f32,
}

impl Figure {
    /// A figure of the given plots, with an 800x600 canvas
    pub fn new(plots: Plots) -> Self {
        Figure {
            plots,
            title: None,
            size: geom::Size::new(800.0, 600.0),
            legend: None,
            fill: Some(theme::Col::Background.into()),
            padding: crate::defaults::FIG_PADDING,
        }
    }

    /// Set the figure title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the canvas size in figure units
    pub fn with_size(mut self, size: geom::Size) -> Self {
        self.size = size;
        self
    }

    /// Add a figure-level legend
    pub fn with_legend(mut self, legend: FigLegend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Set the background fill
    pub fn with_fill(mut self, fill: impl Into<theme::Fill>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Remove the background fill, for a transparent canvas
    pub fn without_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    /// Set the padding around the figure content, in figure units
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// The plot content
    pub fn plots(&self) -> &Plots {
        &self.plots
    }

    /// The figure title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The canvas size in figure units
    pub fn size(&self) -> geom::Size {
        self.size
    }

    /// The figure-level legend
    pub fn legend(&self) -> Option<&FigLegend> {
        self.legend.as_ref()
    }

    /// The background fill
    pub fn fill(&self) -> Option<&theme::Fill> {
        self.fill.as_ref()
    }

    /// The padding around the figure content, in figure units
    pub fn padding(&self) -> f32 {
        self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_plot_grid() {
        let fig = Figure::new(Plot::new(vec![]).into());
        assert_eq!(fig.plots().rows(), 1);
        assert_eq!(fig.plots().cols(), 1);
        assert!(fig.plots().plot(0, 0).is_some());
        assert!(fig.plots().plot(0, 1).is_none());
    }

    #[test]
    fn subplots_grid_access() {
        let grid = Subplots::new(2, 2)
            .with_plot((0, 1), Plot::new(vec![]))
            .unwrap();
        let fig = Figure::new(grid.into());
        assert_eq!(fig.plots().rows(), 2);
        assert!(fig.plots().plot(0, 1).is_some());
        assert!(fig.plots().plot(1, 1).is_none());
    }
}
