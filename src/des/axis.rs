//! Axis description.

use crate::style::theme;

/// Reference from a series to one of the axes of its plot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ref {
    /// Reference by index in the plot's axis list
    Idx(usize),
    /// Reference by axis id, or by title if no id matches
    Id(String),
}

impl Default for Ref {
    fn default() -> Self {
        Ref::Idx(0)
    }
}

impl From<usize> for Ref {
    fn from(idx: usize) -> Self {
        Ref::Idx(idx)
    }
}

impl From<&str> for Ref {
    fn from(id: &str) -> Self {
        Ref::Id(id.to_string())
    }
}

/// Side of the plot the axis is drawn on.
///
/// The default side is bottom for horizontal axes and left for vertical
/// axes; `Opposite` selects top and right respectively, as for the
/// secondary axis of a dual-axis overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    /// Bottom or left
    #[default]
    Default,
    /// Top or right
    Opposite,
}

/// Axis range
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Scale {
    /// Range computed from the data of the series attached to this axis
    #[default]
    Auto,
    /// Fixed range
    Fixed {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Tick placement and formatting
pub mod ticks {
    /// Tick locator
    #[derive(Debug, Clone, Default, PartialEq)]
    pub enum Locator {
        /// Round tick steps, at most 10 intervals
        #[default]
        Auto,
        /// Round tick steps, at most `bins` intervals
        MaxN {
            /// Maximum number of tick intervals
            bins: u32,
        },
        /// Explicit tick positions, used as given
        Breaks(Vec<f64>),
    }

    /// Tick label formatter
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum Formatter {
        /// Precision chosen from the data magnitude
        #[default]
        Auto,
        /// Fixed number of decimals
        Prec(usize),
        /// Percentage of 1, with the given number of decimals
        Percent(usize),
    }
}

/// Ticks description of an axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ticks {
    locator: ticks::Locator,
    formatter: ticks::Formatter,
    rotate_labels: Option<f32>,
}

impl Ticks {
    /// Default ticks: auto locator and formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick locator
    pub fn with_locator(mut self, locator: ticks::Locator) -> Self {
        self.locator = locator;
        self
    }

    /// Set the tick label formatter
    pub fn with_formatter(mut self, formatter: ticks::Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Rotate tick labels by the given angle in degrees.
    /// Useful for crowded category labels.
    pub fn with_rotate_labels(mut self, degrees: f32) -> Self {
        self.rotate_labels = Some(degrees);
        self
    }

    /// The tick locator
    pub fn locator(&self) -> &ticks::Locator {
        &self.locator
    }

    /// The tick label formatter
    pub fn formatter(&self) -> &ticks::Formatter {
        &self.formatter
    }

    /// The tick label rotation in degrees, if any
    pub fn rotate_labels(&self) -> Option<f32> {
        self.rotate_labels
    }
}

/// An axis description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    id: Option<String>,
    title: Option<String>,
    side: Side,
    scale: Scale,
    ticks: Ticks,
    grid: Option<theme::Line>,
    color: Option<theme::Color>,
}

impl Axis {
    /// A default axis: auto scale, auto ticks, default side, no grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axis id, used by [`Ref::Id`]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the axis title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the axis side
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the axis scale
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Set the ticks description
    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    /// Draw grid lines at major ticks with the given line style
    pub fn with_grid(mut self, grid: theme::Line) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Draw grid lines at major ticks with the theme grid color
    pub fn with_default_grid(self) -> Self {
        self.with_grid(theme::Col::Grid.into())
    }

    /// Set the color of the axis spine, ticks, labels and title.
    /// Defaults to the theme foreground; a fixed color here lets a
    /// secondary axis match its series.
    pub fn with_color(mut self, color: impl Into<theme::Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The axis id
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The axis title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The axis side
    pub fn side(&self) -> Side {
        self.side
    }

    /// The axis scale
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// The ticks description
    pub fn ticks(&self) -> &Ticks {
        &self.ticks
    }

    /// The grid line style, if grid lines are enabled
    pub fn grid(&self) -> Option<&theme::Line> {
        self.grid.as_ref()
    }

    /// The axis color override
    pub fn color(&self) -> Option<&theme::Color> {
        self.color.as_ref()
    }
}
