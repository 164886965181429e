//! Series description.

use crate::data;
use crate::des::axis;
use crate::style::series as style;

/// A data column for a series, either inline or named in the data source
#[derive(Debug, Clone)]
pub enum DataCol {
    /// Data carried inline by the description
    Inline(data::VecColumn),
    /// Name of a column in the data source passed at preparation
    SrcRef(String),
}

impl DataCol {
    /// The source column name, if this is a source reference
    pub fn src_ref(&self) -> Option<&str> {
        match self {
            DataCol::SrcRef(name) => Some(name.as_str()),
            DataCol::Inline(..) => None,
        }
    }
}

impl From<&str> for DataCol {
    fn from(name: &str) -> Self {
        DataCol::SrcRef(name.to_string())
    }
}

impl From<String> for DataCol {
    fn from(name: String) -> Self {
        DataCol::SrcRef(name)
    }
}

impl From<data::VecColumn> for DataCol {
    fn from(col: data::VecColumn) -> Self {
        DataCol::Inline(col)
    }
}

impl From<Vec<f64>> for DataCol {
    fn from(col: Vec<f64>) -> Self {
        DataCol::Inline(col.into())
    }
}

impl From<Vec<i64>> for DataCol {
    fn from(col: Vec<i64>) -> Self {
        DataCol::Inline(col.into())
    }
}

impl From<Vec<String>> for DataCol {
    fn from(col: Vec<String>) -> Self {
        DataCol::Inline(col.into())
    }
}

impl From<Vec<&str>> for DataCol {
    fn from(col: Vec<&str>) -> Self {
        DataCol::Inline(col.into())
    }
}

/// A series of a plot.
///
/// The position of a series in its plot's list decides its paint order,
/// its automatic palette color and its legend position.
#[derive(Debug, Clone)]
pub enum Series {
    /// Points joined by line segments
    Line(Line),
    /// A point cloud with markers
    Scatter(Scatter),
    /// Distribution of a numeric column over bins
    Histogram(Histogram),
    /// One bar per category
    Bars(Bars),
    /// Several bar series over shared categories
    BarsGroup(BarsGroup),
    /// Five-number summaries per category
    BoxPlot(BoxPlot),
}

impl Series {
    /// The series name, shown in the legend.
    /// A bars group has no name of its own; its bar series do.
    pub fn name(&self) -> Option<&str> {
        match self {
            Series::Line(s) => s.name(),
            Series::Scatter(s) => s.name(),
            Series::Histogram(s) => s.name(),
            Series::Bars(s) => s.name(),
            Series::BarsGroup(..) => None,
            Series::BoxPlot(s) => s.name(),
        }
    }

    /// The horizontal axis the series maps to
    pub fn x_axis(&self) -> &axis::Ref {
        match self {
            Series::Line(s) => s.x_axis(),
            Series::Scatter(s) => s.x_axis(),
            Series::Histogram(s) => s.x_axis(),
            Series::Bars(s) => s.x_axis(),
            Series::BarsGroup(s) => s.x_axis(),
            Series::BoxPlot(s) => s.x_axis(),
        }
    }

    /// The vertical axis the series maps to
    pub fn y_axis(&self) -> &axis::Ref {
        match self {
            Series::Line(s) => s.y_axis(),
            Series::Scatter(s) => s.y_axis(),
            Series::Histogram(s) => s.y_axis(),
            Series::Bars(s) => s.y_axis(),
            Series::BarsGroup(s) => s.y_axis(),
            Series::BoxPlot(s) => s.y_axis(),
        }
    }
}

impl From<Line> for Series {
    fn from(s: Line) -> Self {
        Series::Line(s)
    }
}

impl From<Scatter> for Series {
    fn from(s: Scatter) -> Self {
        Series::Scatter(s)
    }
}

impl From<Histogram> for Series {
    fn from(s: Histogram) -> Self {
        Series::Histogram(s)
    }
}

impl From<Bars> for Series {
    fn from(s: Bars) -> Self {
        Series::Bars(s)
    }
}

impl From<BarsGroup> for Series {
    fn from(s: BarsGroup) -> Self {
        Series::BarsGroup(s)
    }
}

impl From<BoxPlot> for Series {
    fn from(s: BoxPlot) -> Self {
        Series::BoxPlot(s)
    }
}

/// A line series: points joined by segments, in data order
#[derive(Debug, Clone)]
pub struct Line {
    x_data: DataCol,
    y_data: DataCol,
    name: Option<String>,
    x_axis: axis::Ref,
    y_axis: axis::Ref,
    line: style::Line,
}

impl Line {
    /// A line series over the given x and y columns
    pub fn new(x_data: DataCol, y_data: DataCol) -> Self {
        Line {
            x_data,
            y_data,
            name: None,
            x_axis: axis::Ref::default(),
            y_axis: axis::Ref::default(),
            line: style::Line::default(),
        }
    }

    /// Set the series name, shown in the legend
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the series to a horizontal axis
    pub fn with_x_axis(mut self, x_axis: impl Into<axis::Ref>) -> Self {
        self.x_axis = x_axis.into();
        self
    }

    /// Attach the series to a vertical axis
    pub fn with_y_axis(mut self, y_axis: impl Into<axis::Ref>) -> Self {
        self.y_axis = y_axis.into();
        self
    }

    /// Set the line style
    pub fn with_line(mut self, line: style::Line) -> Self {
        self.line = line;
        self
    }

    /// The x data column
    pub fn x_data(&self) -> &DataCol {
        &self.x_data
    }

    /// The y data column
    pub fn y_data(&self) -> &DataCol {
        &self.y_data
    }

    /// The series name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The horizontal axis reference
    pub fn x_axis(&self) -> &axis::Ref {
        &self.x_axis
    }

    /// The vertical axis reference
    pub fn y_axis(&self) -> &axis::Ref {
        &self.y_axis
    }

    /// The line style
    pub fn line(&self) -> &style::Line {
        &self.line
    }
}

/// A scatter series: one marker per point
#[derive(Debug, Clone)]
pub struct Scatter {
    x_data: DataCol,
    y_data: DataCol,
    name: Option<String>,
    x_axis: axis::Ref,
    y_axis: axis::Ref,
    marker: style::Marker,
}

impl Scatter {
    /// A scatter series over the given x and y columns
    pub fn new(x_data: DataCol, y_data: DataCol) -> Self {
        Scatter {
            x_data,
            y_data,
            name: None,
            x_axis: axis::Ref::default(),
            y_axis: axis::Ref::default(),
            marker: style::Marker::default(),
        }
    }

    /// Set the series name, shown in the legend
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the series to a horizontal axis
    pub fn with_x_axis(mut self, x_axis: impl Into<axis::Ref>) -> Self {
        self.x_axis = x_axis.into();
        self
    }

    /// Attach the series to a vertical axis
    pub fn with_y_axis(mut self, y_axis: impl Into<axis::Ref>) -> Self {
        self.y_axis = y_axis.into();
        self
    }

    /// Set the marker style
    pub fn with_marker(mut self, marker: style::Marker) -> Self {
        self.marker = marker;
        self
    }

    /// The x data column
    pub fn x_data(&self) -> &DataCol {
        &self.x_data
    }

    /// The y data column
    pub fn y_data(&self) -> &DataCol {
        &self.y_data
    }

    /// The series name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The horizontal axis reference
    pub fn x_axis(&self) -> &axis::Ref {
        &self.x_axis
    }

    /// The vertical axis reference
    pub fn y_axis(&self) -> &axis::Ref {
        &self.y_axis
    }

    /// The marker style
    pub fn marker(&self) -> &style::Marker {
        &self.marker
    }
}

/// Histogram binning
#[derive(Debug, Clone, PartialEq)]
pub enum Bins {
    /// Equal-width bins spanning the data range
    Count(u32),
    /// Explicit bin edges, strictly ascending
    Breaks(Vec<f64>),
}

impl Default for Bins {
    fn default() -> Self {
        Bins::Count(10)
    }
}

/// A histogram series: distribution of one numeric column
#[derive(Debug, Clone)]
pub struct Histogram {
    data: DataCol,
    name: Option<String>,
    x_axis: axis::Ref,
    y_axis: axis::Ref,
    bins: Bins,
    density: bool,
    fill: Option<style::Fill>,
    line: Option<style::Line>,
}

impl Histogram {
    /// A histogram of the given column, with 10 equal-width bins
    pub fn new(data: DataCol) -> Self {
        Histogram {
            data,
            name: None,
            x_axis: axis::Ref::default(),
            y_axis: axis::Ref::default(),
            bins: Bins::default(),
            density: false,
            fill: Some(style::Fill::default()),
            line: None,
        }
    }

    /// Set the series name, shown in the legend
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the series to a horizontal axis
    pub fn with_x_axis(mut self, x_axis: impl Into<axis::Ref>) -> Self {
        self.x_axis = x_axis.into();
        self
    }

    /// Attach the series to a vertical axis
    pub fn with_y_axis(mut self, y_axis: impl Into<axis::Ref>) -> Self {
        self.y_axis = y_axis.into();
        self
    }

    /// Set the binning
    pub fn with_bins(mut self, bins: Bins) -> Self {
        self.bins = bins;
        self
    }

    /// Normalize bar heights so the total area is 1
    pub fn with_density(mut self) -> Self {
        self.density = true;
        self
    }

    /// Set the bar fill
    pub fn with_fill(mut self, fill: style::Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Remove the bar fill
    pub fn without_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    /// Set the bar outline
    pub fn with_line(mut self, line: style::Line) -> Self {
        self.line = Some(line);
        self
    }

    /// The data column
    pub fn data(&self) -> &DataCol {
        &self.data
    }

    /// The series name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The horizontal axis reference
    pub fn x_axis(&self) -> &axis::Ref {
        &self.x_axis
    }

    /// The vertical axis reference
    pub fn y_axis(&self) -> &axis::Ref {
        &self.y_axis
    }

    /// The binning
    pub fn bins(&self) -> &Bins {
        &self.bins
    }

    /// Whether heights are normalized to a density
    pub fn density(&self) -> bool {
        self.density
    }

    /// The bar fill
    pub fn fill(&self) -> Option<&style::Fill> {
        self.fill.as_ref()
    }

    /// The bar outline
    pub fn line(&self) -> Option<&style::Line> {
        self.line.as_ref()
    }
}

/// Fraction of a category bin occupied by bars.
///
/// `offset` is the distance from the bin start to the first bar edge
/// and `width` the bar extent, both as fractions of the bin size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarsPosition {
    /// Offset of the bar from the bin start
    pub offset: f32,
    /// Width of the bar
    pub width: f32,
}

impl Default for BarsPosition {
    fn default() -> Self {
        BarsPosition {
            offset: 0.3,
            width: 0.4,
        }
    }
}

/// A bar series: one bar per category
#[derive(Debug, Clone)]
pub struct Bars {
    x_data: DataCol,
    y_data: DataCol,
    name: Option<String>,
    x_axis: axis::Ref,
    y_axis: axis::Ref,
    position: BarsPosition,
    fill: Option<style::Fill>,
    line: Option<style::Line>,
}

impl Bars {
    /// A bar series over category and value columns
    pub fn new(x_data: DataCol, y_data: DataCol) -> Self {
        Bars {
            x_data,
            y_data,
            name: None,
            x_axis: axis::Ref::default(),
            y_axis: axis::Ref::default(),
            position: BarsPosition::default(),
            fill: Some(style::Fill::default()),
            line: None,
        }
    }

    /// Set the series name, shown in the legend
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the series to a horizontal axis
    pub fn with_x_axis(mut self, x_axis: impl Into<axis::Ref>) -> Self {
        self.x_axis = x_axis.into();
        self
    }

    /// Attach the series to a vertical axis
    pub fn with_y_axis(mut self, y_axis: impl Into<axis::Ref>) -> Self {
        self.y_axis = y_axis.into();
        self
    }

    /// Set the bar position within each category bin
    pub fn with_position(mut self, position: BarsPosition) -> Self {
        self.position = position;
        self
    }

    /// Set the bar fill
    pub fn with_fill(mut self, fill: style::Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Remove the bar fill
    pub fn without_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    /// Set the bar outline
    pub fn with_line(mut self, line: style::Line) -> Self {
        self.line = Some(line);
        self
    }

    /// The category column
    pub fn x_data(&self) -> &DataCol {
        &self.x_data
    }

    /// The value column
    pub fn y_data(&self) -> &DataCol {
        &self.y_data
    }

    /// The series name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The horizontal axis reference
    pub fn x_axis(&self) -> &axis::Ref {
        &self.x_axis
    }

    /// The vertical axis reference
    pub fn y_axis(&self) -> &axis::Ref {
        &self.y_axis
    }

    /// The bar position within each category bin
    pub fn position(&self) -> BarsPosition {
        self.position
    }

    /// The bar fill
    pub fn fill(&self) -> Option<&style::Fill> {
        self.fill.as_ref()
    }

    /// The bar outline
    pub fn line(&self) -> Option<&style::Line> {
        self.line.as_ref()
    }
}

/// How the bar series of a group share a category bin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarsArrangement {
    /// Bars of a bin placed side by side
    #[default]
    Aside,
    /// Bars of a bin stacked on top of each other
    Stack,
}

/// One bar series inside a [`BarsGroup`]
#[derive(Debug, Clone)]
pub struct BarSeries {
    y_data: DataCol,
    name: Option<String>,
    fill: Option<style::Fill>,
    line: Option<style::Line>,
}

impl BarSeries {
    /// A bar series over the given value column
    pub fn new(y_data: DataCol) -> Self {
        BarSeries {
            y_data,
            name: None,
            fill: Some(style::Fill::default()),
            line: None,
        }
    }

    /// Set the series name, shown in the legend
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the bar fill
    pub fn with_fill(mut self, fill: style::Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the bar outline
    pub fn with_line(mut self, line: style::Line) -> Self {
        self.line = Some(line);
        self
    }

    /// The value column
    pub fn y_data(&self) -> &DataCol {
        &self.y_data
    }

    /// The series name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The bar fill
    pub fn fill(&self) -> Option<&style::Fill> {
        self.fill.as_ref()
    }

    /// The bar outline
    pub fn line(&self) -> Option<&style::Line> {
        self.line.as_ref()
    }
}

/// A group of bar series over shared categories.
///
/// All bar series must have the same length as the category column.
/// Each bar series gets its own legend entry and palette color.
#[derive(Debug, Clone)]
pub struct BarsGroup {
    cat_data: DataCol,
    series: Vec<BarSeries>,
    x_axis: axis::Ref,
    y_axis: axis::Ref,
    arrangement: BarsArrangement,
    position: Option<BarsPosition>,
}

impl BarsGroup {
    /// A group of bar series over the given category column
    pub fn new(cat_data: DataCol, series: Vec<BarSeries>) -> Self {
        BarsGroup {
            cat_data,
            series,
            x_axis: axis::Ref::default(),
            y_axis: axis::Ref::default(),
            arrangement: BarsArrangement::default(),
            position: None,
        }
    }

    /// Attach the group to a horizontal axis
    pub fn with_x_axis(mut self, x_axis: impl Into<axis::Ref>) -> Self {
        self.x_axis = x_axis.into();
        self
    }

    /// Attach the group to a vertical axis
    pub fn with_y_axis(mut self, y_axis: impl Into<axis::Ref>) -> Self {
        self.y_axis = y_axis.into();
        self
    }

    /// Set the arrangement of bars within a bin
    pub fn with_arrangement(mut self, arrangement: BarsArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Set the envelope occupied by the whole group within each bin.
    /// Without this the envelope depends on the arrangement.
    pub fn with_position(mut self, position: BarsPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// The category column
    pub fn cat_data(&self) -> &DataCol {
        &self.cat_data
    }

    /// The bar series of the group
    pub fn series(&self) -> &[BarSeries] {
        &self.series
    }

    /// The horizontal axis reference
    pub fn x_axis(&self) -> &axis::Ref {
        &self.x_axis
    }

    /// The vertical axis reference
    pub fn y_axis(&self) -> &axis::Ref {
        &self.y_axis
    }

    /// The arrangement of bars within a bin
    pub fn arrangement(&self) -> BarsArrangement {
        self.arrangement
    }

    /// The envelope of the group within each bin
    pub fn position(&self) -> BarsPosition {
        match (self.position, self.arrangement) {
            (Some(pos), _) => pos,
            (None, BarsArrangement::Aside) => BarsPosition {
                offset: 0.15,
                width: 0.7,
            },
            (None, BarsArrangement::Stack) => BarsPosition {
                offset: 0.22,
                width: 0.56,
            },
        }
    }
}

/// A box plot series: five-number summaries per category.
///
/// Whiskers extend to the most extreme samples within 1.5 IQR of the
/// box; samples beyond are drawn individually as outliers.
#[derive(Debug, Clone)]
pub struct BoxPlot {
    cat_data: DataCol,
    val_data: DataCol,
    name: Option<String>,
    x_axis: axis::Ref,
    y_axis: axis::Ref,
    width: f32,
    fill: Option<style::Fill>,
    line: style::Line,
}

impl BoxPlot {
    /// A box plot of values grouped by a category column
    pub fn new(cat_data: DataCol, val_data: DataCol) -> Self {
        BoxPlot {
            cat_data,
            val_data,
            name: None,
            x_axis: axis::Ref::default(),
            y_axis: axis::Ref::default(),
            width: 0.5,
            fill: Some(style::Fill::default()),
            line: style::Line::default(),
        }
    }

    /// Set the series name, shown in the legend
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the series to a horizontal axis
    pub fn with_x_axis(mut self, x_axis: impl Into<axis::Ref>) -> Self {
        self.x_axis = x_axis.into();
        self
    }

    /// Attach the series to a vertical axis
    pub fn with_y_axis(mut self, y_axis: impl Into<axis::Ref>) -> Self {
        self.y_axis = y_axis.into();
        self
    }

    /// Set the box width as a fraction of the category bin
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the box fill
    pub fn with_fill(mut self, fill: style::Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Remove the box fill
    pub fn without_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    /// Set the style of boxes, whiskers, medians and outlier markers
    pub fn with_line(mut self, line: style::Line) -> Self {
        self.line = line;
        self
    }

    /// The category column
    pub fn cat_data(&self) -> &DataCol {
        &self.cat_data
    }

    /// The value column
    pub fn val_data(&self) -> &DataCol {
        &self.val_data
    }

    /// The series name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The horizontal axis reference
    pub fn x_axis(&self) -> &axis::Ref {
        &self.x_axis
    }

    /// The vertical axis reference
    pub fn y_axis(&self) -> &axis::Ref {
        &self.y_axis
    }

    /// The box width as a fraction of the category bin
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The box fill
    pub fn fill(&self) -> Option<&style::Fill> {
        self.fill.as_ref()
    }

    /// The line style of boxes, whiskers, medians and outliers
    pub fn line(&self) -> &style::Line {
        &self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_col_from() {
        let col: DataCol = "height".into();
        assert_eq!(col.src_ref(), Some("height"));

        let col: DataCol = vec![1.0, 2.0].into();
        assert!(matches!(col, DataCol::Inline(data::VecColumn::F64(_))));
        assert_eq!(col.src_ref(), None);
    }

    #[test]
    fn bars_group_envelope_defaults() {
        let group = BarsGroup::new("cat".into(), vec![]);
        let aside = group.position();
        let group = group.with_arrangement(BarsArrangement::Stack);
        let stack = group.position();
        assert!(aside.width > stack.width);

        let custom = BarsPosition {
            offset: 0.1,
            width: 0.8,
        };
        let group = group.with_position(custom);
        assert_eq!(group.position(), custom);
    }

    #[test]
    fn series_axis_refs() {
        let s: Series = Scatter::new("x".into(), "y".into())
            .with_y_axis("right")
            .into();
        assert_eq!(s.x_axis(), &axis::Ref::Idx(0));
        assert_eq!(s.y_axis(), &axis::Ref::Id("right".to_string()));
    }
}
