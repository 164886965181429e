//! Series data preparation and geometry.
//!
//! Statistics (histogram counts, box plot summaries) and the geometry
//! of every series are computed at preparation into figure coordinates.
//! A [`SeriesItem`] carries the resulting paths along with abstract
//! style descriptors and the series palette index; colors are resolved
//! only when the item is drawn with a concrete style.

use crate::data::{self, Column, F64Column};
use crate::des;
use crate::drawing::Error;
use crate::geom;
use crate::render;
use crate::style::series as style;
use crate::style::{ResolveColor, Style};

/// Resolve a series data column against the source
pub(crate) fn column<'a>(
    col: &'a des::series::DataCol,
    source: &'a dyn data::Source,
) -> Result<&'a dyn data::Column, Error> {
    match col {
        des::series::DataCol::Inline(col) => Ok(col),
        des::series::DataCol::SrcRef(name) => source
            .column(name)
            .ok_or_else(|| Error::MissingDataSrc(name.clone())),
    }
}

fn col_desc(col: &des::series::DataCol) -> &str {
    col.src_ref().unwrap_or("inline column")
}

/// Resolve a series data column as numeric
pub(crate) fn f64_column<'a>(
    col: &'a des::series::DataCol,
    source: &'a dyn data::Source,
) -> Result<&'a dyn data::F64Column, Error> {
    column(col, source)?
        .f64()
        .ok_or_else(|| Error::InconsistentData(format!("{} is not numeric", col_desc(col))))
}

/// Resolve a series data column as categorical
pub(crate) fn str_column<'a>(
    col: &'a des::series::DataCol,
    source: &'a dyn data::Source,
) -> Result<&'a dyn data::StrColumn, Error> {
    column(col, source)?
        .str()
        .ok_or_else(|| Error::InconsistentData(format!("{} is not categorical", col_desc(col))))
}

/// Fetch paired numeric data, dropping rows where either value is null
pub(crate) fn xy_data(
    x: &des::series::DataCol,
    y: &des::series::DataCol,
    source: &dyn data::Source,
) -> Result<(Vec<f64>, Vec<f64>), Error> {
    let x_col = f64_column(x, source)?;
    let y_col = f64_column(y, source)?;
    if x_col.len() != y_col.len() {
        return Err(Error::InconsistentData(format!(
            "x and y columns have different lengths ({} vs {})",
            x_col.len(),
            y_col.len()
        )));
    }

    let mut xs = Vec::with_capacity(x_col.len());
    let mut ys = Vec::with_capacity(y_col.len());
    for (x, y) in x_col.f64_iter().zip(y_col.f64_iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            xs.push(x);
            ys.push(y);
        }
    }
    Ok((xs, ys))
}

/// A computed histogram: `edges` has one more entry than `heights`
#[derive(Debug, Clone)]
pub(crate) struct Hist {
    pub edges: Vec<f64>,
    pub heights: Vec<f64>,
}

/// Bin the given values.
/// Null values must already be filtered out. Values outside explicit
/// breaks are dropped. Empty input yields an empty histogram.
pub(crate) fn histogram(
    values: &[f64],
    bins: &des::series::Bins,
    density: bool,
) -> Result<Hist, Error> {
    let edges = match bins {
        des::series::Bins::Count(n) => {
            if values.is_empty() {
                log::warn!("histogram over an empty column");
                return Ok(Hist {
                    edges: vec![],
                    heights: vec![],
                });
            }
            let n = (*n).max(1) as usize;
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let (min, max) = if min == max {
                (min - 0.5, max + 0.5)
            } else {
                (min, max)
            };
            crate::utils::linspace(min, max, n + 1)
        }
        des::series::Bins::Breaks(breaks) => {
            if breaks.len() < 2 || breaks.windows(2).any(|w| w[1] <= w[0]) {
                return Err(Error::InconsistentDesign(
                    "histogram breaks must be at least 2, strictly ascending".to_string(),
                ));
            }
            breaks.clone()
        }
    };

    let n = edges.len() - 1;
    let (first, last) = (edges[0], edges[n]);
    let mut counts = vec![0usize; n];
    let mut dropped = 0usize;
    for &v in values {
        if v < first || v > last {
            dropped += 1;
            continue;
        }
        // the last bin is closed on both sides
        let idx = edges[..n]
            .iter()
            .rposition(|&e| v >= e)
            .unwrap_or(0)
            .min(n - 1);
        counts[idx] += 1;
    }
    if dropped > 0 {
        log::debug!("histogram dropped {dropped} values outside the breaks");
    }

    let total: usize = counts.iter().sum();
    let heights = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if density && total > 0 {
                c as f64 / (total as f64 * (edges[i + 1] - edges[i]))
            } else {
                c as f64
            }
        })
        .collect();

    Ok(Hist { edges, heights })
}

/// Five-number summary of a sample, with outliers singled out
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// Linear-interpolation quantile of a sorted, non-empty sample
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Box plot statistics of a sample.
///
/// Whiskers reach the most extreme samples within 1.5 IQR of the box;
/// samples beyond them are outliers. Returns `None` for an empty sample.
pub(crate) fn box_stats(values: &[f64]) -> Option<BoxStats> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let fence_low = q1 - 1.5 * iqr;
    let fence_high = q3 + 1.5 * iqr;

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= fence_low)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .copied()
        .rev()
        .find(|&v| v <= fence_high)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < whisker_low || v > whisker_high)
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        outliers,
    })
}

/// Join points with line segments; `None` with fewer than 2 points
pub(crate) fn poly_path(points: impl Iterator<Item = (f32, f32)>) -> Option<geom::Path> {
    let mut pb = geom::PathBuilder::new();
    let mut first = true;
    for (x, y) in points {
        if first {
            pb.move_to(x, y);
            first = false;
        } else {
            pb.line_to(x, y);
        }
    }
    pb.finish().filter(|p| p.len() > 1)
}

/// Stamp a marker shape at each center, merged into one path
pub(crate) fn markers_path(
    shape: &geom::Path,
    centers: impl Iterator<Item = (f32, f32)>,
) -> Option<geom::Path> {
    let mut pb = geom::PathBuilder::new();
    for (cx, cy) in centers {
        for seg in shape.segments() {
            match seg {
                geom::PathSegment::MoveTo(p) => pb.move_to(p.x + cx, p.y + cy),
                geom::PathSegment::LineTo(p) => pb.line_to(p.x + cx, p.y + cy),
                geom::PathSegment::QuadTo(p1, p) => {
                    pb.quad_to(p1.x + cx, p1.y + cy, p.x + cx, p.y + cy)
                }
                geom::PathSegment::CubicTo(p1, p2, p) => pb.cubic_to(
                    p1.x + cx,
                    p1.y + cy,
                    p2.x + cx,
                    p2.y + cy,
                    p.x + cx,
                    p.y + cy,
                ),
                geom::PathSegment::Close => pb.close(),
            }
        }
    }
    pb.finish()
}

/// A series laid out in figure coordinates, ready to draw
#[derive(Debug)]
pub(crate) enum SeriesItem {
    /// Connected line segments
    Line {
        path: Option<geom::Path>,
        line: style::Line,
        idx: usize,
    },
    /// Markers merged into one path
    Scatter {
        path: Option<geom::Path>,
        marker: style::Marker,
        idx: usize,
    },
    /// Histogram or category bars merged into one path
    Bars {
        path: Option<geom::Path>,
        fill: Option<style::Fill>,
        line: Option<style::Line>,
        idx: usize,
    },
    /// Box plot: boxes, whisker lines and outlier markers
    BoxPlot {
        boxes: Option<geom::Path>,
        lines: Option<geom::Path>,
        outliers: Option<geom::Path>,
        fill: Option<style::Fill>,
        line: style::Line,
        idx: usize,
    },
}

/// Marker paint: open shapes are stroked with their fill color
pub(crate) fn marker_paint<'a, R>(
    marker: &'a style::Marker,
    rc: &R,
) -> (Option<render::Paint>, Option<render::Stroke<'a>>)
where
    R: ResolveColor<style::Color>,
{
    if marker.shape.is_open() {
        let stroke = match (&marker.stroke, &marker.fill) {
            (Some(line), _) => Some(line.as_stroke(rc)),
            (None, Some(fill)) => {
                let render::Paint::Solid(color) = fill.as_paint(rc);
                Some(render::Stroke {
                    color,
                    width: 1.0,
                    pattern: render::LinePattern::Solid,
                })
            }
            (None, None) => None,
        };
        (None, stroke)
    } else {
        let fill = marker.fill.as_ref().map(|f| f.as_paint(rc));
        let stroke = marker.stroke.as_ref().map(|l| l.as_stroke(rc));
        (fill, stroke)
    }
}

impl SeriesItem {
    pub fn draw<S, P>(&self, surface: &mut S, style: &Style<P>)
    where
        S: render::Surface + ?Sized,
        P: style::Palette,
    {
        match self {
            SeriesItem::Line { path, line, idx } => {
                if let Some(path) = path {
                    surface.draw_path(&render::Path {
                        path,
                        fill: None,
                        stroke: Some(line.as_stroke(&(style, *idx))),
                        transform: None,
                    });
                }
            }
            SeriesItem::Scatter { path, marker, idx } => {
                if let Some(path) = path {
                    let (fill, stroke) = marker_paint(marker, &(style, *idx));
                    surface.draw_path(&render::Path {
                        path,
                        fill,
                        stroke,
                        transform: None,
                    });
                }
            }
            SeriesItem::Bars {
                path,
                fill,
                line,
                idx,
            } => {
                if let Some(path) = path {
                    surface.draw_path(&render::Path {
                        path,
                        fill: fill.as_ref().map(|f| f.as_paint(&(style, *idx))),
                        stroke: line.as_ref().map(|l| l.as_stroke(&(style, *idx))),
                        transform: None,
                    });
                }
            }
            SeriesItem::BoxPlot {
                boxes,
                lines,
                outliers,
                fill,
                line,
                idx,
            } => {
                let rc = (style, *idx);
                if let Some(boxes) = boxes {
                    surface.draw_path(&render::Path {
                        path: boxes,
                        fill: fill.as_ref().map(|f| f.as_paint(&rc)),
                        stroke: Some(line.as_stroke(&rc)),
                        transform: None,
                    });
                }
                if let Some(lines) = lines {
                    surface.draw_path(&render::Path {
                        path: lines,
                        fill: None,
                        stroke: Some(line.as_stroke(&rc)),
                        transform: None,
                    });
                }
                if let Some(outliers) = outliers {
                    surface.draw_path(&render::Path {
                        path: outliers,
                        fill: None,
                        stroke: Some(line.as_stroke(&rc)),
                        transform: None,
                    });
                }
            }
        }
    }
}

/// Sample shape of a legend entry
#[derive(Debug, Clone)]
pub(crate) enum LegendShape {
    Line(style::Line),
    Marker(style::Marker),
    Rect {
        fill: Option<style::Fill>,
        line: Option<style::Line>,
    },
}

/// A legend entry: label, sample shape and palette index
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub name: String,
    pub idx: usize,
    pub shape: LegendShape,
}

/// Legend entries of a plot, from named series in order.
/// Each bar series of a group gets its own entry.
pub(crate) fn legend_entries(plot: &des::Plot) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut idx = 0usize;
    for series in plot.series() {
        match series {
            des::Series::BarsGroup(group) => {
                for bar in group.series() {
                    if let Some(name) = bar.name() {
                        entries.push(Entry {
                            name: name.to_string(),
                            idx,
                            shape: LegendShape::Rect {
                                fill: bar.fill().cloned(),
                                line: bar.line().cloned(),
                            },
                        });
                    }
                    idx += 1;
                }
            }
            other => {
                if let Some(name) = other.name() {
                    let shape = match other {
                        des::Series::Line(s) => LegendShape::Line(s.line().clone()),
                        des::Series::Scatter(s) => LegendShape::Marker(s.marker().clone()),
                        des::Series::Histogram(s) => LegendShape::Rect {
                            fill: s.fill().cloned(),
                            line: s.line().cloned(),
                        },
                        des::Series::Bars(s) => LegendShape::Rect {
                            fill: s.fill().cloned(),
                            line: s.line().cloned(),
                        },
                        des::Series::BoxPlot(s) => LegendShape::Rect {
                            fill: s.fill().cloned(),
                            line: Some(s.line().clone()),
                        },
                        des::Series::BarsGroup(..) => unreachable!(),
                    };
                    entries.push(Entry {
                        name: name.to_string(),
                        idx,
                        shape,
                    });
                }
                idx += 1;
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_near;

    #[test]
    fn histogram_equal_width_bins() {
        let values = [0.0, 0.1, 0.9, 1.5, 2.0];
        let hist = histogram(&values, &des::series::Bins::Count(2), false).unwrap();
        assert_eq!(hist.edges, vec![0.0, 1.0, 2.0]);
        // the last bin is closed, so 2.0 lands in it
        assert_eq!(hist.heights, vec![3.0, 2.0]);
    }

    #[test]
    fn histogram_breaks_drop_outside_values() {
        let values = [-5.0, 0.5, 1.5, 10.0];
        let breaks = des::series::Bins::Breaks(vec![0.0, 1.0, 2.0]);
        let hist = histogram(&values, &breaks, false).unwrap();
        assert_eq!(hist.heights, vec![1.0, 1.0]);
    }

    #[test]
    fn histogram_invalid_breaks() {
        let res = histogram(&[1.0], &des::series::Bins::Breaks(vec![1.0, 1.0]), false);
        assert!(matches!(res, Err(Error::InconsistentDesign(_))));
        let res = histogram(&[1.0], &des::series::Bins::Breaks(vec![1.0]), false);
        assert!(matches!(res, Err(Error::InconsistentDesign(_))));
    }

    #[test]
    fn histogram_density_normalizes_area() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
        let hist = histogram(&values, &des::series::Bins::Count(5), true).unwrap();
        let area: f64 = hist
            .heights
            .iter()
            .zip(hist.edges.windows(2))
            .map(|(h, e)| h * (e[1] - e[0]))
            .sum();
        assert_near!(area, 1.0);
    }

    #[test]
    fn box_stats_quartiles() {
        // 0..=8: quartiles land on samples
        let values: Vec<f64> = (0..9).map(f64::from).collect();
        let stats = box_stats(&values).unwrap();
        assert_near!(stats.q1, 2.0);
        assert_near!(stats.median, 4.0);
        assert_near!(stats.q3, 6.0);
        assert_near!(stats.whisker_low, 0.0);
        assert_near!(stats.whisker_high, 8.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn box_stats_interpolates() {
        let stats = box_stats(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_near!(stats.q1, 1.75);
        assert_near!(stats.median, 2.5);
        assert_near!(stats.q3, 3.25);
    }

    #[test]
    fn box_stats_outliers() {
        let mut values: Vec<f64> = (0..20).map(f64::from).collect();
        values.push(100.0);
        let stats = box_stats(&values).unwrap();
        assert_eq!(stats.outliers, vec![100.0]);
        assert_near!(stats.whisker_high, 19.0);
    }

    #[test]
    fn box_stats_empty() {
        assert!(box_stats(&[]).is_none());
        assert!(box_stats(&[f64::NAN]).is_none());
    }

    #[test]
    fn legend_entries_skip_unnamed() {
        let plot = des::Plot::new(vec![
            des::series::Scatter::new("x".into(), "y".into()).into(),
            des::series::Line::new("x".into(), "y".into())
                .with_name("trend")
                .into(),
        ]);
        let entries = legend_entries(&plot);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "trend");
        assert_eq!(entries[0].idx, 1);
    }

    #[test]
    fn legend_entries_per_bar_series() {
        let group = des::series::BarsGroup::new("cat".into(), vec![
            des::series::BarSeries::new("a".into()).with_name("2019"),
            des::series::BarSeries::new("b".into()).with_name("2020"),
        ]);
        let plot = des::Plot::new(vec![group.into()]);
        let entries = legend_entries(&plot);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "2019");
        assert_eq!(entries[1].idx, 1);
    }
}
