//! Per-plot preparation: data resolution, axis ranges, layout and
//! series geometry.

use crate::data::{self, F64Column, StrColumn};
use crate::defaults;
use crate::des;
use crate::drawing::axis::{Axis, ProtoAxis, Side, TickValues};
use crate::drawing::scale::{CatBins, CoordMap, LinMap};
use crate::drawing::series::{self, SeriesItem};
use crate::drawing::{carve, legend, ticks, Bounds, Categories, Edge, Error};
use crate::geom;
use crate::render::{self, Surface};
use crate::style::series::Palette;
use crate::style::theme;
use crate::style::{ResolveColor, Style};

/// Computed data of one series, before geometry
enum Computed {
    /// Paired numeric samples
    Xy { xs: Vec<f64>, ys: Vec<f64> },
    /// Histogram bins
    Hist(series::Hist),
    /// (category index, value) pairs
    Bars(Vec<(usize, f64)>),
    /// One value list per bar series, aligned on category indices
    BarsGroup(Vec<Vec<(usize, f64)>>),
    /// Box statistics per category
    Box(Vec<(usize, series::BoxStats)>),
}

/// Per-axis data accumulator
#[derive(Default)]
struct AxisAcc {
    bounds: Bounds,
    cats: Categories,
    has_num: bool,
    has_cat: bool,
}

impl AxisAcc {
    fn push_num(&mut self, v: f64) {
        self.bounds.push(v);
        self.has_num = true;
    }

    fn push_cat(&mut self, cat: &str) -> usize {
        self.has_cat = true;
        self.cats.push_if_not_present(cat)
    }
}

/// Computed range of one axis
enum Range {
    Num((f64, f64)),
    Cat(Categories),
}

fn resolve_ref(axes: &[des::axis::Axis], r: &des::axis::Ref) -> Result<usize, Error> {
    match r {
        des::axis::Ref::Idx(idx) if *idx < axes.len() => Ok(*idx),
        des::axis::Ref::Idx(idx) => Err(Error::UnknownAxisRef(format!("index {idx}"))),
        des::axis::Ref::Id(id) => axes
            .iter()
            .position(|a| a.id() == Some(id.as_str()))
            .or_else(|| axes.iter().position(|a| a.title() == Some(id.as_str())))
            .ok_or_else(|| Error::UnknownAxisRef(id.clone())),
    }
}

/// Category index of each row, None for null categories
fn cat_indices(
    col: &des::series::DataCol,
    source: &dyn data::Source,
    acc: &mut AxisAcc,
) -> Result<Vec<Option<usize>>, Error> {
    let col = series::str_column(col, source)?;
    Ok(col
        .str_iter()
        .map(|c| c.map(|c| acc.push_cat(c)))
        .collect())
}

/// A prepared plot, laid out in figure coordinates
#[derive(Debug)]
pub(crate) struct Plot {
    rect: geom::Rect,
    title: Option<String>,
    fill: Option<theme::Fill>,
    border: Option<des::Border>,
    x_axes: Vec<Axis>,
    y_axes: Vec<Axis>,
    items: Vec<SeriesItem>,
    legend: Option<legend::Legend>,
}

impl Plot {
    /// Prepare a plot description into the given cell
    pub fn prepare(
        des_plot: &des::Plot,
        source: &dyn data::Source,
        cell: geom::Rect,
    ) -> Result<Plot, Error> {
        // 1. compute series data and accumulate per-axis bounds
        let mut x_accs: Vec<AxisAcc> = (0..des_plot.x_axes().len())
            .map(|_| AxisAcc::default())
            .collect();
        let mut y_accs: Vec<AxisAcc> = (0..des_plot.y_axes().len())
            .map(|_| AxisAcc::default())
            .collect();

        // axis index and computed data per series, in order
        let mut computed: Vec<(usize, usize, Computed)> = Vec::new();
        for s in des_plot.series() {
            let xi = resolve_ref(des_plot.x_axes(), s.x_axis())?;
            let yi = resolve_ref(des_plot.y_axes(), s.y_axis())?;
            let comp = compute_series(s, source, &mut x_accs[xi], &mut y_accs[yi])?;
            computed.push((xi, yi, comp));
        }

        // 2. axis ranges, ticks and labels
        let insets = des_plot.insets();
        let mut x_protos = Vec::new();
        let mut x_ranges = Vec::new();
        for (axis, acc) in des_plot.x_axes().iter().zip(&x_accs) {
            let (range, proto) = prepare_axis(axis, acc, insets, true)?;
            x_ranges.push(range);
            x_protos.push(proto);
        }
        let mut y_protos = Vec::new();
        let mut y_ranges = Vec::new();
        for (axis, acc) in des_plot.y_axes().iter().zip(&y_accs) {
            let (range, proto) = prepare_axis(axis, acc, insets, false)?;
            y_ranges.push(range);
            y_protos.push(proto);
        }

        // 3. layout: title, outside legend, then axis margins
        let too_small = || {
            Error::InconsistentDesign(
                "plot cell too small for its titles, axes and legend".to_string(),
            )
        };
        let mut rect = cell;
        let title_font = render::Font::new(defaults::PLOT_TITLE_FONT);
        if des_plot.title().is_some()
            && !carve(
                &mut rect,
                Edge::Top,
                title_font.height() + defaults::PLOT_TITLE_MARGIN,
            )
        {
            return Err(too_small());
        }
        let outer = rect;

        let entries = series::legend_entries(des_plot);
        let legend_des = des_plot.legend().filter(|_| !entries.is_empty());
        let mut legend_size = None;
        if let Some(l) = legend_des {
            let size = legend::Legend::measure(&entries, l.pos().prefers_vertical());
            let m = defaults::LEGEND_MARGIN;
            let fits = match l.pos() {
                des::LegendPos::OutTop => carve(&mut rect, Edge::Top, size.height() + m),
                des::LegendPos::OutBottom => carve(&mut rect, Edge::Bottom, size.height() + m),
                des::LegendPos::OutLeft => carve(&mut rect, Edge::Left, size.width() + m),
                des::LegendPos::OutRight => carve(&mut rect, Edge::Right, size.width() + m),
                _ => true,
            };
            if !fits {
                return Err(too_small());
            }
            legend_size = Some(size);
        }

        // same-side axes stack outward
        let mut side_totals = [0f32; 4]; // bottom, top, left, right
        let mut offsets = Vec::with_capacity(x_protos.len() + y_protos.len());
        for proto in x_protos.iter().chain(&y_protos) {
            let slot = match proto.side {
                Side::Bottom => 0,
                Side::Top => 1,
                Side::Left => 2,
                Side::Right => 3,
            };
            offsets.push(side_totals[slot]);
            side_totals[slot] += proto.extent();
        }
        if !(carve(&mut rect, Edge::Bottom, side_totals[0])
            && carve(&mut rect, Edge::Top, side_totals[1])
            && carve(&mut rect, Edge::Left, side_totals[2])
            && carve(&mut rect, Edge::Right, side_totals[3]))
        {
            return Err(too_small());
        }

        // 4. coordinate maps and final axes
        let x_maps: Vec<CoordMap> = x_ranges
            .iter()
            .map(|r| coord_map(r, rect.width()))
            .collect();
        let y_maps: Vec<CoordMap> = y_ranges
            .iter()
            .map(|r| coord_map(r, rect.height()))
            .collect();

        let mut offsets = offsets.into_iter();
        let x_axes: Vec<Axis> = x_protos
            .into_iter()
            .zip(&x_maps)
            .map(|(proto, map)| proto.into_axis(map, offsets.next().unwrap_or(0.0)))
            .collect();
        let y_axes: Vec<Axis> = y_protos
            .into_iter()
            .zip(&y_maps)
            .map(|(proto, map)| proto.into_axis(map, offsets.next().unwrap_or(0.0)))
            .collect();

        // 5. series geometry
        let mut items = Vec::new();
        let mut idx = 0usize;
        for (s, (xi, yi, comp)) in des_plot.series().iter().zip(computed) {
            build_items(
                s,
                comp,
                &x_maps[xi],
                &y_maps[yi],
                &rect,
                &mut idx,
                &mut items,
            )?;
        }

        // 6. legend placement
        let legend = match (legend_des, legend_size) {
            (Some(l), Some(size)) => {
                let (w, h) = (size.width(), size.height());
                let m = defaults::LEGEND_MARGIN;
                let (x, y) = match l.pos() {
                    des::LegendPos::OutTop => (rect.center_x() - w / 2.0, outer.top()),
                    des::LegendPos::OutBottom => (rect.center_x() - w / 2.0, outer.bottom() - h),
                    des::LegendPos::OutLeft => (outer.left(), rect.center_y() - h / 2.0),
                    des::LegendPos::OutRight => (outer.right() - w, rect.center_y() - h / 2.0),
                    des::LegendPos::InTopLeft => (rect.left() + m, rect.top() + m),
                    des::LegendPos::InTopRight => (rect.right() - w - m, rect.top() + m),
                    des::LegendPos::InBottomLeft => (rect.left() + m, rect.bottom() - h - m),
                    des::LegendPos::InBottomRight => {
                        (rect.right() - w - m, rect.bottom() - h - m)
                    }
                };
                Some(legend::Legend::new(
                    entries,
                    l.pos().prefers_vertical(),
                    l.pos().is_inside(),
                    geom::Rect::from_xywh(x, y, w, h),
                ))
            }
            _ => None,
        };

        Ok(Plot {
            rect,
            title: des_plot.title().map(str::to_string),
            fill: des_plot.fill().cloned(),
            border: des_plot.border(),
            x_axes,
            y_axes,
            items,
            legend,
        })
    }

    /// The plot area rectangle
    pub fn rect(&self) -> &geom::Rect {
        &self.rect
    }

    #[cfg(test)]
    pub fn x_axes(&self) -> &[Axis] {
        &self.x_axes
    }

    #[cfg(test)]
    pub fn y_axes(&self) -> &[Axis] {
        &self.y_axes
    }

    pub fn draw<S, P>(&self, surface: &mut S, style: &Style<P>)
    where
        S: Surface + ?Sized,
        P: Palette,
    {
        if let Some(fill) = &self.fill {
            surface.draw_rect(&render::Rect {
                rect: self.rect,
                fill: Some(fill.as_paint(style)),
                stroke: None,
                transform: None,
            });
        }

        for axis in self.x_axes.iter().chain(&self.y_axes) {
            axis.draw_grid(surface, style, &self.rect);
        }

        // series are clipped to the plot area
        surface.push_clip(&render::Clip {
            rect: &self.rect,
            transform: None,
        });
        for item in &self.items {
            item.draw(surface, style);
        }
        surface.pop_clip();

        for axis in self.x_axes.iter().chain(&self.y_axes) {
            axis.draw(surface, style, &self.rect);
        }

        if let Some(des::Border::Box) = self.border {
            surface.draw_rect(&render::Rect {
                rect: self.rect,
                fill: None,
                stroke: Some(render::Stroke {
                    color: style.resolve_color(&theme::Col::Foreground),
                    width: defaults::AXIS_SPINE_WIDTH,
                    pattern: render::LinePattern::Solid,
                }),
                transform: None,
            });
        }

        if let Some(title) = &self.title {
            let font = render::Font::new(defaults::PLOT_TITLE_FONT);
            let transform = geom::Transform::from_translate(
                self.rect.center_x(),
                self.rect.top() - defaults::PLOT_TITLE_MARGIN - font.descent(),
            );
            surface.draw_text(&render::Text {
                text: title,
                font,
                fill: Some(render::Paint::Solid(
                    style.resolve_color(&theme::Col::Foreground),
                )),
                anchor: render::TextAnchor::Middle,
                transform: Some(&transform),
            });
        }

        if let Some(legend) = &self.legend {
            legend.draw(surface, style);
        }
    }
}

/// Compute the data of one series and feed the axis accumulators
fn compute_series(
    s: &des::Series,
    source: &dyn data::Source,
    x_acc: &mut AxisAcc,
    y_acc: &mut AxisAcc,
) -> Result<Computed, Error> {
    match s {
        des::Series::Line(line) => {
            let (xs, ys) = series::xy_data(line.x_data(), line.y_data(), source)?;
            if xs.is_empty() {
                log::warn!("line series {:?} has no data", line.name());
            }
            for (&x, &y) in xs.iter().zip(&ys) {
                x_acc.push_num(x);
                y_acc.push_num(y);
            }
            Ok(Computed::Xy { xs, ys })
        }
        des::Series::Scatter(scatter) => {
            let (xs, ys) = series::xy_data(scatter.x_data(), scatter.y_data(), source)?;
            if xs.is_empty() {
                log::warn!("scatter series {:?} has no data", scatter.name());
            }
            for (&x, &y) in xs.iter().zip(&ys) {
                x_acc.push_num(x);
                y_acc.push_num(y);
            }
            Ok(Computed::Xy { xs, ys })
        }
        des::Series::Histogram(hist) => {
            let col = series::f64_column(hist.data(), source)?;
            let values: Vec<f64> = col.f64_iter().flatten().collect();
            let computed = series::histogram(&values, hist.bins(), hist.density())?;
            if let (Some(first), Some(last)) = (computed.edges.first(), computed.edges.last()) {
                x_acc.push_num(*first);
                x_acc.push_num(*last);
                y_acc.push_num(0.0);
                for &h in &computed.heights {
                    y_acc.push_num(h);
                }
            }
            Ok(Computed::Hist(computed))
        }
        des::Series::Bars(bars) => {
            let cats = cat_indices(bars.x_data(), source, x_acc)?;
            let vals = series::f64_column(bars.y_data(), source)?;
            if cats.len() != vals.len() {
                return Err(Error::InconsistentData(format!(
                    "bar category and value columns have different lengths ({} vs {})",
                    cats.len(),
                    vals.len()
                )));
            }
            let pairs: Vec<(usize, f64)> = cats
                .iter()
                .zip(vals.f64_iter())
                .filter_map(|(c, v)| Some(((*c)?, v?)))
                .collect();
            y_acc.push_num(0.0);
            for &(_, v) in &pairs {
                y_acc.push_num(v);
            }
            Ok(Computed::Bars(pairs))
        }
        des::Series::BarsGroup(group) => {
            let cats = cat_indices(group.cat_data(), source, x_acc)?;
            let mut per_series = Vec::with_capacity(group.series().len());
            for bar in group.series() {
                let vals = series::f64_column(bar.y_data(), source)?;
                if cats.len() != vals.len() {
                    return Err(Error::InconsistentData(format!(
                        "bar series {:?} does not match the category column length",
                        bar.name()
                    )));
                }
                let pairs: Vec<(usize, f64)> = cats
                    .iter()
                    .zip(vals.f64_iter())
                    .filter_map(|(c, v)| Some(((*c)?, v?)))
                    .collect();
                per_series.push(pairs);
            }

            y_acc.push_num(0.0);
            match group.arrangement() {
                des::series::BarsArrangement::Aside => {
                    for pairs in &per_series {
                        for &(_, v) in pairs {
                            y_acc.push_num(v);
                        }
                    }
                }
                des::series::BarsArrangement::Stack => {
                    // stacked extents are the per-category partial sums
                    let ncats = x_acc.cats.len();
                    let mut pos = vec![0f64; ncats];
                    let mut neg = vec![0f64; ncats];
                    for pairs in &per_series {
                        for &(c, v) in pairs {
                            if v >= 0.0 {
                                pos[c] += v;
                                y_acc.push_num(pos[c]);
                            } else {
                                neg[c] += v;
                                y_acc.push_num(neg[c]);
                            }
                        }
                    }
                }
            }
            Ok(Computed::BarsGroup(per_series))
        }
        des::Series::BoxPlot(bp) => {
            let cats = cat_indices(bp.cat_data(), source, x_acc)?;
            let vals = series::f64_column(bp.val_data(), source)?;
            if cats.len() != vals.len() {
                return Err(Error::InconsistentData(format!(
                    "box plot category and value columns have different lengths ({} vs {})",
                    cats.len(),
                    vals.len()
                )));
            }
            let ncats = x_acc.cats.len();
            let mut groups: Vec<Vec<f64>> = vec![Vec::new(); ncats];
            for (c, v) in cats.iter().zip(vals.f64_iter()) {
                if let (Some(c), Some(v)) = (c, v) {
                    groups[*c].push(v);
                }
            }
            let mut stats = Vec::new();
            for (c, values) in groups.iter().enumerate() {
                if let Some(s) = series::box_stats(values) {
                    y_acc.push_num(s.whisker_low);
                    y_acc.push_num(s.whisker_high);
                    for &o in &s.outliers {
                        y_acc.push_num(o);
                    }
                    stats.push((c, s));
                }
            }
            Ok(Computed::Box(stats))
        }
    }
}

/// Range, ticks and labels of one axis
fn prepare_axis(
    axis: &des::axis::Axis,
    acc: &AxisAcc,
    insets: des::Insets,
    horizontal: bool,
) -> Result<(Range, ProtoAxis), Error> {
    if acc.has_num && acc.has_cat {
        return Err(Error::InconsistentData(
            "axis mixes numeric and categorical series".to_string(),
        ));
    }

    let side = Side::resolve(horizontal, axis.side());
    let color = axis
        .color()
        .cloned()
        .unwrap_or(theme::Col::Foreground.into());
    let rotate_labels = axis.ticks().rotate_labels();
    let grid = axis.grid().cloned();

    if acc.has_cat {
        if let des::axis::Scale::Fixed { .. } = axis.scale() {
            return Err(Error::InconsistentData(
                "fixed scale on a categorical axis".to_string(),
            ));
        }
        let cats = acc.cats.clone();
        let proto = ProtoAxis {
            side,
            title: axis.title().map(str::to_string),
            values: TickValues::Cat(cats.len()),
            labels: cats.labels().to_vec(),
            grid,
            color,
            rotate_labels,
        };
        return Ok((Range::Cat(cats), proto));
    }

    let (bounds, expand) = match axis.scale() {
        des::axis::Scale::Fixed { min, max } => {
            if max <= min {
                return Err(Error::InconsistentDesign(format!(
                    "fixed axis scale with min {min} >= max {max}"
                )));
            }
            ((*min, *max), false)
        }
        des::axis::Scale::Auto => {
            let (min, max) = acc.bounds.get().ok_or(Error::UnboundedAxis)?;
            if min == max {
                ((min - 0.5, max + 0.5), true)
            } else {
                ((min, max), true)
            }
        }
    };

    let tick_values = ticks::locate(axis.ticks().locator(), bounds.0, bounds.1);
    let labels = ticks::format(axis.ticks().formatter(), &tick_values);

    let range = if expand {
        let span = bounds.1 - bounds.0;
        let (lo, hi) = match insets {
            des::Insets::Auto => (defaults::BOUNDS_EXPAND, defaults::BOUNDS_EXPAND),
            des::Insets::Fixed(lo, hi) => (lo as f64, hi as f64),
        };
        (bounds.0 - lo * span, bounds.1 + hi * span)
    } else {
        bounds
    };

    let proto = ProtoAxis {
        side,
        title: axis.title().map(str::to_string),
        values: TickValues::Num(tick_values),
        labels,
        grid,
        color,
        rotate_labels,
    };
    Ok((Range::Num(range), proto))
}

fn coord_map(range: &Range, size: f32) -> CoordMap {
    match range {
        Range::Num(range) => CoordMap::Lin(LinMap::new(*range, size)),
        Range::Cat(cats) => CoordMap::Cat(CatBins::new(cats.len(), size)),
    }
}

/// Turn computed series data into figure-coordinate items.
/// Advances `idx` by the number of palette slots the series consumes.
fn build_items(
    s: &des::Series,
    comp: Computed,
    x_map: &CoordMap,
    y_map: &CoordMap,
    rect: &geom::Rect,
    idx: &mut usize,
    items: &mut Vec<SeriesItem>,
) -> Result<(), Error> {
    let mismatch = || Error::InconsistentData("series data does not match its axis type".to_string());

    match (s, comp) {
        (des::Series::Line(line), Computed::Xy { xs, ys }) => {
            let (xm, ym) = (x_map.lin().ok_or_else(mismatch)?, y_map.lin().ok_or_else(mismatch)?);
            let points = xs
                .iter()
                .zip(&ys)
                .map(|(&x, &y)| (rect.left() + xm.map(x), rect.bottom() - ym.map(y)));
            items.push(SeriesItem::Line {
                path: series::poly_path(points),
                line: line.line().clone(),
                idx: *idx,
            });
            *idx += 1;
        }
        (des::Series::Scatter(scatter), Computed::Xy { xs, ys }) => {
            let (xm, ym) = (x_map.lin().ok_or_else(mismatch)?, y_map.lin().ok_or_else(mismatch)?);
            let marker = scatter.marker().clone();
            let shape = marker.shape.to_path(marker.size);
            let centers = xs
                .iter()
                .zip(&ys)
                .map(|(&x, &y)| (rect.left() + xm.map(x), rect.bottom() - ym.map(y)));
            items.push(SeriesItem::Scatter {
                path: series::markers_path(&shape, centers),
                marker,
                idx: *idx,
            });
            *idx += 1;
        }
        (des::Series::Histogram(hist), Computed::Hist(computed)) => {
            let (xm, ym) = (x_map.lin().ok_or_else(mismatch)?, y_map.lin().ok_or_else(mismatch)?);
            let base = rect.bottom() - ym.map(0.0);
            let mut pb = geom::PathBuilder::new();
            for (i, &h) in computed.heights.iter().enumerate() {
                let x0 = rect.left() + xm.map(computed.edges[i]);
                let x1 = rect.left() + xm.map(computed.edges[i + 1]);
                let top = rect.bottom() - ym.map(h);
                push_bar(&mut pb, x0, x1, base, top);
            }
            items.push(SeriesItem::Bars {
                path: pb.finish(),
                fill: hist.fill().cloned(),
                line: hist.line().cloned(),
                idx: *idx,
            });
            *idx += 1;
        }
        (des::Series::Bars(bars), Computed::Bars(pairs)) => {
            let bins = x_map.cat().ok_or_else(mismatch)?;
            let ym = y_map.lin().ok_or_else(mismatch)?;
            let pos = bars.position();
            let base = rect.bottom() - ym.map(0.0);
            let bin = bins.bin_size();
            let mut pb = geom::PathBuilder::new();
            for &(c, v) in &pairs {
                let x0 = rect.left() + bins.start(c) + pos.offset * bin;
                let x1 = x0 + pos.width * bin;
                let top = rect.bottom() - ym.map(v);
                push_bar(&mut pb, x0, x1, base, top);
            }
            items.push(SeriesItem::Bars {
                path: pb.finish(),
                fill: bars.fill().cloned(),
                line: bars.line().cloned(),
                idx: *idx,
            });
            *idx += 1;
        }
        (des::Series::BarsGroup(group), Computed::BarsGroup(per_series)) => {
            let bins = x_map.cat().ok_or_else(mismatch)?;
            let ym = y_map.lin().ok_or_else(mismatch)?;
            let pos = group.position();
            let bin = bins.bin_size();
            let env_w = pos.width * bin;

            match group.arrangement() {
                des::series::BarsArrangement::Aside => {
                    let slot = env_w / per_series.len().max(1) as f32;
                    let base = rect.bottom() - ym.map(0.0);
                    for (k, (pairs, bar)) in per_series.iter().zip(group.series()).enumerate() {
                        let mut pb = geom::PathBuilder::new();
                        for &(c, v) in pairs {
                            let x0 =
                                rect.left() + bins.start(c) + pos.offset * bin + k as f32 * slot;
                            let top = rect.bottom() - ym.map(v);
                            push_bar(&mut pb, x0, x0 + slot, base, top);
                        }
                        items.push(SeriesItem::Bars {
                            path: pb.finish(),
                            fill: bar.fill().cloned(),
                            line: bar.line().cloned(),
                            idx: *idx,
                        });
                        *idx += 1;
                    }
                }
                des::series::BarsArrangement::Stack => {
                    let ncats = per_series
                        .iter()
                        .flat_map(|p| p.iter().map(|&(c, _)| c + 1))
                        .max()
                        .unwrap_or(0);
                    let mut pos_sum = vec![0f64; ncats];
                    let mut neg_sum = vec![0f64; ncats];
                    for (pairs, bar) in per_series.iter().zip(group.series()) {
                        let mut pb = geom::PathBuilder::new();
                        for &(c, v) in pairs {
                            let sum = if v >= 0.0 {
                                &mut pos_sum[c]
                            } else {
                                &mut neg_sum[c]
                            };
                            let y0 = rect.bottom() - ym.map(*sum);
                            *sum += v;
                            let y1 = rect.bottom() - ym.map(*sum);
                            let x0 = rect.left() + bins.start(c) + pos.offset * bin;
                            push_bar(&mut pb, x0, x0 + env_w, y0, y1);
                        }
                        items.push(SeriesItem::Bars {
                            path: pb.finish(),
                            fill: bar.fill().cloned(),
                            line: bar.line().cloned(),
                            idx: *idx,
                        });
                        *idx += 1;
                    }
                }
            }
        }
        (des::Series::BoxPlot(bp), Computed::Box(stats)) => {
            let bins = x_map.cat().ok_or_else(mismatch)?;
            let ym = y_map.lin().ok_or_else(mismatch)?;
            let bin = bins.bin_size();
            let bw = bp.width() * bin;

            let mut boxes = geom::PathBuilder::new();
            let mut lines = geom::PathBuilder::new();
            let mut outlier_centers = Vec::new();
            for (c, s) in &stats {
                let cx = rect.left() + bins.center(*c);
                let (x0, x1) = (cx - bw / 2.0, cx + bw / 2.0);
                let y = |v: f64| rect.bottom() - ym.map(v);

                push_bar(&mut boxes, x0, x1, y(s.q1), y(s.q3));
                // median
                lines.move_to(x0, y(s.median));
                lines.line_to(x1, y(s.median));
                // whiskers with half-width caps
                for (from, to) in [(s.q3, s.whisker_high), (s.q1, s.whisker_low)] {
                    lines.move_to(cx, y(from));
                    lines.line_to(cx, y(to));
                    lines.move_to(cx - bw / 4.0, y(to));
                    lines.line_to(cx + bw / 4.0, y(to));
                }
                for &o in &s.outliers {
                    outlier_centers.push((cx, y(o)));
                }
            }

            let outlier_shape = crate::style::MarkerShape::Circle.to_path(4.0);
            items.push(SeriesItem::BoxPlot {
                boxes: boxes.finish(),
                lines: lines.finish(),
                outliers: series::markers_path(&outlier_shape, outlier_centers.into_iter()),
                fill: bp.fill().cloned(),
                line: bp.line().clone(),
                idx: *idx,
            });
            *idx += 1;
        }
        _ => unreachable!("computed data always matches its series variant"),
    }
    Ok(())
}

/// Append an axis-aligned bar between two corners
fn push_bar(pb: &mut geom::PathBuilder, x0: f32, x1: f32, y0: f32, y1: f32) {
    let rect = geom::Rect::from_trbl(y0.min(y1), x0.max(x1), y0.max(y1), x0.min(x1));
    geom::push_rect(pb, &rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TableSource;

    fn cell() -> geom::Rect {
        geom::Rect::from_xywh(0.0, 0.0, 400.0, 300.0)
    }

    #[test]
    fn scatter_plot_layout() {
        let table = TableSource::new()
            .with_f64_column("x", vec![0.0, 1.0, 2.0])
            .with_f64_column("y", vec![1.0, 3.0, 2.0]);
        let des_plot = des::Plot::new(vec![
            des::series::Scatter::new("x".into(), "y".into()).into(),
        ])
        .with_title("points");

        let plot = Plot::prepare(&des_plot, &table, cell()).unwrap();
        // margins carved on all labeled sides
        assert!(plot.rect().left() > 0.0);
        assert!(plot.rect().bottom() < 300.0);
        assert_eq!(plot.x_axes().len(), 1);
        assert!(!plot.x_axes()[0].ticks.is_empty());
    }

    #[test]
    fn missing_column_reported() {
        let table = TableSource::new().with_f64_column("x", vec![0.0]);
        let des_plot = des::Plot::new(vec![
            des::series::Scatter::new("x".into(), "nope".into()).into(),
        ]);
        let res = Plot::prepare(&des_plot, &table, cell());
        assert!(matches!(res, Err(Error::MissingDataSrc(name)) if name == "nope"));
    }

    #[test]
    fn unknown_axis_ref_reported() {
        let table = TableSource::new()
            .with_f64_column("x", vec![0.0, 1.0])
            .with_f64_column("y", vec![0.0, 1.0]);
        let des_plot = des::Plot::new(vec![
            des::series::Scatter::new("x".into(), "y".into())
                .with_y_axis("right")
                .into(),
        ]);
        let res = Plot::prepare(&des_plot, &table, cell());
        assert!(matches!(res, Err(Error::UnknownAxisRef(id)) if id == "right"));
    }

    #[test]
    fn auto_axis_without_data_is_unbounded() {
        let des_plot = des::Plot::new(vec![]);
        let res = Plot::prepare(&des_plot, &(), cell());
        assert!(matches!(res, Err(Error::UnboundedAxis)));
    }

    #[test]
    fn fixed_scale_allows_empty_plot() {
        let axis = || {
            des::axis::Axis::new()
                .with_scale(des::axis::Scale::Fixed { min: 0.0, max: 1.0 })
                .with_ticks(
                    des::axis::Ticks::new()
                        .with_locator(des::axis::ticks::Locator::Breaks(vec![])),
                )
        };
        let des_plot = des::Plot::new(vec![]).with_x_axis(axis()).with_y_axis(axis());
        let plot = Plot::prepare(&des_plot, &(), cell()).unwrap();
        assert!(plot.x_axes()[0].ticks.is_empty());
    }

    #[test]
    fn dual_axis_ranges_are_independent() {
        let table = TableSource::new()
            .with_f64_column("x", vec![0.0, 1.0, 2.0, 3.0])
            .with_f64_column("small", vec![0.1, 0.2, 0.3, 0.4])
            .with_f64_column("large", vec![100.0, 200.0, 300.0, 400.0]);
        let des_plot = des::Plot::new(vec![
            des::series::Line::new("x".into(), "small".into()).into(),
            des::series::Line::new("x".into(), "large".into())
                .with_y_axis(1usize)
                .into(),
        ])
        .with_y_axis(des::axis::Axis::new())
        .with_y_axis(des::axis::Axis::new().with_side(des::axis::Side::Opposite));

        let plot = Plot::prepare(&des_plot, &table, cell()).unwrap();
        assert_eq!(plot.y_axes().len(), 2);
        assert_eq!(plot.y_axes()[0].side, Side::Left);
        assert_eq!(plot.y_axes()[1].side, Side::Right);

        // each axis gets ticks fitting its own data
        let left_max: f64 = plot.y_axes()[0]
            .ticks
            .iter()
            .map(|t| t.label.parse::<f64>().unwrap())
            .fold(f64::NEG_INFINITY, f64::max);
        let right_max: f64 = plot.y_axes()[1]
            .ticks
            .iter()
            .map(|t| t.label.parse::<f64>().unwrap())
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(left_max <= 0.4);
        assert!(right_max >= 300.0);
    }

    #[test]
    fn mixed_axis_types_rejected() {
        let table = TableSource::new()
            .with_str_column("cat", vec!["a".into(), "b".into()])
            .with_f64_column("v", vec![1.0, 2.0])
            .with_f64_column("x", vec![0.0, 1.0]);
        let des_plot = des::Plot::new(vec![
            des::series::Bars::new("cat".into(), "v".into()).into(),
            des::series::Scatter::new("x".into(), "v".into()).into(),
        ]);
        let res = Plot::prepare(&des_plot, &table, cell());
        assert!(matches!(res, Err(Error::InconsistentData(_))));
    }

    #[test]
    fn category_axis_keeps_first_seen_order() {
        let table = TableSource::new()
            .with_str_column("cat", vec!["b".into(), "a".into(), "b".into()])
            .with_f64_column("v", vec![1.0, 2.0, 3.0]);
        let des_plot = des::Plot::new(vec![
            des::series::Bars::new("cat".into(), "v".into()).into(),
        ]);
        let plot = Plot::prepare(&des_plot, &table, cell()).unwrap();
        let labels: Vec<&str> = plot.x_axes()[0]
            .ticks
            .iter()
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(labels, vec!["b", "a"]);
    }
}
