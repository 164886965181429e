//! Figure-level preparation and drawing.

use crate::data;
use crate::defaults;
use crate::des;
use crate::drawing::{carve, legend, plot, series, Edge, Error};
use crate::geom;
use crate::render::{self, Surface};
use crate::style::series::Palette;
use crate::style::theme;
use crate::style::{ResolveColor, Style};

/// A figure prepared against a data source, laid out and ready to draw.
///
/// All data access and layout happens in [`Figure::prepare`]; drawing
/// is infallible and can be repeated on any surface with any style.
#[derive(Debug)]
pub struct Figure {
    size: geom::Size,
    fill: Option<theme::Fill>,
    title: Option<String>,
    title_pos: (f32, f32),
    legend: Option<legend::Legend>,
    plots: Vec<plot::Plot>,
}

impl Figure {
    /// Prepare a figure description against a data source.
    ///
    /// Resolves columns, computes statistics and ticks, and lays out
    /// every plot into figure coordinates.
    pub fn prepare(fig: &des::Figure, source: &impl data::Source) -> Result<Figure, Error> {
        Self::prepare_dyn(fig, source)
    }

    fn prepare_dyn(fig: &des::Figure, source: &dyn data::Source) -> Result<Figure, Error> {
        let too_small = || {
            Error::InconsistentDesign(
                "figure too small for its title, legend and padding".to_string(),
            )
        };
        let size = fig.size();
        let pad = fig.padding();
        if size.width() - 2.0 * pad < 1.0 || size.height() - 2.0 * pad < 1.0 {
            return Err(too_small());
        }
        let mut rect = geom::Rect::from_xywh(0.0, 0.0, size.width(), size.height())
            .pad(&geom::Padding::Even(pad));

        let title_font = render::Font::new(defaults::FIG_TITLE_FONT);
        let title_pos = (rect.center_x(), rect.top() + title_font.ascent());
        if fig.title().is_some()
            && !carve(
                &mut rect,
                Edge::Top,
                title_font.height() + defaults::FIG_TITLE_MARGIN,
            )
        {
            return Err(too_small());
        }

        // the figure legend collects named series from every plot
        let entries = fig_entries(fig.plots());
        let legend_des = fig.legend().filter(|_| !entries.is_empty());
        let legend = match legend_des {
            Some(l) => {
                let vertical = l.pos().prefers_vertical();
                let lsize = legend::Legend::measure(&entries, vertical);
                let outer = rect;
                let m = defaults::LEGEND_MARGIN;
                let fits = match l.pos() {
                    des::FigLegendPos::Top => carve(&mut rect, Edge::Top, lsize.height() + m),
                    des::FigLegendPos::Bottom => {
                        carve(&mut rect, Edge::Bottom, lsize.height() + m)
                    }
                    des::FigLegendPos::Left => carve(&mut rect, Edge::Left, lsize.width() + m),
                    des::FigLegendPos::Right => carve(&mut rect, Edge::Right, lsize.width() + m),
                };
                if !fits {
                    return Err(too_small());
                }
                let (w, h) = (lsize.width(), lsize.height());
                let (x, y) = match l.pos() {
                    des::FigLegendPos::Top => (rect.center_x() - w / 2.0, outer.top()),
                    des::FigLegendPos::Bottom => (rect.center_x() - w / 2.0, outer.bottom() - h),
                    des::FigLegendPos::Left => (outer.left(), rect.center_y() - h / 2.0),
                    des::FigLegendPos::Right => (outer.right() - w, rect.center_y() - h / 2.0),
                };
                Some(legend::Legend::new(
                    entries,
                    vertical,
                    false,
                    geom::Rect::from_xywh(x, y, w, h),
                ))
            }
            None => None,
        };

        let (rows, cols) = (fig.plots().rows(), fig.plots().cols());
        let space = fig.plots().space();
        let cell_w = (rect.width() - (cols - 1) as f32 * space) / cols as f32;
        let cell_h = (rect.height() - (rows - 1) as f32 * space) / rows as f32;
        if cell_w < 1.0 || cell_h < 1.0 {
            return Err(Error::InconsistentDesign(
                "figure too small for its subplot grid".to_string(),
            ));
        }

        let mut plots = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let Some(des_plot) = fig.plots().plot(row, col) else {
                    continue;
                };
                let cell = geom::Rect::from_xywh(
                    rect.left() + col as f32 * (cell_w + space),
                    rect.top() + row as f32 * (cell_h + space),
                    cell_w,
                    cell_h,
                );
                plots.push(plot::Plot::prepare(des_plot, source, cell)?);
            }
        }

        Ok(Figure {
            size,
            fill: fig.fill().cloned(),
            title: fig.title().map(str::to_string),
            title_pos,
            legend,
            plots,
        })
    }

    /// The figure canvas size
    pub fn size(&self) -> geom::Size {
        self.size
    }

    /// Draw the prepared figure onto a surface with the given style
    pub fn draw<S, P>(&self, surface: &mut S, style: &Style<P>)
    where
        S: Surface + ?Sized,
        P: Palette,
    {
        surface.prepare(self.size);
        if let Some(fill) = &self.fill {
            surface.fill(fill.as_paint(style));
        }

        if let Some(title) = &self.title {
            let transform = geom::Transform::from_translate(self.title_pos.0, self.title_pos.1);
            surface.draw_text(&render::Text {
                text: title,
                font: render::Font::new(defaults::FIG_TITLE_FONT),
                fill: Some(render::Paint::Solid(
                    style.resolve_color(&theme::Col::Foreground),
                )),
                anchor: render::TextAnchor::Middle,
                transform: Some(&transform),
            });
        }

        for plot in &self.plots {
            plot.draw(surface, style);
        }

        if let Some(legend) = &self.legend {
            legend.draw(surface, style);
        }
    }
}

/// Figure legend entries: named series from every plot, first
/// occurrence of each name wins
fn fig_entries(plots: &des::Plots) -> Vec<series::Entry> {
    let mut entries: Vec<series::Entry> = Vec::new();
    for row in 0..plots.rows() {
        for col in 0..plots.cols() {
            let Some(plot) = plots.plot(row, col) else {
                continue;
            };
            for entry in series::legend_entries(plot) {
                if !entries.iter().any(|e| e.name == entry.name) {
                    entries.push(entry);
                }
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TableSource;

    /// Surface recording operation counts
    #[derive(Debug, Default)]
    struct TestSurface {
        fills: usize,
        paths: usize,
        texts: Vec<String>,
        clip_depth: i32,
        max_clip_depth: i32,
    }

    impl Surface for TestSurface {
        fn prepare(&mut self, _size: geom::Size) {}
        fn fill(&mut self, _fill: render::Paint) {
            self.fills += 1;
        }
        fn draw_path(&mut self, _path: &render::Path) {
            self.paths += 1;
        }
        fn draw_text(&mut self, text: &render::Text) {
            self.texts.push(text.text.to_string());
        }
        fn push_clip(&mut self, _clip: &render::Clip) {
            self.clip_depth += 1;
            self.max_clip_depth = self.max_clip_depth.max(self.clip_depth);
        }
        fn pop_clip(&mut self) {
            self.clip_depth -= 1;
        }
    }

    fn table() -> TableSource {
        TableSource::new()
            .with_f64_column("x", vec![0.0, 1.0, 2.0])
            .with_f64_column("y", vec![1.0, 3.0, 2.0])
    }

    fn scatter() -> des::Series {
        des::series::Scatter::new("x".into(), "y".into())
            .with_name("points")
            .into()
    }

    #[test]
    fn prepare_and_draw_single_plot() {
        let fig = des::Figure::new(des::Plot::new(vec![scatter()]).into()).with_title("demo");
        let drawing = Figure::prepare(&fig, &table()).unwrap();

        let mut surface = TestSurface::default();
        drawing.draw(&mut surface, &<Style>::default());
        assert_eq!(surface.fills, 1);
        assert!(surface.paths > 0);
        assert!(surface.texts.contains(&"demo".to_string()));
        // series clips are balanced
        assert_eq!(surface.clip_depth, 0);
        assert_eq!(surface.max_clip_depth, 1);
    }

    #[test]
    fn subplots_skip_empty_cells() {
        let grid = des::Subplots::new(2, 2)
            .with_plot((0, 0), des::Plot::new(vec![scatter()]))
            .unwrap()
            .with_plot((1, 1), des::Plot::new(vec![scatter()]))
            .unwrap();
        let fig = des::Figure::new(grid.into());
        let drawing = Figure::prepare(&fig, &table()).unwrap();
        assert_eq!(drawing.plots.len(), 2);
    }

    #[test]
    fn figure_legend_dedups_names() {
        let grid = des::Subplots::new(1, 2)
            .with_plot((0, 0), des::Plot::new(vec![scatter()]))
            .unwrap()
            .with_plot((0, 1), des::Plot::new(vec![scatter()]))
            .unwrap();
        let entries = fig_entries(&grid.into());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "points");
    }

    #[test]
    fn tiny_figure_reports_inconsistent_design() {
        let fig = des::Figure::new(des::Plot::new(vec![scatter()]).into())
            .with_title("demo")
            .with_size(geom::Size::new(30.0, 20.0));
        let res = Figure::prepare(&fig, &table());
        assert!(matches!(res, Err(Error::InconsistentDesign(_))));
    }

    #[test]
    fn preparation_failure_reports_column() {
        let fig = des::Figure::new(
            des::Plot::new(vec![des::series::Scatter::new("x".into(), "gone".into()).into()])
                .into(),
        );
        let res = Figure::prepare(&fig, &table());
        assert!(matches!(res, Err(Error::MissingDataSrc(name)) if name == "gone"));
    }

    #[test]
    fn same_description_different_sources() {
        let fig = des::Figure::new(des::Plot::new(vec![scatter()]).into());
        let other = TableSource::new()
            .with_f64_column("x", vec![5.0, 6.0])
            .with_f64_column("y", vec![0.5, 0.7]);
        assert!(Figure::prepare(&fig, &table()).is_ok());
        assert!(Figure::prepare(&fig, &other).is_ok());
    }
}
