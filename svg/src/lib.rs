/*!
SVG rendering backend for statplot.

[`SvgSurface`] implements [`render::Surface`] by building an SVG document
in memory. The [`SaveSvg`] trait and [`save_svg_figure`] save a figure
straight to a file; nothing is written until the figure has been fully
prepared and drawn, so a failed export never leaves a partial file behind.
*/

#![warn(missing_docs)]

use std::path::Path;
use std::{fmt, io};

use statplot::geom::{self, Transform};
use statplot::render::{self, Surface};
use statplot::style::series::{palette, Palette};
use statplot::{data, des, drawing, Style};
use svg::node::element;
use svg::Node;

/// Error raised when saving a figure as SVG
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing the file
    Io(io::Error),
    /// The figure could not be prepared
    Drawing(drawing::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<drawing::Error> for Error {
    fn from(err: drawing::Error) -> Self {
        Error::Drawing(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Drawing(err) => write!(f, "Drawing error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Drawing(err) => Some(err),
        }
    }
}

/// Parameters needed for saving a figure as SVG
#[derive(Debug, Clone)]
pub struct DrawingParams<SP = palette::Builtin> {
    /// Style resolving abstract colors during drawing
    pub style: Style<SP>,
    /// Scale from figure units to output pixels
    pub scale: f32,
}

impl<SP: Default> Default for DrawingParams<SP> {
    fn default() -> Self {
        Self {
            style: Style::default(),
            scale: 1.0,
        }
    }
}

/// Saving a prepared figure as an SVG file
pub trait SaveSvg {
    /// Draw the figure and save it to `path`
    fn save_svg<P, SP>(&self, path: P, params: &DrawingParams<SP>) -> Result<(), Error>
    where
        P: AsRef<Path>,
        SP: Palette;
}

impl SaveSvg for drawing::Figure {
    fn save_svg<P, SP>(&self, path: P, params: &DrawingParams<SP>) -> Result<(), Error>
    where
        P: AsRef<Path>,
        SP: Palette,
    {
        let size = self.size();
        let width = (size.width() * params.scale) as u32;
        let height = (size.height() * params.scale) as u32;

        let mut surface = SvgSurface::new(width, height);
        self.draw(&mut surface, &params.style);
        surface.save_svg(path)?;
        Ok(())
    }
}

/// Prepare a figure description against a data source and save it as SVG.
///
/// Preparation happens before the file is created, so a missing column or
/// an unbounded axis reports an error without touching the filesystem.
pub fn save_svg_figure<P, SP>(
    fig: &des::Figure,
    source: &impl data::Source,
    path: P,
    params: &DrawingParams<SP>,
) -> Result<(), Error>
where
    P: AsRef<Path>,
    SP: Palette,
{
    let drawing = drawing::Figure::prepare(fig, source)?;
    drawing.save_svg(path, params)
}

/// A rendering surface that builds an SVG document in memory
#[derive(Debug)]
pub struct SvgSurface {
    doc: svg::Document,
    clip_num: u32,
    group_stack: Vec<element::Group>,
}

impl SvgSurface {
    /// A new surface of the given pixel dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let doc = svg::Document::new()
            .set("width", width)
            .set("height", height);
        SvgSurface {
            doc,
            clip_num: 0,
            group_stack: vec![],
        }
    }

    /// Save the document to a file.
    ///
    /// Panics if a pushed clip was never popped, which is a drawing bug.
    pub fn save_svg<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        if !self.group_stack.is_empty() {
            panic!("Unbalanced clip stack");
        }
        svg::save(path, &self.doc)
    }

    /// Write the document to a stream.
    ///
    /// Panics if a pushed clip was never popped, which is a drawing bug.
    pub fn write<W>(&self, dest: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        if !self.group_stack.is_empty() {
            panic!("Unbalanced clip stack");
        }
        svg::write(dest, &self.doc)
    }

    fn append_node<T>(&mut self, node: T)
    where
        T: Node,
    {
        match self.group_stack.last_mut() {
            Some(group) => group.append(node),
            None => self.doc.append(node),
        }
    }

    fn bump_clip_id(&mut self) -> String {
        self.clip_num += 1;
        format!("statplot-clip{}", self.clip_num)
    }
}

impl Surface for SvgSurface {
    fn prepare(&mut self, size: geom::Size) {
        self.doc
            .assign("viewBox", (0, 0, size.width(), size.height()));
    }

    fn fill(&mut self, fill: render::Paint) {
        let mut node = element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%");
        match fill {
            render::Paint::Solid(color) => node.assign("fill", color.html()),
        }
        self.append_node(node);
    }

    fn draw_rect(&mut self, rect: &render::Rect) {
        let mut node = rectangle_node(&rect.rect);
        assign_fill(&mut node, rect.fill.as_ref());
        assign_stroke(&mut node, rect.stroke.as_ref());
        assign_transform(&mut node, rect.transform);
        self.append_node(node);
    }

    fn draw_path(&mut self, path: &render::Path) {
        let mut node = element::Path::new();
        assign_fill(&mut node, path.fill.as_ref());
        assign_stroke(&mut node, path.stroke.as_ref());
        assign_transform(&mut node, path.transform);
        node.assign("d", path_data(path.path));
        self.append_node(node);
    }

    fn draw_text(&mut self, text: &render::Text) {
        let anchor = match text.anchor {
            render::TextAnchor::Start => "start",
            render::TextAnchor::Middle => "middle",
            render::TextAnchor::End => "end",
        };
        let mut node = element::Text::new(text.text)
            .set("font-family", "sans-serif")
            .set("font-size", text.font.size)
            .set("text-anchor", anchor);
        assign_fill(&mut node, text.fill.as_ref());
        assign_transform(&mut node, text.transform);
        self.append_node(node);
    }

    fn push_clip(&mut self, clip: &render::Clip) {
        let clip_id = self.bump_clip_id();
        let clip_id_url = format!("url(#{})", clip_id);
        let mut rect_node = rectangle_node(clip.rect);
        assign_transform(&mut rect_node, clip.transform);
        let node = element::ClipPath::new().set("id", clip_id).add(rect_node);
        self.append_node(node);
        self.group_stack
            .push(element::Group::new().set("clip-path", clip_id_url));
    }

    fn pop_clip(&mut self) {
        match self.group_stack.pop() {
            Some(g) => self.append_node(g),
            None => panic!("Unbalanced clip stack"),
        }
    }
}

fn assign_transform<N>(node: &mut N, transform: Option<&geom::Transform>)
where
    N: Node,
{
    if let Some(Transform {
        sx,
        kx,
        ky,
        sy,
        tx,
        ty,
    }) = transform
    {
        node.assign(
            "transform",
            format!("matrix({sx} {ky} {kx} {sy} {tx} {ty})"),
        );
    }
}

fn assign_fill<N>(node: &mut N, fill: Option<&render::Paint>)
where
    N: Node,
{
    if let Some(render::Paint::Solid(color)) = fill {
        node.assign("fill", color.html());
        if let Some(opacity) = color.opacity() {
            node.assign("fill-opacity", opacity);
        }
    } else {
        node.assign("fill", "none");
    }
}

fn assign_stroke<N>(node: &mut N, stroke: Option<&render::Stroke>)
where
    N: Node,
{
    if let Some(stroke) = stroke {
        let w = stroke.width;
        node.assign("stroke", stroke.color.html());
        node.assign("stroke-width", w);
        if let Some(opacity) = stroke.color.opacity() {
            node.assign("stroke-opacity", opacity);
        }
        match stroke.pattern {
            render::LinePattern::Solid => (),
            render::LinePattern::Dash(dash) => {
                let array: Vec<f32> = dash.iter().map(|d| d * w).collect();
                node.assign("stroke-dasharray", array)
            }
        }
    } else {
        node.assign("stroke", "none");
    }
}

fn path_data(path: &geom::Path) -> element::path::Data {
    let mut data = element::path::Data::new();
    for segment in path.segments() {
        match segment {
            geom::PathSegment::MoveTo(p) => {
                data = data.move_to((p.x, p.y));
            }
            geom::PathSegment::LineTo(p) => {
                data = data.line_to((p.x, p.y));
            }
            geom::PathSegment::QuadTo(p1, p2) => {
                data = data.quadratic_curve_to((p1.x, p1.y, p2.x, p2.y));
            }
            geom::PathSegment::CubicTo(p1, p2, p3) => {
                data = data.cubic_curve_to((p1.x, p1.y, p2.x, p2.y, p3.x, p3.y));
            }
            geom::PathSegment::Close => {
                data = data.close();
            }
        }
    }
    data
}

fn rectangle_node(rect: &geom::Rect) -> element::Rectangle {
    element::Rectangle::new()
        .set("x", rect.x())
        .set("y", rect.y())
        .set("width", rect.width())
        .set("height", rect.height())
}

#[cfg(test)]
mod tests {
    use statplot::data::TableSource;

    use super::*;

    fn table() -> TableSource {
        TableSource::new()
            .with_f64_column("x", vec![0.0, 1.0, 2.0])
            .with_f64_column("y", vec![1.0, 3.0, 2.0])
    }

    fn figure(y_col: &str) -> des::Figure {
        let series = des::series::Scatter::new("x".into(), y_col.into()).into();
        des::Figure::new(des::Plot::new(vec![series]).into()).with_title("export")
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("statplot-svg-{}-{name}", std::process::id()))
    }

    #[test]
    fn export_writes_svg_document() {
        let path = temp_path("ok.svg");
        save_svg_figure(&figure("y"), &table(), &path, &<DrawingParams>::default()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("export"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn failed_preparation_leaves_no_file() {
        let path = temp_path("missing.svg");
        let res = save_svg_figure(&figure("gone"), &table(), &path, &<DrawingParams>::default());
        assert!(matches!(res, Err(Error::Drawing(_))));
        assert!(!path.exists());
    }

    #[test]
    fn clip_groups_nest_in_document() {
        let mut surface = SvgSurface::new(100, 100);
        surface.prepare(geom::Size::new(100.0, 100.0));
        let rect = geom::Rect::from_xywh(10.0, 10.0, 50.0, 50.0);
        surface.push_clip(&render::Clip {
            rect: &rect,
            transform: None,
        });
        surface.pop_clip();

        let mut out = Vec::new();
        surface.write(&mut out).unwrap();
        let content = String::from_utf8(out).unwrap();
        assert!(content.contains("clipPath"));
        assert!(content.contains("url(#statplot-clip1)"));
    }

    #[test]
    #[should_panic(expected = "Unbalanced clip stack")]
    fn unbalanced_clip_panics_on_write() {
        let mut surface = SvgSurface::new(10, 10);
        let rect = geom::Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        surface.push_clip(&render::Clip {
            rect: &rect,
            transform: None,
        });
        let mut out = Vec::new();
        let _ = surface.write(&mut out);
    }

    #[test]
    fn scale_applies_to_pixel_size_only() {
        let axis = des::axis::Axis::new()
            .with_scale(des::axis::Scale::Fixed { min: 0.0, max: 1.0 });
        let plot = des::Plot::new(vec![])
            .with_x_axis(axis.clone())
            .with_y_axis(axis);
        let fig = des::Figure::new(plot.into()).with_size(geom::Size::new(100.0, 50.0));
        let drawing = drawing::Figure::prepare(&fig, &()).unwrap();

        let path = temp_path("scaled.svg");
        let params = DrawingParams::<palette::Builtin> {
            scale: 2.0,
            ..Default::default()
        };
        drawing.save_svg(&path, &params).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("width=\"200\""));
        assert!(content.contains("viewBox=\"0 0 100 50\""));
        std::fs::remove_file(&path).unwrap();
    }
}
