//! Axis layout and drawing.
//!
//! Axes are prepared in two steps: a [`ProtoAxis`] knows its labels and
//! can report the margin it needs around the plot area; once the plot
//! area is known, it is turned into an [`Axis`] with final tick
//! positions. Several axes on the same side stack outward.

use crate::defaults;
use crate::des;
use crate::drawing::scale::CoordMap;
use crate::geom;
use crate::render::{self, Surface};
use crate::style::series::Palette;
use crate::style::theme;
use crate::style::{ResolveColor, Style};

/// Resolved side of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Bottom,
    Top,
    Left,
    Right,
}

impl Side {
    pub fn horizontal(&self) -> bool {
        matches!(self, Side::Bottom | Side::Top)
    }

    pub fn resolve(horizontal: bool, side: des::axis::Side) -> Side {
        match (horizontal, side) {
            (true, des::axis::Side::Default) => Side::Bottom,
            (true, des::axis::Side::Opposite) => Side::Top,
            (false, des::axis::Side::Default) => Side::Left,
            (false, des::axis::Side::Opposite) => Side::Right,
        }
    }
}

/// Tick values before mapping to plot coordinates
#[derive(Debug, Clone)]
pub(crate) enum TickValues {
    /// Numeric tick positions
    Num(Vec<f64>),
    /// One tick per category, at bin centers
    Cat(usize),
}

/// An axis with computed labels, before the plot area is known
#[derive(Debug, Clone)]
pub(crate) struct ProtoAxis {
    pub side: Side,
    pub title: Option<String>,
    pub values: TickValues,
    pub labels: Vec<String>,
    pub grid: Option<theme::Line>,
    pub color: theme::Color,
    pub rotate_labels: Option<f32>,
}

impl ProtoAxis {
    /// The margin the axis needs outside the plot area
    pub fn extent(&self) -> f32 {
        let mut extent = 0.0;
        if !self.labels.is_empty() {
            let font = render::Font::new(defaults::TICK_FONT);
            let max_width = self
                .labels
                .iter()
                .map(|l| font.text_width(l))
                .fold(0f32, f32::max);
            let label_extent = match (self.side.horizontal(), self.rotate_labels) {
                (true, None) => font.height(),
                (false, None) => max_width,
                (horizontal, Some(deg)) => {
                    let rad = deg.to_radians();
                    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
                    if horizontal {
                        max_width * sin + font.height() * cos
                    } else {
                        max_width * cos + font.height() * sin
                    }
                }
            };
            extent += defaults::TICK_SIZE + defaults::TICK_LABEL_MARGIN + label_extent;
        }
        if self.title.is_some() {
            extent += defaults::AXIS_TITLE_MARGIN + render::Font::new(defaults::AXIS_TITLE_FONT).height();
        }
        extent
    }

    /// Finalize with the plot coordinate map and the outward offset of
    /// the spine from the plot area edge
    pub fn into_axis(self, map: &CoordMap, offset: f32) -> Axis {
        let extent = self.extent();
        let positions: Vec<f32> = match (&self.values, map) {
            (TickValues::Num(values), CoordMap::Lin(lin)) => {
                values.iter().map(|v| lin.map(*v)).collect()
            }
            (TickValues::Cat(count), CoordMap::Cat(bins)) => {
                (0..*count).map(|i| bins.center(i)).collect()
            }
            // guarded against at range computation
            _ => Vec::new(),
        };
        let ticks = positions
            .into_iter()
            .zip(self.labels)
            .map(|(pos, label)| Tick { pos, label })
            .collect();
        Axis {
            side: self.side,
            title: self.title,
            ticks,
            grid: self.grid,
            color: self.color,
            rotate_labels: self.rotate_labels,
            offset,
            extent,
        }
    }
}

/// A labeled tick; `pos` is the offset from the low edge of the plot
/// area (left for horizontal axes, bottom for vertical ones)
#[derive(Debug, Clone)]
pub(crate) struct Tick {
    pub pos: f32,
    pub label: String,
}

/// A fully laid out axis
#[derive(Debug, Clone)]
pub(crate) struct Axis {
    pub side: Side,
    pub title: Option<String>,
    pub ticks: Vec<Tick>,
    pub grid: Option<theme::Line>,
    pub color: theme::Color,
    pub rotate_labels: Option<f32>,
    pub offset: f32,
    pub extent: f32,
}

impl Axis {
    /// Absolute coordinate of a tick perpendicular to the axis spine
    fn across(&self, rect: &geom::Rect, pos: f32) -> f32 {
        if self.side.horizontal() {
            rect.left() + pos
        } else {
            rect.bottom() - pos
        }
    }

    /// Absolute coordinate of the spine along the draw direction
    fn spine_pos(&self, rect: &geom::Rect) -> f32 {
        match self.side {
            Side::Bottom => rect.bottom() + self.offset,
            Side::Top => rect.top() - self.offset,
            Side::Left => rect.left() - self.offset,
            Side::Right => rect.right() + self.offset,
        }
    }

    /// Draw grid lines across the plot area at each tick
    pub fn draw_grid<S, P>(&self, surface: &mut S, style: &Style<P>, rect: &geom::Rect)
    where
        S: Surface + ?Sized,
        P: Palette,
    {
        let Some(grid) = &self.grid else {
            return;
        };
        if self.ticks.is_empty() {
            return;
        }
        let mut pb = geom::PathBuilder::new();
        for tick in &self.ticks {
            let at = self.across(rect, tick.pos);
            if self.side.horizontal() {
                pb.move_to(at, rect.top());
                pb.line_to(at, rect.bottom());
            } else {
                pb.move_to(rect.left(), at);
                pb.line_to(rect.right(), at);
            }
        }
        if let Some(path) = pb.finish() {
            surface.draw_path(&render::Path {
                path: &path,
                fill: None,
                stroke: Some(grid.as_stroke(style)),
                transform: None,
            });
        }
    }

    /// Draw the spine, tick marks, tick labels and title
    pub fn draw<S, P>(&self, surface: &mut S, style: &Style<P>, rect: &geom::Rect)
    where
        S: Surface + ?Sized,
        P: Palette,
    {
        if self.ticks.is_empty() && self.title.is_none() {
            return;
        }

        let color = style.resolve_color(&self.color);
        let stroke = render::Stroke {
            color,
            width: defaults::AXIS_SPINE_WIDTH,
            pattern: render::LinePattern::Solid,
        };
        let spine = self.spine_pos(rect);

        let mut pb = geom::PathBuilder::new();
        if self.side.horizontal() {
            pb.move_to(rect.left(), spine);
            pb.line_to(rect.right(), spine);
        } else {
            pb.move_to(spine, rect.top());
            pb.line_to(spine, rect.bottom());
        }
        // outward direction of tick marks and labels
        let out: f32 = match self.side {
            Side::Bottom | Side::Right => 1.0,
            Side::Top | Side::Left => -1.0,
        };
        for tick in &self.ticks {
            let at = self.across(rect, tick.pos);
            if self.side.horizontal() {
                pb.move_to(at, spine);
                pb.line_to(at, spine + out * defaults::TICK_SIZE);
            } else {
                pb.move_to(spine, at);
                pb.line_to(spine + out * defaults::TICK_SIZE, at);
            }
        }
        if let Some(path) = pb.finish() {
            surface.draw_path(&render::Path {
                path: &path,
                fill: None,
                stroke: Some(stroke),
                transform: None,
            });
        }

        self.draw_labels(surface, color, rect, spine, out);
        self.draw_title(surface, color, rect, spine);
    }

    fn draw_labels<S>(
        &self,
        surface: &mut S,
        color: crate::ColorU8,
        rect: &geom::Rect,
        spine: f32,
        out: f32,
    ) where
        S: Surface + ?Sized,
    {
        let font = render::Font::new(defaults::TICK_FONT);
        let gap = defaults::TICK_SIZE + defaults::TICK_LABEL_MARGIN;

        for tick in &self.ticks {
            let at = self.across(rect, tick.pos);
            let (x, y, anchor) = if self.side.horizontal() {
                let y = if out > 0.0 {
                    spine + gap + font.ascent()
                } else {
                    spine - gap - font.descent()
                };
                (at, y, render::TextAnchor::Middle)
            } else {
                let y = at + (font.ascent() - font.descent()) / 2.0;
                if out > 0.0 {
                    (spine + gap, y, render::TextAnchor::Start)
                } else {
                    (spine - gap, y, render::TextAnchor::End)
                }
            };

            let (transform, anchor) = match self.rotate_labels {
                None => (geom::Transform::from_translate(x, y), anchor),
                Some(deg) => {
                    // rotated labels anchor on the tick-near end
                    let anchor = if out > 0.0 {
                        render::TextAnchor::End
                    } else {
                        render::TextAnchor::Start
                    };
                    (
                        geom::Transform::from_rotate(-deg).post_translate(x, y),
                        anchor,
                    )
                }
            };
            surface.draw_text(&render::Text {
                text: &tick.label,
                font,
                fill: Some(render::Paint::Solid(color)),
                anchor,
                transform: Some(&transform),
            });
        }
    }

    fn draw_title<S>(&self, surface: &mut S, color: crate::ColorU8, rect: &geom::Rect, spine: f32)
    where
        S: Surface + ?Sized,
    {
        let Some(title) = &self.title else {
            return;
        };
        let font = render::Font::new(defaults::AXIS_TITLE_FONT);
        let transform = match self.side {
            Side::Bottom => geom::Transform::from_translate(
                rect.center_x(),
                spine + self.extent - font.descent(),
            ),
            Side::Top => geom::Transform::from_translate(
                rect.center_x(),
                spine - self.extent + font.ascent(),
            ),
            Side::Left => geom::Transform::from_rotate(-90.0)
                .post_translate(spine - self.extent + font.ascent(), rect.center_y()),
            Side::Right => geom::Transform::from_rotate(90.0)
                .post_translate(spine + self.extent - font.ascent(), rect.center_y()),
        };
        surface.draw_text(&render::Text {
            text: title,
            font,
            fill: Some(render::Paint::Solid(color)),
            anchor: render::TextAnchor::Middle,
            transform: Some(&transform),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::scale::{CatBins, LinMap};
    use crate::tests::assert_near;

    fn proto(side: Side) -> ProtoAxis {
        ProtoAxis {
            side,
            title: None,
            values: TickValues::Num(vec![0.0, 0.5, 1.0]),
            labels: vec!["0.0".into(), "0.5".into(), "1.0".into()],
            grid: None,
            color: theme::Col::Foreground.into(),
            rotate_labels: None,
        }
    }

    #[test]
    fn extent_grows_with_title() {
        let bare = proto(Side::Bottom);
        let titled = ProtoAxis {
            title: Some("value".into()),
            ..proto(Side::Bottom)
        };
        assert!(titled.extent() > bare.extent());
    }

    #[test]
    fn vertical_extent_follows_label_width() {
        let narrow = proto(Side::Left);
        let wide = ProtoAxis {
            labels: vec!["0.000001".into()],
            ..proto(Side::Left)
        };
        assert!(wide.extent() > narrow.extent());
    }

    #[test]
    fn hidden_axis_has_no_extent() {
        let hidden = ProtoAxis {
            values: TickValues::Num(vec![]),
            labels: vec![],
            ..proto(Side::Left)
        };
        assert_eq!(hidden.extent(), 0.0);
    }

    #[test]
    fn numeric_ticks_map_to_plot_offsets() {
        let map = CoordMap::Lin(LinMap::new((0.0, 1.0), 100.0));
        let axis = proto(Side::Bottom).into_axis(&map, 0.0);
        assert_eq!(axis.ticks.len(), 3);
        assert_near!(axis.ticks[1].pos, 50.0f32, 1e-4);
        assert_eq!(axis.ticks[1].label, "0.5");
    }

    #[test]
    fn category_ticks_at_bin_centers() {
        let map = CoordMap::Cat(CatBins::new(2, 100.0));
        let axis = ProtoAxis {
            values: TickValues::Cat(2),
            labels: vec!["a".into(), "b".into()],
            ..proto(Side::Bottom)
        }
        .into_axis(&map, 0.0);
        assert_near!(axis.ticks[0].pos, 25.0f32, 1e-4);
        assert_near!(axis.ticks[1].pos, 75.0f32, 1e-4);
    }
}
