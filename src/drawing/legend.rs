//! Legend layout and drawing.

use crate::defaults;
use crate::drawing::series::{self, Entry, LegendShape};
use crate::geom;
use crate::render::{self, Surface};
use crate::style::series::Palette;
use crate::style::theme;
use crate::style::{ResolveColor, Style};

fn entry_height() -> f32 {
    let font = render::Font::new(defaults::LEGEND_FONT);
    defaults::LEGEND_SHAPE_SIZE.1.max(font.height())
}

fn entry_width(entry: &Entry) -> f32 {
    let font = render::Font::new(defaults::LEGEND_FONT);
    defaults::LEGEND_SHAPE_SIZE.0 + defaults::LEGEND_SHAPE_SPACING + font.text_width(&entry.name)
}

/// A laid out legend
#[derive(Debug)]
pub(crate) struct Legend {
    rect: geom::Rect,
    entries: Vec<Entry>,
    vertical: bool,
    framed: bool,
}

impl Legend {
    /// The size a legend with these entries would occupy
    pub fn measure(entries: &[Entry], vertical: bool) -> geom::Size {
        if entries.is_empty() {
            return geom::Size::new(0.0, 0.0);
        }
        let eh = entry_height();
        let n = entries.len() as f32;
        let (w, h) = if vertical {
            let w = entries.iter().map(entry_width).fold(0f32, f32::max);
            let h = n * eh + (n - 1.0) * defaults::LEGEND_ENTRY_SPACING;
            (w, h)
        } else {
            let w = entries.iter().map(entry_width).sum::<f32>()
                + (n - 1.0) * defaults::LEGEND_MARGIN;
            (w, eh)
        };
        geom::Size::new(
            w + 2.0 * defaults::LEGEND_PADDING,
            h + 2.0 * defaults::LEGEND_PADDING,
        )
    }

    /// A legend at the given rect, as returned by [`Legend::measure`]
    pub fn new(entries: Vec<Entry>, vertical: bool, framed: bool, rect: geom::Rect) -> Self {
        Legend {
            rect,
            entries,
            vertical,
            framed,
        }
    }

    pub fn draw<S, P>(&self, surface: &mut S, style: &Style<P>)
    where
        S: Surface + ?Sized,
        P: Palette,
    {
        if self.entries.is_empty() {
            return;
        }
        if self.framed {
            surface.draw_rect(&render::Rect {
                rect: self.rect,
                fill: Some(render::Paint::Solid(style.theme.legend_fill())),
                stroke: Some(render::Stroke {
                    color: style.theme.legend_border(),
                    width: 1.0,
                    pattern: render::LinePattern::Solid,
                }),
                transform: None,
            });
        }

        let eh = entry_height();
        let mut x = self.rect.left() + defaults::LEGEND_PADDING;
        let mut y = self.rect.top() + defaults::LEGEND_PADDING;
        for entry in &self.entries {
            self.draw_entry(surface, style, entry, x, y, eh);
            if self.vertical {
                y += eh + defaults::LEGEND_ENTRY_SPACING;
            } else {
                x += entry_width(entry) + defaults::LEGEND_MARGIN;
            }
        }
    }

    fn draw_entry<S, P>(
        &self,
        surface: &mut S,
        style: &Style<P>,
        entry: &Entry,
        x: f32,
        y: f32,
        eh: f32,
    ) where
        S: Surface + ?Sized,
        P: Palette,
    {
        let (sw, sh) = defaults::LEGEND_SHAPE_SIZE;
        let cy = y + eh / 2.0;
        let rc = (style, entry.idx);

        match &entry.shape {
            LegendShape::Line(line) => {
                let mut pb = geom::PathBuilder::new();
                pb.move_to(x, cy);
                pb.line_to(x + sw, cy);
                if let Some(path) = pb.finish() {
                    surface.draw_path(&render::Path {
                        path: &path,
                        fill: None,
                        stroke: Some(line.as_stroke(&rc)),
                        transform: None,
                    });
                }
            }
            LegendShape::Marker(marker) => {
                let path = marker.shape.to_path(marker.size);
                let (fill, stroke) = series::marker_paint(marker, &rc);
                let transform = geom::Transform::from_translate(x + sw / 2.0, cy);
                surface.draw_path(&render::Path {
                    path: &path,
                    fill,
                    stroke,
                    transform: Some(&transform),
                });
            }
            LegendShape::Rect { fill, line } => {
                surface.draw_rect(&render::Rect {
                    rect: geom::Rect::from_xywh(x, cy - sh / 2.0, sw, sh),
                    fill: fill.as_ref().map(|f| f.as_paint(&rc)),
                    stroke: line.as_ref().map(|l| l.as_stroke(&rc)),
                    transform: None,
                });
            }
        }

        let font = render::Font::new(defaults::LEGEND_FONT);
        let transform = geom::Transform::from_translate(
            x + sw + defaults::LEGEND_SHAPE_SPACING,
            cy + (font.ascent() - font.descent()) / 2.0,
        );
        surface.draw_text(&render::Text {
            text: &entry.name,
            font,
            fill: Some(render::Paint::Solid(
                style.resolve_color(&theme::Col::Foreground),
            )),
            anchor: render::TextAnchor::Start,
            transform: Some(&transform),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::series as sstyle;

    fn entries(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| Entry {
                name: name.to_string(),
                idx,
                shape: LegendShape::Line(sstyle::Line::default()),
            })
            .collect()
    }

    #[test]
    fn measure_empty() {
        let size = Legend::measure(&[], true);
        assert_eq!(size.width(), 0.0);
        assert_eq!(size.height(), 0.0);
    }

    #[test]
    fn vertical_stacks_horizontal_spreads() {
        let entries = entries(&["one", "two", "three"]);
        let vert = Legend::measure(&entries, true);
        let horiz = Legend::measure(&entries, false);
        assert!(vert.height() > horiz.height());
        assert!(horiz.width() > vert.width());
    }

    #[test]
    fn longest_label_drives_vertical_width() {
        let short = Legend::measure(&entries(&["a", "b"]), true);
        let long = Legend::measure(&entries(&["a", "a much longer label"]), true);
        assert!(long.width() > short.width());
        assert_eq!(long.height(), short.height());
    }
}
