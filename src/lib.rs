/*!
statplot is a declarative statistical plotting library.

A figure is described as an immutable value of [`des::Figure`] (what to
draw), prepared into a [`drawing::Figure`] (where everything lands), and
finally emitted to a rendering backend through [`render::Surface`] (how it
appears). The same description can be prepared against different data
sources, and the same prepared figure can be drawn with different
[`Style`]s.

```no_run
use statplot::{data, des, drawing};

let table = data::samples::iris();

let series = des::Series::Scatter(
    des::series::Scatter::new("sepal length".into(), "sepal width".into())
        .with_name("sepal"),
);
let fig = des::Figure::new(des::Plot::new(vec![series]).into())
    .with_title("Iris sepals");

let drawing = drawing::Figure::prepare(&fig, &table)?;
# let _ = drawing;
# Ok::<(), statplot::drawing::Error>(())
```
*/

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod data;
pub mod des;
pub mod drawing;
pub mod render;
pub mod style;

pub use style::Style;

/// Geometry primitives, re-exported from statplot-base
pub mod geom {
    pub use statplot_base::geom::*;
}

/// Color primitives, re-exported from statplot-base
pub mod color {
    pub use statplot_base::color::*;
}

pub use color::ColorU8;

/// Small numeric helpers for building demo and test data
pub mod utils {
    /// `num` evenly spaced values from `start` to `end` inclusive
    pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
        if num == 0 {
            return vec![];
        }
        if num == 1 {
            return vec![start];
        }
        let step = (end - start) / (num - 1) as f64;
        (0..num).map(|i| start + i as f64 * step).collect()
    }
}

/// Layout and styling parameters that are not part of the figure design
pub(crate) mod defaults {
    /// Figure title font size
    pub const FIG_TITLE_FONT: f32 = 18.0;
    /// Plot title font size
    pub const PLOT_TITLE_FONT: f32 = 14.0;
    /// Axis title font size
    pub const AXIS_TITLE_FONT: f32 = 12.0;
    /// Tick label font size
    pub const TICK_FONT: f32 = 10.0;
    /// Legend label font size
    pub const LEGEND_FONT: f32 = 11.0;

    /// Default padding around figure content
    pub const FIG_PADDING: f32 = 10.0;
    /// Margin below the figure title
    pub const FIG_TITLE_MARGIN: f32 = 12.0;
    /// Margin below a plot title
    pub const PLOT_TITLE_MARGIN: f32 = 8.0;
    /// Margin between an axis title and its tick labels
    pub const AXIS_TITLE_MARGIN: f32 = 8.0;
    /// Length of a tick mark
    pub const TICK_SIZE: f32 = 4.0;
    /// Margin between a tick mark and its label
    pub const TICK_LABEL_MARGIN: f32 = 4.0;
    /// Width of the axis spine stroke
    pub const AXIS_SPINE_WIDTH: f32 = 1.0;

    /// Margin between a legend and the plot area
    pub const LEGEND_MARGIN: f32 = 10.0;
    /// Padding inside the legend box
    pub const LEGEND_PADDING: f32 = 6.0;
    /// Size of a legend sample shape (width, height)
    pub const LEGEND_SHAPE_SIZE: (f32, f32) = (24.0, 12.0);
    /// Spacing between a legend shape and its label
    pub const LEGEND_SHAPE_SPACING: f32 = 6.0;
    /// Spacing between legend entries
    pub const LEGEND_ENTRY_SPACING: f32 = 4.0;

    /// Default spacing between subplot panels
    pub const SUBPLOTS_SPACE: f32 = 14.0;
    /// Fraction of the data span added on each side of auto axis ranges
    pub const BOUNDS_EXPAND: f64 = 0.04;
}

#[cfg(test)]
pub(crate) mod tests {
    /// Approximate comparison for floating point test assertions
    pub trait Near {
        /// True if self and other are within `tol` of each other
        fn near_abs(&self, other: &Self, tol: Self) -> bool;
    }

    impl Near for f64 {
        fn near_abs(&self, other: &Self, tol: Self) -> bool {
            (self - other).abs() <= tol
        }
    }

    impl Near for f32 {
        fn near_abs(&self, other: &Self, tol: Self) -> bool {
            (self - other).abs() <= tol
        }
    }

    macro_rules! assert_near {
        ($a:expr, $b:expr) => {
            assert_near!($a, $b, 1e-8);
        };
        ($a:expr, $b:expr, $tol:expr) => {{
            let (a, b) = (&$a, &$b);
            assert!(
                $crate::tests::Near::near_abs(a, b, $tol),
                "assert_near failed: {:?} vs {:?} (tol {:?})",
                a,
                b,
                $tol
            );
        }};
    }

    pub(crate) use assert_near;
}
