use statplot::data::samples;
use statplot::des;
use statplot::style::{self, series as sstyle};

mod common;

fn main() {
    let beaver = samples::beaver();

    let temp = des::series::Line::new("time".into(), "temp".into()).with_name("Temperature");
    let activ = des::series::Line::new("time".into(), "activ".into())
        .with_name("Activity")
        .with_y_axis("activity")
        .with_line(
            sstyle::Line::new(sstyle::Color::Auto)
                .with_pattern(style::LinePattern::Dash(style::Dash(vec![4.0, 2.0]))),
        );

    let x_axis = des::axis::Axis::new().with_title("Time [h]").with_default_grid();
    let temp_axis = des::axis::Axis::new().with_title("Body temperature [degC]");
    let activ_axis = des::axis::Axis::new()
        .with_id("activity")
        .with_title("Activity")
        .with_side(des::axis::Side::Opposite);

    let plot = des::Plot::new(vec![temp.into(), activ.into()])
        .with_x_axis(x_axis)
        .with_y_axis(temp_axis)
        .with_y_axis(activ_axis)
        .with_legend(des::Legend::new().with_pos(des::LegendPos::InTopLeft));

    let fig = des::Figure::new(plot.into()).with_title("Beaver body temperature");

    common::save_figure(&fig, &beaver, "dual_axis");
}
