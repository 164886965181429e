use statplot::data::synth;
use statplot::des;
use statplot::style::series as sstyle;

mod common;

fn main() {
    let mut rng = common::predictable_rng(None);
    let table = synth::annual_series(1980, 2024, 120.0, 2.5, 8.0, &mut rng);

    let series = des::series::Line::new("year".into(), "value".into())
        .with_name("Index")
        .with_line(sstyle::Line::new(sstyle::Color::Auto).with_width(2.0));

    let x_axis = des::axis::Axis::new().with_title("Year");
    let y_axis = des::axis::Axis::new()
        .with_title("Index value")
        .with_default_grid();

    let plot = des::Plot::new(vec![series.into()])
        .with_x_axis(x_axis)
        .with_y_axis(y_axis)
        .with_legend(des::Legend::new().with_pos(des::LegendPos::InTopLeft));

    let fig = des::Figure::new(plot.into()).with_title("Synthetic yearly trend");

    common::save_figure(&fig, &table, "trend");
}
