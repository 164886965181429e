use statplot::data::samples;
use statplot::des;

mod common;

fn main() {
    let iris = samples::iris();

    let series = des::series::BoxPlot::new("species".into(), "petal length".into());

    let x_axis = des::axis::Axis::new().with_title("Species");
    let y_axis = des::axis::Axis::new()
        .with_title("Petal length [cm]")
        .with_default_grid();

    let plot = des::Plot::new(vec![series.into()])
        .with_x_axis(x_axis)
        .with_y_axis(y_axis);

    let fig = des::Figure::new(plot.into()).with_title("Iris petal length by species");

    common::save_figure(&fig, &iris, "box_plot");
}
