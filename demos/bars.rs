use statplot::data::{samples, summary};
use statplot::des;

mod common;

fn main() {
    let iris = samples::iris();

    // one row per species, mean of every numeric column
    let means = summary::group_means(&iris, "species").unwrap();

    let group = des::series::BarsGroup::new(
        "species".into(),
        vec![
            des::series::BarSeries::new("sepal length".into()).with_name("Sepal length"),
            des::series::BarSeries::new("sepal width".into()).with_name("Sepal width"),
            des::series::BarSeries::new("petal length".into()).with_name("Petal length"),
            des::series::BarSeries::new("petal width".into()).with_name("Petal width"),
        ],
    );

    let x_axis = des::axis::Axis::new().with_title("Species");
    let y_axis = des::axis::Axis::new()
        .with_title("Mean [cm]")
        .with_default_grid();

    let plot = des::Plot::new(vec![group.into()])
        .with_x_axis(x_axis)
        .with_y_axis(y_axis)
        .with_legend(des::Legend::new().with_pos(des::LegendPos::OutTop));

    let fig = des::Figure::new(plot.into()).with_title("Iris measurements by species");

    common::save_figure(&fig, &means, "bars");
}
