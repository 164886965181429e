use statplot::data::samples;
use statplot::des;
use statplot::geom;

mod common;

fn scatter(x: &str, y: &str) -> des::Plot {
    let series = des::series::Scatter::new(x.into(), y.into());
    des::Plot::new(vec![series.into()])
        .with_x_axis(des::axis::Axis::new().with_title(x))
        .with_y_axis(des::axis::Axis::new().with_title(y))
}

fn main() {
    let iris = samples::iris();

    let hist = des::Plot::new(vec![
        des::series::Histogram::new("sepal width".into())
            .with_bins(des::series::Bins::Count(15))
            .into(),
    ])
    .with_x_axis(des::axis::Axis::new().with_title("sepal width"))
    .with_y_axis(des::axis::Axis::new().with_title("count"));

    let boxes = des::Plot::new(vec![
        des::series::BoxPlot::new("species".into(), "sepal length".into()).into(),
    ])
    .with_x_axis(des::axis::Axis::new().with_title("species"))
    .with_y_axis(des::axis::Axis::new().with_title("sepal length"));

    let grid = des::Subplots::new(2, 2)
        .with_plot((0, 0), scatter("sepal length", "sepal width"))
        .unwrap()
        .with_plot((0, 1), hist)
        .unwrap()
        .with_plot((1, 0), boxes)
        .unwrap()
        .with_plot((1, 1), scatter("petal length", "petal width"))
        .unwrap();

    let fig = des::Figure::new(grid.into())
        .with_title("Iris overview")
        .with_size(geom::Size::new(900.0, 700.0));

    common::save_figure(&fig, &iris, "subplots");
}
