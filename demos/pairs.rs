use statplot::data::samples;
use statplot::des;
use statplot::geom;

mod common;

fn main() {
    let iris = samples::iris();

    let matrix = des::pairs::ScatterMatrix::new(&[
        "sepal length",
        "sepal width",
        "petal length",
        "petal width",
    ])
    .build()
    .unwrap();

    let fig = des::Figure::new(matrix.into())
        .with_title("Iris pairs")
        .with_size(geom::Size::new(900.0, 900.0));

    common::save_figure(&fig, &iris, "pairs");
}
