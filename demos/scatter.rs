use statplot::data::{self, Column, F64Column, Sample, Source, samples, summary};
use statplot::des;

mod common;

/// Pull a numeric column of `table` out as a plain vector
fn f64_column(table: &data::TableSource, name: &str) -> Vec<f64> {
    table
        .column(name)
        .and_then(|c| c.f64().map(|c| c.f64_iter().flatten().collect()))
        .unwrap()
}

fn main() {
    let iris = samples::iris();

    let mut source = data::TableSource::new();
    for species in ["setosa", "versicolor", "virginica"] {
        let rows = summary::filter_eq(&iris, "species", Sample::Cat(species)).unwrap();
        source.add_column(
            &format!("{} sepal length", species),
            f64_column(&rows, "sepal length").into(),
        );
        source.add_column(
            &format!("{} petal length", species),
            f64_column(&rows, "petal length").into(),
        );
    }

    let x_axis = des::axis::Axis::new()
        .with_title("Sepal length [cm]")
        .with_default_grid();
    let y_axis = des::axis::Axis::new()
        .with_title("Petal length [cm]")
        .with_default_grid();

    let series: Vec<des::Series> = ["setosa", "versicolor", "virginica"]
        .into_iter()
        .map(|species| {
            des::series::Scatter::new(
                format!("{} sepal length", species).into(),
                format!("{} petal length", species).into(),
            )
            .with_name(species)
            .into()
        })
        .collect();

    let plot = des::Plot::new(series)
        .with_x_axis(x_axis)
        .with_y_axis(y_axis)
        .with_legend(des::Legend::new().with_pos(des::LegendPos::InBottomRight));

    let fig = des::Figure::new(plot.into()).with_title("Iris dataset");

    common::save_figure(&fig, &source, "scatter");
}
