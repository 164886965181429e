use statplot::data::{self, Column, F64Column, Sample, Source, samples, summary};
use statplot::des;
use statplot::style::series as sstyle;

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
        source.add_column(species, f64_column(&rows, "petal length").into());
    }

    // translucent fills so the overlapping distributions stay readable
    let series: Vec<des::Series> = ["setosa", "versicolor", "virginica"]
        .into_iter()
        .map(|species| {
            des::series::Histogram::new(species.into())
                .with_name(species)
                .with_bins(des::series::Bins::Count(18))
                .with_density()
                .with_fill(sstyle::Fill::new(sstyle::Color::Auto).with_opacity(0.6))
                .into()
        })
        .collect();

    let x_axis = des::axis::Axis::new().with_title("Petal length [cm]");
    let y_axis = des::axis::Axis::new()
        .with_title("Density")
        .with_default_grid();

    let plot = des::Plot::new(series)
        .with_x_axis(x_axis)
        .with_y_axis(y_axis)
        .with_legend(des::Legend::new());

    let fig = des::Figure::new(plot.into()).with_title("Iris petal length distribution");

    common::save_figure(&fig, &source, "histogram");
}
