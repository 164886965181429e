//! Bundled sample datasets for the demos and the documentation.

use super::TableSource;

/// Fisher's iris measurements: (sepal length, sepal width, petal length,
/// petal width), 50 rows per species in the order setosa, versicolor,
/// virginica.
const IRIS: [(f64, f64, f64, f64); 150] = [
    (5.1, 3.5, 1.4, 0.2),
    (4.9, 3.0, 1.4, 0.2),
    (4.7, 3.2, 1.3, 0.2),
    (4.6, 3.1, 1.5, 0.2),
    (5.0, 3.6, 1.4, 0.2),
    (5.4, 3.9, 1.7, 0.4),
    (4.6, 3.4, 1.4, 0.3),
    (5.0, 3.4, 1.5, 0.2),
    (4.4, 2.9, 1.4, 0.2),
    (4.9, 3.1, 1.5, 0.1),
    (5.4, 3.7, 1.5, 0.2),
    (4.8, 3.4, 1.6, 0.2),
    (4.8, 3.0, 1.4, 0.1),
    (4.3, 3.0, 1.1, 0.1),
    (5.8, 4.0, 1.2, 0.2),
    (5.7, 4.4, 1.5, 0.4),
    (5.4, 3.9, 1.3, 0.4),
    (5.1, 3.5, 1.4, 0.3),
    (5.7, 3.8, 1.7, 0.3),
    (5.1, 3.8, 1.5, 0.3),
    (5.4, 3.4, 1.7, 0.2),
    (5.1, 3.7, 1.5, 0.4),
    (4.6, 3.6, 1.0, 0.2),
    (5.1, 3.3, 1.7, 0.5),
    (4.8, 3.4, 1.9, 0.2),
    (5.0, 3.0, 1.6, 0.2),
    (5.0, 3.4, 1.6, 0.4),
    (5.2, 3.5, 1.5, 0.2),
    (5.2, 3.4, 1.4, 0.2),
    (4.7, 3.2, 1.6, 0.2),
    (4.8, 3.1, 1.6, 0.2),
    (5.4, 3.4, 1.5, 0.4),
    (5.2, 4.1, 1.5, 0.1),
    (5.5, 4.2, 1.4, 0.2),
    (4.9, 3.1, 1.5, 0.2),
    (5.0, 3.2, 1.2, 0.2),
    (5.5, 3.5, 1.3, 0.2),
    (4.9, 3.6, 1.4, 0.1),
    (4.4, 3.0, 1.3, 0.2),
    (5.1, 3.4, 1.5, 0.2),
    (5.0, 3.5, 1.3, 0.3),
    (4.5, 2.3, 1.3, 0.3),
    (4.4, 3.2, 1.3, 0.2),
    (5.0, 3.5, 1.6, 0.6),
    (5.1, 3.8, 1.9, 0.4),
    (4.8, 3.0, 1.4, 0.3),
    (5.1, 3.8, 1.6, 0.2),
    (4.6, 3.2, 1.4, 0.2),
    (5.3, 3.7, 1.5, 0.2),
    (5.0, 3.3, 1.4, 0.2),
    (7.0, 3.2, 4.7, 1.4),
    (6.4, 3.2, 4.5, 1.5),
    (6.9, 3.1, 4.9, 1.5),
    (5.5, 2.3, 4.0, 1.3),
    (6.5, 2.8, 4.6, 1.5),
    (5.7, 2.8, 4.5, 1.3),
    (6.3, 3.3, 4.7, 1.6),
    (4.9, 2.4, 3.3, 1.0),
    (6.6, 2.9, 4.6, 1.3),
    (5.2, 2.7, 3.9, 1.4),
    (5.0, 2.0, 3.5, 1.0),
    (5.9, 3.0, 4.2, 1.5),
    (6.0, 2.2, 4.0, 1.0),
    (6.1, 2.9, 4.7, 1.4),
    (5.6, 2.9, 3.6, 1.3),
    (6.7, 3.1, 4.4, 1.4),
    (5.6, 3.0, 4.5, 1.5),
    (5.8, 2.7, 4.1, 1.0),
    (6.2, 2.2, 4.5, 1.5),
    (5.6, 2.5, 3.9, 1.1),
    (5.9, 3.2, 4.8, 1.8),
    (6.1, 2.8, 4.0, 1.3),
    (6.3, 2.5, 4.9, 1.5),
    (6.1, 2.8, 4.7, 1.2),
    (6.4, 2.9, 4.3, 1.3),
    (6.6, 3.0, 4.4, 1.4),
    (6.8, 2.8, 4.8, 1.4),
    (6.7, 3.0, 5.0, 1.7),
    (6.0, 2.9, 4.5, 1.5),
    (5.7, 2.6, 3.5, 1.0),
    (5.5, 2.4, 3.8, 1.1),
    (5.5, 2.4, 3.7, 1.0),
    (5.8, 2.7, 3.9, 1.2),
    (6.0, 2.7, 5.1, 1.6),
    (5.4, 3.0, 4.5, 1.5),
    (6.0, 3.4, 4.5, 1.6),
    (6.7, 3.1, 4.7, 1.5),
    (6.3, 2.3, 4.4, 1.3),
    (5.6, 3.0, 4.1, 1.3),
    (5.5, 2.5, 4.0, 1.3),
    (5.5, 2.6, 4.4, 1.2),
    (6.1, 3.0, 4.6, 1.4),
    (5.8, 2.6, 4.0, 1.2),
    (5.0, 2.3, 3.3, 1.0),
    (5.6, 2.7, 4.2, 1.3),
    (5.7, 3.0, 4.2, 1.2),
    (5.7, 2.9, 4.2, 1.3),
    (6.2, 2.9, 4.3, 1.3),
    (5.1, 2.5, 3.0, 1.1),
    (5.7, 2.8, 4.1, 1.3),
    (6.3, 3.3, 6.0, 2.5),
    (5.8, 2.7, 5.1, 1.9),
    (7.1, 3.0, 5.9, 2.1),
    (6.3, 2.9, 5.6, 1.8),
    (6.5, 3.0, 5.8, 2.2),
    (7.6, 3.0, 6.6, 2.1),
    (4.9, 2.5, 4.5, 1.7),
    (7.3, 2.9, 6.3, 1.8),
    (6.7, 2.5, 5.8, 1.8),
    (7.2, 3.6, 6.1, 2.5),
    (6.5, 3.2, 5.1, 2.0),
    (6.4, 2.7, 5.3, 1.9),
    (6.8, 3.0, 5.5, 2.1),
    (5.7, 2.5, 5.0, 2.0),
    (5.8, 2.8, 5.1, 2.4),
    (6.4, 3.2, 5.3, 2.3),
    (6.5, 3.0, 5.5, 1.8),
    (7.7, 3.8, 6.7, 2.2),
    (7.7, 2.6, 6.9, 2.3),
    (6.0, 2.2, 5.0, 1.5),
    (6.9, 3.2, 5.7, 2.3),
    (5.6, 2.8, 4.9, 2.0),
    (7.7, 2.8, 6.7, 2.0),
    (6.3, 2.7, 4.9, 1.8),
    (6.7, 3.3, 5.7, 2.1),
    (7.2, 3.2, 6.0, 1.8),
    (6.2, 2.8, 4.8, 1.8),
    (6.1, 3.0, 4.9, 1.8),
    (6.4, 2.8, 5.6, 2.1),
    (7.2, 3.0, 5.8, 1.6),
    (7.4, 2.8, 6.1, 1.9),
    (7.9, 3.8, 6.4, 2.0),
    (6.4, 2.8, 5.6, 2.2),
    (6.3, 2.8, 5.1, 1.5),
    (6.1, 2.6, 5.6, 1.4),
    (7.7, 3.0, 6.1, 2.3),
    (6.3, 3.4, 5.6, 2.4),
    (6.4, 3.1, 5.5, 1.8),
    (6.0, 3.0, 4.8, 1.8),
    (6.9, 3.1, 5.4, 2.1),
    (6.7, 3.1, 5.6, 2.4),
    (6.9, 3.1, 5.1, 2.3),
    (5.8, 2.7, 5.1, 1.9),
    (6.8, 3.2, 5.9, 2.3),
    (6.7, 3.3, 5.7, 2.5),
    (6.7, 3.0, 5.2, 2.3),
    (6.3, 2.5, 5.0, 1.9),
    (6.5, 3.0, 5.2, 2.0),
    (6.2, 3.4, 5.4, 2.3),
    (5.9, 3.0, 5.1, 1.8),
];

/// The iris dataset: 150 flower measurements over 3 species.
///
/// Columns: `sepal length`, `sepal width`, `petal length`, `petal width`
/// (numeric, cm) and `species` (categorical, 50 rows per species).
pub fn iris() -> TableSource {
    let mut sepal_length = Vec::with_capacity(IRIS.len());
    let mut sepal_width = Vec::with_capacity(IRIS.len());
    let mut petal_length = Vec::with_capacity(IRIS.len());
    let mut petal_width = Vec::with_capacity(IRIS.len());
    let mut species = Vec::with_capacity(IRIS.len());
    for (i, (sl, sw, pl, pw)) in IRIS.iter().enumerate() {
        sepal_length.push(*sl);
        sepal_width.push(*sw);
        petal_length.push(*pl);
        petal_width.push(*pw);
        species.push(
            match i / 50 {
                0 => "setosa",
                1 => "versicolor",
                _ => "virginica",
            }
            .to_string(),
        );
    }
    TableSource::new()
        .with_f64_column("sepal length", sepal_length)
        .with_f64_column("sepal width", sepal_width)
        .with_f64_column("petal length", petal_length)
        .with_f64_column("petal width", petal_width)
        .with_str_column("species", species)
}

/// A single-subject body temperature trace sampled every 10 minutes over
/// one day, with an activity indicator.
///
/// Columns: `time` (hours since start), `temp` (deg C) and `activ`
/// (0 or 1). The trace is synthesized deterministically: a circadian
/// baseline plus a temperature rise during the active period.
pub fn beaver() -> TableSource {
    let n = 144; // 24 h at 10 min steps
    let mut time = Vec::with_capacity(n);
    let mut temp = Vec::with_capacity(n);
    let mut activ = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / 6.0;
        let active = t >= 18.0 && t < 22.5;
        let circadian = 0.25 * (std::f64::consts::TAU * (t - 16.0) / 24.0).sin();
        let wiggle = 0.05 * (std::f64::consts::TAU * t / 1.7).sin();
        let boost = if active { 0.6 } else { 0.0 };
        time.push(t);
        temp.push(36.9 + circadian + wiggle + boost);
        activ.push(if active { 1.0 } else { 0.0 });
    }
    TableSource::new()
        .with_f64_column("time", time)
        .with_f64_column("temp", temp)
        .with_f64_column("activ", activ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Column, F64Column, Source, StrColumn};

    #[test]
    fn iris_shape() {
        let table = iris();
        assert_eq!(table.len(), 150);
        assert_eq!(table.heads().len(), 5);

        let species = table.column("species").unwrap().str().unwrap();
        let setosa = species
            .str_iter()
            .filter(|s| *s == Some("setosa"))
            .count();
        assert_eq!(setosa, 50);
    }

    #[test]
    fn beaver_shape() {
        let table = beaver();
        assert_eq!(table.len(), 144);
        let temp = table.column("temp").unwrap().f64().unwrap();
        let (min, max) = temp.minmax().unwrap();
        assert!(min > 36.0 && max < 38.5);
    }
}
