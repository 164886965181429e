//! Table summarization helpers.
//!
//! These produce new [`TableSource`]s from an existing source, so that
//! derived tables (group means, filtered subsets) can feed figure
//! descriptions like any other data.

use super::{
    Column, Error, F64Column, I64Column, Sample, Source, StrColumn, TableSource, VecColumn,
};

/// Compute per-category means of every numeric column of `source`.
///
/// The result has one row per distinct value of the `category` column, in
/// first-seen order, with the category column first and one column per
/// numeric column of the source, in source order. Null samples are
/// excluded from the means; a category with no value for a column yields
/// a null cell. Non-numeric columns other than `category` are dropped.
pub fn group_means<S: Source + ?Sized>(source: &S, category: &str) -> Result<TableSource, Error> {
    let cat_col = source
        .column(category)
        .ok_or_else(|| Error::MissingColumn(category.to_string()))?;
    let cat_col = cat_col
        .str()
        .ok_or_else(|| Error::NotCategorical(category.to_string()))?;

    let mut cats: Vec<String> = Vec::new();
    for cat in cat_col.str_iter().flatten() {
        if !cats.iter().any(|c| c == cat) {
            cats.push(cat.to_string());
        }
    }

    let mut out = TableSource::new().with_str_column(category, cats.clone());

    for name in source.names() {
        if name == category {
            continue;
        }
        let Some(col) = source.column(name) else {
            continue;
        };
        let Some(col) = col.f64() else {
            continue;
        };

        let mut sums = vec![0.0; cats.len()];
        let mut counts = vec![0usize; cats.len()];
        for (cat, val) in cat_col.str_iter().zip(col.f64_iter()) {
            let (Some(cat), Some(val)) = (cat, val) else {
                continue;
            };
            if let Some(idx) = cats.iter().position(|c| c == cat) {
                sums[idx] += val;
                counts[idx] += 1;
            }
        }
        let means = sums
            .iter()
            .zip(&counts)
            .map(|(s, &n)| if n > 0 { s / n as f64 } else { f64::NAN })
            .collect();
        out.add_column(name, VecColumn::F64(means));
    }

    Ok(out)
}

/// Keep the rows of `source` whose `field` sample equals `value`.
///
/// All columns are carried over. An empty result is valid: the returned
/// table simply has zero rows.
pub fn filter_eq<S: Source + ?Sized>(
    source: &S,
    field: &str,
    value: Sample,
) -> Result<TableSource, Error> {
    let col = source
        .column(field)
        .ok_or_else(|| Error::MissingColumn(field.to_string()))?;
    let mask: Vec<bool> = col.sample_iter().map(|s| s == value).collect();

    let mut out = TableSource::new();
    for name in source.names() {
        let Some(col) = source.column(name) else {
            continue;
        };
        if let Some(col) = col.str() {
            let vals: Vec<Option<String>> = col
                .str_iter()
                .zip(&mask)
                .filter(|&(_, &keep)| keep)
                .map(|(v, _)| v.map(str::to_string))
                .collect();
            out.add_column(name, VecColumn::Str(vals));
        } else if let Some(col) = col.i64() {
            // i64 before f64: integer columns also expose a f64 view
            let vals: Vec<Option<i64>> = col
                .i64_iter()
                .zip(&mask)
                .filter(|&(_, &keep)| keep)
                .map(|(v, _)| v)
                .collect();
            out.add_column(name, VecColumn::I64(vals));
        } else if let Some(col) = col.f64() {
            let vals: Vec<f64> = col
                .f64_iter()
                .zip(&mask)
                .filter(|&(_, &keep)| keep)
                .map(|(v, _)| v.unwrap_or(f64::NAN))
                .collect();
            out.add_column(name, VecColumn::F64(vals));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_near;

    fn sample_table() -> TableSource {
        TableSource::new()
            .with_str_column(
                "group",
                vec!["a", "b", "a", "b", "a"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            )
            .with_f64_column("x", vec![1.0, 10.0, 2.0, 20.0, 3.0])
            .with_f64_column("y", vec![0.5, 1.0, f64::NAN, 2.0, 1.5])
    }

    #[test]
    fn group_means_shape_and_order() {
        let means = group_means(&sample_table(), "group").unwrap();
        assert_eq!(means.heads(), &["group", "x", "y"]);
        assert_eq!(means.len(), 2);

        let groups: Vec<_> = means
            .column("group")
            .unwrap()
            .str()
            .unwrap()
            .str_iter()
            .map(|s| s.unwrap().to_string())
            .collect();
        // first-seen order, not sorted
        assert_eq!(groups, vec!["a", "b"]);
    }

    #[test]
    fn group_means_values_skip_nulls() {
        let means = group_means(&sample_table(), "group").unwrap();
        let x: Vec<_> = means
            .column("x")
            .unwrap()
            .f64()
            .unwrap()
            .f64_iter()
            .map(|v| v.unwrap())
            .collect();
        assert_near!(x[0], 2.0);
        assert_near!(x[1], 15.0);

        // the NaN in group "a" is excluded from the mean
        let y: Vec<_> = means
            .column("y")
            .unwrap()
            .f64()
            .unwrap()
            .f64_iter()
            .map(|v| v.unwrap())
            .collect();
        assert_near!(y[0], 1.0);
        assert_near!(y[1], 1.5);
    }

    #[test]
    fn group_means_iris_shape() {
        let means = group_means(&crate::data::samples::iris(), "species").unwrap();
        assert_eq!(means.len(), 3);
        assert_eq!(means.heads().len(), 5);
        assert_eq!(means.heads()[0], "species");
    }

    #[test]
    fn group_means_errors() {
        assert!(matches!(
            group_means(&sample_table(), "nope"),
            Err(Error::MissingColumn(_))
        ));
        assert!(matches!(
            group_means(&sample_table(), "x"),
            Err(Error::NotCategorical(_))
        ));
    }

    #[test]
    fn filter_eq_cat() {
        let table = sample_table();
        let sub = filter_eq(&table, "group", Sample::Cat("a")).unwrap();
        assert_eq!(sub.len(), 3);
        let x = sub.column("x").unwrap();
        let (min, max) = x.f64().unwrap().minmax().unwrap();
        assert_near!(min, 1.0);
        assert_near!(max, 3.0);
    }

    #[test]
    fn filter_eq_empty_result() {
        let table = sample_table();
        let sub = filter_eq(&table, "group", Sample::Cat("zzz")).unwrap();
        assert_eq!(sub.len(), 0);
        assert_eq!(sub.heads(), table.heads());
    }
}
