//! Data source abstractions and implementations.
//!
//! Series reference their data by column name, resolved against a
//! [`Source`] at prepare time. A source groups named [`Column`]s; several
//! column implementations are provided for common containers like
//! `Vec<f64>`, `Vec<i64>` or `Vec<String>`.

use core::fmt;

pub mod samples;
pub mod summary;
pub mod synth;

/// Error raised by data preparation helpers
#[derive(Debug)]
pub enum Error {
    /// The named column does not exist in the source
    MissingColumn(String),
    /// The named column is not a categorical (string) column
    NotCategorical(String),
    /// The named column is not a numeric column
    NotNumeric(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingColumn(name) => write!(f, "missing column: {name}"),
            Error::NotCategorical(name) => write!(f, "column {name} is not categorical"),
            Error::NotNumeric(name) => write!(f, "column {name} is not numeric"),
        }
    }
}

impl std::error::Error for Error {}

/// Sample value enum, for when the type is not known at compile time.
///
/// Borrows string data for categorical samples. See also [`OwnedSample`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Sample<'a> {
    /// Null value
    #[default]
    Null,
    /// Numeric value
    Num(f64),
    /// Categorical value
    Cat(&'a str),
}

impl Sample<'_> {
    /// Check if the sample is null
    pub fn is_null(&self) -> bool {
        matches!(self, Sample::Null)
    }

    /// Get the sample as a numeric value, if possible
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Sample::Num(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the sample as a categorical value, if possible
    pub fn as_cat(&self) -> Option<&str> {
        match self {
            Sample::Cat(v) => Some(v),
            _ => None,
        }
    }

    /// Convert the sample to an owned sample
    pub fn to_owned(&self) -> OwnedSample {
        match self {
            Sample::Null => OwnedSample::Null,
            Sample::Num(v) => OwnedSample::Num(*v),
            Sample::Cat(v) => OwnedSample::Cat(v.to_string()),
        }
    }
}

impl From<f64> for Sample<'_> {
    fn from(val: f64) -> Self {
        if val.is_finite() {
            Sample::Num(val)
        } else {
            Sample::Null
        }
    }
}

impl From<Option<f64>> for Sample<'_> {
    fn from(val: Option<f64>) -> Self {
        match val {
            Some(v) => v.into(),
            None => Sample::Null,
        }
    }
}

impl From<i64> for Sample<'_> {
    fn from(val: i64) -> Self {
        Sample::Num(val as f64)
    }
}

impl From<Option<i64>> for Sample<'_> {
    fn from(val: Option<i64>) -> Self {
        match val {
            Some(v) => Sample::Num(v as f64),
            None => Sample::Null,
        }
    }
}

impl<'a> From<&'a str> for Sample<'a> {
    fn from(val: &'a str) -> Self {
        Sample::Cat(val)
    }
}

impl<'a> From<Option<&'a str>> for Sample<'a> {
    fn from(val: Option<&'a str>) -> Self {
        match val {
            Some(val) => Sample::Cat(val),
            None => Sample::Null,
        }
    }
}

/// Owned version of [`Sample`]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OwnedSample {
    /// Null value
    #[default]
    Null,
    /// Numeric value
    Num(f64),
    /// Categorical value
    Cat(String),
}

impl OwnedSample {
    /// Check if the sample is null
    pub fn is_null(&self) -> bool {
        matches!(self, OwnedSample::Null)
    }

    /// Get the sample as a numeric value, if possible
    pub fn as_num(&self) -> Option<f64> {
        match self {
            OwnedSample::Num(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the sample as a categorical value, if possible
    pub fn as_cat(&self) -> Option<&str> {
        match self {
            OwnedSample::Cat(v) => Some(v),
            _ => None,
        }
    }

    /// Convert the owned sample to a borrowed sample
    pub fn as_sample(&self) -> Sample<'_> {
        match self {
            OwnedSample::Null => Sample::Null,
            OwnedSample::Num(v) => Sample::Num(*v),
            OwnedSample::Cat(v) => Sample::Cat(v.as_str()),
        }
    }
}

impl<'a> From<Sample<'a>> for OwnedSample {
    fn from(sample: Sample<'a>) -> Self {
        sample.to_owned()
    }
}

/// Trait for a column of unspecified type.
/// This is the base trait for data given to series.
pub trait Column: fmt::Debug {
    /// Get the length of the column
    fn len(&self) -> usize;

    /// Get the number of non-null values in the column
    fn len_some(&self) -> usize;

    /// Check if the column has no rows
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an iterator over the samples in the column
    fn sample_iter(&self) -> Box<dyn Iterator<Item = Sample<'_>> + '_> {
        if let Some(col) = self.i64() {
            Box::new(col.i64_iter().map(Sample::from))
        } else if let Some(col) = self.f64() {
            Box::new(col.f64_iter().map(Sample::from))
        } else if let Some(col) = self.str() {
            Box::new(col.str_iter().map(Sample::from))
        } else {
            Box::new(std::iter::empty())
        }
    }

    /// Get the column as a f64 column, if possible
    fn f64(&self) -> Option<&dyn F64Column> {
        None
    }

    /// Get the column as an i64 column, if possible
    fn i64(&self) -> Option<&dyn I64Column> {
        None
    }

    /// Get the column as a str column, if possible
    fn str(&self) -> Option<&dyn StrColumn> {
        None
    }
}

/// Trait for a column of f64 values
pub trait F64Column: fmt::Debug {
    /// Get the length of the column
    fn len(&self) -> usize;

    /// Get the number of non-null values in the column
    fn len_some(&self) -> usize {
        self.f64_iter().filter(|v| v.is_some()).count()
    }

    /// Get an iterator over the f64 values in the column
    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_>;

    /// Get the min and max values in the column.
    /// Returns None if there are only null values.
    fn minmax(&self) -> Option<(f64, f64)> {
        let mut res: Option<(f64, f64)> = None;
        for v in self.f64_iter() {
            match (v, res) {
                (None, _) => continue,
                (Some(v), Some((min, max))) => {
                    res = Some((min.min(v), max.max(v)));
                }
                (Some(v), None) => {
                    res = Some((v, v));
                }
            }
        }
        res
    }
}

/// Trait for a column of i64 values
pub trait I64Column: fmt::Debug {
    /// Get the length of the column
    fn len(&self) -> usize;

    /// Get the number of non-null values in the column
    fn len_some(&self) -> usize {
        self.i64_iter().filter(|v| v.is_some()).count()
    }

    /// Get an iterator over the i64 values in the column
    fn i64_iter(&self) -> Box<dyn Iterator<Item = Option<i64>> + '_>;
}

/// Trait for a column of string values
pub trait StrColumn: fmt::Debug {
    /// Get the length of the column
    fn len(&self) -> usize;

    /// Get the number of non-null values in the column
    fn len_some(&self) -> usize {
        self.str_iter().filter(|v| v.is_some()).count()
    }

    /// Get an iterator over the string values in the column
    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_>;
}

/// Trait for a data source.
/// This groups multiple columns together by name and provides
/// data access to the figure preparation.
pub trait Source: fmt::Debug {
    /// Get the names of the columns in the source
    fn names(&self) -> Vec<&str>;

    /// Get a column by name
    fn column(&self, name: &str) -> Option<&dyn Column>;
}

/// Empty source.
/// Use this if all series data is inlined in the figure description.
impl Source for () {
    fn names(&self) -> Vec<&str> {
        Vec::new()
    }

    fn column(&self, _name: &str) -> Option<&dyn Column> {
        None
    }
}

/// Column implementation for a slice of f64 values
#[derive(Debug, Clone, Copy)]
pub struct FCol<'a>(pub &'a [f64]);

impl F64Column for FCol<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
    fn len_some(&self) -> usize {
        self.0.iter().filter(|v| v.is_finite()).count()
    }
    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(
            self.0
                .iter()
                .copied()
                .map(|f| if f.is_finite() { Some(f) } else { None }),
        )
    }
}

impl Column for FCol<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
    fn len_some(&self) -> usize {
        self.0.iter().filter(|v| v.is_finite()).count()
    }
    fn f64(&self) -> Option<&dyn F64Column> {
        Some(self)
    }
}

/// Column implementation for a slice of i64 values
#[derive(Debug, Clone, Copy)]
pub struct ICol<'a>(pub &'a [i64]);

impl I64Column for ICol<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
    fn len_some(&self) -> usize {
        self.0.len()
    }
    fn i64_iter(&self) -> Box<dyn Iterator<Item = Option<i64>> + '_> {
        Box::new(self.0.iter().copied().map(Some))
    }
}

impl F64Column for ICol<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
    fn len_some(&self) -> usize {
        self.0.len()
    }
    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(self.0.iter().map(|i| *i as f64).map(Some))
    }
}

impl Column for ICol<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
    fn len_some(&self) -> usize {
        self.0.len()
    }
    fn i64(&self) -> Option<&dyn I64Column> {
        Some(self)
    }
    fn f64(&self) -> Option<&dyn F64Column> {
        Some(self)
    }
}

/// Column implementation for a slice of string-like values
#[derive(Debug)]
pub struct SCol<'a, T>(pub &'a [T]);

impl<T> StrColumn for SCol<'_, T>
where
    T: AsRef<str> + fmt::Debug,
{
    fn len(&self) -> usize {
        self.0.len()
    }
    fn len_some(&self) -> usize {
        self.0.len()
    }
    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.0.iter().map(|s| Some(s.as_ref())))
    }
}

impl<T> Column for SCol<'_, T>
where
    T: AsRef<str> + fmt::Debug,
{
    fn len(&self) -> usize {
        self.0.len()
    }
    fn len_some(&self) -> usize {
        self.0.len()
    }
    fn str(&self) -> Option<&dyn StrColumn> {
        Some(self)
    }
}

impl F64Column for Vec<f64> {
    fn len(&self) -> usize {
        self.len()
    }

    fn len_some(&self) -> usize {
        self.as_slice().iter().filter(|v| v.is_finite()).count()
    }

    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(
            self.as_slice()
                .iter()
                .copied()
                .map(|f| if f.is_finite() { Some(f) } else { None }),
        )
    }
}

impl Column for Vec<f64> {
    fn len(&self) -> usize {
        self.len()
    }
    fn len_some(&self) -> usize {
        self.as_slice().iter().filter(|v| v.is_finite()).count()
    }
    fn f64(&self) -> Option<&dyn F64Column> {
        Some(self)
    }
}

impl F64Column for Vec<i64> {
    fn len(&self) -> usize {
        self.len()
    }

    fn len_some(&self) -> usize {
        self.len()
    }

    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(self.as_slice().iter().copied().map(|v| Some(v as f64)))
    }
}

impl I64Column for Vec<i64> {
    fn len(&self) -> usize {
        self.len()
    }

    fn len_some(&self) -> usize {
        self.len()
    }

    fn i64_iter(&self) -> Box<dyn Iterator<Item = Option<i64>> + '_> {
        Box::new(self.as_slice().iter().copied().map(Some))
    }
}

impl Column for Vec<i64> {
    fn len(&self) -> usize {
        self.len()
    }

    fn len_some(&self) -> usize {
        self.len()
    }

    fn i64(&self) -> Option<&dyn I64Column> {
        Some(self)
    }

    fn f64(&self) -> Option<&dyn F64Column> {
        Some(self)
    }
}

impl F64Column for Vec<Option<i64>> {
    fn len(&self) -> usize {
        self.len()
    }

    fn len_some(&self) -> usize {
        self.as_slice().iter().filter(|v| v.is_some()).count()
    }

    fn f64_iter(&self) -> Box<dyn Iterator<Item = Option<f64>> + '_> {
        Box::new(self.as_slice().iter().copied().map(|v| v.map(|v| v as f64)))
    }
}

impl I64Column for Vec<Option<i64>> {
    fn len(&self) -> usize {
        self.len()
    }

    fn len_some(&self) -> usize {
        self.as_slice().iter().filter(|v| v.is_some()).count()
    }

    fn i64_iter(&self) -> Box<dyn Iterator<Item = Option<i64>> + '_> {
        Box::new(self.as_slice().iter().copied())
    }
}

impl Column for Vec<Option<i64>> {
    fn len(&self) -> usize {
        self.len()
    }

    fn len_some(&self) -> usize {
        self.as_slice().iter().filter(|v| v.is_some()).count()
    }

    fn i64(&self) -> Option<&dyn I64Column> {
        Some(self)
    }

    fn f64(&self) -> Option<&dyn F64Column> {
        Some(self)
    }
}

impl StrColumn for Vec<String> {
    fn len(&self) -> usize {
        self.len()
    }
    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.as_slice().iter().map(|s| Some(s.as_str())))
    }
}

impl Column for Vec<String> {
    fn len(&self) -> usize {
        self.len()
    }
    fn len_some(&self) -> usize {
        self.len()
    }
    fn str(&self) -> Option<&dyn StrColumn> {
        Some(self)
    }
}

impl StrColumn for Vec<Option<String>> {
    fn len(&self) -> usize {
        self.len()
    }
    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.as_slice().iter().map(|s| s.as_deref()))
    }
}

impl Column for Vec<Option<String>> {
    fn len(&self) -> usize {
        self.len()
    }
    fn len_some(&self) -> usize {
        self.as_slice().iter().filter(|v| v.is_some()).count()
    }
    fn str(&self) -> Option<&dyn StrColumn> {
        Some(self)
    }
}

impl StrColumn for Vec<&str> {
    fn len(&self) -> usize {
        self.len()
    }
    fn str_iter(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.as_slice().iter().map(|s| Some(*s)))
    }
}

impl Column for Vec<&str> {
    fn len(&self) -> usize {
        self.len()
    }
    fn len_some(&self) -> usize {
        self.len()
    }
    fn str(&self) -> Option<&dyn StrColumn> {
        Some(self)
    }
}

/// Column implementation backed by vectors, type known at runtime
#[derive(Debug, Clone)]
pub enum VecColumn {
    /// f64 column
    F64(Vec<f64>),
    /// i64 column
    I64(Vec<Option<i64>>),
    /// string column
    Str(Vec<Option<String>>),
}

impl From<Vec<f64>> for VecColumn {
    fn from(v: Vec<f64>) -> Self {
        VecColumn::F64(v)
    }
}

impl From<Vec<i64>> for VecColumn {
    fn from(v: Vec<i64>) -> Self {
        VecColumn::I64(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<i64>>> for VecColumn {
    fn from(v: Vec<Option<i64>>) -> Self {
        VecColumn::I64(v)
    }
}

impl From<Vec<String>> for VecColumn {
    fn from(v: Vec<String>) -> Self {
        VecColumn::Str(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for VecColumn {
    fn from(v: Vec<&str>) -> Self {
        VecColumn::Str(v.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<Option<String>>> for VecColumn {
    fn from(v: Vec<Option<String>>) -> Self {
        VecColumn::Str(v)
    }
}

impl Column for VecColumn {
    fn len(&self) -> usize {
        match self {
            VecColumn::F64(v) => v.len(),
            VecColumn::I64(v) => v.len(),
            VecColumn::Str(v) => v.len(),
        }
    }

    fn len_some(&self) -> usize {
        match self {
            VecColumn::F64(v) => <dyn F64Column>::len_some(v),
            VecColumn::I64(v) => <dyn I64Column>::len_some(v),
            VecColumn::Str(v) => <dyn StrColumn>::len_some(v),
        }
    }

    fn sample_iter(&self) -> Box<dyn Iterator<Item = Sample<'_>> + '_> {
        match self {
            VecColumn::F64(v) => Box::new(v.iter().map(|v| (*v).into())),
            VecColumn::I64(v) => Box::new(v.iter().map(|v| (*v).into())),
            VecColumn::Str(v) => Box::new(v.iter().map(|v| match v {
                Some(s) => Sample::Cat(s.as_str()),
                None => Sample::Null,
            })),
        }
    }

    fn f64(&self) -> Option<&dyn F64Column> {
        match self {
            VecColumn::F64(v) => Some(v),
            VecColumn::I64(v) => Some(v),
            _ => None,
        }
    }

    fn i64(&self) -> Option<&dyn I64Column> {
        match self {
            VecColumn::I64(v) => Some(v),
            _ => None,
        }
    }

    fn str(&self) -> Option<&dyn StrColumn> {
        match self {
            VecColumn::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// Simple table source backed by vectors.
/// This source owns the data and ensures that all columns have the same
/// length, padding short columns with null values.
#[derive(Debug, Clone)]
pub struct TableSource {
    heads: Vec<String>,
    columns: Vec<VecColumn>,
    len: usize,
}

impl Default for TableSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSource {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            heads: Vec::new(),
            columns: Vec::new(),
            len: 0,
        }
    }

    /// Get the column names, in insertion order
    pub fn heads(&self) -> &[String] {
        &self.heads
    }

    /// Add a column with the given name.
    /// Shorter columns (this one or the existing ones) are padded with
    /// null values so that all columns share the same length.
    pub fn add_column(&mut self, name: &str, col: VecColumn) {
        self.len = self.len.max(Column::len(&col));
        self.heads.push(name.to_string());
        self.columns.push(col);
        for col in &mut self.columns {
            while Column::len(col) < self.len {
                match col {
                    VecColumn::F64(vec) => vec.push(f64::NAN),
                    VecColumn::I64(vec) => vec.push(None),
                    VecColumn::Str(vec) => vec.push(None),
                }
            }
        }
    }

    /// Add a column with the given name, returning self for chaining
    pub fn with_column(mut self, name: &str, col: VecColumn) -> Self {
        self.add_column(name, col);
        self
    }

    /// Add a f64 column with the given name, returning self for chaining
    pub fn with_f64_column(mut self, name: &str, col: Vec<f64>) -> Self {
        self.add_column(name, VecColumn::F64(col));
        self
    }

    /// Add an i64 column with the given name, returning self for chaining
    pub fn with_i64_column(mut self, name: &str, col: Vec<i64>) -> Self {
        self.add_column(name, col.into());
        self
    }

    /// Add a string column with the given name, returning self for chaining
    pub fn with_str_column(mut self, name: &str, col: Vec<String>) -> Self {
        self.add_column(name, col.into());
        self
    }

    /// Get the number of rows in the table
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Source for TableSource {
    fn names(&self) -> Vec<&str> {
        self.heads.iter().map(|s| s.as_str()).collect()
    }

    fn column(&self, name: &str) -> Option<&dyn Column> {
        let idx = self.heads.iter().position(|k| k == name)?;
        self.columns.get(idx).map(|c| c as &dyn Column)
    }
}

/// Simple collection of named columns, referencing external data
#[derive(Debug, Default)]
pub struct NamedColumns<'a> {
    names: Vec<String>,
    columns: Vec<&'a dyn Column>,
}

impl<'a> NamedColumns<'a> {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Add a column with the given name.
    /// If the name is already present, the column is replaced.
    pub fn add_column(&mut self, name: &str, col: &'a dyn Column) {
        let position = self.names.iter().position(|n| n == name);
        if let Some(pos) = position {
            self.columns[pos] = col;
            return;
        }
        self.names.push(name.to_string());
        self.columns.push(col);
    }

    /// Add a column with the given name, returning self for chaining
    pub fn with_column(mut self, name: &str, col: &'a dyn Column) -> Self {
        self.add_column(name, col);
        self
    }
}

impl Source for NamedColumns<'_> {
    fn names(&self) -> Vec<&str> {
        self.names.iter().map(|s| s.as_str()).collect()
    }

    fn column(&self, name: &str) -> Option<&dyn Column> {
        let idx = self.names.iter().position(|k| k == name)?;
        self.columns.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_source_pads_columns() {
        let table = TableSource::new()
            .with_f64_column("a", vec![1.0, 2.0, 3.0])
            .with_str_column("b", vec!["x".to_string()]);
        assert_eq!(table.len(), 3);
        let b = table.column("b").unwrap();
        assert_eq!(b.len(), 3);
        assert_eq!(b.len_some(), 1);
    }

    #[test]
    fn column_minmax_skips_nulls() {
        let col: Vec<f64> = vec![3.0, f64::NAN, -1.0, 7.5];
        let (min, max) = F64Column::minmax(&col).unwrap();
        assert_eq!(min, -1.0);
        assert_eq!(max, 7.5);

        let empty: Vec<f64> = vec![f64::NAN];
        assert!(F64Column::minmax(&empty).is_none());
    }

    #[test]
    fn named_columns_lookup() {
        let xs = vec![1.0, 2.0];
        let names = vec!["a", "b"];
        let src = NamedColumns::new()
            .with_column("x", &xs)
            .with_column("n", &names);
        assert_eq!(src.names(), vec!["x", "n"]);
        assert!(src.column("x").unwrap().f64().is_some());
        assert!(src.column("n").unwrap().str().is_some());
        assert!(src.column("missing").is_none());
    }
}
