//! Core data model types for reporting.
//!
//! The report layer consumes an in-memory [`DataSet`] (typed columns described
//! by a [`Schema`]) that was loaded and cleaned upstream. Datasets are only
//! read and derived from here, never mutated in place.

use std::cmp::Ordering;

/// Logical data type for a schema field.
///
/// The histogram filtering policy branches on this declared tag (see
/// [`DataType::is_categorical`]), never on runtime value inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string (free-form text).
    Utf8,
    /// Dictionary-style discrete label column. Cells carry [`Value::Utf8`].
    Categorical,
}

impl DataType {
    /// True for text-like / discrete axes: [`DataType::Utf8`] and
    /// [`DataType::Categorical`].
    ///
    /// Categorical axes bin by distinct value, so per-value operations such as
    /// top/bottom-N selection are well-defined on them. Numeric axes bin by
    /// range instead.
    pub fn is_categorical(&self) -> bool {
        matches!(self, DataType::Utf8 | DataType::Categorical)
    }

    /// True for [`DataType::Int64`] and [`DataType::Float64`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int64 | DataType::Float64)
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A list of fields describing the shape of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns the field with the given name, if present.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Deterministic total ordering over values, used when sorting a working
    /// table by its y column.
    ///
    /// Nulls sort first; numeric values (`Int64`/`Float64`) compare by
    /// numeric value across the two types, with NaN above all other numbers;
    /// booleans sort `false < true`; strings compare lexicographically.
    /// Variant groups order as null < numeric < bool < string.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Int64(a), Int64(b)) => a.cmp(b),
            (Float64(a), Float64(b)) => a.total_cmp(b),
            (Int64(a), Float64(b)) => (*a as f64).total_cmp(b),
            (Float64(a), Int64(b)) => a.total_cmp(&(*b as f64)),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Utf8(a), Utf8(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Int64(_) | Value::Float64(_) => 1,
            Value::Bool(_) => 2,
            Value::Utf8(_) => 3,
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`]
/// fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the values of one column by index.
    ///
    /// Rows shorter than the schema yield [`Value::Null`] for the missing
    /// cell.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| row.get(idx).unwrap_or(&Value::Null))
    }
}
