//! Node attribute columns and values.

use crate::dynamic::DynamicSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Double,
    Integer,
    Boolean,
    Text,
    /// Time-indexed floating-point values.
    DynamicDouble,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Double | Self::Integer | Self::DynamicDouble)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Double(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
    Dynamic(DynamicSeries),
}

impl AttributeValue {
    /// Scalar value coerced to `f64`.
    ///
    /// Text is parsed after trimming; booleans and time-indexed series have no scalar reading.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Boolean(_) | Self::Dynamic(_) => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DynamicSeries> for AttributeValue {
    fn from(value: DynamicSeries) -> Self {
        Self::Dynamic(value)
    }
}
