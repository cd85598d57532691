//! Cell value types

use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Represents the value stored in a cell
///
/// Exactly one tag is active. Values keep their own type through every
/// stage; nothing in the engine coerces text to numbers or back.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Blank cell (present, possibly formatted, but without a value)
    #[default]
    Blank,

    /// Text value
    Text(SharedString),

    /// Numeric value
    Number(f64),

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Date or date-time value
    DateTime(NaiveDateTime),

    /// Error value (#VALUE!, #REF!, etc.)
    Error(CellError),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: AsRef<str>>(s: S) -> Self {
        CellValue::Text(SharedString::new(s))
    }

    /// Get the data type discriminator for this value
    pub fn data_type(&self) -> DataType {
        match self {
            CellValue::Blank => DataType::Blank,
            CellValue::Text(_) => DataType::Character,
            CellValue::Number(_) => DataType::Numeric,
            CellValue::Boolean(_) => DataType::Logical,
            CellValue::DateTime(_) => DataType::Date,
            CellValue::Error(_) => DataType::Error,
        }
    }

    /// Check if the cell is blank
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Check if the cell contains an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }

    /// Get the value as text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the value as a number, if it is numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is logical
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a date-time, if it is a date
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        self.data_type().as_str()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Blank => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s.as_str()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::DateTime(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::text(s)
    }
}

impl From<SharedString> for CellValue {
    fn from(s: SharedString) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(d: NaiveDateTime) -> Self {
        CellValue::DateTime(d)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

/// Data type discriminator reported by cell importers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    Blank,
    Character,
    Numeric,
    Logical,
    Date,
    Error,
}

impl DataType {
    /// Lowercase name, as used in importer records and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Blank => "blank",
            DataType::Character => "character",
            DataType::Numeric => "numeric",
            DataType::Logical => "logical",
            DataType::Date => "date",
            DataType::Error => "error",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spreadsheet error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
            CellError::Na => "#N/A",
        }
    }
}

impl FromStr for CellError {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "#NULL!" => Ok(CellError::Null),
            "#DIV/0!" => Ok(CellError::Div0),
            "#VALUE!" => Ok(CellError::Value),
            "#REF!" => Ok(CellError::Ref),
            "#NAME?" => Ok(CellError::Name),
            "#NUM!" => Ok(CellError::Num),
            "#N/A" => Ok(CellError::Na),
            other => Err(crate::Error::other(format!("unknown error value '{}'", other))),
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shared string for memory efficiency
///
/// Header text is copied onto every data cell it governs. Using `Arc<str>`
/// lets all of those copies share one allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a new shared string
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the string
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedString {
    fn from(s: &str) -> Self {
        SharedString::new(s)
    }
}

impl From<String> for SharedString {
    fn from(s: String) -> Self {
        SharedString::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(42.0));
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));
        assert_eq!(CellValue::from("hello").as_text(), Some("hello"));
        assert_eq!(CellValue::default(), CellValue::Blank);
    }

    #[test]
    fn test_no_cross_type_access() {
        assert_eq!(CellValue::text("2").as_number(), None);
        assert_eq!(CellValue::Number(1.0).as_bool(), None);
        assert_eq!(CellValue::Boolean(true).as_number(), None);
    }

    #[test]
    fn test_data_type() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::Blank.data_type(), DataType::Blank);
        assert_eq!(CellValue::text("x").data_type(), DataType::Character);
        assert_eq!(CellValue::Number(1.5).data_type(), DataType::Numeric);
        assert_eq!(CellValue::from(date).data_type(), DataType::Date);
        assert_eq!(CellValue::from(CellError::Na).type_name(), "error");
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Blank.to_string(), "");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Boolean(false).to_string(), "FALSE");
        assert_eq!(CellValue::Error(CellError::Div0).to_string(), "#DIV/0!");
    }

    #[test]
    fn test_cell_error_parse() {
        assert_eq!("#N/A".parse::<CellError>().unwrap(), CellError::Na);
        assert_eq!("#div/0!".parse::<CellError>().unwrap(), CellError::Div0);
        assert!("oops".parse::<CellError>().is_err());
    }
}
