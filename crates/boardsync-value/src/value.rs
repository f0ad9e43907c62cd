//! The board value tree.

use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;
use serde_json::Number;

/// Insertion-ordered mapping used for board objects.
pub type Map = IndexMap<String, Value>;

/// A parsed date, optionally with a time of day.
///
/// Dates are opaque to structural diffing: two dates are compared by
/// their ISO string form, never field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl DateValue {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    pub fn with_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    /// ISO-8601 form: `YYYY-MM-DD`, or `YYYY-MM-DDTHH:MM:SS` when a
    /// time of day is present.
    pub fn to_iso_string(&self) -> String {
        match self.time {
            Some(time) => format!(
                "{}T{}",
                self.date.format("%Y-%m-%d"),
                time.format("%H:%M:%S")
            ),
            None => self.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// A reference to a file in the host vault.
///
/// Like dates, file references are opaque leaves compared by their
/// link form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// Link target (vault-relative path or link text).
    pub target: String,
    /// Whether the link is an embed.
    pub embed: bool,
}

impl FileRef {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            embed: false,
        }
    }

    pub fn embedded(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            embed: true,
        }
    }

    /// Link form: the target, prefixed with `!` for embeds.
    pub fn to_link_string(&self) -> String {
        if self.embed {
            format!("!{}", self.target)
        } else {
            self.target.clone()
        }
    }
}

/// A node in a board value tree.
///
/// Containers are reference-counted: cloning a `Value` shares the
/// underlying storage, and mutation goes through copy-on-write
/// (`Rc::make_mut`), so unrelated clones are never disturbed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(DateValue),
    FileRef(FileRef),
    Array(Rc<Vec<Value>>),
    Object(Rc<Map>),
}

/// Structural classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A keyed mapping; insertion order is preserved but not
    /// significant for comparison.
    Mapping,
    /// An ordered sequence; order is significant.
    Sequence,
    /// Anything else: scalars and the opaque wrappers.
    Leaf,
}

/// Classify a value for structural comparison.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Object(_) => Kind::Mapping,
        Value::Array(_) => Kind::Sequence,
        _ => Kind::Leaf,
    }
}

impl Value {
    /// An empty mapping.
    pub fn empty_object() -> Self {
        Value::Object(Rc::new(Map::new()))
    }

    /// Wrap a vector of values into a sequence.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(items))
    }

    /// Wrap a map into a mapping.
    pub fn object(map: Map) -> Self {
        Value::Object(Rc::new(map))
    }

    /// `true` when this value is a container eligible for structural
    /// diffing.
    pub fn is_diffable(&self) -> bool {
        !matches!(classify(self), Kind::Leaf)
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Identity comparison: pointer equality for containers, value
    /// equality for leaves.
    ///
    /// Two structurally equal containers built independently are *not*
    /// `ptr_eq`; only clones sharing storage are.
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Array(x), Value::Array(y)) => Rc::ptr_eq(x, y),
            (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
            (Value::Array(_), _)
            | (Value::Object(_), _)
            | (_, Value::Array(_))
            | (_, Value::Object(_)) => false,
            _ => a == b,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateValue> for Value {
    fn from(d: DateValue) -> Self {
        Value::Date(d)
    }
}

impl From<FileRef> for Value {
    fn from(f: FileRef) -> Self {
        Value::FileRef(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::object(map)
    }
}
