use crate::error::{Error, Result};
use crate::kind::ValueKind;

/// A typed value produced by the parser.
///
/// The variant always agrees with the [`ValueKind`] requested for the slot it
/// fills. Asking an accessor for a different payload returns `None`; code that
/// expects a specific kind can treat that as a bug in its own option table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "kebab-case"))]
pub enum ParsedValue {
    Empty,
    Help,
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Boolean(bool),
}

impl ParsedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Empty => ValueKind::None,
            Self::Help => ValueKind::Help,
            Self::Int(_) => ValueKind::Int,
            Self::Long(_) => ValueKind::Long,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::String(_) => ValueKind::String,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i32> for ParsedValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for ParsedValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for ParsedValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for ParsedValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for ParsedValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for ParsedValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for ParsedValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// Interpret `raw` as a boolean.
///
/// Accepts `y`, `yes`, `true`, `1`, `on` and `n`, `no`, `false`, `0`, `off`.
/// Matching is case-sensitive: `"Yes"` is rejected.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "y" | "yes" | "true" | "1" | "on" => Some(true),
        "n" | "no" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Convert `raw` into a value of `kind`.
///
/// `label` only feeds the error message: the option alias that captured the
/// value, or the 1-based token index of a positional.
pub fn coerce(label: &str, raw: &str, kind: ValueKind) -> Result<ParsedValue> {
    let parsed = match kind {
        ValueKind::None => Some(ParsedValue::Empty),
        ValueKind::Help => Some(ParsedValue::Help),
        ValueKind::String => Some(ParsedValue::String(raw.to_string())),
        ValueKind::Int => raw.parse().ok().map(ParsedValue::Int),
        ValueKind::Long => raw.parse().ok().map(ParsedValue::Long),
        ValueKind::Float => raw.parse().ok().map(ParsedValue::Float),
        ValueKind::Double => raw.parse().ok().map(ParsedValue::Double),
        ValueKind::Boolean => parse_bool(raw).map(ParsedValue::Boolean),
    };

    parsed.ok_or_else(|| Error::Coercion {
        label: label.to_string(),
        raw: raw.to_string(),
        kind,
    })
}
