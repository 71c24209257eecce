//! Caller-declared intents.
//!
//! An intent names a desired outcome and carries the structured parameters and
//! tags used to match it against registered capabilities. Intents are built
//! once by a front end and consumed by a single solve call; nothing in the
//! crate mutates them afterwards.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Scalar parameter value supplied with an intent.
///
/// Serialized as a bare JSON scalar. Scoring only looks at which keys are
/// present, so the variant never influences matching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::Float(value) => write_float(f, *value),
            ParamValue::Str(value) => f.write_str(value),
        }
    }
}

/// Shortest round-trip float text: plain notation in `[1e-4, 1e16)`, always
/// with a fractional digit, otherwise exponent notation with a signed,
/// two-digit-minimum exponent (`1e+16`, `2.5e-07`).
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{value:e}");
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or_default();
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }
    // Keep a fractional digit so 10.0 does not read as the integer 10.
    if value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// A desired outcome rather than the concrete steps to reach it.
///
/// `priority` is carried for callers but is not consulted by scoring or
/// dispatch.
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: i64,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_params(mut self, params: BTreeMap<String, ParamValue>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Tags as a set; duplicates and ordering do not affect matching.
    pub fn distinct_tags(&self) -> BTreeSet<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Render a parameter for handler output, `None` when the key is absent.
    pub fn param_text(&self, key: &str) -> String {
        self.params
            .get(key)
            .map(ToString::to_string)
            .unwrap_or_else(|| "None".to_string())
    }
}
