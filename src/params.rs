//! Input helpers shared by the front ends.
//!
//! Nothing here is consulted by scoring, which only cares about which
//! parameter keys are present. These helpers turn loosely typed user input
//! (`key=value` pairs, bare intent names) into the pieces of an
//! [`Intent`](crate::Intent).

use crate::intent::ParamValue;
use std::collections::BTreeMap;
use tracing::debug;

/// Coerce a raw textual value to the most specific scalar that parses.
///
/// Values containing a `.` are tried as floats, everything else as an
/// integer. Surrounding whitespace is ignored when parsing numbers, but text
/// that fails to parse is kept exactly as given. Integers outside `i64` stay
/// strings.
pub fn coerce_param_value(raw: &str) -> ParamValue {
    let number = raw.trim();
    if number.contains('.') {
        if let Ok(parsed) = number.parse::<f64>() {
            return ParamValue::Float(parsed);
        }
    } else if let Ok(parsed) = number.parse::<i64>() {
        return ParamValue::Int(parsed);
    }
    ParamValue::Str(raw.to_string())
}

/// Split `key=value` on the first `=`. Items without `=` yield `None`; the
/// key is taken verbatim, so `=x` sets the empty key.
pub fn parse_param_pair(item: &str) -> Option<(String, ParamValue)> {
    let (key, value) = item.split_once('=')?;
    Some((key.to_string(), coerce_param_value(value)))
}

/// Build a params map from repeated `key=value` items; later keys win.
pub fn parse_params<I, S>(items: I) -> BTreeMap<String, ParamValue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| {
            let item = item.as_ref();
            let pair = parse_param_pair(item);
            if pair.is_none() {
                debug!(item, "ignoring param without '='");
            }
            pair
        })
        .collect()
}

/// Tags inferred from a bare intent name when the caller supplied none.
pub fn tags_for_alias(name: &str) -> Vec<String> {
    let tags: &[&str] = match name {
        "transfer" | "pay" => &["transfer", "payment"],
        "notify" | "message" => &["notify", "message"],
        "swap" => &["swap", "trade"],
        _ => &[],
    };
    tags.iter().map(|tag| tag.to_string()).collect()
}

/// Use `tags` when non-empty, otherwise fall back to the alias for `name`.
pub fn resolve_tags(name: &str, tags: Vec<String>) -> Vec<String> {
    if tags.is_empty() {
        tags_for_alias(name)
    } else {
        tags
    }
}
