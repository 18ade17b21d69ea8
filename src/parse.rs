use std::io::Read;

use serde_json::Value;

use crate::error::Error;
use crate::options::ParseOptions;
use crate::Result;

pub(crate) fn from_slice(input: &[u8], options: &ParseOptions) -> Result<Value> {
    let value = serde_json::from_slice(input)?;
    check_depth(value, options)
}

pub(crate) fn from_str(input: &str, options: &ParseOptions) -> Result<Value> {
    let value = serde_json::from_str(input)?;
    check_depth(value, options)
}

pub(crate) fn from_reader<R: Read>(reader: R, options: &ParseOptions) -> Result<Value> {
    let value = serde_json::from_reader(reader)?;
    check_depth(value, options)
}

fn check_depth(value: Value, options: &ParseOptions) -> Result<Value> {
    let depth = nesting_depth(&value);
    if depth > options.max_depth {
        tracing::debug!(
            target: "serde_json_ext::parse",
            depth,
            max_depth = options.max_depth,
            "Rejected JSON document nested beyond the configured limit"
        );
        return Err(Error::syntax(format!(
            "JSON nesting depth {depth} exceeds the maximum of {}",
            options.max_depth
        )));
    }
    Ok(value)
}

/// Containers count one level each; scalars add nothing.
fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        Value::Object(entries) => 1 + entries.values().map(nesting_depth).max().unwrap_or(0),
        _ => 0,
    }
}
