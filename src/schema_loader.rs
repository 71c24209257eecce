//! JSON Schema compilation with `schema_version` enforcement.
//!
//! Catalog schemas pin their accepted version with a `const` at
//! `/properties/schema_version/const`. The loader extracts that version,
//! checks it against the caller's allowed set, and compiles a validator.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeSet;

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// A compiled schema plus the version it accepts.
pub(crate) struct LoadedSchema {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

impl LoadedSchema {
    /// Validate `instance`, joining every violation into one error.
    pub fn validate(&self, instance: &Value, label: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{label} failed schema validation:\n{details}");
        }
        Ok(())
    }
}

/// Parse, version-check, and compile a schema document.
pub(crate) fn load_json_schema(
    raw: &str,
    label: &str,
    allowed_versions: &BTreeSet<String>,
) -> Result<LoadedSchema> {
    let schema: Value =
        serde_json::from_str(raw).map_err(|err| anyhow!("parsing schema {label}: {err}"))?;

    let schema_version = extract_schema_version(&schema)
        .ok_or_else(|| anyhow!("schema {label} missing schema_version const"))?;
    if !allowed_versions.contains(&schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed_versions
        );
    }

    // The compile error borrows the schema, so render it before it drops.
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling schema {label}: {err}"))?;

    Ok(LoadedSchema {
        schema_version,
        compiled,
    })
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if is_identifier(version) {
        Some(version.to_string())
    } else {
        None
    }
}

/// True for non-empty strings matching `^[A-Za-z0-9_.-]+$`.
pub(crate) fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
