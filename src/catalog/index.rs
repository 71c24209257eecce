//! Validated loading of capability catalogs.
//!
//! Catalogs are checked against the bundled JSON Schema before they are
//! deserialized, and unknown `schema_version` values are rejected so a
//! front end never routes against a catalog it does not understand.
//! Duplicate capability names are accepted: each entry is scored on its own.

use crate::catalog::model::CapabilityCatalog;
use crate::schema_loader::{LoadedSchema, is_identifier, load_json_schema};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CATALOG_SCHEMA_VERSION: &str = "intent_catalog_v1";

/// Environment variable naming a catalog file for the front ends.
pub const CATALOG_ENV: &str = "INTENT_SOLVER_CATALOG";

const CATALOG_SCHEMA: &str = include_str!("../../schema/capability_catalog.schema.json");

/// Read, schema-validate, and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<CapabilityCatalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("opening catalog {}", path.display()))?;
    let value: Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    let catalog = parse_catalog(value, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        capabilities = catalog.capabilities.len(),
        "loaded capability catalog"
    );
    Ok(catalog)
}

/// Validate and parse an already-decoded catalog document.
///
/// `origin` labels error messages (usually the file path).
pub fn parse_catalog(value: Value, origin: &str) -> Result<CapabilityCatalog> {
    let schema = catalog_schema()?;
    validate_schema_version(&value, &schema.schema_version, origin)?;
    schema.validate(&value, &format!("capability catalog {origin}"))?;

    let catalog: CapabilityCatalog = serde_json::from_value(value)
        .with_context(|| format!("decoding capability catalog {origin}"))?;
    validate_entries(&catalog, origin)?;
    Ok(catalog)
}

/// Catalog path from `INTENT_SOLVER_CATALOG`, ignoring blank values.
pub fn catalog_path_from_env() -> Option<PathBuf> {
    env::var_os(CATALOG_ENV)
        .filter(|value| !value.to_string_lossy().trim().is_empty())
        .map(PathBuf::from)
}

fn catalog_schema() -> Result<LoadedSchema> {
    let allowed = BTreeSet::from([CATALOG_SCHEMA_VERSION.to_string()]);
    load_json_schema(CATALOG_SCHEMA, "capability_catalog.schema.json", &allowed)
}

// Checked ahead of the schema so a version mismatch reports as such rather
// than as a bare const violation.
fn validate_schema_version(value: &Value, expected: &str, origin: &str) -> Result<()> {
    let Some(version) = value.get("schema_version").and_then(Value::as_str) else {
        bail!("capability catalog {origin} is missing schema_version");
    };
    if !is_identifier(version) {
        bail!("schema_version must match ^[A-Za-z0-9_.-]+$, got {version}");
    }
    if version != expected {
        bail!("capability catalog {origin} has schema_version '{version}', expected '{expected}'");
    }
    Ok(())
}

fn validate_entries(catalog: &CapabilityCatalog, origin: &str) -> Result<()> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for (idx, capability) in catalog.capabilities.iter().enumerate() {
        let name = capability.name.as_str();
        if name.trim().is_empty() {
            bail!("capability #{idx} in {origin} has no name");
        }
        if capability.required_params.iter().any(|key| key.trim().is_empty()) {
            bail!("capability {name} in {origin} lists an empty required param");
        }
        if let Some(first) = seen.insert(name, idx) {
            warn!(
                capability = name,
                first_index = first,
                duplicate_index = idx,
                "duplicate capability name in catalog; both entries will be ranked"
            );
        }
    }
    Ok(())
}
