//! Intent routing library.
//!
//! Callers describe a desired outcome as an [`Intent`]; the [`IntentRegistry`]
//! scores every registered [`Capability`] against it, and the [`Solver`]
//! dispatches to the handler bound to the best match. The explain variant
//! returns the full ranking so front ends can show why a capability won.
//!
//! Matching is pure and in-memory. Absence of a match is reported as `None`,
//! never as an error; only the edges that touch files or user input (catalog
//! loading, argument parsing) return `anyhow::Result`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod builtin;
pub mod capability;
pub mod catalog;
pub mod intent;
pub mod logging;
pub mod params;
pub mod registry;
pub mod request;
mod schema_loader;
pub mod solver;

pub use builtin::{builtin_capabilities, builtin_registry, builtin_solver, register_builtin_handlers};
pub use capability::{Capability, CapabilityName, ScoreBreakdown};
pub use catalog::{CapabilityCatalog, load_catalog};
pub use intent::{Intent, ParamValue};
pub use registry::IntentRegistry;
pub use request::{SolveRequest, SolveResponse, handle_request};
pub use solver::{ExplainReport, Handler, Solver};

/// Pick the catalog a front end should load.
///
/// An explicit path (e.g. `--catalog`) wins over `INTENT_SOLVER_CATALOG`;
/// `None` means the built-in capability set.
pub fn resolve_catalog_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(catalog::catalog_path_from_env)
}

/// Build a solver from a catalog file, or the built-in set when `catalog` is `None`.
///
/// Catalog capabilities get the built-in handlers bound by name; entries with
/// other names stay registered but have nothing to execute.
pub fn load_solver(catalog: Option<&Path>) -> Result<Solver> {
    let Some(path) = catalog else {
        return Ok(builtin_solver());
    };
    let catalog = load_catalog(path)
        .with_context(|| format!("Unable to load capability catalog {}", path.display()))?;
    let mut solver = Solver::new(catalog.into_registry());
    register_builtin_handlers(&mut solver);
    debug!(
        catalog = %path.display(),
        capabilities = solver.registry().list_capabilities().len(),
        "solver ready"
    );
    Ok(solver)
}
