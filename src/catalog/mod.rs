//! Capability catalogs stored as JSON.
//!
//! A catalog lists capabilities in registration order under a versioned
//! `schema_version`. Use [`load_catalog`] to read and validate one from disk;
//! [`CapabilityCatalog::into_registry`] turns it into a ready registry.

pub mod index;
pub mod model;

pub use index::{
    CATALOG_ENV, CATALOG_SCHEMA_VERSION, catalog_path_from_env, load_catalog, parse_catalog,
};
pub use model::CapabilityCatalog;
