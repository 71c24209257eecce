//! Validate and list a capability catalog.
//!
//! Loads the catalog named by `--catalog` (or `INTENT_SOLVER_CATALOG`, or the
//! built-in set), then prints one line per capability with whether a built-in
//! handler is bound to it. `--json` prints the catalog document instead.

use anyhow::{Result, anyhow, bail};
use intent_solver::catalog::CATALOG_SCHEMA_VERSION;
use intent_solver::{CapabilityCatalog, load_solver, logging, resolve_catalog_path};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init()?;
    let args = CliArgs::parse()?;

    let catalog_path = resolve_catalog_path(args.catalog);
    let solver = load_solver(catalog_path.as_deref())?;
    let capabilities = solver.registry().list_capabilities();

    if args.json {
        let catalog = CapabilityCatalog::new(CATALOG_SCHEMA_VERSION, capabilities.to_vec());
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let source = catalog_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    println!("catalog: {source} ({} capabilities)", capabilities.len());
    for capability in capabilities {
        let tags: Vec<&str> = capability.accepts_tags.iter().map(String::as_str).collect();
        let handler = if solver.has_handler(capability.name.as_str()) {
            "yes"
        } else {
            "no"
        };
        println!(
            "  {}: tags=[{}] params=[{}] handler={handler}",
            capability.name,
            tags.join(", "),
            capability.required_params.join(", ")
        );
    }
    Ok(())
}

struct CliArgs {
    catalog: Option<PathBuf>,
    json: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut catalog = None;
        let mut json = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("missing value for --catalog"))?;
                    catalog = Some(PathBuf::from(value));
                }
                "--json" => json = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        Ok(Self { catalog, json })
    }
}

fn usage() -> &'static str {
    "Usage: intent-catalog [--catalog PATH] [--json]\n\
Validates the capability catalog (default: $INTENT_SOLVER_CATALOG, then built-ins) and lists its capabilities.\n"
}
