//! Command-line front end for the intent solver.
//!
//! Builds an intent from the command line (or a JSON request document),
//! solves it against the built-in capabilities or a catalog file, and prints
//! either a short text summary or the JSON response envelope.

use anyhow::{Context, Result, anyhow, bail};
use intent_solver::params::parse_params;
use intent_solver::request::render_text;
use intent_solver::{SolveRequest, handle_request, load_solver, logging, resolve_catalog_path};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init()?;
    let cli = Cli::parse()?;

    let catalog = resolve_catalog_path(cli.catalog.clone());
    let solver = load_solver(catalog.as_deref())?;

    let (request, json) = match &cli.input {
        Input::Args(request) => (request.clone(), cli.json),
        // Request documents always get a JSON reply, like the API they mirror.
        Input::Request(source) => (source.read()?, true),
    };
    debug!(name = %request.name, explain = request.explain, "solving intent");

    let response = handle_request(&solver, request);
    if json {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", render_text(&response));
    }
    Ok(())
}

struct Cli {
    input: Input,
    json: bool,
    catalog: Option<PathBuf>,
}

enum Input {
    Args(SolveRequest),
    Request(RequestSource),
}

enum RequestSource {
    File(PathBuf),
    Stdin,
}

impl RequestSource {
    fn read(&self) -> Result<SolveRequest> {
        let raw = match self {
            RequestSource::File(path) => {
                if !path.is_file() {
                    bail!("request file not found: {}", path.display());
                }
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
            }
            RequestSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                buf
            }
        };
        if raw.trim().is_empty() {
            bail!("No request provided");
        }
        serde_json::from_str(&raw).context("Unable to parse solve request JSON")
    }
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut name: Option<String> = None;
        let mut request_source: Option<RequestSource> = None;
        let mut request = SolveRequest::default();
        let mut param_items: Vec<String> = Vec::new();
        let mut json = false;
        let mut catalog: Option<PathBuf> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--param" | "-p" => param_items.push(next_value(&mut args, "--param")?),
                "--tag" | "-t" => request.tags.push(next_value(&mut args, "--tag")?),
                "--json" => json = true,
                "--explain" | "-e" => request.explain = true,
                "--catalog" => {
                    let path = next_value(&mut args, "--catalog")?;
                    catalog = Some(PathBuf::from(path));
                }
                "--request" => {
                    let raw = next_value(&mut args, "--request")?;
                    if request_source.is_some() {
                        bail!("--request may only be provided once");
                    }
                    request_source = Some(if raw == "-" {
                        RequestSource::Stdin
                    } else {
                        RequestSource::File(PathBuf::from(raw))
                    });
                }
                "--help" | "-h" => usage(0),
                other if other.starts_with('-') => bail!("unknown flag: {other}"),
                other => {
                    if name.is_some() {
                        bail!("unexpected extra argument: {other}");
                    }
                    name = Some(other.to_string());
                }
            }
        }

        // Malformed pairs are skipped rather than rejected.
        request.params = parse_params(&param_items);

        let input = match (request_source, name) {
            (Some(source), None) => {
                if !request.params.is_empty() || !request.tags.is_empty() || request.explain {
                    bail!("--request cannot be combined with --param, --tag, or --explain");
                }
                Input::Request(source)
            }
            (Some(_), Some(_)) => bail!("--request cannot be combined with an intent name"),
            (None, Some(name)) => {
                request.name = name;
                Input::Args(request)
            }
            (None, None) => usage(1),
        };

        Ok(Self {
            input,
            json,
            catalog,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: intent <name> [--param key=value]... [--tag label]... [--explain] [--json] [--catalog PATH]\n       intent --request FILE|- [--catalog PATH]\n\nOptions:\n  --param, -p    Intent parameter as key=value (repeatable); numbers are coerced.\n  --tag, -t      Tag label, taken as written (repeatable).\n                 Without tags, known names (transfer, pay, notify, message, swap) imply them.\n  --explain, -e  Show the capability ranking and score breakdown.\n  --json         Print the JSON response envelope.\n  --catalog      Capability catalog JSON (default: $INTENT_SOLVER_CATALOG, then built-ins).\n  --request      Read a JSON solve request ({{name, params, tags, explain}}) from FILE or stdin.\n\nExamples:\n  intent transfer --param to=alice --param amount=10\n  intent notify -p to=bob -p text=hi --explain --json"
    );
    std::process::exit(code);
}
