#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use intent_solver::{Capability, Intent, IntentRegistry};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn intent_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_intent"))
}

pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_intent-catalog"))
}

/// Command for a helper binary with the catalog env var cleared.
pub fn helper_command(binary: PathBuf) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env_remove("INTENT_SOLVER_CATALOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout was not valid JSON")
}

pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn send_notification() -> Capability {
    Capability::new("send_notification", ["notify", "message"], ["to", "text"])
}

pub fn transfer_tokens() -> Capability {
    Capability::new("transfer_tokens", ["transfer", "payment"], ["to", "amount"])
}

pub fn swap_tokens() -> Capability {
    Capability::new(
        "swap_tokens",
        ["swap", "trade"],
        ["from_token", "to_token", "amount"],
    )
}

pub fn registry_of(capabilities: impl IntoIterator<Item = Capability>) -> IntentRegistry {
    IntentRegistry::from_capabilities(capabilities)
}

/// A spread of intents covering empty, partial, duplicate-tag, and unrelated inputs.
pub fn sample_intents() -> Vec<Intent> {
    vec![
        Intent::new("empty"),
        Intent::new("notify").with_tags(["notify", "message"]),
        Intent::new("notify")
            .with_tags(["notify", "message"])
            .with_param("to", "bob")
            .with_param("text", "hi"),
        Intent::new("transfer")
            .with_tags(["transfer", "payment"])
            .with_param("to", "alice")
            .with_param("amount", 10),
        Intent::new("ambiguous").with_param("to", "carol"),
        Intent::new("ambiguous").with_param("amount", 3),
        Intent::new("swap")
            .with_tags(["swap", "swap", "trade", "unknown"])
            .with_param("from_token", "ETH"),
        Intent::new("weather").with_tag("forecast").with_param("city", "Oslo"),
        Intent::new("mixed")
            .with_tags(["notify", "transfer"])
            .with_param("to", "dave")
            .with_priority(9),
    ]
}
