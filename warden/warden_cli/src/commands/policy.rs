//! Policy commands
//!
//! This module contains the commands that parse, validate and format
//! username policies.

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use warden_core::utils::WardenConfig;
use warden_policy::{ClauseTable, PolicyEngine, ProviderRegistry};

/// Arguments for the validate command
#[derive(Args)]
pub struct ValidateArgs {
    /// Policy text; defaults to `default_policy` from the configuration file
    pub policy: Option<String>,

    /// Print the result as JSON
    #[clap(long)]
    pub json: bool,
}

/// Arguments for the format command
#[derive(Args)]
pub struct FormatArgs {
    /// Policy text to print in canonical form
    pub policy: String,
}

/// Summary of a validated policy.
#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    /// Canonical policy text, absent for an empty policy.
    policy: Option<String>,

    /// Clause names in policy order.
    clauses: Vec<&'a str>,
}

/// Implementation of the validate command
pub fn execute_validate<R, W>(
    args: &ValidateArgs,
    config: &WardenConfig,
    engine: &PolicyEngine<R>,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: ProviderRegistry,
    W: Write,
{
    let raw = args.policy.as_deref().or(config.default_policy.as_deref());
    let table = ClauseTable::parse(raw);
    let policy = engine.validate(&table)?;

    let report = ValidationReport {
        policy: engine.serialize(&policy),
        clauses: table.names().collect(),
    };
    log::info!("Policy is valid ({} clause(s))", report.clauses.len());

    if args.json {
        let json = serde_json::to_string(&report).context("Failed to encode report")?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(
            out,
            "policy: {}",
            report.policy.as_deref().unwrap_or("<none>")
        )?;
        for clause in &report.clauses {
            writeln!(out, "  - {}", clause)?;
        }
    }

    Ok(())
}

/// Implementation of the format command
pub fn execute_format<W: Write>(args: &FormatArgs, out: &mut W) -> anyhow::Result<()> {
    if let Some(text) = ClauseTable::parse(Some(&args.policy)).to_policy_string() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

/// Implementation of the providers command
pub fn execute_providers<R, W>(engine: &PolicyEngine<R>, out: &mut W) -> anyhow::Result<()>
where
    R: ProviderRegistry,
    W: Write,
{
    for id in engine.registry().provider_ids() {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}
