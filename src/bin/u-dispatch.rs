//! u-dispatch — schedule a shop described in a JSON document.
//!
//! Reads a `System` document (jobs + workcenters), validates it, runs one
//! or all dispatch policies and prints either the text reports or the
//! resulting schedules as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_dispatch::dispatching::{DispatchEngine, DispatchPolicy};
use u_dispatch::models::System;
use u_dispatch::reporting::full_report;
use u_dispatch::validation::validate_input;

// ── CLI ─────────────────────────────────────────────────────────────

/// Static production dispatching (EDD, SPT, FCFS).
#[derive(Parser, Debug)]
#[command(name = "u-dispatch", version, about)]
struct Cli {
    /// Path to the JSON system document.
    #[arg(long, env = "DISPATCH_INPUT")]
    input: PathBuf,

    /// Policy to run: EDD, SPT, FCFS, or "all".
    #[arg(long, env = "DISPATCH_RULE", default_value = "all")]
    rule: String,

    /// Make each operation wait for the previous one of the same job.
    #[arg(long)]
    routing_precedence: bool,

    /// Print schedules as JSON instead of text reports.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let system: System = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    info!(
        jobs = system.jobs.len(),
        workcenters = system.workcenters.len(),
        "system loaded"
    );

    if let Err(errors) = validate_input(&system.jobs, &system.workcenters) {
        for e in &errors {
            eprintln!("invalid input: {e}");
        }
        bail!("{} validation error(s) in {}", errors.len(), cli.input.display());
    }

    let policies = if cli.rule.eq_ignore_ascii_case("all") {
        DispatchPolicy::ALL.to_vec()
    } else {
        vec![cli.rule.parse::<DispatchPolicy>()?]
    };

    let engine = DispatchEngine::new().with_routing_precedence(cli.routing_precedence);
    let mut schedules = Vec::with_capacity(policies.len());
    for policy in policies {
        let schedule = engine
            .run(policy, &system.jobs, &system.workcenters)
            .with_context(|| format!("running {policy}"))?;
        schedules.push(schedule);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&schedules)?);
    } else {
        for schedule in &schedules {
            println!("{}", full_report(schedule, &system.jobs));
        }
    }

    Ok(())
}
