use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use relative_motion::config::{ScenarioConfig, find_scenario, load_scenarios};
use relative_motion::export::summary::write_summaries;
use relative_motion::export::table::write_records;
use relative_motion::export::writer_for_path;
use relative_motion::{SweepReport, run_sweep};
use relmo_cli::{format_state, init_tracing, state_header};
use tracing::info;

/// Run scenario manifests through the analytical solvers and tabulate the results.
#[derive(Parser, Debug)]
#[command(author, version, about = "Relative-motion scenario sweep")]
struct Cli {
    /// Scenario file (.toml / .yaml) or directory of .toml manifests
    #[arg(long, default_value = "configs/scenarios")]
    config: PathBuf,

    /// Only run the scenario with this name (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Write the sample table as CSV (use '-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON array of per-scenario summaries (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Suppress the human-readable table
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let scenarios = load_scenarios(&cli.config)
        .with_context(|| format!("loading scenarios from {}", cli.config.display()))?;
    let selected: Vec<&ScenarioConfig> = match &cli.name {
        Some(name) => vec![
            find_scenario(&scenarios, name)
                .ok_or_else(|| anyhow!("scenario '{name}' not found in {}", cli.config.display()))?,
        ],
        None => scenarios.iter().collect(),
    };
    if selected.is_empty() {
        anyhow::bail!("no scenarios found in {}", cli.config.display());
    }

    let mut reports = Vec::with_capacity(selected.len());
    for scenario in selected {
        info!(scenario = %scenario.name, "running");
        let report =
            run_sweep(scenario).with_context(|| format!("scenario '{}'", scenario.name))?;
        if !cli.quiet {
            print_report(&report);
        }
        reports.push(report);
    }

    if let Some(path) = &cli.csv {
        let records: Vec<_> = reports.iter().flat_map(SweepReport::records).collect();
        let writer = writer_for_path(path)?;
        write_records(writer, &records)
            .with_context(|| format!("writing CSV to {}", path.display()))?;
    }

    if let Some(path) = &cli.json {
        let summaries: Vec<_> = reports.iter().map(SweepReport::summary).collect();
        let writer = writer_for_path(path)?;
        write_summaries(writer, &summaries)
            .with_context(|| format!("writing JSON to {}", path.display()))?;
    }

    Ok(())
}

fn print_report(report: &SweepReport) {
    let elements = &report.elements;
    println!("=== Scenario: {} ({}) ===", report.name, report.frame);
    println!(
        "e = {:.6}, h = {:.6e} m^2/s, mu = {:.6e} m^3/s^2, period = {:.3} s",
        elements.eccentricity, elements.angular_momentum, elements.mu, report.period_s
    );
    println!("{:>10} {:>12} {}", "t [s]", "theta [rad]", state_header("solver"));
    for sample in &report.samples {
        println!(
            "{:>10.1} {:>12.6} {}",
            sample.time_s,
            sample.theta_rad,
            format_state("YA", &sample.state)
        );
        if let Some(reference) = &sample.hcw {
            println!("{:>10} {:>12} {}", "", "", format_state("HCW", reference));
        }
    }
    if let Some((dpos, dvel)) = report.max_hcw_deviation() {
        println!("max |YA - HCW|: {dpos:.3e} m, {dvel:.3e} m/s");
    }
    println!();
}
