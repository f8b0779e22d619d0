//! Sizing calculation command

use anyhow::{Context, Result};
use colored::Colorize;
use sizer_lib::{DrPattern, K8sSizingInput, SizingEngine, StaticCatalog};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tabled::Tabled;

use crate::output::{format_cpu, format_gb, format_multiplier, print_warning, OutputFormat};

/// Row for the per-environment sizing table
#[derive(Tabled)]
struct EnvironmentRow {
    #[tabled(rename = "Environment")]
    environment: String,
    #[tabled(rename = "Masters")]
    masters: u32,
    #[tabled(rename = "Etcd")]
    etcd: u32,
    #[tabled(rename = "Infra")]
    infra: u32,
    #[tabled(rename = "Workers")]
    workers: u32,
    #[tabled(rename = "DR")]
    dr_nodes: u32,
    #[tabled(rename = "AZs")]
    availability_zones: u32,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "RAM")]
    ram: String,
    #[tabled(rename = "Disk")]
    disk: String,
    #[tabled(rename = "Nodes")]
    total_nodes: u32,
}

/// Run a sizing calculation from a JSON input file
pub fn run(input_path: &Path, format: OutputFormat) -> Result<()> {
    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input file {}", input_path.display()))?;
    let input: K8sSizingInput =
        serde_json::from_str(&raw).with_context(|| "Failed to parse sizing input JSON")?;

    let engine = SizingEngine::new(Arc::new(StaticCatalog::builtin()));
    let result = engine.calculate(&input)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", "Sizing Result".bold());
            println!("{}", "=".repeat(60));
            println!("Distribution:           {}", result.distribution.cyan());
            println!("Technology:             {}", result.technology.cyan());
            println!();

            let rows: Vec<EnvironmentRow> = result
                .environments
                .iter()
                .map(|e| EnvironmentRow {
                    environment: e.environment.to_string(),
                    masters: e.masters,
                    etcd: e.etcd_nodes,
                    infra: e.infra,
                    workers: e.workers,
                    dr_nodes: e.dr_nodes,
                    availability_zones: e.availability_zones,
                    cpu: format_cpu(e.total_cpu),
                    ram: format_gb(e.total_ram_gb),
                    disk: format_gb(e.total_disk_gb),
                    total_nodes: e.total_nodes,
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!();

            println!("{}", "Grand Total".bold());
            println!("{}", "-".repeat(60));
            println!("Masters:                {}", result.total.masters);
            println!("Etcd nodes:             {}", result.total.etcd_nodes);
            println!("Infra nodes:            {}", result.total.infra);
            println!("Workers:                {}", result.total.total_workers);
            println!("DR standby nodes:       {}", result.total.dr_nodes);
            println!(
                "CPU / RAM / Disk:       {} / {} / {}",
                format_cpu(result.total.total_cpu),
                format_gb(result.total.total_ram_gb),
                format_gb(result.total.total_disk_gb)
            );
            println!(
                "{}  {}",
                "Total nodes:".bold(),
                result.total.total_nodes.to_string().green().bold()
            );

            for env in &result.environments {
                if env.dr_cost_multiplier > 1.0 {
                    print_warning(&format!(
                        "{}: DR pattern adds a {} cost multiplier",
                        env.environment,
                        format_multiplier(env.dr_cost_multiplier)
                    ));
                }
            }
            if input
                .hadr
                .map(|h| h.dr_pattern == DrPattern::None)
                .unwrap_or(true)
                && input.hadr_overrides.is_empty()
            {
                print_warning("No DR pattern configured; standby capacity is not included");
            }
        }
    }

    Ok(())
}
