//! Catalog inspection commands

use anyhow::Result;
use colored::Colorize;
use sizer_lib::{ResourceCatalog, StaticCatalog};
use tabled::Tabled;

use crate::output::{format_cpu, format_gb, OutputFormat};

/// Row for the distributions table
#[derive(Tabled)]
struct DistributionRow {
    #[tabled(rename = "Distribution")]
    id: String,
    #[tabled(rename = "Managed CP")]
    managed_control_plane: String,
    #[tabled(rename = "Infra Nodes")]
    infra_nodes: String,
    #[tabled(rename = "Prod Worker")]
    prod_worker: String,
    #[tabled(rename = "Non-Prod Worker")]
    non_prod_worker: String,
}

/// Row for the technologies table
#[derive(Tabled)]
struct TechnologyRow {
    #[tabled(rename = "Technology")]
    id: String,
    #[tabled(rename = "Small")]
    small: String,
    #[tabled(rename = "Medium")]
    medium: String,
    #[tabled(rename = "Large")]
    large: String,
    #[tabled(rename = "XLarge")]
    xlarge: String,
}

fn yes_no(flag: bool) -> String {
    if flag {
        "yes".green().to_string()
    } else {
        "no".dimmed().to_string()
    }
}

fn spec_cell(cpu: f64, ram_gb: f64) -> String {
    format!("{}c / {}", format_cpu(cpu), format_gb(ram_gb))
}

/// List known distributions and their capabilities
pub fn list_distributions(format: OutputFormat) -> Result<()> {
    let catalog = StaticCatalog::builtin();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog.distributions())?);
        }
        OutputFormat::Table => {
            let rows: Vec<DistributionRow> = catalog
                .distributions()
                .into_iter()
                .filter_map(|id| {
                    let profile = catalog.resource_profile(&id)?;
                    Some(DistributionRow {
                        id,
                        managed_control_plane: yes_no(profile.has_managed_control_plane),
                        infra_nodes: yes_no(profile.has_infra_nodes),
                        prod_worker: spec_cell(profile.prod_worker.cpu, profile.prod_worker.ram_gb),
                        non_prod_worker: spec_cell(
                            profile.non_prod_worker.cpu,
                            profile.non_prod_worker.ram_gb,
                        ),
                    })
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// List known technologies and their per-tier demand
pub fn list_technologies(format: OutputFormat) -> Result<()> {
    let catalog = StaticCatalog::builtin();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog.technologies())?);
        }
        OutputFormat::Table => {
            let rows: Vec<TechnologyRow> = catalog
                .technologies()
                .into_iter()
                .filter_map(|id| {
                    let tiers = catalog.technology_tiers(&id)?;
                    Some(TechnologyRow {
                        id,
                        small: spec_cell(tiers.small.cpu, tiers.small.ram_gb),
                        medium: spec_cell(tiers.medium.cpu, tiers.medium.ram_gb),
                        large: spec_cell(tiers.large.cpu, tiers.large.ram_gb),
                        xlarge: spec_cell(tiers.xlarge.cpu, tiers.xlarge.ram_gb),
                    })
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
