//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format a fractional core count
pub fn format_cpu(cores: f64) -> String {
    if cores.fract() == 0.0 {
        format!("{}", cores as u64)
    } else {
        format!("{:.2}", cores)
    }
}

/// Format a gigabyte quantity
pub fn format_gb(gb: f64) -> String {
    if gb.fract() == 0.0 {
        format!("{}Gi", gb as u64)
    } else {
        format!("{:.1}Gi", gb)
    }
}

/// Format a DR cost multiplier
pub fn format_multiplier(multiplier: f64) -> String {
    format!("{:.2}x", multiplier)
}
