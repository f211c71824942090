//! `cropyield options`: the choices and defaults the form offers

use crate::context::AppContext;
use crate::error::CliResult;
use crate::output::{print_single, print_table, OutputFormat};
use colored::*;
use cropyield_types::NumericFeature;
use serde::Serialize;
use tabled::Tabled;

/// Table row for the numeric defaults
#[derive(Debug, Serialize, Tabled)]
struct DefaultRow {
    /// Input name
    input: String,
    /// Pre-filled value
    default: String,
    /// Unit
    unit: String,
}

/// Execute the options command
pub fn execute(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let options = ctx.options();

    if !matches!(format, OutputFormat::Table) {
        return print_single(options, format);
    }

    println!("{} ({})", "Items".bold(), options.items.len());
    for item in &options.items {
        println!("  {}", item);
    }

    println!("\n{} ({})", "Areas".bold(), options.areas.len());
    for area in &options.areas {
        println!("  {}", area);
    }

    println!("\n{}", "Defaults".bold());
    print_table(vec![
        DefaultRow {
            input: "rainfall".to_string(),
            default: format!("{:.2}", options.defaults.rainfall),
            unit: NumericFeature::Rainfall.unit().to_string(),
        },
        DefaultRow {
            input: "pesticides".to_string(),
            default: format!("{:.2}", options.defaults.pesticides),
            unit: NumericFeature::Pesticides.unit().to_string(),
        },
        DefaultRow {
            input: "temperature".to_string(),
            default: options.defaults.temperature.to_string(),
            unit: NumericFeature::Temperature.unit().to_string(),
        },
    ]);

    Ok(())
}
