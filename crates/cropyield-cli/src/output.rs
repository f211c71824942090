//! Output formatting utilities

use crate::error::{CliError, CliResult};
use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Render a serializable value as JSON or YAML.
///
/// `Table` falls back to pretty JSON; commands draw their own tables.
pub fn render<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Table | OutputFormat::Json => serde_json::to_string_pretty(data)
            .map_err(|e| CliError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(data).map_err(|e| CliError::Serialization(e.to_string()))
        }
    }
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    println!("{}", render(data, format)?);
    Ok(())
}

/// Print rows as a table
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "No results".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        item: &'static str,
        value: f64,
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Table));
    }

    #[test]
    fn test_render_formats() {
        let sample = Sample {
            item: "Maize",
            value: 1.5,
        };

        let json = render(&sample, OutputFormat::Json).unwrap();
        assert!(json.contains("\"item\": \"Maize\""));

        let yaml = render(&sample, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("item: Maize"));
        assert!(yaml.contains("value: 1.5"));
    }
}
