//! `cropyield predict`: one estimate plus the three sensitivity sweeps

use crate::context::{AppContext, PredictionView};
use crate::error::CliResult;
use crate::output::{print_info, print_single, print_success, print_table, OutputFormat};
use clap::Args;
use colored::*;
use cropyield_types::{InputForm, SweepResult};
use serde::Serialize;
use tabled::Tabled;

/// Predict arguments
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Crop name, as listed by `cropyield options`
    #[arg(long)]
    pub item: String,

    /// Region name, as listed by `cropyield options`
    #[arg(long)]
    pub area: String,

    /// Average rainfall (mm/year); defaults to the dataset mean
    #[arg(long, allow_negative_numbers = true)]
    pub rainfall: Option<f64>,

    /// Pesticides (tonnes); defaults to the dataset mean
    #[arg(long, allow_negative_numbers = true)]
    pub pesticides: Option<f64>,

    /// Average temperature (°C, -10 to 50); defaults to the dataset mean
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<i32>,
}

impl From<PredictArgs> for InputForm {
    fn from(args: PredictArgs) -> Self {
        InputForm {
            item: args.item,
            area: args.area,
            rainfall: args.rainfall,
            pesticides: args.pesticides,
            temperature: args.temperature,
        }
    }
}

/// Table row for one sweep point
#[derive(Debug, Serialize, Tabled)]
struct SweepRow {
    /// Point index
    #[tabled(rename = "#")]
    index: usize,
    /// Swept input value
    input: String,
    /// Clamped estimate
    #[tabled(rename = "predicted yield")]
    predicted: String,
}

fn sweep_rows(sweep: &SweepResult) -> Vec<SweepRow> {
    sweep
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| SweepRow {
            index: index + 1,
            input: format!("{:.2}", point.input),
            predicted: point.estimate.to_string(),
        })
        .collect()
}

/// Execute the predict command
pub fn execute(args: PredictArgs, ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let form = InputForm::from(args);
    let view = ctx.predict(&form)?;

    match format {
        OutputFormat::Table => print_view(&view),
        _ => print_single(&view, format)?,
    }

    Ok(())
}

fn print_view(view: &PredictionView) {
    let record = &view.report.record;

    print_success(&format!("Predicted yield: {}", view.formatted.bold()));
    print_info(&format!(
        "{} in {}: rainfall {:.2}, pesticides {:.2}, temperature {}",
        record.item, record.area, record.rainfall, record.pesticides, record.temperature
    ));

    println!("\n{}", view.chart.title.bold());
    for sweep in &view.report.sweeps {
        println!(
            "\n{} ({})",
            sweep.feature.label().bold(),
            sweep.feature.unit().dimmed()
        );
        print_table(sweep_rows(sweep));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropyield_types::{NumericFeature, SweepPoint, YieldEstimate};

    #[test]
    fn test_args_into_form() {
        let form = InputForm::from(PredictArgs {
            item: "Maize".into(),
            area: "Kenya".into(),
            rainfall: Some(600.0),
            pesticides: None,
            temperature: Some(-5),
        });

        assert_eq!(
            form,
            InputForm::new("Maize", "Kenya")
                .with_rainfall(600.0)
                .with_temperature(-5)
        );
    }

    #[test]
    fn test_sweep_rows() {
        let sweep = SweepResult::new(
            NumericFeature::Temperature,
            vec![
                SweepPoint {
                    input: 35.0,
                    estimate: YieldEstimate::clamp(-3.0),
                },
                SweepPoint {
                    input: 35.789_473_684,
                    estimate: YieldEstimate::clamp(812.456),
                },
            ],
        );

        let rows = sweep_rows(&sweep);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].predicted, "0.00");
        assert_eq!(rows[1].input, "35.79");
        assert_eq!(rows[1].predicted, "812.46");
    }
}
