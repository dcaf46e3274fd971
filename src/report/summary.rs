//! Conversion summary report generation

use chrono::{DateTime, Local};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::launcher::{display_name, ConversionReport, RunStatus};
use crate::utils::truncate_string;

/// Table view of one conversion run
#[derive(Debug)]
pub struct ConversionSummary<'a> {
    report: &'a ConversionReport,
    finished_at: DateTime<Local>,
}

impl<'a> ConversionSummary<'a> {
    pub fn new(report: &'a ConversionReport) -> Self {
        Self {
            report,
            finished_at: Local::now(),
        }
    }

    /// Per-file status table followed by the totals
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Time").add_attribute(Attribute::Bold),
        ]);

        for outcome in &self.report.outcomes {
            let color = match outcome.status {
                RunStatus::Succeeded => Color::Green,
                RunStatus::Failed { .. } => Color::Red,
                RunStatus::LaunchFailed { .. } => Color::Magenta,
            };
            table.add_row(vec![
                Cell::new(truncate_string(&display_name(&outcome.path), 36)),
                Cell::new(outcome.status.to_string()).fg(color),
                Cell::new(format!("{:.2}s", outcome.elapsed.as_secs_f64())),
            ]);
        }

        table.add_row(vec![
            Cell::new("✅ Converted"),
            Cell::new(self.report.success_count())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
            Cell::new(""),
        ]);
        table.add_row(vec![
            Cell::new("❌ Failed"),
            Cell::new(self.report.failure_count()).fg(if self.report.failure_count() == 0 {
                Color::White
            } else {
                Color::Red
            }),
            Cell::new(""),
        ]);
        table.add_row(vec![
            Cell::new("⏭️  Skipped (other type)"),
            Cell::new(self.report.skipped),
            Cell::new(""),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {} {}",
            style("📋").cyan(),
            style(format!("{} SUMMARY", self.report.direction).to_uppercase())
                .white()
                .bold(),
            style(self.finished_at.format("%H:%M:%S").to_string()).dim()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        if self.report.outcomes.is_empty() {
            println!(
                "    No {} files in the selection",
                self.report.direction.source_label()
            );
        } else {
            for line in self.to_table().to_string().lines() {
                println!("    {}", line);
            }
        }

        // Show converter output for failures
        let failures: Vec<_> = self
            .report
            .outcomes
            .iter()
            .filter(|o| !o.status.is_success() && !o.output.trim().is_empty())
            .collect();
        if !failures.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("CONVERTER OUTPUT").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            for outcome in failures {
                println!();
                println!("      {}:", style(display_name(&outcome.path)).yellow());
                for line in outcome.output.lines() {
                    println!("        {} {}", style("│").dim(), line);
                }
            }
        }
    }
}
