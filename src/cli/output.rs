//! Output formatting for multiple formats
//!
//! Reports, tables, and configuration can be rendered as JSON, YAML, or
//! human-readable text.
//!
//! # Example
//!
//! ```
//! use resistgen::cli::output::{OutputFormat, OutputFormatter};
//! use resistgen::GenerationReport;
//!
//! let formatter = OutputFormatter::new(OutputFormat::Json);
//! let output = formatter.format_report(&GenerationReport::default()).unwrap();
//! assert!(output.contains("\"scripts\""));
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::catalog::{Drug, ParameterCombination};
use crate::config::GeneratorConfig;
use crate::emit::GenerationReport;
use crate::naming::index_label;

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// A combination row tagged with its 1-based index and label
#[derive(Debug, Serialize)]
struct IndexedCombination<'a> {
    index: usize,
    label: String,
    #[serde(flatten)]
    combination: &'a ParameterCombination,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the files written (or planned) by a run
    pub fn format_report(&self, report: &GenerationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    pub fn format_drugs(&self, drugs: &[Drug]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(drugs).context("Failed to serialize drugs to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(drugs).context("Failed to serialize drugs to YAML")
            }
            OutputFormat::Human => Ok(self.format_drugs_human(drugs)),
        }
    }

    pub fn format_combinations(&self, combinations: &[ParameterCombination]) -> Result<String> {
        let rows: Vec<_> = combinations
            .iter()
            .enumerate()
            .map(|(i, combination)| IndexedCombination {
                index: i + 1,
                label: index_label(i + 1),
                combination,
            })
            .collect();

        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&rows)
                .context("Failed to serialize combinations to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(&rows).context("Failed to serialize combinations to YAML")
            }
            OutputFormat::Human => Ok(self.format_combinations_human(&rows)),
        }
    }

    pub fn format_config(&self, config: &GeneratorConfig) -> Result<String> {
        let config_map = config.to_display_map();
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&config_map)
                .context("Failed to serialize config to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(&config_map).context("Failed to serialize config to YAML")
            }
            OutputFormat::Human => Ok(config.to_string()),
        }
    }

    // Human-readable formatting methods

    fn format_report_human(&self, report: &GenerationReport) -> String {
        let mut output = String::new();

        if report.dry_run {
            output.push_str("\u{26A0} Dry Run (nothing written)\n");
        } else {
            output.push_str("\u{2713} Generation Complete\n");
        }
        output.push_str(RULE);
        output.push_str("\n\n");

        push_tree(&mut output, "Scripts", &report.scripts);
        push_tree(&mut output, "Configs", &report.configs);

        if !report.missing_keys.is_empty() {
            output.push_str(&format!(
                "\u{26A0} Appended to every config (missing from base): {}\n\n",
                report.missing_keys.join(", ")
            ));
        }

        output.push_str(&format!("Total: {} files\n", report.total()));
        output
    }

    fn format_drugs_human(&self, drugs: &[Drug]) -> String {
        let mut output = String::new();
        output.push_str(&format!("{:<6}{}\n", "ABBR", "DRUG"));
        for drug in drugs {
            output.push_str(&format!("{:<6}{}\n", drug.abbreviation, drug.name));
        }
        output
    }

    fn format_combinations_human(&self, rows: &[IndexedCombination<'_>]) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<4}{:<8}{:<8}{:<10}{:<12}{}\n",
            "#", "PHENO", "TIERS", "UNPOOLED", "SYNONYMOUS", "AMB_MODE"
        ));
        for row in rows {
            let c = row.combination;
            let pheno = join(c.pheno_categories);
            let tiers = join(c.tiers);
            output.push_str(&format!(
                "{:<4}{:<8}{:<8}{:<10}{:<12}{}\n",
                row.label, pheno, tiers, c.unpooled, c.synonymous, c.amb_mode
            ));
        }
        output
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn push_tree(output: &mut String, title: &str, paths: &[PathBuf]) {
    output.push_str(&format!("{} ({}):\n", title, paths.len()));
    if paths.is_empty() {
        output.push_str("\u{2514}\u{2500} (none)\n\n");
        return;
    }
    for (i, path) in paths.iter().enumerate() {
        let connector = if i == paths.len() - 1 {
            "\u{2514}"
        } else {
            "\u{251C}"
        };
        output.push_str(&format!("{}\u{2500} {}\n", connector, path.display()));
    }
    output.push('\n');
}
