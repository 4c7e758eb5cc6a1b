//! Result tables: CSV and JSON files next to the charts, plus console output.

use analytics_risk::{CorrelationRecord, ElasticityRecord, ResilienceRecord};
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Result;

/// Writes record tables as `{name}.csv` and `{name}.json`.
pub struct TableExporter {
    output_dir: PathBuf,
}

/// A record type with a fixed CSV header.
pub trait Table: Serialize {
    /// Column names in serialization order.
    const HEADERS: &'static [&'static str];
}

impl Table for CorrelationRecord {
    const HEADERS: &'static [&'static str] = &[
        "ESG Component",
        "Financial Metric",
        "Correlation",
        "P Value",
        "Observations",
        "Significance",
    ];
}

impl Table for ResilienceRecord {
    const HEADERS: &'static [&'static str] = &[
        "ESG Component",
        "Financial Metric",
        "Shock Level",
        "Coefficient",
        "Intercept",
        "R Squared",
        "Observations",
    ];
}

impl Table for ElasticityRecord {
    const HEADERS: &'static [&'static str] =
        &["ESG Component", "Financial Metric", "Elasticity", "Observations"];
}

#[derive(Serialize)]
struct JsonTable<'a, T> {
    table: &'a str,
    generated_at: String,
    rows: &'a [T],
}

impl TableExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write both formats and return `[csv, json]`.
    pub fn export<T: Table>(&self, name: &str, rows: &[T]) -> Result<[PathBuf; 2]> {
        fs::create_dir_all(&self.output_dir)?;

        let csv_path = self.output_dir.join(format!("{}.csv", name));
        // serialize() only emits the header alongside the first row
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&csv_path)?;
        writer.write_record(T::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        let json_path = self.output_dir.join(format!("{}.json", name));
        let table = JsonTable {
            table: name,
            generated_at: Utc::now().to_rfc3339(),
            rows,
        };
        serde_json::to_writer_pretty(BufWriter::new(File::create(&json_path)?), &table)?;

        info!(
            table = name,
            rows = rows.len(),
            csv = %csv_path.display(),
            json = %json_path.display(),
            "Table exported"
        );
        Ok([csv_path, json_path])
    }
}

/// Export when enabled; a no-op otherwise.
pub fn maybe_export<T: Table>(
    exporter: Option<&TableExporter>,
    name: &str,
    rows: &[T],
) -> Result<()> {
    if let Some(exporter) = exporter {
        exporter.export(name, rows)?;
    }
    Ok(())
}

pub fn print_correlations(records: &[CorrelationRecord]) {
    for record in records {
        println!("{}", record);
    }
}

pub fn print_resilience_table(records: &[ResilienceRecord]) {
    println!();
    println!("Resilience Regression Results");
    println!(
        "{:<22} {:<16} {:>8} {:>14} {:>14} {:>8} {:>6}",
        "ESG Component", "Financial Metric", "Shock", "Coefficient", "Intercept", "R²", "N"
    );
    for r in records {
        println!(
            "{:<22} {:<16} {:>+7.0}% {:>14.6} {:>14.6} {:>8.4} {:>6}",
            r.esg_component,
            r.financial_metric,
            r.shock_level * 100.0,
            r.coefficient,
            r.intercept,
            r.r_squared,
            r.observations
        );
    }
}

pub fn print_elasticity_table(records: &[ElasticityRecord]) {
    println!();
    println!("Elasticity Results");
    println!(
        "{:<22} {:<16} {:>12} {:>6}",
        "ESG Component", "Financial Metric", "Elasticity", "N"
    );
    for r in records {
        println!(
            "{:<22} {:<16} {:>12.6} {:>6}",
            r.esg_component, r.financial_metric, r.elasticity, r.observations
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_risk::Significance;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_csv_and_json() {
        let dir = tempdir().unwrap();
        let exporter = TableExporter::new(dir.path().join("tables"));
        let rows = vec![ElasticityRecord {
            esg_component: "ESG_Score".to_string(),
            financial_metric: "ROA".to_string(),
            elasticity: 0.75,
            observations: 42,
        }];

        let [csv_path, json_path] = exporter.export("elasticity", &rows).unwrap();

        let csv_text = fs::read_to_string(csv_path).unwrap();
        let mut lines = csv_text.lines();
        assert_eq!(
            lines.next(),
            Some("ESG Component,Financial Metric,Elasticity,Observations")
        );
        assert_eq!(lines.next(), Some("ESG_Score,ROA,0.75,42"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(json["table"], "elasticity");
        assert!(json["generated_at"].is_string());
        assert_eq!(json["rows"][0]["Elasticity"], 0.75);
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let dir = tempdir().unwrap();
        let exporter = TableExporter::new(dir.path());
        let rows: Vec<ResilienceRecord> = Vec::new();

        let [csv_path, json_path] = exporter.export("resilience", &rows).unwrap();

        let csv_text = fs::read_to_string(csv_path).unwrap();
        assert_eq!(
            csv_text.trim_end(),
            "ESG Component,Financial Metric,Shock Level,Coefficient,Intercept,R Squared,Observations"
        );
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(json["rows"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_headers_match_serialized_fields() {
        let record = CorrelationRecord {
            esg_component: "ESG_Score".to_string(),
            financial_metric: "ROA".to_string(),
            correlation: 0.5,
            p_value: 0.01,
            observations: 30,
            significance: Significance::Significant,
        };
        let json = serde_json::to_value(&record).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected = CorrelationRecord::HEADERS.to_vec();
        expected.sort_unstable();
        keys.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_disabled_export_writes_nothing() {
        let rows: Vec<ElasticityRecord> = Vec::new();
        assert!(maybe_export(None, "elasticity", &rows).is_ok());
    }
}
