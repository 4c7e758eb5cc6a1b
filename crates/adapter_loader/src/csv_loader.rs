//! CSV loader.
//!
//! Reads a header-first CSV into a [`Frame`]. Cells are parsed as `f64`;
//! empty cells and the configured missing-value tokens become `NaN`.

use crate::error::{LoaderError, LoaderResult};
use crate::imputer::MeanImputer;
use analytics_core::Frame;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Cell contents treated as missing, in addition to the empty string.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// CSV loader options.
#[derive(Clone, Debug)]
pub struct CsvLoader {
    delimiter: u8,
    selection: Option<Vec<String>>,
    missing_tokens: Vec<String>,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLoader {
    /// Comma-delimited loader keeping every numeric column.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            selection: None,
            missing_tokens: DEFAULT_MISSING_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Keep only these columns, in this order.
    ///
    /// Selected columns must exist and must be entirely numeric.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the missing-value tokens.
    pub fn with_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Load a CSV file.
    pub fn load(&self, path: impl AsRef<Path>) -> LoaderResult<Frame> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let frame = self.load_from_reader(file)?;
        info!(
            path = %path.display(),
            rows = frame.n_rows(),
            columns = frame.n_cols(),
            "Dataset loaded"
        );
        Ok(frame)
    }

    /// Load CSV data from any reader.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> LoaderResult<Frame> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

        let targets: Vec<(String, usize)> = match &self.selection {
            Some(selection) => selection
                .iter()
                .map(|name| {
                    headers
                        .iter()
                        .position(|h| h == name)
                        .map(|i| (name.clone(), i))
                        .ok_or_else(|| LoaderError::MissingColumn(name.clone()))
                })
                .collect::<LoaderResult<_>>()?,
            None => headers.iter().cloned().zip(0..).collect(),
        };

        let strict = self.selection.is_some();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); targets.len()];
        let mut numeric = vec![true; targets.len()];

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            for (slot, (name, idx)) in targets.iter().enumerate() {
                let cell = record.get(*idx).unwrap_or("");
                let value = match self.parse_cell(cell) {
                    Some(v) => v,
                    None if strict => {
                        return Err(LoaderError::NonNumeric {
                            column: name.clone(),
                            row: row + 1,
                            value: cell.to_string(),
                        })
                    }
                    None => {
                        numeric[slot] = false;
                        f64::NAN
                    }
                };
                columns[slot].push(value);
            }
        }

        let mut frame = Frame::new();
        for (((name, _), values), is_numeric) in targets.into_iter().zip(columns).zip(numeric) {
            if is_numeric {
                frame.push_column(name, values)?;
            } else {
                debug!(column = %name, "Skipping non-numeric column");
            }
        }
        Ok(frame)
    }

    fn parse_cell(&self, cell: &str) -> Option<f64> {
        if cell.is_empty() || self.missing_tokens.iter().any(|t| t == cell) {
            return Some(f64::NAN);
        }
        cell.parse::<f64>().ok()
    }
}

/// Load the ESG and financial columns and mean-impute missing values.
///
/// Columns are ordered `esg_columns` followed by `financial_columns`.
pub fn load_and_process<S: AsRef<str>>(
    path: impl AsRef<Path>,
    esg_columns: &[S],
    financial_columns: &[S],
) -> LoaderResult<Frame> {
    let columns = esg_columns
        .iter()
        .chain(financial_columns.iter())
        .map(|c| c.as_ref().to_string());
    let raw = CsvLoader::new().with_columns(columns).load(path)?;

    for (name, missing) in raw.missing_counts() {
        if missing > 0 {
            debug!(column = %name, missing, "Imputing missing values with column mean");
        }
    }

    MeanImputer::fit(&raw)?.transform(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Company,ESG_Score,Env,ROA,Sector
A,55.0,60,0.04,Tech
B,,52,0.05,Energy
C,71.5,NA,0.06,Tech
";

    #[test]
    fn test_load_all_skips_text_columns() {
        let frame = CsvLoader::new().load_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            frame.names(),
            &["ESG_Score".to_string(), "Env".to_string(), "ROA".to_string()]
        );
        assert_eq!(frame.n_rows(), 3);
        assert!(frame.column("ESG_Score").unwrap()[1].is_nan());
        assert!(frame.column("Env").unwrap()[2].is_nan());
    }

    #[test]
    fn test_selection_order() {
        let frame = CsvLoader::new()
            .with_columns(["ROA", "ESG_Score"])
            .load_from_reader(SAMPLE.as_bytes())
            .unwrap();
        assert_eq!(frame.names(), &["ROA".to_string(), "ESG_Score".to_string()]);
    }

    #[test]
    fn test_selected_missing_column() {
        let err = CsvLoader::new()
            .with_columns(["ROE"])
            .load_from_reader(SAMPLE.as_bytes())
            .unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(c) if c == "ROE"));
    }

    #[test]
    fn test_selected_non_numeric_column() {
        let err = CsvLoader::new()
            .with_columns(["Sector"])
            .load_from_reader(SAMPLE.as_bytes())
            .unwrap_err();
        match err {
            LoaderError::NonNumeric { column, row, value } => {
                assert_eq!(column, "Sector");
                assert_eq!(row, 1);
                assert_eq!(value, "Tech");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let data = "a,b\n1,2\n3\n";
        let err = CsvLoader::new().load_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoaderError::Csv(_)));
    }

    #[test]
    fn test_semicolon_delimiter_and_custom_tokens() {
        let data = "x;y\n1;-\n2;4\n";
        let frame = CsvLoader::new()
            .with_delimiter(b';')
            .with_missing_tokens(["-"])
            .load_from_reader(data.as_bytes())
            .unwrap();
        assert!(frame.column("y").unwrap()[0].is_nan());
        assert_eq!(frame.column("x").unwrap(), &[1.0, 2.0]);
    }
}
