//! Synthetic ESG/financial datasets.
//!
//! Pillar scores are drawn around a common company-level ESG quality factor,
//! and each financial metric is a linear function of one ESG score plus
//! Gaussian noise, so the generated data has known, moderate correlations.
//! A fixed seed always produces the same file.

use crate::error::{LoaderError, LoaderResult};
use analytics_core::Frame;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// ESG columns written by the generator.
pub const ESG_COLUMNS: [&str; 4] = [
    "ESG_Score",
    "Environmental_Score",
    "Social_Score",
    "Governance_Score",
];

/// Financial columns written by the generator.
pub const FINANCIAL_COLUMNS: [&str; 4] = ["ROA", "ROE", "Profit_Margin", "Stock_Return"];

const SECTORS: [&str; 5] = ["Technology", "Energy", "Financials", "Healthcare", "Industrials"];

/// Generator parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticSpec {
    /// Number of companies (data rows)
    pub rows: usize,
    /// RNG seed
    pub seed: u64,
    /// Probability that any numeric cell is left empty, in `[0, 1)`
    pub missing_rate: f64,
}

impl Default for SyntheticSpec {
    fn default() -> Self {
        Self {
            rows: 200,
            seed: 42,
            missing_rate: 0.0,
        }
    }
}

impl SyntheticSpec {
    fn validate(&self) -> LoaderResult<()> {
        if self.rows == 0 {
            return Err(LoaderError::InvalidParameter(
                "rows must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.missing_rate) {
            return Err(LoaderError::InvalidParameter(format!(
                "missing_rate must be in [0, 1), got {}",
                self.missing_rate
            )));
        }
        Ok(())
    }
}

struct Company {
    id: String,
    sector: &'static str,
    // ESG_COLUMNS then FINANCIAL_COLUMNS; NaN marks a blanked cell
    values: [f64; 8],
}

/// Seeded dataset generator.
///
/// # Examples
/// ```
/// use adapter_loader::{SyntheticEsgGenerator, SyntheticSpec};
///
/// let spec = SyntheticSpec { rows: 50, ..Default::default() };
/// let frame = SyntheticEsgGenerator::new(spec).unwrap().generate_frame().unwrap();
/// assert_eq!(frame.n_rows(), 50);
/// assert_eq!(frame.n_cols(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticEsgGenerator {
    spec: SyntheticSpec,
}

impl SyntheticEsgGenerator {
    /// Create a generator after checking the parameters.
    pub fn new(spec: SyntheticSpec) -> LoaderResult<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    /// Generator parameters.
    pub fn spec(&self) -> &SyntheticSpec {
        &self.spec
    }

    fn companies(&self) -> LoaderResult<Vec<Company>> {
        let mut rng = StdRng::seed_from_u64(self.spec.seed);
        let normal = |mean: f64, sd: f64| {
            Normal::new(mean, sd).map_err(|e| LoaderError::InvalidParameter(e.to_string()))
        };
        let quality = normal(60.0, 10.0)?;
        let pillar_noise = normal(0.0, 6.0)?;
        let score_noise = normal(0.0, 2.0)?;
        let roa_noise = normal(0.0, 0.012)?;
        let roe_noise = normal(0.0, 0.035)?;
        let margin_noise = normal(0.0, 0.025)?;
        let return_noise = normal(0.0, 0.09)?;

        let clamp_score = |v: f64| v.clamp(0.0, 100.0);

        let mut out = Vec::with_capacity(self.spec.rows);
        for i in 0..self.spec.rows {
            let q = quality.sample(&mut rng);
            let env = clamp_score(q + pillar_noise.sample(&mut rng));
            let soc = clamp_score(q + pillar_noise.sample(&mut rng));
            let gov = clamp_score(q + pillar_noise.sample(&mut rng));
            let esg = clamp_score((env + soc + gov) / 3.0 + score_noise.sample(&mut rng));

            let roa = 0.005 + 0.0007 * esg + roa_noise.sample(&mut rng);
            let roe = 0.02 + 0.0018 * esg + roe_noise.sample(&mut rng);
            let margin = 0.04 + 0.0012 * gov + margin_noise.sample(&mut rng);
            let stock_return = -0.03 + 0.0011 * env + return_noise.sample(&mut rng);

            let mut values = [esg, env, soc, gov, roa, roe, margin, stock_return];
            if self.spec.missing_rate > 0.0 {
                for v in values.iter_mut() {
                    if rng.gen::<f64>() < self.spec.missing_rate {
                        *v = f64::NAN;
                    }
                }
            }

            out.push(Company {
                id: format!("C{:04}", i + 1),
                sector: SECTORS[rng.gen_range(0..SECTORS.len())],
                values,
            });
        }
        Ok(out)
    }

    /// Numeric columns only, missing cells as `NaN`.
    pub fn generate_frame(&self) -> LoaderResult<Frame> {
        let companies = self.companies()?;
        let columns: Vec<(String, Vec<f64>)> = ESG_COLUMNS
            .iter()
            .chain(FINANCIAL_COLUMNS.iter())
            .enumerate()
            .map(|(j, name)| {
                let values: Vec<f64> = companies.iter().map(|c| c.values[j]).collect();
                (name.to_string(), values)
            })
            .collect();
        Ok(Frame::from_columns(columns)?)
    }

    /// Write the dataset as CSV with `Company` and `Sector` text columns first.
    pub fn write_csv<W: Write>(&self, writer: W) -> LoaderResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["Company", "Sector"];
        header.extend(ESG_COLUMNS);
        header.extend(FINANCIAL_COLUMNS);
        wtr.write_record(&header)?;

        for company in self.companies()? {
            let mut record = vec![company.id, company.sector.to_string()];
            for (j, v) in company.values.iter().enumerate() {
                record.push(if v.is_nan() {
                    String::new()
                } else if j < ESG_COLUMNS.len() {
                    format!("{:.2}", v)
                } else {
                    format!("{:.5}", v)
                });
            }
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the dataset to a CSV file, creating parent directories.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> LoaderResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.write_csv(File::create(path)?)?;
        info!(
            path = %path.display(),
            rows = self.spec.rows,
            seed = self.spec.seed,
            "Synthetic dataset written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_loader::CsvLoader;

    #[test]
    fn test_same_seed_same_data() {
        let spec = SyntheticSpec {
            rows: 30,
            seed: 7,
            missing_rate: 0.1,
        };
        let a = SyntheticEsgGenerator::new(spec.clone()).unwrap();
        let b = SyntheticEsgGenerator::new(spec).unwrap();

        let mut buf_a = Vec::new();
        let mut buf_b = Vec::new();
        a.write_csv(&mut buf_a).unwrap();
        b.write_csv(&mut buf_b).unwrap();
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn test_scores_within_bounds() {
        let frame = SyntheticEsgGenerator::new(SyntheticSpec::default())
            .unwrap()
            .generate_frame()
            .unwrap();
        for name in ESG_COLUMNS {
            assert!(frame
                .column(name)
                .unwrap()
                .iter()
                .all(|v| (0.0..=100.0).contains(v)));
        }
        assert!(!frame.has_missing());
    }

    #[test]
    fn test_esg_drives_roa() {
        let frame = SyntheticEsgGenerator::new(SyntheticSpec {
            rows: 500,
            ..Default::default()
        })
        .unwrap()
        .generate_frame()
        .unwrap();
        let r = frame.pearson("ESG_Score", "ROA").unwrap().r;
        assert!(r > 0.3, "expected positive correlation, got {r}");
    }

    #[test]
    fn test_csv_round_trips_through_loader() {
        let generator = SyntheticEsgGenerator::new(SyntheticSpec {
            rows: 40,
            seed: 3,
            missing_rate: 0.2,
        })
        .unwrap();
        let mut buf = Vec::new();
        generator.write_csv(&mut buf).unwrap();

        let loaded = CsvLoader::new().load_from_reader(buf.as_slice()).unwrap();
        assert_eq!(loaded.n_cols(), 8);
        assert_eq!(loaded.n_rows(), 40);
        assert!(loaded.has_missing());
        assert!(!loaded.contains("Company"));
        assert!(!loaded.contains("Sector"));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(SyntheticEsgGenerator::new(SyntheticSpec {
            rows: 0,
            ..Default::default()
        })
        .is_err());
        assert!(SyntheticEsgGenerator::new(SyntheticSpec {
            missing_rate: 1.0,
            ..Default::default()
        })
        .is_err());
    }
}
