//! Batch conversion pipeline
//!
//! Sequential fail-fast loop over the input directory. Each file is fully
//! transcoded and encoded before the next is touched; the first external
//! tool failure aborts the run and leaves already written artifacts in
//! place.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::audio::probe;
use crate::config::Config;
use crate::error::{Result, SampleGenError};
use crate::sample::{SamplePlan, Variant, base_name};
use crate::tools::{HeaderEncoder, Transcoder};

pub struct BatchConverter {
    config: Config,
    transcoder: Transcoder,
    encoder: HeaderEncoder,
}

/// Summary of one completed run
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub files_processed: usize,
    pub artifacts_written: usize,
    pub total_cells: u64,
    pub elapsed: Duration,
    pub over_budget: bool,
}

impl BatchConverter {
    pub fn new(config: Config) -> Result<Self> {
        let transcoder = Transcoder::new(&config.transcode)?;
        let encoder = HeaderEncoder::new(&config.encode, config.transcode.sample_rate)?;
        Ok(Self {
            config,
            transcoder,
            encoder,
        })
    }

    pub fn run(&self) -> Result<BatchReport> {
        let start = Instant::now();

        let filenames = scan_input(&self.config.batch.input_dir)?;
        if filenames.is_empty() {
            log::warn!(
                "No input files in {}",
                self.config.batch.input_dir.display()
            );
        }

        fs::create_dir_all(&self.config.batch.raw_dir)?;
        fs::create_dir_all(&self.config.batch.header_dir)?;

        let mut artifacts_written = 0usize;
        let mut total_cells = 0u64;

        for filename in &filenames {
            let plan = SamplePlan::new(
                self.config.batch.input_dir.join(filename),
                base_name(filename),
                &self.config.batch.raw_dir,
                &self.config.batch.header_dir,
                self.config.batch.reversed,
            );

            self.preflight(&plan);

            for artifact in &plan.artifacts {
                self.transcoder.transcode(
                    &plan.source,
                    &artifact.raw_path,
                    artifact.variant == Variant::Reversed,
                )?;

                let cells =
                    self.encoder
                        .encode(&artifact.raw_path, &artifact.header_path, &artifact.symbol)?;

                println!(
                    "  {} -> {} ({} cells)",
                    plan.source.display(),
                    artifact.header_path.display(),
                    cells
                );
                artifacts_written += 1;
                total_cells += cells;
            }
        }

        let over_budget = total_cells > self.config.batch.max_total_cells;
        if over_budget {
            log::warn!(
                "Total cell count {} exceeds the configured budget {}; the sketch may not fit",
                total_cells,
                self.config.batch.max_total_cells
            );
        }

        Ok(BatchReport {
            files_processed: filenames.len(),
            artifacts_written,
            total_cells,
            elapsed: start.elapsed(),
            over_budget,
        })
    }

    /// Log what is about to be converted. A file the probe cannot parse
    /// is still handed to the transcoder, which may know better.
    fn preflight(&self, plan: &SamplePlan) {
        match probe(&plan.source) {
            Ok(info) => {
                log::info!(
                    "{}: {:.2}s, {} Hz, {} ch, {} bit, ~{} cells at {} Hz",
                    plan.source.display(),
                    info.duration,
                    info.sample_rate,
                    info.channels,
                    info.bits_per_sample,
                    info.expected_cells(self.config.transcode.sample_rate),
                    self.config.transcode.sample_rate,
                );
            }
            Err(e) => {
                log::warn!("{}; handing it to the transcoder anyway", e);
            }
        }
    }
}

/// Regular files in the input directory, sorted by name for a
/// deterministic run order.
pub fn scan_input(input_dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(input_dir).map_err(|e| {
        SampleGenError::input(format!(
            "Cannot read input directory {}: {}",
            input_dir.display(),
            e
        ))
    })?;

    let mut filenames = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| SampleGenError::input(format!("Cannot read directory entry: {}", e)))?;

        let file_type = entry.file_type().map_err(|e| {
            SampleGenError::input(format!(
                "Cannot stat {}: {}",
                entry.path().display(),
                e
            ))
        })?;
        if !file_type.is_file() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                log::warn!("Skipping non-UTF-8 filename {:?}", name);
                continue;
            }
        };

        if base_name(&name).is_empty() {
            log::warn!("Skipping {}: empty base name", name);
            continue;
        }

        filenames.push(name);
    }

    filenames.sort();
    Ok(filenames)
}
