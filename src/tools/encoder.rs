//! char2mozzi subprocess wrapper
//!
//! The header encoder is an external python script taking four positional
//! arguments: raw path, header path, symbol name, sample rate. It prints
//! the number of emitted table cells on stdout.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::EncodeConfig;
use crate::error::{Result, SampleGenError};

pub const ENCODER_TOOL: &str = "char2mozzi";

pub struct HeaderEncoder {
    python: PathBuf,
    script: PathBuf,
    sample_rate: u32,
}

impl HeaderEncoder {
    pub fn new(config: &EncodeConfig, sample_rate: u32) -> Result<Self> {
        let python = find_python(config.python_path.as_deref())?;
        if !config.script_path.exists() {
            return Err(SampleGenError::config(format!(
                "Encoder script not found: {}",
                config.script_path.display()
            )));
        }
        Ok(Self {
            python,
            script: config.script_path.clone(),
            sample_rate,
        })
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Encode one raw file into a header. Returns the cell count the
    /// script reported, or 0 when its output carried none.
    pub fn encode(&self, raw: &Path, header: &Path, symbol: &str) -> Result<u64> {
        log::debug!(
            "{} {} {} {} {}",
            self.script.display(),
            raw.display(),
            header.display(),
            symbol,
            self.sample_rate
        );

        let result = Command::new(&self.python)
            .arg(&self.script)
            .arg(raw)
            .arg(header)
            .arg(symbol)
            .arg(self.sample_rate.to_string())
            .output()
            .map_err(|e| SampleGenError::Spawn {
                tool: ENCODER_TOOL,
                source: e,
            })?;

        if !result.status.success() {
            return Err(SampleGenError::tool_failed(
                ENCODER_TOOL,
                result.status.code().unwrap_or(-1),
                raw,
                String::from_utf8_lossy(&result.stderr).trim(),
            ));
        }

        let stdout = String::from_utf8_lossy(&result.stdout);
        match parse_cell_count(&stdout) {
            Some(cells) => Ok(cells),
            None => {
                log::warn!("{}: no cell count in encoder output, counting 0", symbol);
                Ok(0)
            }
        }
    }
}

/// First integer token in the encoder's stdout
fn parse_cell_count(stdout: &str) -> Option<u64> {
    stdout
        .split_whitespace()
        .find_map(|token| token.parse().ok())
}

fn find_python(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(SampleGenError::config(format!(
            "python not found at {}",
            path.display()
        )));
    }

    for name in ["python3", "python"] {
        if let Ok(path) = which::which(name) {
            return Ok(path);
        }
    }

    Err(SampleGenError::ToolNotFound {
        tool: "python",
        hint: "--python-path",
    })
}
