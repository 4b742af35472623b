//! Configuration management for the batch converter

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SampleGenError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub batch: BatchConfig,
    pub transcode: TranscodeConfig,
    pub encode: EncodeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub raw_dir: PathBuf,
    pub header_dir: PathBuf,
    /// Extended variant: also emit time-reversed artifacts
    pub reversed: bool,
    pub verbose: bool,
    /// Flash budget for the accumulated sample tables; exceeding it is a
    /// warning, not an error
    pub max_total_cells: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscodeConfig {
    pub sox_path: Option<PathBuf>,
    pub bits: u16,
    pub sample_rate: u32,
    pub bass_boost: bool,
    pub bass_gain_db: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeConfig {
    pub python_path: Option<PathBuf>,
    pub script_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch: BatchConfig::default(),
            transcode: TranscodeConfig::default(),
            encode: EncodeConfig::default(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("wavfiles"),
            raw_dir: PathBuf::from("rawfiles"),
            header_dir: PathBuf::from("arduino"),
            reversed: false,
            verbose: false,
            max_total_cells: 24576,
        }
    }
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            sox_path: None,
            bits: 8,
            sample_rate: 16384,
            bass_boost: false,
            bass_gain_db: -5,
        }
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            python_path: None,
            script_path: PathBuf::from("char2mozzi.py"),
        }
    }
}

impl Config {
    /// Get sample rate (convenience method)
    pub fn sample_rate(&self) -> u32 {
        self.transcode.sample_rate
    }

    /// Get verbose mode (convenience method)
    pub fn verbose(&self) -> bool {
        self.batch.verbose
    }

    /// Extended variant selected (convenience method)
    pub fn extended(&self) -> bool {
        self.batch.reversed
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "samplegen",
    about = "Batch WAV to Mozzi sample table converter",
    version
)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "input-dir",
        default_value = "wavfiles",
        help = "Directory of input WAV samples"
    )]
    pub input_dir: PathBuf,

    #[arg(
        short = 'r',
        long = "raw-dir",
        default_value = "rawfiles",
        help = "Directory for intermediate raw PCM files"
    )]
    pub raw_dir: PathBuf,

    #[arg(
        short = 'o',
        long = "header-dir",
        default_value = "arduino",
        help = "Directory for generated sample table headers"
    )]
    pub header_dir: PathBuf,

    #[arg(
        long = "sample-rate",
        default_value = "16384",
        help = "Target sample rate (Hz)"
    )]
    pub sample_rate: u32,

    #[arg(long = "bits", default_value = "8", help = "Target bit depth")]
    pub bits: u16,

    #[arg(
        long = "bass-boost",
        help = "Apply the fixed bass boost filter during transcoding"
    )]
    pub bass_boost: bool,

    #[arg(
        long = "reversed",
        help = "Also emit time-reversed raw and header artifacts"
    )]
    pub reversed: bool,

    #[arg(long = "sox-path", help = "Path to the sox executable")]
    pub sox_path: Option<PathBuf>,

    #[arg(long = "python-path", help = "Path to the python interpreter")]
    pub python_path: Option<PathBuf>,

    #[arg(
        long = "encoder-script",
        default_value = "char2mozzi.py",
        help = "Path to the char2mozzi encoder script"
    )]
    pub encoder_script: PathBuf,

    #[arg(
        long = "max-total-cells",
        help = "Warn when the accumulated cell count exceeds this budget"
    )]
    pub max_total_cells: Option<u64>,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(
        long = "check",
        help = "Validate configuration and tool availability, process nothing"
    )]
    pub check: bool,
}

impl Config {
    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        // First load config file (if provided)
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Command line arguments override config file settings
        config.batch.input_dir = args.input_dir;
        config.batch.raw_dir = args.raw_dir;
        config.batch.header_dir = args.header_dir;
        config.transcode.sample_rate = args.sample_rate;
        config.transcode.bits = args.bits;
        config.batch.reversed = args.reversed || config.batch.reversed;
        config.batch.verbose = args.verbose || config.batch.verbose;
        config.transcode.bass_boost = args.bass_boost || config.transcode.bass_boost;
        config.encode.script_path = args.encoder_script;
        if let Some(path) = args.sox_path {
            config.transcode.sox_path = Some(path);
        }
        if let Some(path) = args.python_path {
            config.encode.python_path = Some(path);
        }
        if let Some(budget) = args.max_total_cells {
            config.batch.max_total_cells = budget;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SampleGenError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SampleGenError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Validate configuration parameter validity
    pub fn validate(&self) -> Result<()> {
        if self.transcode.sample_rate == 0 {
            return Err(SampleGenError::config("Sample rate must be greater than 0"));
        }
        if self.transcode.sample_rate > 192000 {
            return Err(SampleGenError::config("Sample rate cannot exceed 192000 Hz"));
        }

        if self.transcode.bits != 8 && self.transcode.bits != 16 {
            return Err(SampleGenError::config("Bit depth must be 8 or 16"));
        }

        if !(-20..=20).contains(&self.transcode.bass_gain_db) {
            return Err(SampleGenError::config(
                "Bass gain must be within [-20, 20] dB",
            ));
        }

        if self.batch.max_total_cells == 0 {
            return Err(SampleGenError::config("Cell budget must be greater than 0"));
        }

        Ok(())
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SampleGenError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| SampleGenError::config(format!("Failed to write config file: {}", e)))
    }
}
