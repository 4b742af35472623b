//! sox subprocess wrapper
//!
//! Resampling, bit depth reduction, bass filtering and reversal are all
//! sox's job. This module builds the argument vector, runs the process
//! and checks its exit status.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::TranscodeConfig;
use crate::error::{Result, SampleGenError};

pub const SOX_TOOL: &str = "sox";

pub struct Transcoder {
    executable: PathBuf,
    bits: u16,
    sample_rate: u32,
    bass_gain_db: Option<i32>,
}

impl Transcoder {
    pub fn new(config: &TranscodeConfig) -> Result<Self> {
        let executable = find_sox(config.sox_path.as_deref())?;
        Ok(Self {
            executable,
            bits: config.bits,
            sample_rate: config.sample_rate,
            bass_gain_db: config.bass_boost.then_some(config.bass_gain_db),
        })
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Transcode one input file to raw signed little-endian PCM,
    /// optionally time-reversed. Blocks until sox exits; a non-zero
    /// status aborts with sox's stderr attached.
    pub fn transcode(&self, input: &Path, output: &Path, reverse: bool) -> Result<()> {
        let args = self.build_args(input, output, reverse);
        log::debug!("sox {:?}", args);

        let result = Command::new(&self.executable)
            .args(&args)
            .output()
            .map_err(|e| SampleGenError::Spawn {
                tool: SOX_TOOL,
                source: e,
            })?;

        let stderr = String::from_utf8_lossy(&result.stderr);
        if !result.status.success() {
            return Err(SampleGenError::tool_failed(
                SOX_TOOL,
                result.status.code().unwrap_or(-1),
                input,
                stderr.trim(),
            ));
        }

        // sox prints clipping warnings and the like on stderr even on success
        if !stderr.trim().is_empty() {
            log::debug!("sox stderr: {}", stderr.trim());
        }

        Ok(())
    }

    fn build_args(&self, input: &Path, output: &Path, reverse: bool) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            input.into(),
            "--bits".into(),
            self.bits.to_string().into(),
            "-r".into(),
            self.sample_rate.to_string().into(),
            "--encoding".into(),
            "signed-integer".into(),
            "--endian".into(),
            "little".into(),
            output.into(),
        ];

        // Effects come after the output file in sox's grammar
        if let Some(gain) = self.bass_gain_db {
            args.push("bass".into());
            args.push(gain.to_string().into());
        }
        if reverse {
            args.push("reverse".into());
        }

        args
    }
}

fn find_sox(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(SampleGenError::config(format!(
            "sox not found at {}",
            path.display()
        )));
    }

    if let Ok(path) = std::env::var("SOX_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
    }

    if let Ok(path) = which::which(SOX_TOOL) {
        return Ok(path);
    }

    for candidate in ["/usr/bin/sox", "/usr/local/bin/sox", "/opt/homebrew/bin/sox"] {
        let path = Path::new(candidate);
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    Err(SampleGenError::ToolNotFound {
        tool: SOX_TOOL,
        hint: "--sox-path or SOX_PATH",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_transcoder(bass_gain_db: Option<i32>) -> Transcoder {
        Transcoder {
            executable: PathBuf::from("sox"),
            bits: 8,
            sample_rate: 16384,
            bass_gain_db,
        }
    }

    fn arg_strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_plain_args_match_the_fixed_format() {
        let transcoder = test_transcoder(None);
        let args = transcoder.build_args(
            Path::new("wavfiles/kick.wav"),
            Path::new("rawfiles/kick.raw"),
            false,
        );

        assert_eq!(
            arg_strings(&args),
            vec![
                "wavfiles/kick.wav",
                "--bits",
                "8",
                "-r",
                "16384",
                "--encoding",
                "signed-integer",
                "--endian",
                "little",
                "rawfiles/kick.raw",
            ]
        );
    }

    #[test]
    fn test_reverse_appends_the_effect() {
        let transcoder = test_transcoder(None);
        let args = transcoder.build_args(
            Path::new("wavfiles/hat.wav"),
            Path::new("rawfiles/hat_reversed.raw"),
            true,
        );

        let args = arg_strings(&args);
        assert_eq!(args.last().unwrap(), "reverse");
        assert_eq!(args[args.len() - 2], "rawfiles/hat_reversed.raw");
    }

    #[test]
    fn test_bass_boost_precedes_reverse() {
        let transcoder = test_transcoder(Some(-5));
        let args = arg_strings(&transcoder.build_args(
            Path::new("wavfiles/kick.wav"),
            Path::new("rawfiles/kick_reversed.raw"),
            true,
        ));

        let tail = &args[args.len() - 3..];
        assert_eq!(tail, &["bass", "-5", "reverse"]);
    }

    #[test]
    fn test_explicit_sox_path_must_exist() {
        let err = find_sox(Some(Path::new("/definitely/not/here/sox"))).unwrap_err();
        assert!(err.to_string().contains("sox not found"));
    }
}
