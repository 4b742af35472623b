//! WAV preflight inspection

use std::path::Path;

use hound::WavReader;

use crate::error::{Result, SampleGenError};

/// Header facts about an input WAV file
#[derive(Debug, Clone)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    /// Samples per channel
    pub frames: u32,
    pub duration: f64,
}

impl WavInfo {
    /// Number of table cells the transcoded sample will occupy at the
    /// target rate. The transcoder emits mono, so one cell per frame.
    pub fn expected_cells(&self, target_rate: u32) -> u64 {
        (self.duration * target_rate as f64).round() as u64
    }
}

pub fn probe<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let path = path.as_ref();

    let reader = WavReader::open(path).map_err(|e| {
        SampleGenError::input(format!("Cannot read {} as WAV: {}", path.display(), e))
    })?;

    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return Err(SampleGenError::input(format!(
            "{}: invalid sample rate",
            path.display()
        )));
    }

    let frames = reader.duration();
    Ok(WavInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        frames,
        duration: frames as f64 / spec.sample_rate as f64,
    })
}
