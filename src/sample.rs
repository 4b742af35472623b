//! Sample naming and artifact planning
//!
//! Maps one input filename to the raw and header artifacts derived from it.
//! Artifact names share the input's base name so the generated symbols can
//! be traced back to the source sample.

use std::path::{Path, PathBuf};

/// Suffix appended to time-reversed artifact names and symbols
pub const REVERSED_SUFFIX: &str = "_reversed";

/// Derive the base name from a sample filename.
///
/// Everything from the first `.` on counts as extension, so
/// `snare.drum.wav` becomes `snare`. Multi-dot names can therefore
/// collide on the same base name; that quirk is kept as-is.
pub fn base_name(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}

/// Which rendition of the sample an artifact holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Plain,
    Reversed,
}

impl Variant {
    pub fn suffix(&self) -> &'static str {
        match self {
            Variant::Plain => "",
            Variant::Reversed => REVERSED_SUFFIX,
        }
    }
}

/// One raw/header pair derived from an input sample
#[derive(Debug, Clone)]
pub struct Artifact {
    pub variant: Variant,
    pub raw_path: PathBuf,
    pub header_path: PathBuf,
    pub symbol: String,
}

/// Everything to produce for one input file
#[derive(Debug, Clone)]
pub struct SamplePlan {
    pub source: PathBuf,
    pub base: String,
    pub artifacts: Vec<Artifact>,
}

impl SamplePlan {
    /// Plan the artifacts for one input file. The extended variant adds
    /// a time-reversed raw/header pair next to the plain one.
    pub fn new(
        source: PathBuf,
        base: &str,
        raw_dir: &Path,
        header_dir: &Path,
        extended: bool,
    ) -> Self {
        let mut variants = vec![Variant::Plain];
        if extended {
            variants.push(Variant::Reversed);
        }

        let artifacts = variants
            .into_iter()
            .map(|variant| {
                let symbol = format!("{}{}", base, variant.suffix());
                Artifact {
                    variant,
                    raw_path: raw_dir.join(format!("{}.raw", symbol)),
                    header_path: header_dir.join(format!("{}.h", symbol)),
                    symbol,
                }
            })
            .collect();

        Self {
            source,
            base: base.to_string(),
            artifacts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_truncates_at_first_dot() {
        assert_eq!(base_name("kick.wav"), "kick");
        assert_eq!(base_name("snare.drum.wav"), "snare");
        assert_eq!(base_name("noext"), "noext");
        assert_eq!(base_name(".hidden"), "");
    }

    #[test]
    fn test_simple_plan() {
        let plan = SamplePlan::new(
            PathBuf::from("wavfiles/kick.wav"),
            "kick",
            Path::new("rawfiles"),
            Path::new("arduino"),
            false,
        );

        assert_eq!(plan.artifacts.len(), 1);
        let artifact = &plan.artifacts[0];
        assert_eq!(artifact.variant, Variant::Plain);
        assert_eq!(artifact.raw_path, PathBuf::from("rawfiles/kick.raw"));
        assert_eq!(artifact.header_path, PathBuf::from("arduino/kick.h"));
        assert_eq!(artifact.symbol, "kick");
    }

    #[test]
    fn test_extended_plan_adds_reversed_pair() {
        let plan = SamplePlan::new(
            PathBuf::from("wavfiles/hat.wav"),
            "hat",
            Path::new("rawfiles"),
            Path::new("arduino"),
            true,
        );

        assert_eq!(plan.artifacts.len(), 2);
        assert_eq!(plan.artifacts[0].symbol, "hat");
        assert_eq!(plan.artifacts[1].symbol, "hat_reversed");
        assert_eq!(
            plan.artifacts[1].raw_path,
            PathBuf::from("rawfiles/hat_reversed.raw")
        );
        assert_eq!(
            plan.artifacts[1].header_path,
            PathBuf::from("arduino/hat_reversed.h")
        );
        assert_eq!(plan.artifacts[1].variant, Variant::Reversed);
    }

    #[test]
    fn test_artifacts_share_the_base_name() {
        let plan = SamplePlan::new(
            PathBuf::from("wavfiles/tom.wav"),
            "tom",
            Path::new("rawfiles"),
            Path::new("arduino"),
            true,
        );

        for artifact in &plan.artifacts {
            assert!(artifact.symbol.starts_with(&plan.base));
        }
    }
}
