//! Audio input inspection
//!
//! The converter never decodes audio itself; everything is delegated to
//! the external transcoder. This module only peeks at input WAV headers
//! for preflight reporting and size estimation.

pub mod probe;

pub use probe::{WavInfo, probe};
