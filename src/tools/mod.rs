//! External tool wrappers
//!
//! The heavy lifting lives in two external programs: sox does the audio
//! conversion, char2mozzi turns raw PCM into a sample table header. Both
//! run blocking, one invocation at a time.

pub mod encoder;
pub mod transcoder;

pub use encoder::HeaderEncoder;
pub use transcoder::Transcoder;
