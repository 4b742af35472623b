//! samplegen - Batch Drum Sample Converter
//!
//! Turns a directory of WAV samples into raw PCM files and Mozzi-style
//! sample table headers by driving sox and char2mozzi as subprocesses.

pub mod audio;
pub mod batch;
pub mod config;
pub mod error;
pub mod sample;
pub mod tools;

pub use config::{Args, Config};
pub use error::{Result, SampleGenError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn init_logging(verbose: bool) {
    unsafe {
        std::env::set_var("RUST_LOG", if verbose { "debug" } else { "info" });
    }
    env_logger::Builder::from_env("RUST_LOG").try_init().ok();
}
