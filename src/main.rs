//! samplegen - Batch Drum Sample Converter

use clap::Parser;
use samplegen::batch::BatchConverter;
use samplegen::tools::{HeaderEncoder, Transcoder};
use samplegen::{Args, Result, SampleGenError, init_logging};
use std::process;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        // A failing external tool surfaces its own exit status
        let code = match &e {
            SampleGenError::ToolFailed { exit_code, .. } if *exit_code > 0 => *exit_code,
            _ => 1,
        };
        process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let check = args.check;
    let config = samplegen::config::Config::from_args_and_config(args)?;

    if !config.batch.input_dir.exists() {
        return Err(SampleGenError::config(format!(
            "Input directory does not exist: {}",
            config.batch.input_dir.display()
        )));
    }

    if check {
        return run_check(&config);
    }

    println!("=== {} v{} ===", samplegen::NAME, samplegen::VERSION);
    println!("Input: {}", config.batch.input_dir.display());
    println!("Raw PCM: {}", config.batch.raw_dir.display());
    println!("Headers: {}", config.batch.header_dir.display());
    println!(
        "Format: {} bit signed little-endian, {} Hz",
        config.transcode.bits,
        config.sample_rate()
    );
    println!(
        "Variant: {}",
        if config.extended() {
            "extended (plain + reversed)"
        } else {
            "simple"
        }
    );
    println!("==============================\n");

    let converter = BatchConverter::new(config)?;
    let report = converter.run()?;

    println!("\n=== Conversion Complete ===");
    println!("Files: {}", report.files_processed);
    println!("Artifacts: {}", report.artifacts_written);
    println!("Cells: {}", report.total_cells);
    println!("Time: {:.2}s", report.elapsed.as_secs_f64());
    if report.over_budget {
        println!("⚠ Cell budget exceeded, see warnings above");
    }

    Ok(())
}

fn run_check(config: &samplegen::Config) -> Result<()> {
    println!("=== Check Mode ===");
    config.validate()?;
    println!("✅ Config OK");

    let transcoder = Transcoder::new(&config.transcode)?;
    println!("✅ sox: {}", transcoder.executable().display());

    let encoder = HeaderEncoder::new(&config.encode, config.sample_rate())?;
    println!(
        "✅ encoder: {} via {}",
        encoder.script().display(),
        encoder.python().display()
    );

    println!("✅ Ready for processing");
    Ok(())
}
