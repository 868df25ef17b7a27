use std::{
    io,
    process::ExitCode,
};

use clap::Parser;
use corpusprep::{
    cli::{
        progress::{
            progress_bars,
            progress_log,
        },
        prompt_output_count,
        Args,
    },
    persistence::save_config,
    PrepError,
    RunSummary,
};
use env_logger::Env;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run_cli(&args) {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(args: &Args) -> Result<RunSummary, PrepError> {
    let mut config = args.resolve_config()?;

    if config.output_count.is_none() {
        let stdin = io::stdin();
        config.output_count = Some(prompt_output_count(stdin.lock(), io::stdout())?);
    }

    if let Some(path) = &args.save_config {
        save_config(&config, path)?;
    }

    let progress = if args.no_progress { progress_log() } else { progress_bars() };
    corpusprep::run(&config, Some(progress))
}

fn print_summary(summary: &RunSummary) {
    println!("\n=== Corpus Split ===");
    println!("Archives:        {}", summary.total_files);
    println!(
        "Train:           {} files -> {} outputs ({} bytes)",
        summary.train.file_count,
        summary.train.outputs.len(),
        summary.train.bytes_written
    );
    println!(
        "Validation:      {} files -> {} outputs ({} bytes)",
        summary.val.file_count,
        summary.val.outputs.len(),
        summary.val.bytes_written
    );
    println!("Vocabulary:      {} chars -> {}", summary.vocab_size, summary.vocab_path.display());
}
