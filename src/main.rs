use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use tierpix::{format_file_size, BatchConfig, BatchConverter, BatchSummary, Cli};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    if let Err(e) = run(&cli) {
        log::error!("Batch conversion failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.to_config().context("Invalid configuration")?;

    if cli.list {
        print_tiers(&config);
        return Ok(());
    }

    let converter = BatchConverter::new(config).with_progress(!cli.no_progress);
    let summary = converter.run().with_context(|| {
        format!(
            "Cannot convert images in {}",
            converter.config().input_dir.display()
        )
    })?;

    print_summary(&summary);
    Ok(())
}

fn print_tiers(config: &BatchConfig) {
    for tier in &config.tiers {
        println!("[{}]", tier.name);
        println!("  files: {}", tier.files.join(", "));
        for spec in &tier.sizes {
            println!(
                "  -{}.{}: {}px, quality {}",
                spec.suffix,
                config.format.extension(),
                spec.width,
                spec.quality
            );
        }
    }
}

fn print_summary(summary: &BatchSummary) {
    let result = &summary.result;

    println!("=== Conversion Summary ===");
    println!("Converted: {}", result.succeeded);
    println!("Failed: {}", result.failed);
    println!("Skipped (missing source): {}", result.skipped);
    println!("Written this run: {}", format_file_size(result.bytes_written));
    println!(
        "Output files in directory: {}",
        format_file_size(summary.directory_bytes)
    );
    println!(
        "Estimated original size: {}",
        format_file_size(summary.baseline_bytes)
    );
    println!("Savings: {:.1}%", summary.savings_percent());
}
