// src/main.rs

use anyhow::Result;
use clap::Parser;
use mdmerge::cli::Cli;
use mdmerge::config::ConfigBuilder;
use mdmerge::merge;
use std::io::Write;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "mdmerge=debug".parse()?
                } else {
                    "mdmerge=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting mdmerge v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    // --- Configuration & Execution ---
    let result = ConfigBuilder::from_cli(cli)
        .build()
        .and_then(|config| {
            log::debug!("Configuration built successfully.");
            merge(&config).map(|document| (config, document))
        });

    // --- Error Handling ---
    match result {
        Ok((config, document)) => match &config.output_path {
            Some(path) => println!("Merged document written to {}", path.display()),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(document.as_bytes())?;
                stdout.flush()?;
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
