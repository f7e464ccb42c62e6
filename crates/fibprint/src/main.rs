//! fibprint: Fibonacci sequence printer and shape area calculator.

use anyhow::Result;
use fibprint_core::exit_codes;
use fibprint_lib::{app, config};

fn main() -> Result<()> {
    // Initialize tracing on stderr; stdout carries program output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    let code = app::run(&config)?;
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
