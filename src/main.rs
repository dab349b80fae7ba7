mod allocate;
mod error;
mod models;
mod report;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        0 | 1 => run::as_prompt(),
        _ => run::as_cli(&args),
    }
}

/// Log to stderr so the report on stdout stays clean. `RUST_LOG` overrides
/// the default of warnings only.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tripbudget=warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
