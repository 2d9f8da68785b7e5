//! Motorpool - Factory Method demo over a small vehicle taxonomy
//!
//! Five vehicle variants, one factory per variant, a shared capability
//! trait, and a driver that showcases each pair on standard output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod demo;
mod factories;
mod vehicles;

fn main() -> anyhow::Result<()> {
    // Log to stderr so the demo transcript on stdout stays clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    demo::run(&mut stdout.lock())?;
    Ok(())
}
