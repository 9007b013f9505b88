mod cli;

use crate::cli::Cli;
use clap::Parser;
use pinhole_core::{normalize, Registry};
use pinhole_generator::RandomGenerator;
use pinhole_registry::InMemoryRegistry;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::try_parse()?;

    if let Some(link) = cli.visit.as_deref() {
        // Opening the address is an OS concern; the core only decides what
        // address an "open" action would be given.
        println!("{}", normalize(link));
        return Ok(());
    }

    let registry = InMemoryRegistry::new(RandomGenerator::new());

    let entries = cli.pending_entries();
    info!(entries = entries.len(), "submitting batch");
    let created = registry.submit_batch(entries)?;

    for record in &created {
        println!(
            "{}  {}  (expires {})",
            record.code, record.original, record.expires_at
        );
        println!("    visit: {}", normalize(&record.original));
    }

    println!("total links created: {}", registry.count()?);
    for line in registry.audit_log()? {
        println!("{line}");
    }

    Ok(())
}
