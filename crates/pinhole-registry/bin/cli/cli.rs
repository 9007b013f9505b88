use clap::Parser;
use pinhole_core::PendingEntry;

#[derive(Debug, Parser)]
#[command(name = "pinhole", about = "Simulated URL-shortener registry")]
pub struct Cli {
    /// Entry to register, as URL[,VALIDITY_MINUTES[,CUSTOM_CODE]].
    /// Repeat the flag to submit a batch.
    #[arg(long = "entry", value_name = "ENTRY")]
    pub entries: Vec<String>,

    /// Print the navigable form of a link instead of registering anything.
    #[arg(long, value_name = "LINK")]
    pub visit: Option<String>,
}

impl Cli {
    /// Expands the raw `--entry` values into pending entries, in flag order.
    pub fn pending_entries(&self) -> Vec<PendingEntry> {
        self.entries.iter().map(|raw| parse_entry(raw)).collect()
    }
}

/// Splits `URL[,VALIDITY[,CODE]]` into a pending entry.
///
/// Absent or blank trailing fields become `None`, which gets the default
/// validity window and a generated code downstream.
fn parse_entry(raw: &str) -> PendingEntry {
    let mut fields = raw.splitn(3, ',').map(str::trim);
    let url = fields.next().unwrap_or_default();
    let validity = fields.next().filter(|field| !field.is_empty());
    let code = fields.next().filter(|field| !field.is_empty());

    PendingEntry {
        url: url.to_owned(),
        validity: validity.map(str::to_owned),
        code: code.map(str::to_owned),
    }
}
