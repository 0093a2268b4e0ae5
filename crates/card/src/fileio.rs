use anyhow::{Context, Result};
use shared::model::PrefixTable;
use std::{fs, path::Path};
use tracing::info;

pub fn load_table(path: &Path) -> Result<PrefixTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read prefix table {}", path.display()))?;

    let table = PrefixTable::parse(&text);
    info!("📂 Loaded {} prefixes from {}", table.len(), path.display());

    Ok(table)
}
