use anyhow::{Context, Result};

use glyphgrid::{extract_first_table_bytes, Config};

use super::output::NO_DATA_MESSAGE;
use super::source::load_document;
use crate::SourceArgs;

pub async fn cmd_table(source: &SourceArgs, config: Config) -> Result<()> {
    let bytes = load_document(source, &config).await?;
    let table = extract_first_table_bytes(&bytes).context("Failed to parse document")?;

    if table.is_empty() {
        println!("{NO_DATA_MESSAGE}");
    } else {
        print!("{}", table.to_markdown());
        println!("({} rows)", table.len());
    }

    Ok(())
}
