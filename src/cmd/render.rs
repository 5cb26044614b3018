use anyhow::{Context, Result};
use tracing::info;

use glyphgrid::{Config, Render};

use super::output::{print_lines, NO_DATA_MESSAGE};
use super::source::load_document;
use crate::SourceArgs;

pub async fn cmd_render(source: &SourceArgs, config: Config) -> Result<()> {
    let bytes = load_document(source, &config).await?;

    let render = glyphgrid::render_document(&bytes, config.render_limits())
        .context("Failed to render document")?;

    match render {
        Render::NoData => println!("{NO_DATA_MESSAGE}"),
        Render::Lines(lines) => {
            info!(lines = lines.len(), "Rendered grid");
            print_lines(&lines)?;
        }
    }

    Ok(())
}
