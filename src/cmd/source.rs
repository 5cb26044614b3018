use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::debug;

use glyphgrid::{Config, DocumentFetcher};

use crate::SourceArgs;

/// Load the raw document bytes named by `source`.
///
/// A local file (or `-` for stdin) wins over a URL; otherwise the URL is
/// fetched with `config`, with `--timeout` taking precedence.
pub async fn load_document(source: &SourceArgs, config: &Config) -> Result<Vec<u8>> {
    if let Some(path) = &source.file {
        return read_local(path).await;
    }

    let url = source
        .url
        .as_deref()
        .context("a URL or --file is required")?;

    let mut config = config.clone();
    if let Some(timeout) = source.timeout {
        config.timeout_secs = timeout;
    }

    let fetcher = DocumentFetcher::with_config(&config)?;
    fetcher
        .fetch_bytes(url)
        .await
        .context("Failed to fetch document")
}

async fn read_local(path: &Path) -> Result<Vec<u8>> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("failed to read stdin")?;
        buf
    } else {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    debug!(bytes = bytes.len(), "Read local document");
    Ok(bytes)
}
