//! `show` - render the cached posts without touching the network.

use std::path::Path;

use anyhow::Result;

use super::{open_http_store, open_mock_store, render_store};

pub async fn run(data_dir: &Path, mock: bool) -> Result<()> {
    // Hydration only: opening the store reads the durable records but
    // makes no loader call, so mock and HTTP stores render the same
    // cached state.
    if mock {
        render_store(&open_mock_store(data_dir).await?);
    } else {
        render_store(&open_http_store(data_dir).await?);
    }
    Ok(())
}
